//! Test utilities shared across the jira-rs workspace
//!
//! This crate provides common testing infrastructure including:
//! - Environment variable isolation ([`EnvVarGuard`])
//! - A scripted, recording transport ([`RecordingTransport`])
//! - Canned Jira payloads ([`fixtures`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod transport;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use transport::{RecordedRequest, RecordingTransport};
