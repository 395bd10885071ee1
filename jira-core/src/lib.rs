//! # Jira Client Core
//!
//! Request/response pipeline shared by every Jira resource service: request
//! building, execution through a pluggable transport, pagination over the
//! cursor and legacy contracts, version fallback between them, and a single
//! normalized error type.

pub mod auth;
mod client;
pub mod config;
pub mod consts;
pub mod context;
pub mod error;
pub mod fallback;
pub mod pagination;
pub mod request;
pub mod response;
pub mod transport;

pub use auth::{BasicAuthTransport, BearerTokenTransport, JiraAuth};
pub use client::Client;
pub use config::ClientConfig;
pub use context::{CallContext, CancelReason};
pub use error::{Error, ErrorKind, ErrorPayload, Failure, Result, normalize};
pub use fallback::fetch_with_fallback;
pub use pagination::{Accumulated, Contract, CursorMeta, Page, PartialWalk, walk_pages};
pub use request::{Query, Request, RequestBuilder, path_segment};
pub use response::{CursorFields, LegacyWindow, Pagination, Response};
pub use transport::{Body, FullBody, ReqwestTransport, Transport, TransportError, TransportResponse};
