//! # Jira API Client
//!
//! Resource services for the Jira REST API (groups, users, issues, projects,
//! components and instance metadata) on top of the `jira-core` request
//! pipeline.

mod client;
pub mod endpoints;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export the services
pub use endpoints::components::ComponentService;
pub use endpoints::groups::GroupService;
pub use endpoints::issues::IssueService;
pub use endpoints::metadata::{FieldService, ResolutionService, StatusCategoryService};
pub use endpoints::projects::ProjectService;
pub use endpoints::users::UserService;
// Re-export the core types every caller needs
pub use jira_core::{CallContext, Client, ClientConfig, Error, ErrorKind, Result};
