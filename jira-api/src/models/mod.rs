//! # Jira Resource Models
//!
//! Wire shapes for the resources the services expose. Optional fields are
//! omitted on serialization.

mod component;
mod group;
mod issue;
mod metadata;
mod project;
mod user;

pub use component::{CreateComponentOptions, ProjectComponent};
pub(crate) use group::{ExpandedGroup, GroupUserRequest};
pub use group::{
  Group, GroupLabel, GroupMember, GroupMembersPage, GroupMembersUsers, GroupMeta, GroupSearchOptions, GroupsResult,
};
pub use issue::{
  CreateIssueRequest, CreatedIssue, IssueProjectRef, IssueTypeRef, JiraIssue, JiraIssueFields, JiraIssueStatus,
  JiraTransition, JiraTransitions, TransitionId, TransitionRequest,
};
pub use metadata::{Field, FieldSchema, Resolution, StatusCategory};
pub use project::{IssueFieldMeta, IssueTypeMeta, Project};
pub use user::{JiraUser, UserGroup, UserSearch};
