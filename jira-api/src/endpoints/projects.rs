//! # Jira Project Endpoints
//!
//! Project listing plus the create-metadata listings, which are cursor paged
//! and walked to completion.

use jira_core::{CallContext, Client, Query, Result, path_segment};

use super::{get_json, walk_cursor};
use crate::models::{IssueFieldMeta, IssueTypeMeta, Project};

/// Project operations against one client
#[derive(Debug, Clone, Copy)]
pub struct ProjectService<'a> {
  client: &'a Client,
}

impl<'a> ProjectService<'a> {
  pub fn new(client: &'a Client) -> Self {
    Self { client }
  }

  /// All projects visible to the user
  pub async fn list(&self, ctx: &CallContext) -> Result<Vec<Project>> {
    get_json(self.client, ctx, "rest/api/2/project", &Query::new()).await
  }

  /// A project by key or id
  pub async fn get(&self, ctx: &CallContext, key: &str) -> Result<Project> {
    let path = format!("rest/api/2/project/{}", path_segment(key)?);
    get_json(self.client, ctx, &path, &Query::new()).await
  }

  /// Issue types that can be created in `project_id`
  pub async fn issue_types(&self, ctx: &CallContext, project_id: &str) -> Result<Vec<IssueTypeMeta>> {
    let path = format!("rest/api/2/issue/createmeta/{}/issuetypes", path_segment(project_id)?);
    walk_cursor(self.client, ctx, &path, &Query::new()).await
  }

  /// Fields available when creating an issue of `issue_type_id` in
  /// `project_id`
  pub async fn issue_fields(
    &self,
    ctx: &CallContext,
    project_id: &str,
    issue_type_id: &str,
  ) -> Result<Vec<IssueFieldMeta>> {
    let path = format!(
      "rest/api/2/issue/createmeta/{}/issuetypes/{}",
      path_segment(project_id)?,
      path_segment(issue_type_id)?
    );
    walk_cursor(self.client, ctx, &path, &Query::new()).await
  }
}
