//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue operations, including
//! fetching, creating and transitioning issues.

use jira_core::{CallContext, Client, Query, Result, path_segment};
use reqwest::Method;
use tracing::info;

use super::get_json;
use crate::models::{
  CreateIssueRequest, CreatedIssue, JiraIssue, JiraTransition, JiraTransitions, TransitionId, TransitionRequest,
};

/// Issue operations against one client
#[derive(Debug, Clone, Copy)]
pub struct IssueService<'a> {
  client: &'a Client,
}

impl<'a> IssueService<'a> {
  pub fn new(client: &'a Client) -> Self {
    Self { client }
  }

  /// Get a Jira issue by key
  pub async fn get(&self, ctx: &CallContext, issue_key: &str) -> Result<JiraIssue> {
    let path = format!("rest/api/2/issue/{}", path_segment(issue_key)?);
    get_json(self.client, ctx, &path, &Query::new()).await
  }

  /// Create an issue
  pub async fn create(&self, ctx: &CallContext, issue: &CreateIssueRequest) -> Result<CreatedIssue> {
    let request = self
      .client
      .request_with_body(ctx, Method::POST, "rest/api/2/issue", &Query::new(), issue)?;
    let (created, _): (CreatedIssue, _) = self.client.execute(request).await?;
    info!(key = %created.key, "Created Jira issue");
    Ok(created)
  }

  /// Get available transitions for an issue
  pub async fn get_transitions(&self, ctx: &CallContext, issue_key: &str) -> Result<Vec<JiraTransition>> {
    let path = transitions_path(issue_key)?;
    let transitions: JiraTransitions = get_json(self.client, ctx, &path, &Query::new()).await?;
    Ok(transitions.transitions)
  }

  /// Transition an issue to a new status
  pub async fn transition(&self, ctx: &CallContext, issue_key: &str, transition_id: &str) -> Result<()> {
    let payload = TransitionRequest {
      transition: TransitionId {
        id: transition_id.to_string(),
      },
    };
    let path = transitions_path(issue_key)?;
    let request = self
      .client
      .request_with_body(ctx, Method::POST, &path, &Query::new(), &payload)?;
    self.client.execute_discard(request).await?;
    Ok(())
  }
}

fn transitions_path(issue_key: &str) -> Result<String> {
  Ok(format!("rest/api/2/issue/{}/transitions", path_segment(issue_key)?))
}
