//! # Jira User Endpoints

use jira_core::{CallContext, Client, Query, Response, Result};
use reqwest::Method;

use super::get_json;
use crate::models::{JiraUser, UserGroup, UserSearch};

const USER_PATH: &str = "rest/api/2/user";

/// User operations against one client
#[derive(Debug, Clone, Copy)]
pub struct UserService<'a> {
  client: &'a Client,
}

impl<'a> UserService<'a> {
  pub fn new(client: &'a Client) -> Self {
    Self { client }
  }

  /// Get a user by account id
  pub async fn get(&self, ctx: &CallContext, account_id: &str) -> Result<JiraUser> {
    self.get_by_account_id(ctx, account_id).await
  }

  pub async fn get_by_account_id(&self, ctx: &CallContext, account_id: &str) -> Result<JiraUser> {
    let query = Query::new().with("accountId", account_id);
    get_json(self.client, ctx, USER_PATH, &query).await
  }

  /// Create a user and return it as Jira stored it
  pub async fn create(&self, ctx: &CallContext, user: &JiraUser) -> Result<JiraUser> {
    let request = self
      .client
      .request_with_body(ctx, Method::POST, USER_PATH, &Query::new(), user)?;
    let (created, _) = self.client.execute(request).await?;
    Ok(created)
  }

  /// Delete a user. Jira answers 204 on success.
  pub async fn delete(&self, ctx: &CallContext, account_id: &str) -> Result<Response> {
    let query = Query::new().with("accountId", account_id);
    let request = self.client.request(ctx, Method::DELETE, USER_PATH, &query)?;
    self.client.execute_discard(request).await
  }

  /// Groups the user belongs to
  pub async fn get_groups(&self, ctx: &CallContext, account_id: &str) -> Result<Vec<UserGroup>> {
    let query = Query::new().with("accountId", account_id);
    get_json(self.client, ctx, "rest/api/2/user/groups", &query).await
  }

  /// The user the client is authenticated as
  pub async fn get_self(&self, ctx: &CallContext) -> Result<JiraUser> {
    get_json(self.client, ctx, "rest/api/2/myself", &Query::new()).await
  }

  /// Find users by email or display name. `search` parameters follow `query`
  /// in the order they were added.
  pub async fn find(&self, ctx: &CallContext, query: &str, search: &UserSearch) -> Result<Vec<JiraUser>> {
    let mut params = Query::new().with("query", query);
    for (key, value) in search.params() {
      params.push(key, value);
    }
    get_json(self.client, ctx, "rest/api/2/user/search", &params).await
  }
}
