use jira_core::{CallContext, Client, ClientConfig, Result};

use crate::endpoints::components::ComponentService;
use crate::endpoints::groups::GroupService;
use crate::endpoints::issues::IssueService;
use crate::endpoints::metadata::{FieldService, ResolutionService, StatusCategoryService};
use crate::endpoints::projects::ProjectService;
use crate::endpoints::users::UserService;

/// Represents a Jira API client
///
/// Owns a core [`Client`] and hands out one service per resource type.
#[derive(Debug, Clone)]
pub struct JiraClient {
  core: Client,
}

impl JiraClient {
  pub fn new(core: Client) -> Self {
    Self { core }
  }

  /// The underlying request pipeline
  pub fn core(&self) -> &Client {
    &self.core
  }

  /// Test the Jira connection by fetching the current user
  pub async fn test_connection(&self, ctx: &CallContext) -> Result<bool> {
    self.core.test_connection(ctx).await
  }

  pub fn components(&self) -> ComponentService<'_> {
    ComponentService::new(&self.core)
  }

  pub fn groups(&self) -> GroupService<'_> {
    GroupService::new(&self.core)
  }

  pub fn users(&self) -> UserService<'_> {
    UserService::new(&self.core)
  }

  pub fn fields(&self) -> FieldService<'_> {
    FieldService::new(&self.core)
  }

  pub fn resolutions(&self) -> ResolutionService<'_> {
    ResolutionService::new(&self.core)
  }

  pub fn status_categories(&self) -> StatusCategoryService<'_> {
    StatusCategoryService::new(&self.core)
  }

  pub fn issues(&self) -> IssueService<'_> {
    IssueService::new(&self.core)
  }

  pub fn projects(&self) -> ProjectService<'_> {
    ProjectService::new(&self.core)
  }
}

/// Create a Jira client from basic-auth credentials
pub fn create_jira_client(jira_host: &str, username: &str, api_token: &str) -> Result<JiraClient> {
  let config = ClientConfig::new(jira_host)?;
  Ok(JiraClient::new(Client::with_basic_auth(&config, username, api_token)?))
}
