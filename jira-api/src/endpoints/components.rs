use jira_core::{CallContext, Client, Query, Result};
use reqwest::Method;

use crate::models::{CreateComponentOptions, ProjectComponent};

/// Project component operations against one client
#[derive(Debug, Clone, Copy)]
pub struct ComponentService<'a> {
  client: &'a Client,
}

impl<'a> ComponentService<'a> {
  pub fn new(client: &'a Client) -> Self {
    Self { client }
  }

  /// Create a component from `options`
  pub async fn create(&self, ctx: &CallContext, options: &CreateComponentOptions) -> Result<ProjectComponent> {
    let request = self
      .client
      .request_with_body(ctx, Method::POST, "rest/api/2/component", &Query::new(), options)?;
    let (component, _) = self.client.execute(request).await?;
    Ok(component)
  }
}

#[cfg(test)]
mod tests {
  use jira_core::ClientConfig;
  use wiremock::matchers::{body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  #[tokio::test]
  async fn test_create_component() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let config = ClientConfig::new(&mock_server.uri())?;
    let client = Client::with_basic_auth(&config, "test_user", "test_token")?;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/component"))
      .and(body_json(serde_json::json!({"name": "foo-bar", "project": "PROJ"})))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
          "self": "http://www.example.com/jira/rest/api/2/component/10000",
          "id": "10000",
          "name": "foo-bar",
          "assigneeType": "PROJECT_DEFAULT",
          "project": "PROJ",
          "projectId": 10000
      })))
      .mount(&mock_server)
      .await;

    let options = CreateComponentOptions {
      name: Some("foo-bar".to_string()),
      project: Some("PROJ".to_string()),
      ..Default::default()
    };
    let component = ComponentService::new(&client)
      .create(&CallContext::new(), &options)
      .await?;

    assert_eq!(component.id, "10000");
    assert_eq!(component.project_id, Some(10000));
    Ok(())
  }
}
