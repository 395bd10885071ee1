use serde::{Deserialize, Serialize};

use super::JiraUser;

/// Options for creating a project component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComponentOptions {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lead: Option<JiraUser>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lead_user_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee: Option<JiraUser>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project_id: Option<u64>,
}

/// Represents a project component
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectComponent {
  #[serde(rename = "self", default)]
  pub self_link: Option<String>,
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub lead: Option<JiraUser>,
  #[serde(default)]
  pub assignee_type: Option<String>,
  #[serde(default)]
  pub assignee: Option<JiraUser>,
  #[serde(default)]
  pub project: Option<String>,
  #[serde(default)]
  pub project_id: Option<u64>,
}
