use std::collections::BTreeMap;

use serde::Deserialize;

use super::JiraUser;

/// Represents a Jira project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  #[serde(rename = "self", default)]
  pub self_link: Option<String>,
  pub id: String,
  pub key: String,
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub lead: Option<JiraUser>,
  #[serde(default)]
  pub project_type_key: Option<String>,
  #[serde(default)]
  pub avatar_urls: BTreeMap<String, String>,
}

/// An issue type that can be created in a project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTypeMeta {
  #[serde(rename = "self", default)]
  pub self_link: Option<String>,
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub subtask: bool,
  #[serde(default)]
  pub icon_url: Option<String>,
}

/// A field available when creating an issue of a given type
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueFieldMeta {
  pub field_id: String,
  pub name: String,
  #[serde(default)]
  pub required: bool,
  #[serde(default)]
  pub has_default_value: bool,
  #[serde(default)]
  pub operations: Vec<String>,
  #[serde(default)]
  pub schema: Option<serde_json::Value>,
  #[serde(default)]
  pub allowed_values: Vec<serde_json::Value>,
}
