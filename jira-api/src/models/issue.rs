use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{JiraUser, StatusCategory};

/// Represents a Jira issue
#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
  pub id: String,
  pub key: String,
  #[serde(rename = "self", default)]
  pub self_link: Option<String>,
  pub fields: JiraIssueFields,
}

/// Represents Jira issue fields
///
/// Fields without a typed counterpart, custom fields in particular, are kept
/// in `unknowns` and written back out on serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JiraIssueFields {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<JiraIssueStatus>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project: Option<IssueProjectRef>,
  #[serde(rename = "issuetype", default, skip_serializing_if = "Option::is_none")]
  pub issue_type: Option<IssueTypeRef>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub assignee: Option<JiraUser>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub labels: Vec<String>,
  #[serde(flatten)]
  pub unknowns: BTreeMap<String, serde_json::Value>,
}

impl JiraIssueFields {
  /// Raw value of a field by its id, such as `customfield_10010`.
  pub fn unknown(&self, id: &str) -> Option<&serde_json::Value> {
    self.unknowns.get(id)
  }
}

/// Represents a Jira issue status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueStatus {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub name: String,
  #[serde(default, skip_serializing)]
  pub status_category: Option<StatusCategory>,
}

/// Project reference inside issue fields, by key or id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueProjectRef {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
}

/// Issue type reference inside issue fields, by name or id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTypeRef {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

/// Payload for creating an issue
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateIssueRequest {
  pub fields: JiraIssueFields,
}

/// Returned by Jira after an issue is created
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
  pub id: String,
  pub key: String,
  #[serde(rename = "self", default)]
  pub self_link: Option<String>,
}

/// Represents a Jira transition
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JiraTransition {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub to: Option<JiraIssueStatus>,
}

/// Represents a list of Jira transitions
#[derive(Debug, Deserialize)]
pub struct JiraTransitions {
  pub transitions: Vec<JiraTransition>,
}

/// Represents a transition request payload
#[derive(Debug, Serialize)]
pub struct TransitionRequest {
  pub transition: TransitionId,
}

/// Represents a transition ID for the request
#[derive(Debug, Serialize)]
pub struct TransitionId {
  pub id: String,
}
