use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Represents a Jira user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_link: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub account_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub account_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email_address: Option<String>,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub avatar_urls: BTreeMap<String, String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub active: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub time_zone: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub locale: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub application_keys: Vec<String>,
}

/// A group the user belongs to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserGroup {
  #[serde(rename = "self", default)]
  pub self_link: Option<String>,
  pub name: String,
}

/// Optional parameters for user search, sent in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearch {
  params: Vec<(&'static str, String)>,
}

impl UserSearch {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn max_results(self, max_results: u32) -> Self {
    self.with("maxResults", max_results.to_string())
  }

  pub fn start_at(self, start_at: u32) -> Self {
    self.with("startAt", start_at.to_string())
  }

  pub fn include_active(self, active: bool) -> Self {
    self.with("includeActive", active.to_string())
  }

  pub fn include_inactive(self, inactive: bool) -> Self {
    self.with("includeInactive", inactive.to_string())
  }

  pub fn username(self, username: &str) -> Self {
    self.with("username", username.to_string())
  }

  pub fn account_id(self, account_id: &str) -> Self {
    self.with("accountId", account_id.to_string())
  }

  /// Search by user property; keys are given as a path.
  pub fn property(self, property: &str) -> Self {
    self.with("property", property.to_string())
  }

  pub fn params(&self) -> impl Iterator<Item = (&'static str, &str)> {
    self.params.iter().map(|(k, v)| (*k, v.as_str()))
  }

  fn with(mut self, key: &'static str, value: String) -> Self {
    self.params.push((key, value));
    self
  }
}
