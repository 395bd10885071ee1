//! Instance-wide metadata: fields, resolutions and status categories.

use serde::Deserialize;

/// Represents a Jira field, system or custom
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
  pub id: String,
  #[serde(default)]
  pub key: Option<String>,
  pub name: String,
  #[serde(default)]
  pub custom: bool,
  #[serde(default)]
  pub navigable: bool,
  #[serde(default)]
  pub searchable: bool,
  #[serde(default)]
  pub clause_names: Vec<String>,
  #[serde(default)]
  pub schema: Option<FieldSchema>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
  #[serde(rename = "type")]
  pub field_type: String,
  #[serde(default)]
  pub items: Option<String>,
  #[serde(default)]
  pub system: Option<String>,
  #[serde(default)]
  pub custom: Option<String>,
  #[serde(default)]
  pub custom_id: Option<i64>,
}

/// Represents an issue resolution
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Resolution {
  #[serde(rename = "self", default)]
  pub self_link: Option<String>,
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
}

/// Represents a status category
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCategory {
  #[serde(rename = "self", default)]
  pub self_link: Option<String>,
  pub id: i64,
  pub key: String,
  pub name: String,
  #[serde(default)]
  pub color_name: Option<String>,
}

impl StatusCategory {
  /// Key of the "Done" category
  pub const DONE: &'static str = "done";
  /// Key of the "In Progress" category
  pub const IN_PROGRESS: &'static str = "indeterminate";
  /// Key of the "To Do" category
  pub const TO_DO: &'static str = "new";
  pub const UNDEFINED: &'static str = "undefined";

  pub fn is_done(&self) -> bool {
    self.key == Self::DONE
  }
}
