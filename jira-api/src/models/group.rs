use serde::{Deserialize, Serialize};

/// A single member of a Jira group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_link: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub account_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email_address: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  #[serde(default)]
  pub active: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub time_zone: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub account_type: Option<String>,
}

/// Optional paging parameters for a single page of group members
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupSearchOptions {
  pub start_at: u64,
  pub max_results: u64,
  pub include_inactive_users: bool,
}

/// One page of group members as returned by `group/member`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembersPage {
  #[serde(default)]
  pub start_at: u64,
  #[serde(default)]
  pub max_results: u64,
  #[serde(default)]
  pub total: u64,
  #[serde(default)]
  pub is_last: Option<bool>,
  #[serde(default)]
  pub next_page: Option<String>,
  #[serde(rename = "values", default)]
  pub members: Vec<GroupMember>,
}

/// Users embedded in a group when requested with `expand=users[a:b]`.
/// `items` is required; a window without it does not decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GroupMembersUsers {
  #[serde(default)]
  pub size: u64,
  #[serde(rename = "max-results", default)]
  pub max_results: u64,
  #[serde(rename = "start-index", default)]
  pub start_index: u64,
  #[serde(rename = "end-index", default)]
  pub end_index: u64,
  #[serde(rename = "items")]
  pub members: Vec<GroupMember>,
}

/// Represents a Jira group
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Group {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(rename = "self", default)]
  pub self_link: Option<String>,
  #[serde(default)]
  pub expand: Option<String>,
  #[serde(default)]
  pub users: Option<GroupMembersUsers>,
}

/// A group fetched with `expand=users[a:b]`, where the user window must be
/// present
#[derive(Debug, Deserialize)]
pub(crate) struct ExpandedGroup {
  pub users: GroupMembersUsers,
}

/// Group entry from the group picker
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GroupMeta {
  pub name: String,
  #[serde(default)]
  pub html: Option<String>,
  #[serde(default)]
  pub labels: Vec<GroupLabel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GroupLabel {
  #[serde(default)]
  pub text: Option<String>,
  #[serde(default)]
  pub title: Option<String>,
  #[serde(rename = "type", default)]
  pub label_type: Option<String>,
}

/// Response of the group picker
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GroupsResult {
  #[serde(default)]
  pub header: Option<String>,
  #[serde(default)]
  pub total: u64,
  #[serde(default)]
  pub groups: Vec<GroupMeta>,
}

/// Body for adding a user to a group
#[derive(Debug, Serialize)]
pub(crate) struct GroupUserRequest<'a> {
  pub name: &'a str,
}
