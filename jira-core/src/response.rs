//! # Response Envelope
//!
//! Wraps a fully read HTTP response: status, headers, body bytes and the
//! pagination metadata of whichever page contract the body matches.

use std::borrow::Cow;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ErrorPayload;

/// Paging fields of a cursor-style listing, found at the top level of the
/// body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorFields {
  #[serde(default)]
  pub start_at: Option<u64>,
  #[serde(default)]
  pub max_results: Option<u64>,
  #[serde(default)]
  pub total: Option<u64>,
  #[serde(default)]
  pub is_last: Option<bool>,
  #[serde(default)]
  pub next_page: Option<String>,
}

/// The `users` window of a group fetched with `expand=users[a:b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LegacyWindow {
  pub size: u64,
  #[serde(rename = "max-results")]
  pub max_results: u64,
  #[serde(rename = "start-index")]
  pub start_index: u64,
  #[serde(rename = "end-index")]
  pub end_index: u64,
}

/// Pagination metadata for a body that matches a known page contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pagination {
  Cursor(CursorFields),
  Legacy(LegacyWindow),
}

#[derive(Deserialize)]
struct PagedBody {
  #[serde(flatten)]
  cursor: CursorFields,
  #[serde(default)]
  users: Option<serde_json::Value>,
}

impl Pagination {
  fn extract(body: &[u8]) -> Option<Self> {
    let paged = serde_json::from_slice::<PagedBody>(body).ok()?;
    if paged.cursor != CursorFields::default() {
      return Some(Pagination::Cursor(paged.cursor));
    }
    // All four window fields are required, so an unrelated `users` value is
    // not mistaken for a page.
    let window = serde_json::from_value::<LegacyWindow>(paged.users?).ok()?;
    Some(Pagination::Legacy(window))
  }

  /// Offset of the first item in this page.
  pub fn start_at(&self) -> Option<u64> {
    match self {
      Pagination::Cursor(fields) => fields.start_at,
      Pagination::Legacy(window) => Some(window.start_index),
    }
  }

  pub fn max_results(&self) -> Option<u64> {
    match self {
      Pagination::Cursor(fields) => fields.max_results,
      Pagination::Legacy(window) => Some(window.max_results),
    }
  }

  /// Total item count the server reports for the whole listing.
  pub fn total(&self) -> Option<u64> {
    match self {
      Pagination::Cursor(fields) => fields.total,
      Pagination::Legacy(window) => Some(window.size),
    }
  }

  /// Only cursor pages say whether they are last.
  pub fn is_last(&self) -> Option<bool> {
    match self {
      Pagination::Cursor(fields) => fields.is_last,
      Pagination::Legacy(_) => None,
    }
  }
}

/// An HTTP response read to completion. Not modified after creation.
#[derive(Debug, Clone)]
pub struct Response {
  status: StatusCode,
  headers: Vec<(String, String)>,
  body: Vec<u8>,
  pagination: Option<Pagination>,
}

impl Response {
  pub fn new(status: StatusCode, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
    let pagination = Pagination::extract(&body);
    Self {
      status,
      headers,
      body,
      pagination,
    }
  }

  pub fn status(&self) -> StatusCode {
    self.status
  }

  pub fn is_success(&self) -> bool {
    self.status.is_success()
  }

  pub fn headers(&self) -> &[(String, String)] {
    &self.headers
  }

  /// First header matching `name` (case-insensitive).
  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(k, _)| k.eq_ignore_ascii_case(name))
      .map(|(_, v)| v.as_str())
  }

  pub fn body(&self) -> &[u8] {
    &self.body
  }

  pub fn text(&self) -> Cow<'_, str> {
    String::from_utf8_lossy(&self.body)
  }

  /// Decode the body into any shape, independent of what the executor used.
  pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
    serde_json::from_slice(&self.body)
  }

  pub fn pagination(&self) -> Option<&Pagination> {
    self.pagination.as_ref()
  }

  pub fn start_at(&self) -> Option<u64> {
    self.pagination.as_ref().and_then(Pagination::start_at)
  }

  pub fn max_results(&self) -> Option<u64> {
    self.pagination.as_ref().and_then(Pagination::max_results)
  }

  pub fn total(&self) -> Option<u64> {
    self.pagination.as_ref().and_then(Pagination::total)
  }

  /// `Retry-After` in seconds, as sent with 429 and 503 responses.
  pub fn retry_after(&self) -> Option<Duration> {
    self
      .header("Retry-After")
      .and_then(|value| value.trim().parse::<u64>().ok())
      .map(Duration::from_secs)
  }

  /// Jira's error payload, if the body is one.
  pub fn error_payload(&self) -> Option<ErrorPayload> {
    serde_json::from_slice(&self.body).ok()
  }
}
