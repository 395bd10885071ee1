//! # Request Building
//!
//! Turns a method, a path relative to the Jira base URL, ordered query
//! parameters and an optional JSON body into a ready-to-send [`Request`].
//! Everything that can fail here fails before any network I/O.

use std::borrow::Cow;
use std::fmt::Display;

use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::consts::USER_AGENT;
use crate::context::CallContext;
use crate::error::{Error, Result};

/// Ordered query parameters.
///
/// Order is kept on the wire so requests are reproducible in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
  pairs: Vec<(String, String)>,
}

impl Query {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a parameter and return the query.
  pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
    self.push(key, value);
    self
  }

  pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
    self.pairs.push((key.into(), value.to_string()));
  }

  /// Append a parameter only when a value is present.
  pub fn push_opt(&mut self, key: impl Into<String>, value: Option<impl Display>) {
    if let Some(value) = value {
      self.push(key, value);
    }
  }

  pub fn is_empty(&self) -> bool {
    self.pairs.is_empty()
  }

  pub fn len(&self) -> usize {
    self.pairs.len()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Query {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut query = Query::new();
    for (key, value) in iter {
      query.push(key, value);
    }
    query
  }
}

/// Percent-encode one caller-supplied path segment, such as an issue key.
///
/// Everything outside the unreserved set is escaped, so `/`, `?` and `#` stay
/// inside the segment. Empty, `.` and `..` segments are rejected.
pub fn path_segment(segment: &str) -> Result<Cow<'_, str>> {
  if matches!(segment, "" | "." | "..") {
    return Err(Error::invalid_url(
      format!("'{segment}' is not a valid path segment"),
      None,
    ));
  }
  Ok(urlencoding::encode(segment))
}

/// A fully specified request: method, resolved URL, headers, serialized body
/// and the caller's context.
#[derive(Debug, Clone)]
pub struct Request {
  method: Method,
  url: Url,
  headers: Vec<(String, String)>,
  body: Option<Vec<u8>>,
  context: CallContext,
}

impl Request {
  pub fn method(&self) -> &Method {
    &self.method
  }

  pub fn url(&self) -> &Url {
    &self.url
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

  pub fn body(&self) -> Option<&[u8]> {
    self.body.as_deref()
  }

  pub fn context(&self) -> &CallContext {
    &self.context
  }

  /// Return a copy of this request with `name` set to `value`, replacing any
  /// existing header of the same name.
  pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    let name = name.into();
    self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&name));
    self.headers.push((name, value.into()));
    self
  }
}

/// Builds requests against one Jira base URL.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
  base_url: Url,
  user_agent: String,
}

impl RequestBuilder {
  /// Create a builder. The base URL gains a trailing slash if it lacks one so
  /// that context paths such as `https://host/jira` are preserved on resolve.
  pub fn new(mut base_url: Url) -> Self {
    if !base_url.path().ends_with('/') {
      let path = format!("{}/", base_url.path());
      base_url.set_path(&path);
    }
    Self {
      base_url,
      user_agent: USER_AGENT.to_string(),
    }
  }

  pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
    self.user_agent = user_agent.into();
    self
  }

  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  /// Resolve `path` against the base URL and append `query` in order.
  ///
  /// Leading slashes are trimmed so the path is always relative to the base
  /// URL; absolute URLs are used as given.
  pub fn resolve(&self, path: &str, query: &Query) -> Result<Url> {
    let relative = path.trim_start_matches('/');
    let mut url = self
      .base_url
      .join(relative)
      .map_err(|e| Error::invalid_url(format!("cannot resolve path '{path}'"), Some(Box::new(e))))?;

    if url.cannot_be_a_base() {
      return Err(Error::invalid_url(format!("path '{path}' is not a hierarchical URL"), None));
    }

    if !query.is_empty() {
      let mut pairs = url.query_pairs_mut();
      for (key, value) in query.iter() {
        pairs.append_pair(key, value);
      }
    }

    Ok(url)
  }

  /// Build a request without a body.
  pub fn build<M>(&self, ctx: &CallContext, method: M, path: &str, query: &Query) -> Result<Request>
  where
    M: TryInto<Method>,
    M::Error: std::error::Error + Send + Sync + 'static,
  {
    self.assemble(ctx, method, path, query, None)
  }

  /// Build a request with a JSON body. Serialization happens here, so a body
  /// that cannot be encoded is reported before anything is sent.
  pub fn build_with_body<M, B>(
    &self,
    ctx: &CallContext,
    method: M,
    path: &str,
    query: &Query,
    body: &B,
  ) -> Result<Request>
  where
    M: TryInto<Method>,
    M::Error: std::error::Error + Send + Sync + 'static,
    B: Serialize + ?Sized,
  {
    let encoded = serde_json::to_vec(body)
      .map_err(|e| Error::invalid_url(format!("failed to serialize request body for '{path}'"), Some(Box::new(e))))?;
    self.assemble(ctx, method, path, query, Some(encoded))
  }

  fn assemble<M>(
    &self,
    ctx: &CallContext,
    method: M,
    path: &str,
    query: &Query,
    body: Option<Vec<u8>>,
  ) -> Result<Request>
  where
    M: TryInto<Method>,
    M::Error: std::error::Error + Send + Sync + 'static,
  {
    let method = method
      .try_into()
      .map_err(|e| Error::invalid_url("invalid HTTP method", Some(Box::new(e))))?;
    let url = self.resolve(path, query)?;

    let mut headers = vec![
      ("Accept".to_string(), "application/json".to_string()),
      ("User-Agent".to_string(), self.user_agent.clone()),
    ];
    if body.is_some() {
      headers.push(("Content-Type".to_string(), "application/json".to_string()));
    }

    Ok(Request {
      method,
      url,
      headers,
      body,
      context: ctx.clone(),
    })
  }
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeMap;

  use serde::ser::Error as _;

  use super::*;
  use crate::error::ErrorKind;

  fn builder(base: &str) -> RequestBuilder {
    RequestBuilder::new(Url::parse(base).unwrap())
  }

  #[test]
  fn test_leading_slash_is_not_doubled() {
    let builder = builder("https://jira.example.com/");
    let with_slash = builder.resolve("/rest/api/2/field", &Query::new()).unwrap();
    let without_slash = builder.resolve("rest/api/2/field", &Query::new()).unwrap();

    assert_eq!(with_slash.as_str(), "https://jira.example.com/rest/api/2/field");
    assert_eq!(with_slash, without_slash);
  }

  #[test]
  fn test_context_path_is_preserved() {
    let builder = builder("https://example.com/jira");
    let url = builder.resolve("/rest/api/2/myself", &Query::new()).unwrap();
    assert_eq!(url.as_str(), "https://example.com/jira/rest/api/2/myself");
  }

  #[test]
  fn test_absolute_path_is_used_as_given() {
    let builder = builder("https://jira.example.com/");
    let url = builder
      .resolve("https://other.example.com/rest/api/2/group/member?startAt=2", &Query::new())
      .unwrap();
    assert_eq!(url.as_str(), "https://other.example.com/rest/api/2/group/member?startAt=2");
  }

  #[test]
  fn test_query_is_escaped_in_caller_order() {
    let builder = builder("https://jira.example.com/");
    let query = Query::new()
      .with("groupname", "jira admins&co")
      .with("startAt", 0)
      .with("expand", "users[0:49]");
    let url = builder.resolve("rest/api/2/group", &query).unwrap();

    assert_eq!(
      url.query(),
      Some("groupname=jira+admins%26co&startAt=0&expand=users%5B0%3A49%5D")
    );
  }

  #[test]
  fn test_path_segment_keeps_reserved_characters_inside() {
    let builder = builder("https://jira.example.com/jira");
    let path = format!("rest/api/2/project/{}", path_segment("A?expand=all").unwrap());
    let url = builder.resolve(&path, &Query::new()).unwrap();
    assert_eq!(url.as_str(), "https://jira.example.com/jira/rest/api/2/project/A%3Fexpand%3Dall");
    assert_eq!(url.query(), None);

    let path = format!("rest/api/2/issue/{}/transitions", path_segment("ABC/1#x").unwrap());
    let url = builder.resolve(&path, &Query::new()).unwrap();
    assert_eq!(url.path(), "/jira/rest/api/2/issue/ABC%2F1%23x/transitions");
    assert_eq!(url.fragment(), None);
  }

  #[test]
  fn test_path_segment_leaves_plain_keys_alone() {
    assert_eq!(path_segment("TEST-123").unwrap(), "TEST-123");
    assert_eq!(path_segment("10002").unwrap(), "10002");
  }

  #[test]
  fn test_dot_segments_are_invalid_url() {
    for segment in ["", ".", ".."] {
      let error = path_segment(segment).unwrap_err();
      assert_eq!(error.kind(), ErrorKind::InvalidUrl);
    }
    assert_eq!(path_segment("../myself").unwrap(), "..%2Fmyself");
  }

  #[test]
  fn test_default_user_agent_is_crate_and_version() {
    let request = builder("https://jira.example.com/")
      .build(&CallContext::new(), Method::GET, "rest/api/2/myself", &Query::new())
      .unwrap();
    assert_eq!(
      request.header("user-agent"),
      Some(concat!("jira-core/", env!("CARGO_PKG_VERSION")))
    );
  }

  #[test]
  fn test_unparsable_path_is_invalid_url() {
    let builder = builder("https://jira.example.com/");
    let error = builder
      .build(&CallContext::new(), Method::GET, "http://[::1", &Query::new())
      .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidUrl);
  }

  #[test]
  fn test_empty_method_is_invalid_url() {
    let builder = builder("https://jira.example.com/");
    let error = builder
      .build(&CallContext::new(), "", "rest/api/2/field", &Query::new())
      .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidUrl);
  }

  #[test]
  fn test_body_is_serialized_at_build_time() {
    let builder = builder("https://jira.example.com/");
    let body = serde_json::json!({"name": "theodore"});
    let request = builder
      .build_with_body(&CallContext::new(), Method::POST, "rest/api/2/group/user", &Query::new(), &body)
      .unwrap();

    assert_eq!(request.method(), Method::POST);
    assert_eq!(request.body(), Some(br#"{"name":"theodore"}"#.as_slice()));
    assert_eq!(request.header("content-type"), Some("application/json"));
  }

  struct Unserializable;

  impl Serialize for Unserializable {
    fn serialize<S: serde::Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
      Err(S::Error::custom("cannot encode"))
    }
  }

  #[test]
  fn test_body_serialization_failure_is_reported_immediately() {
    let builder = builder("https://jira.example.com/");
    let error = builder
      .build_with_body(
        &CallContext::new(),
        Method::POST,
        "rest/api/2/user",
        &Query::new(),
        &Unserializable,
      )
      .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidUrl);
    assert!(error.to_string().contains("serialize"));
  }

  #[test]
  fn test_non_string_map_keys_fail_to_serialize() {
    let builder = builder("https://jira.example.com/");
    let mut body = BTreeMap::new();
    body.insert(vec![1u8], "value");
    let result = builder.build_with_body(&CallContext::new(), Method::POST, "x", &Query::new(), &body);
    assert!(result.is_err());
  }

  #[test]
  fn test_with_header_replaces_existing() {
    let builder = builder("https://jira.example.com/");
    let request = builder
      .build(&CallContext::new(), Method::GET, "rest/api/2/myself", &Query::new())
      .unwrap()
      .with_header("accept", "text/plain");

    assert_eq!(request.header("Accept"), Some("text/plain"));
    assert_eq!(
      request
        .headers()
        .iter()
        .filter(|(k, _)| k.eq_ignore_ascii_case("accept"))
        .count(),
      1
    );
  }

  #[test]
  fn test_query_from_iterator() {
    let query: Query = vec![("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(query.len(), 2);
    assert_eq!(query.iter().collect::<Vec<_>>(), vec![("a", "1"), ("b", "2")]);
  }
}
