//! Authentication helpers for the Jira client.
//!
//! Credentials are attached by transport decorators that set the
//! `Authorization` header and then delegate to an inner transport. The
//! executor and the services never see them.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::request::Request;
use crate::transport::{Transport, TransportError, TransportResponse};

/// Represents Jira basic-auth credentials (user name or email plus API token).
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

impl std::fmt::Debug for JiraAuth {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("JiraAuth")
      .field("username", &self.username)
      .field("api_token", &"<redacted>")
      .finish()
  }
}

impl JiraAuth {
  pub fn new(username: impl Into<String>, api_token: impl Into<String>) -> Self {
    Self {
      username: username.into(),
      api_token: api_token.into(),
    }
  }

  /// The complete `Basic ...` header value.
  pub fn header_value(&self) -> String {
    let encoded = BASE64.encode(format!("{}:{}", self.username, self.api_token));
    format!("Basic {encoded}")
  }
}

/// Adds HTTP basic authentication to every request.
#[derive(Debug, Clone)]
pub struct BasicAuthTransport<T> {
  auth: JiraAuth,
  inner: T,
}

impl<T> BasicAuthTransport<T> {
  pub fn new(auth: JiraAuth, inner: T) -> Self {
    Self { auth, inner }
  }
}

#[async_trait]
impl<T: Transport> Transport for BasicAuthTransport<T> {
  async fn send(&self, request: Request) -> Result<TransportResponse, TransportError> {
    self
      .inner
      .send(request.with_header("Authorization", self.auth.header_value()))
      .await
  }
}

/// Adds a bearer token (Jira Data Center personal access token) to every
/// request.
#[derive(Clone)]
pub struct BearerTokenTransport<T> {
  token: String,
  inner: T,
}

impl<T> BearerTokenTransport<T> {
  pub fn new(token: impl Into<String>, inner: T) -> Self {
    Self {
      token: token.into(),
      inner,
    }
  }
}

impl<T: std::fmt::Debug> std::fmt::Debug for BearerTokenTransport<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BearerTokenTransport")
      .field("token", &"<redacted>")
      .field("inner", &self.inner)
      .finish()
  }
}

#[async_trait]
impl<T: Transport> Transport for BearerTokenTransport<T> {
  async fn send(&self, request: Request) -> Result<TransportResponse, TransportError> {
    self
      .inner
      .send(request.with_header("Authorization", format!("Bearer {}", self.token)))
      .await
  }
}
