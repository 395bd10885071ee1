//! # Transport Boundary
//!
//! All HTTP I/O goes through [`Transport`]. Authentication lives in transport
//! decorators (see [`crate::auth`]) that add headers before delegating, so the
//! executor never sees credentials.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::error::BoxError;
use crate::request::Request;

/// Failure below the HTTP layer: nothing usable came back from the server.
#[derive(Debug, Error)]
pub enum TransportError {
  #[error("failed to send request: {0}")]
  Request(#[source] BoxError),

  #[error("request timed out: {0}")]
  Timeout(#[source] BoxError),

  #[error("failed to read response body: {0}")]
  Body(#[source] BoxError),

  #[error("response body exceeds the {limit} byte limit")]
  BodyTooLarge { limit: usize },

  #[error("{0}")]
  Other(String),
}

/// Incrementally readable response body.
#[async_trait]
pub trait Body: Send {
  /// Returns the next chunk, or `None` once the body is exhausted.
  async fn chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError>;
}

/// A body that is already fully in memory.
#[derive(Debug, Default)]
pub struct FullBody(Option<Vec<u8>>);

impl FullBody {
  pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
    Self(Some(bytes.into()))
  }
}

#[async_trait]
impl Body for FullBody {
  async fn chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
    Ok(self.0.take().filter(|bytes| !bytes.is_empty()))
  }
}

/// Raw response handed back by a transport, before the body is read.
pub struct TransportResponse {
  status: StatusCode,
  headers: Vec<(String, String)>,
  body: Box<dyn Body>,
}

impl TransportResponse {
  pub fn new(status: StatusCode, headers: Vec<(String, String)>, body: impl Body + 'static) -> Self {
    Self {
      status,
      headers,
      body: Box::new(body),
    }
  }

  /// Convenience constructor for in-memory bodies.
  pub fn from_bytes(status: StatusCode, headers: Vec<(String, String)>, body: impl Into<Vec<u8>>) -> Self {
    Self::new(status, headers, FullBody::new(body))
  }

  pub fn status(&self) -> StatusCode {
    self.status
  }

  pub fn into_parts(self) -> (StatusCode, Vec<(String, String)>, Box<dyn Body>) {
    (self.status, self.headers, self.body)
  }
}

impl std::fmt::Debug for TransportResponse {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TransportResponse")
      .field("status", &self.status)
      .field("headers", &self.headers)
      .finish_non_exhaustive()
  }
}

/// Sends a fully built request and returns the raw response.
///
/// Implementations must be safe to share between concurrent calls.
#[async_trait]
pub trait Transport: Send + Sync {
  async fn send(&self, request: Request) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
  async fn send(&self, request: Request) -> Result<TransportResponse, TransportError> {
    (**self).send(request).await
  }
}

/// A real HTTP transport backed by reqwest.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
  client: reqwest::Client,
}

impl ReqwestTransport {
  pub fn new(client: reqwest::Client) -> Self {
    Self { client }
  }

  pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| TransportError::Request(Box::new(e)))?;
    Ok(Self { client })
  }
}

fn classify_reqwest(error: reqwest::Error) -> TransportError {
  if error.is_timeout() {
    TransportError::Timeout(Box::new(error))
  } else {
    TransportError::Request(Box::new(error))
  }
}

struct ReqwestBody(reqwest::Response);

#[async_trait]
impl Body for ReqwestBody {
  async fn chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
    match self.0.chunk().await {
      Ok(chunk) => Ok(chunk.map(|bytes| bytes.to_vec())),
      Err(e) if e.is_timeout() => Err(TransportError::Timeout(Box::new(e))),
      Err(e) => Err(TransportError::Body(Box::new(e))),
    }
  }
}

#[async_trait]
impl Transport for ReqwestTransport {
  async fn send(&self, request: Request) -> Result<TransportResponse, TransportError> {
    let mut builder = self.client.request(request.method().clone(), request.url().clone());
    for (name, value) in request.headers() {
      builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(body) = request.body() {
      builder = builder.body(body.to_vec());
    }

    let response = builder.send().await.map_err(classify_reqwest)?;
    let status = response.status();
    let headers = response
      .headers()
      .iter()
      .filter_map(|(name, value)| {
        value
          .to_str()
          .ok()
          .map(|value| (name.as_str().to_string(), value.to_string()))
      })
      .collect();

    Ok(TransportResponse::new(status, headers, ReqwestBody(response)))
  }
}
