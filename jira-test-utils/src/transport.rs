//! Scripted transport for exercising the client without a network.
//!
//! [`RecordingTransport`] hands back queued responses in order and records
//! every request it was asked to send, so tests can assert on call counts,
//! URLs and bodies.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jira_core::{Request, Transport, TransportError, TransportResponse};
use reqwest::StatusCode;

/// What a test saw go out on the wire.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
  pub method: String,
  pub url: String,
  pub headers: Vec<(String, String)>,
  pub body: Option<Vec<u8>>,
}

impl RecordedRequest {
  /// Body decoded as JSON, if any.
  pub fn json_body(&self) -> Option<serde_json::Value> {
    self.body.as_ref().and_then(|body| serde_json::from_slice(body).ok())
  }

  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(k, _)| k.eq_ignore_ascii_case(name))
      .map(|(_, v)| v.as_str())
  }
}

enum Scripted {
  Reply {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
  },
  Fail(String),
}

#[derive(Default)]
struct State {
  script: VecDeque<Scripted>,
  requests: Vec<RecordedRequest>,
}

/// A [`Transport`] that replays scripted responses and records requests.
///
/// Clones share the same script and recording.
#[derive(Clone, Default)]
pub struct RecordingTransport {
  state: Arc<Mutex<State>>,
}

impl RecordingTransport {
  pub fn new() -> Self {
    Self::default()
  }

  /// Queue a JSON response.
  pub fn push_json(&self, status: u16, body: serde_json::Value) -> &Self {
    let bytes = serde_json::to_vec(&body).expect("Failed to encode scripted JSON body");
    self.push_body(status, vec![("Content-Type".to_string(), "application/json".to_string())], bytes)
  }

  /// Queue a response with raw headers and body.
  pub fn push_body(&self, status: u16, headers: Vec<(String, String)>, body: impl Into<Vec<u8>>) -> &Self {
    let status = StatusCode::from_u16(status).expect("Invalid scripted status code");
    self.lock().script.push_back(Scripted::Reply {
      status,
      headers,
      body: body.into(),
    });
    self
  }

  /// Queue a transport-level failure.
  pub fn push_failure(&self, message: &str) -> &Self {
    self.lock().script.push_back(Scripted::Fail(message.to_string()));
    self
  }

  /// Number of requests sent so far.
  pub fn calls(&self) -> usize {
    self.lock().requests.len()
  }

  pub fn requests(&self) -> Vec<RecordedRequest> {
    self.lock().requests.clone()
  }

  /// Scripted responses not consumed yet.
  pub fn remaining(&self) -> usize {
    self.lock().script.len()
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, State> {
    self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }
}

#[async_trait]
impl Transport for RecordingTransport {
  async fn send(&self, request: Request) -> Result<TransportResponse, TransportError> {
    let mut state = self.lock();
    state.requests.push(RecordedRequest {
      method: request.method().to_string(),
      url: request.url().to_string(),
      headers: request.headers().to_vec(),
      body: request.body().map(<[u8]>::to_vec),
    });

    match state.script.pop_front() {
      Some(Scripted::Reply { status, headers, body }) => Ok(TransportResponse::from_bytes(status, headers, body)),
      Some(Scripted::Fail(message)) => Err(TransportError::Other(message)),
      None => Err(TransportError::Other(format!(
        "no scripted response left for {} {}",
        request.method(),
        request.url()
      ))),
    }
  }
}
