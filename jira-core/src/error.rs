//! # Error Normalization
//!
//! Every failure the pipeline can reach is converted into exactly one
//! [`Error`]. Callers branch on [`Error::kind`] and inspect the attached
//! [`Response`] instead of matching on message text.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::context::CancelReason;
use crate::response::Response;
use crate::transport::TransportError;

/// Boxed error used for causes whose concrete type the core does not own.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of a normalized error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  /// The request could not be built: malformed or unresolvable path, invalid
  /// method, or a body that failed to serialize.
  InvalidUrl,
  /// The transport failed before a complete response was read.
  Network,
  /// The server answered with a status outside 200-299.
  HttpStatus,
  /// The body did not match the expected shape.
  Decode,
  /// The caller's context was cancelled or its deadline passed.
  Cancelled,
}

/// Normalized error for every Jira API operation.
#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid request: {message}")]
  InvalidUrl {
    message: String,
    #[source]
    source: Option<BoxError>,
  },

  #[error("network failure: {source}")]
  Network {
    #[source]
    source: TransportError,
  },

  #[error("{}", describe_status(.response))]
  HttpStatus { response: Box<Response> },

  #[error("failed to decode response body (HTTP {status}): {source}", status = .response.status())]
  Decode {
    response: Box<Response>,
    #[source]
    source: serde_json::Error,
  },

  #[error("{reason}")]
  Cancelled { reason: CancelReason },

  /// Both the primary and the fallback contract failed. Classification and
  /// response follow the fallback attempt; the primary failure is kept for
  /// inspection.
  #[error("{secondary} (primary attempt failed: {primary})")]
  Fallback {
    #[source]
    secondary: Box<Error>,
    primary: Box<Error>,
  },
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::InvalidUrl { .. } => ErrorKind::InvalidUrl,
      Error::Network { .. } => ErrorKind::Network,
      Error::HttpStatus { .. } => ErrorKind::HttpStatus,
      Error::Decode { .. } => ErrorKind::Decode,
      Error::Cancelled { .. } => ErrorKind::Cancelled,
      Error::Fallback { secondary, .. } => secondary.kind(),
    }
  }

  /// The response envelope, when the failure happened after one was read.
  pub fn response(&self) -> Option<&Response> {
    match self {
      Error::HttpStatus { response } | Error::Decode { response, .. } => Some(response),
      Error::Fallback { secondary, .. } => secondary.response(),
      _ => None,
    }
  }

  pub fn status(&self) -> Option<StatusCode> {
    self.response().map(Response::status)
  }

  /// The primary contract's failure when this error came out of a version
  /// fallback.
  pub fn primary_error(&self) -> Option<&Error> {
    match self {
      Error::Fallback { primary, .. } => Some(primary),
      _ => None,
    }
  }

  /// Jira's `errorMessages`/`errors` payload, if the response carried one.
  pub fn payload(&self) -> Option<ErrorPayload> {
    self.response().and_then(Response::error_payload)
  }

  pub fn is_not_found(&self) -> bool {
    self.status() == Some(StatusCode::NOT_FOUND)
  }

  pub fn is_cancelled(&self) -> bool {
    self.kind() == ErrorKind::Cancelled
  }

  pub(crate) fn invalid_url(message: impl Into<String>, source: Option<BoxError>) -> Self {
    normalize(Failure::Build {
      message: message.into(),
      source,
    })
  }

  pub(crate) fn cancelled(reason: CancelReason) -> Self {
    normalize(Failure::Cancelled(reason))
  }
}

/// A raw failure observed somewhere in the pipeline, before classification.
///
/// Variants that happen after a response was read own that response, so the
/// normalized error can always hand it back to the caller.
#[derive(Debug)]
pub enum Failure {
  Build { message: String, source: Option<BoxError> },
  Transport(TransportError),
  Status(Response),
  Decode { response: Response, source: serde_json::Error },
  Cancelled(CancelReason),
}

/// Convert a raw failure into the single error shape callers see.
pub fn normalize(failure: Failure) -> Error {
  let error = match failure {
    Failure::Build { message, source } => Error::InvalidUrl { message, source },
    Failure::Transport(source) => Error::Network { source },
    Failure::Status(response) => Error::HttpStatus {
      response: Box::new(response),
    },
    Failure::Decode { response, source } => Error::Decode {
      response: Box::new(response),
      source,
    },
    Failure::Cancelled(reason) => Error::Cancelled { reason },
  };
  debug!(kind = ?error.kind(), "request failed: {error}");
  error
}

impl From<Failure> for Error {
  fn from(failure: Failure) -> Self {
    normalize(failure)
  }
}

/// Error body returned by Jira for non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorPayload {
  #[serde(rename = "errorMessages", default)]
  pub error_messages: Vec<String>,
  #[serde(default)]
  pub errors: BTreeMap<String, String>,
}

impl ErrorPayload {
  pub fn is_empty(&self) -> bool {
    self.error_messages.is_empty() && self.errors.is_empty()
  }

  /// Flatten messages and field errors into one line.
  pub fn summary(&self) -> String {
    self
      .error_messages
      .iter()
      .cloned()
      .chain(self.errors.iter().map(|(field, message)| format!("{field}: {message}")))
      .collect::<Vec<_>>()
      .join("; ")
  }
}

fn describe_status(response: &Response) -> String {
  let status = response.status();
  match response.error_payload().filter(|payload| !payload.is_empty()) {
    Some(payload) => format!("HTTP {status}: {}", payload.summary()),
    None => format!("HTTP {status}"),
  }
}
