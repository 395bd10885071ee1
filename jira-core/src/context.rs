//! # Call Context
//!
//! Cancellation and deadline signal that flows from the outermost caller
//! through request building, execution and pagination. The core never creates
//! timeouts of its own; everything it waits on is raced against this context.

use std::fmt;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Why a call context stopped accepting work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
  /// The caller cancelled the token.
  Cancelled,
  /// The caller-supplied deadline passed.
  DeadlineExceeded,
}

impl fmt::Display for CancelReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CancelReason::Cancelled => f.write_str("request cancelled"),
      CancelReason::DeadlineExceeded => f.write_str("deadline exceeded"),
    }
  }
}

/// Cancellation token plus optional deadline for one logical call.
///
/// Cloning is cheap and clones observe the same token.
#[derive(Debug, Clone)]
pub struct CallContext {
  token: CancellationToken,
  deadline: Option<Instant>,
}

impl Default for CallContext {
  fn default() -> Self {
    Self::new()
  }
}

impl CallContext {
  /// A context that is never cancelled unless [`CallContext::cancel`] is
  /// called.
  pub fn new() -> Self {
    Self {
      token: CancellationToken::new(),
      deadline: None,
    }
  }

  /// Wrap a token owned by the caller.
  pub fn with_token(token: CancellationToken) -> Self {
    Self { token, deadline: None }
  }

  /// Attach a deadline. An earlier existing deadline wins.
  pub fn with_deadline(mut self, deadline: Instant) -> Self {
    self.deadline = Some(match self.deadline {
      Some(existing) if existing < deadline => existing,
      _ => deadline,
    });
    self
  }

  /// Attach a deadline `timeout` from now.
  pub fn with_timeout(self, timeout: Duration) -> Self {
    self.with_deadline(Instant::now() + timeout)
  }

  pub fn token(&self) -> &CancellationToken {
    &self.token
  }

  pub fn deadline(&self) -> Option<Instant> {
    self.deadline
  }

  /// Cancel every call sharing this context.
  pub fn cancel(&self) {
    self.token.cancel();
  }

  /// Returns the reason this context is done, or `None` while it is live.
  pub fn done_reason(&self) -> Option<CancelReason> {
    if self.token.is_cancelled() {
      return Some(CancelReason::Cancelled);
    }
    match self.deadline {
      Some(deadline) if Instant::now() >= deadline => Some(CancelReason::DeadlineExceeded),
      _ => None,
    }
  }

  pub fn is_done(&self) -> bool {
    self.done_reason().is_some()
  }

  /// Resolves once the token is cancelled or the deadline passes.
  pub async fn done(&self) -> CancelReason {
    match self.deadline {
      Some(deadline) => {
        tokio::select! {
          _ = self.token.cancelled() => CancelReason::Cancelled,
          _ = tokio::time::sleep_until(deadline) => CancelReason::DeadlineExceeded,
        }
      }
      None => {
        self.token.cancelled().await;
        CancelReason::Cancelled
      }
    }
  }
}
