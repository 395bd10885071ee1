//! Environment variable management for testing
//!
//! Tests that read process-wide environment variables hold an
//! [`EnvVarGuard`] so they don't interfere with each other.

use std::env;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serializes access to one environment variable and restores its original
/// value when dropped.
pub struct EnvVarGuard {
  name: &'static str,
  original: Option<String>,
  _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
  /// Take the environment lock and remember the current value of `name`.
  pub fn new(name: &'static str) -> Self {
    let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    Self {
      name,
      original: env::var(name).ok(),
      _lock: lock,
    }
  }

  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(self.name, value);
    }
  }

  pub fn remove(&self) {
    unsafe {
      env::remove_var(self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    // Restore the original value
    match &self.original {
      Some(val) => unsafe {
        env::set_var(self.name, val);
      },
      None => unsafe {
        env::remove_var(self.name);
      },
    }
  }
}
