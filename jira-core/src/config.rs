//! # Client Configuration
//!
//! Base URL, user agent and read limits for a [`crate::Client`]. Values come
//! from code, from the `JIRA_HOST` environment variable, or from a `jira.toml`
//! file in the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::{Position, Url};

use crate::consts::{CONFIG_FILE_NAME, DEFAULT_MAX_BODY_BYTES, ENV_JIRA_HOST, USER_AGENT};
use crate::error::Error;

/// Settings shared by every request a client makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
  /// Base URL, always ending with `/`.
  pub base_url: Url,
  pub user_agent: String,
  /// Ceiling on response body size; larger bodies fail as network errors.
  pub max_body_bytes: usize,
  /// Transport-level timeout for the default reqwest transport.
  pub timeout: Option<Duration>,
}

/// On-disk representation of `jira.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
  pub host: Option<String>,
  pub user_agent: Option<String>,
  pub max_body_bytes: Option<usize>,
  pub timeout_secs: Option<u64>,
}

impl ClientConfig {
  /// Create a configuration for `host`. A bare host gets `https://`.
  pub fn new(host: &str) -> std::result::Result<Self, Error> {
    Ok(Self {
      base_url: base_url_for(host)?,
      user_agent: USER_AGENT.to_string(),
      max_body_bytes: DEFAULT_MAX_BODY_BYTES,
      timeout: None,
    })
  }

  /// Build a configuration from `$JIRA_HOST`.
  pub fn from_env() -> Result<Self> {
    let host = std::env::var(ENV_JIRA_HOST)
      .with_context(|| format!("Jira host environment variable '{ENV_JIRA_HOST}' not set"))?;
    Self::new(&host).with_context(|| format!("Invalid Jira host in '{ENV_JIRA_HOST}'"))
  }

  /// Parse a `jira.toml` document. `$JIRA_HOST` is used when `host` is absent.
  pub fn from_toml_str(content: &str) -> Result<Self> {
    let file: ConfigFile = toml::from_str(content).context("Failed to parse Jira config")?;
    Self::from_file_contents(file)
  }

  pub fn from_toml_file(path: &Path) -> Result<Self> {
    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read Jira config from {}", path.display()))?;
    Self::from_toml_str(&content).with_context(|| format!("Failed to load Jira config from {}", path.display()))
  }

  /// Load `jira.toml` from the platform config directory, falling back to the
  /// environment when the file does not exist.
  pub fn load_default() -> Result<Self> {
    let path = default_config_path()?;
    if path.exists() {
      Self::from_toml_file(&path)
    } else {
      Self::from_env()
    }
  }

  pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
    self.user_agent = user_agent.into();
    self
  }

  pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
    self.max_body_bytes = max_body_bytes;
    self
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  fn from_file_contents(file: ConfigFile) -> Result<Self> {
    let mut config = match file.host {
      Some(host) => Self::new(&host).with_context(|| format!("Invalid Jira host '{host}'"))?,
      None => Self::from_env()?,
    };
    if let Some(user_agent) = file.user_agent {
      config.user_agent = user_agent;
    }
    if let Some(max_body_bytes) = file.max_body_bytes {
      config.max_body_bytes = max_body_bytes;
    }
    config.timeout = file.timeout_secs.map(Duration::from_secs);
    Ok(config)
  }
}

/// Path of `jira.toml` in the platform config directory.
pub fn default_config_path() -> Result<PathBuf> {
  let dirs = ProjectDirs::from("eddieland", "", "jira-rs").context("Failed to determine project directories")?;
  Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Ensure a host string has an http(s) scheme, assuming `https://` when none
/// is given. Malformed schemes such as `http:/example.com` are repaired.
pub fn ensure_url_scheme(input: &str) -> std::result::Result<Url, Error> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(Error::invalid_url("Host cannot be empty", None));
  }

  let lowered = trimmed.to_ascii_lowercase();
  let malformed = (lowered.starts_with("http:") && !lowered.starts_with("http://"))
    || (lowered.starts_with("https:") && !lowered.starts_with("https://"));
  if malformed {
    let remainder = trimmed.split_once(':').map(|(_, rest)| rest).unwrap_or_default();
    return parse_with_https_prefix(remainder.trim_start_matches('/'));
  }

  match Url::parse(trimmed) {
    Ok(url) if url.host().is_some() && matches!(url.scheme(), "http" | "https") => Ok(url),
    _ => parse_with_https_prefix(trimmed),
  }
}

fn parse_with_https_prefix(input: &str) -> std::result::Result<Url, Error> {
  Url::parse(&format!("https://{input}")).map_err(|e| {
    Error::invalid_url(
      format!("Failed to parse URL: '{input}'. Ensure it has a valid scheme."),
      Some(Box::new(e)),
    )
  })
}

/// Base URL for `host` with any query or fragment dropped and a trailing
/// slash on the path.
fn base_url_for(host: &str) -> std::result::Result<Url, Error> {
  let url = ensure_url_scheme(host)?;
  let mut base = url[..Position::AfterPath].to_string();
  if !base.ends_with('/') {
    base.push('/');
  }
  Url::parse(&base).map_err(|e| Error::invalid_url(format!("Invalid base URL '{base}'"), Some(Box::new(e))))
}
