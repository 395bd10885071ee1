//! Constants for the jira-core client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Environment variable storing the Jira host configuration.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Default ceiling on the number of response body bytes the executor reads.
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Offset step used when the server does not report a page size.
pub const DEFAULT_PAGE_STEP: u64 = 50;

/// Name of the configuration file looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "jira.toml";
