//! Time service configuration

use serde::Deserialize;
use std::time::Duration;

use super::VERSION;

/// Public time service that answers with `<timestamp time="..."/>`
pub const DEFAULT_TIME_URL: &str = "http://nist.time.gov/actualtime.cgi";

/// Time fetch settings
#[derive(Debug, Clone)]
pub struct TimeSyncConfig {
    /// Endpoint to query
    pub url: String,
    /// Number of requests before giving up
    pub attempts: u32,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for TimeSyncConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_TIME_URL.to_string(),
            attempts: 3,
            timeout_secs: 10,
            user_agent: format!("gamekit/{VERSION}"),
        }
    }
}

/// Time fetch settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileTimeSync {
    pub url: Option<String>,
    pub attempts: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl TimeSyncConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileTimeSync>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            url: file.url.unwrap_or(defaults.url),
            // Zero attempts would never send a request
            attempts: file.attempts.unwrap_or(defaults.attempts).max(1),
            timeout_secs: file.timeout_secs.unwrap_or(defaults.timeout_secs),
            user_agent: file.user_agent.unwrap_or(defaults.user_agent),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
