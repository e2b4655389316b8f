//! Console configuration
//!
//! Values come from command-line flags (see the binaries), then the
//! `ECOGESTION_*` environment variables, then the defaults below.

use crate::error::{ConsoleError, Result};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_API_URL: &str = "ECOGESTION_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "ECOGESTION_TIMEOUT_SECS";
pub const ENV_LOG: &str = "ECOGESTION_LOG";

/// Where the backend lives and how the console talks to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api_url: String,
    pub timeout_secs: u64,
    pub log_filter: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ConsoleConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self { api_url: api_url.into(), ..Default::default() }
    }

    /// Reads the `ECOGESTION_*` variables, keeping defaults for unset ones.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_API_URL) {
            config.api_url = url;
        }
        if let Ok(timeout) = std::env::var(ENV_TIMEOUT_SECS) {
            config.timeout_secs = timeout.trim().parse().map_err(|_| {
                ConsoleError::Config(format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT_SECS, timeout))
            })?;
        }
        if let Ok(filter) = std::env::var(ENV_LOG) {
            config.log_filter = filter;
        }

        config.validate()
    }

    /// Checks the values and normalizes the API URL (no trailing slash).
    pub fn validate(mut self) -> Result<Self> {
        let url = self.api_url.trim().trim_end_matches('/').to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConsoleError::Config(format!(
                "API URL must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConsoleError::Config("timeout must be at least one second".to_string()));
        }
        self.api_url = url;
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Joins a backend path (starting with `/`) onto the API URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ConsoleConfig::new("http://localhost:8000/").validate().unwrap();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.endpoint("/api/query/"), "http://localhost:8000/api/query/");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = ConsoleConfig::new("localhost:8000").validate().unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = ConsoleConfig { timeout_secs: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
