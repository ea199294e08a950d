//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all non-secret
//! settings. Configuration is loaded from an optional TOML file; secrets come
//! from the environment (see [`super::credentials`]).
//!
//! # Example
//!
//! ```no_run
//! use homework_watch::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging()?;
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use crate::domain::Cursor;
use crate::error::{ConfigError, Result};

/// Default review-status endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_retry_interval_secs() -> u64 {
    600
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

/// Review-status API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Status endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Per-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Poll loop settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PollConfig {
    /// Seconds to sleep between cycles (default: 600).
    #[serde(default = "default_retry_interval_secs")]
    pub retry_interval_secs: u64,
    /// Unix timestamp of the first request's `from_date` (default: 0).
    #[serde(default)]
    pub initial_cursor: i64,
}

impl PollConfig {
    #[must_use]
    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_interval_secs)
    }

    #[must_use]
    pub fn initial_cursor(&self) -> Cursor {
        Cursor::new(self.initial_cursor)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            retry_interval_secs: default_retry_interval_secs(),
            initial_cursor: 0,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) -> Result<()> {
        self.logging.init()?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.api.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "endpoint" }.into());
        }

        let url = Url::parse(&self.api.endpoint).map_err(|e| ConfigError::InvalidValue {
            field: "endpoint",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "endpoint",
                reason: format!("unsupported scheme `{}`", url.scheme()),
            }
            .into());
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".into(),
            }
            .into());
        }

        if self.poll.retry_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_interval_secs",
                reason: "must be greater than 0".into(),
            }
            .into());
        }

        if self.poll.initial_cursor < 0 {
            return Err(ConfigError::InvalidValue {
                field: "initial_cursor",
                reason: "must not be negative".into(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.poll.retry_interval(), Duration::from_secs(600));
        assert_eq!(config.poll.initial_cursor(), Cursor::EPOCH);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = Config::parse_toml(
            r#"
[poll]
retry_interval_secs = 60

[logging]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.poll.retry_interval_secs, 60);
        assert_eq!(config.poll.initial_cursor, 0);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn rejects_zero_interval() {
        let result = Config::parse_toml("[poll]\nretry_interval_secs = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "retry_interval_secs",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let result = Config::parse_toml("[api]\nendpoint = \"ftp://example.com/statuses\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "endpoint",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_blank_endpoint() {
        let result = Config::parse_toml("[api]\nendpoint = \" \"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "endpoint" }))
        ));
    }

    #[test]
    fn rejects_negative_cursor() {
        let result = Config::parse_toml("[poll]\ninitial_cursor = -1\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "initial_cursor",
                ..
            }))
        ));
    }

    #[test]
    fn missing_file_means_defaults() {
        let config = Config::load("/definitely/not/here/config.toml").unwrap();
        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
    }
}
