use thiserror::Error;

use crate::domain::error::{FormatError, ShapeError};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", vars.join(", "))]
    MissingEnv { vars: Vec<&'static str> },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to open log file: {0}")]
    LogFile(#[source] std::io::Error),
}

/// Failures talking to the review-status API.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("status API request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("unexpected status API response: {status}")]
    UnexpectedStatus { status: reqwest::StatusCode },

    #[error("status API returned an undecodable body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Failures delivering a notification. Never fatal.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[cfg(feature = "telegram")]
    #[error("telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("notification not delivered: {0}")]
    Delivery(String),
}

/// Any recoverable failure inside a single poll cycle.
#[derive(Error, Debug)]
pub enum CycleError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_lists_every_variable() {
        let err = ConfigError::MissingEnv {
            vars: vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"],
        };
        assert_eq!(
            err.to_string(),
            "missing required environment variables: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }

    #[test]
    fn cycle_error_is_transparent() {
        let err = CycleError::from(FormatError::MissingName);
        assert_eq!(err.to_string(), "assignment record has no name");

        let err = CycleError::from(TransportError::UnexpectedStatus {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        });
        assert_eq!(
            err.to_string(),
            "unexpected status API response: 503 Service Unavailable"
        );
    }

    #[test]
    fn command_errors_keep_their_message() {
        let err: Error = ConfigError::MissingField { field: "api.endpoint" }.into();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), "missing required field: api.endpoint");

        let err: Error = NotifyError::Delivery("chat not found".into()).into();
        assert!(matches!(err, Error::Notify(_)));
    }
}
