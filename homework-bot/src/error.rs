//! Error types for the bot
//!
//! [`ConfigError`] is the only fatal error. Everything a poll cycle can hit is
//! a [`PollError`], which the poller catches, reports and moves past.

use homework_client::ClientError;
use homework_core::{ResponseError, StatusError};
use thiserror::Error;

/// Missing credentials detected at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No way to reach the chat
    #[error("missing messaging credentials: {}", vars.join(", "))]
    MissingMessaging { vars: Vec<&'static str> },

    /// No way to reach the review API
    #[error("missing review API token: PRACTICUM_TOKEN")]
    MissingApiToken,
}

/// Failure of a single poll cycle
#[derive(Debug, Error)]
pub enum PollError {
    /// The cursor holds a value no request can be built from
    #[error("invalid timestamp cursor: {0}")]
    InvalidCursor(i64),

    /// The request never got a response
    #[error("review API request failed: {0}")]
    Fetch(#[from] ClientError),

    /// The service answered with a timeout or internal error status
    #[error("review API service error: status {status}")]
    Service { status: u16 },

    /// The endpoint answered with some other non-200 status
    #[error("review API endpoint unavailable: status {status}")]
    Unreachable { status: u16 },

    /// A 200 response that carries an error description
    #[error("review API rejected the request: error={error}, code={code}")]
    Rejected { error: String, code: String },

    /// The body is not JSON
    #[error("review API response is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error(transparent)]
    Status(#[from] StatusError),
}

impl PollError {
    /// Check if the failure came from the upstream service rather than our input
    pub fn is_service_error(&self) -> bool {
        matches!(self, Self::Service { .. } | Self::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigError::MissingMessaging {
            vars: vec!["TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"],
        };
        assert_eq!(
            err.to_string(),
            "missing messaging credentials: TELEGRAM_TOKEN, TELEGRAM_CHAT_ID"
        );

        let err = PollError::Service { status: 500 };
        assert_eq!(err.to_string(), "review API service error: status 500");
        assert!(err.is_service_error());

        let err = PollError::from(ResponseError::MissingHomeworks);
        assert_eq!(err.to_string(), "API response has no 'homeworks' key");
        assert!(!err.is_service_error());
    }
}
