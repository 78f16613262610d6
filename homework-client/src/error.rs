//! Error types for the homework clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review API or Telegram
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Telegram refused to deliver the message
    #[error("Message delivery failed: {description}")]
    Delivery {
        /// Description reported by the Bot API, or the HTTP status
        description: String,
    },
}

impl ClientError {
    /// Create a delivery error from a description
    pub fn delivery(description: impl Into<String>) -> Self {
        Self::Delivery {
            description: description.into(),
        }
    }
}
