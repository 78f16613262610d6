//! Homework HTTP Clients
//!
//! Thin, type-safe HTTP clients for the two services the notifier talks to:
//! - [`PracticumClient`]: reads homework statuses from the review API
//! - [`TelegramClient`]: delivers text messages through the Telegram Bot API
//!
//! The clients only move bytes. Interpreting status codes and payloads is
//! left to the caller.
//!
//! # Example
//!
//! ```no_run
//! use homework_client::{PracticumClient, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> homework_client::Result<()> {
//!     let practicum = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "practicum-token",
//!     );
//!     let response = practicum.fetch_statuses(0).await?;
//!
//!     let telegram = TelegramClient::new("telegram-token");
//!     telegram
//!         .send_message("123456", &format!("status {}", response.status))
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::{PracticumClient, RawResponse};
pub use telegram::{TELEGRAM_API_URL, TelegramClient};

use reqwest::Client;
use std::time::Duration;

/// Builds a reqwest client with a request timeout
///
/// Both collaborators are blocking from the poller's point of view, so every
/// request must be bounded.
pub fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(ClientError::RequestFailed)
}
