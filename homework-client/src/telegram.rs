//! Telegram Bot API client

use crate::error::{ClientError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Public Bot API base URL
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// HTTP client for sending messages through a Telegram bot
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API, without trailing slash
    api_url: String,
    /// Bot token; part of every request path
    token: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a client for the public Bot API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(TELEGRAM_API_URL, token, Client::new())
    }

    /// Create a client for a custom Bot API server with a custom HTTP client
    pub fn with_client(
        api_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the Bot API base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    /// Send a plain text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Chat identifier or `@channelusername`
    /// * `text` - Message text, sent without markup
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        debug!("Sending {} chars to chat {}", text.chars().count(), chat_id);

        // The request URL carries the token, so it is stripped from errors
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessage { chat_id, text })
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        let status = response.status();
        let reply = response.json::<ApiReply>().await.ok();

        match reply {
            Some(reply) if reply.ok && status.is_success() => Ok(()),
            Some(reply) => Err(ClientError::delivery(
                reply
                    .description
                    .unwrap_or_else(|| format!("Bot API answered {}", status)),
            )),
            None => Err(ClientError::delivery(format!(
                "Bot API answered {} with an unreadable body",
                status
            ))),
        }
    }
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    description: Option<String>,
}
