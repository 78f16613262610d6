//! Messages repository

use async_trait::async_trait;
use homework_client::{ClientError, TelegramClient};

/// Repository trait for delivering text to a chat
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Delivers `text` to the chat identified by `chat_id`
    async fn deliver(&self, chat_id: &str, text: &str) -> Result<(), ClientError>;
}

#[async_trait]
impl MessageRepository for TelegramClient {
    async fn deliver(&self, chat_id: &str, text: &str) -> Result<(), ClientError> {
        self.send_message(chat_id, text).await
    }
}
