//! Homework statuses repository

use async_trait::async_trait;
use homework_client::{ClientError, PracticumClient, RawResponse};

/// Repository trait for reading homework statuses
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches the statuses that changed since `from_date`
    ///
    /// Returns whatever the service answered; an error means no answer
    /// arrived at all.
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp, in seconds
    async fn fetch_statuses(&self, from_date: i64) -> Result<RawResponse, ClientError>;
}

#[async_trait]
impl HomeworkRepository for PracticumClient {
    async fn fetch_statuses(&self, from_date: i64) -> Result<RawResponse, ClientError> {
        PracticumClient::fetch_statuses(self, from_date).await
    }
}
