//! Status poller
//!
//! One cycle fetches the statuses changed since the cursor, checks the
//! payload, renders the newest homework into a message and sends it. Any
//! failure inside a cycle is reported to the chat once per distinct message
//! and never stops the loop.
//!
//! The cursor moves to "now" after every cycle, failed or not. Statuses that
//! change while the API is down are therefore not picked up after recovery.

use homework_core::{check_response, parse_status};
use serde_json::Value;
use std::sync::Arc;
use tokio::time::{self, Duration};
use tracing::{debug, error, info, warn};

use crate::error::PollError;
use crate::repository::{HomeworkRepository, MessageRepository};

/// Prefix of every failure notification
const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Source of the current Unix time
pub trait Clock: Send + Sync {
    /// Current time in whole seconds since the epoch
    fn now(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// What a single poll cycle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status change was found and a message built for it
    Notified { message: String, delivered: bool },
    /// The API reported no changes
    NoUpdates,
    /// The cycle failed; `alerted` tells whether the chat was told
    Failed { message: String, alerted: bool },
}

/// Poller that checks homework statuses forever
pub struct StatusPoller {
    homeworks: Arc<dyn HomeworkRepository>,
    messages: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
    chat_id: String,
    retry_period: Duration,
    /// Unix time the next request looks back to
    timestamp: i64,
    /// Last failure message delivered to the chat
    last_error: Option<String>,
}

impl StatusPoller {
    /// Creates a new poller
    ///
    /// The cursor starts at `from_date` when given, otherwise at the clock's
    /// current time.
    pub fn new(
        homeworks: Arc<dyn HomeworkRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
        chat_id: String,
        retry_period: Duration,
        from_date: Option<i64>,
    ) -> Self {
        let timestamp = from_date.unwrap_or_else(|| clock.now());
        Self {
            homeworks,
            messages,
            clock,
            chat_id,
            retry_period,
            timestamp,
            last_error: None,
        }
    }

    /// Current cursor
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Last failure message that reached the chat
    #[cfg(test)]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Starts the polling loop; never returns
    pub async fn run(&mut self) {
        info!(
            "Starting status poller (interval: {:?}, from_date: {})",
            self.retry_period, self.timestamp
        );

        loop {
            match self.poll_once().await {
                CycleOutcome::Notified { delivered, .. } => {
                    debug!("Cycle finished with a notification (delivered: {})", delivered)
                }
                CycleOutcome::NoUpdates => debug!("Cycle finished without updates"),
                CycleOutcome::Failed { alerted, .. } => {
                    debug!("Cycle failed (alerted: {})", alerted)
                }
            }

            debug!("Next poll from {} in {:?}", self.timestamp(), self.retry_period);
            time::sleep(self.retry_period).await;
        }
    }

    /// Performs a single poll cycle and advances the cursor
    pub async fn poll_once(&mut self) -> CycleOutcome {
        debug!("Polling for status changes since {}", self.timestamp);

        let outcome = match self.check_statuses().await {
            Ok(Some(message)) => {
                let delivered = self.send(&message).await;
                CycleOutcome::Notified { message, delivered }
            }
            Ok(None) => {
                debug!("No new statuses");
                CycleOutcome::NoUpdates
            }
            Err(e) => self.report_failure(e).await,
        };

        self.timestamp = self.clock.now();
        outcome
    }

    /// Fetches, checks and renders the newest status change, if any
    async fn check_statuses(&self) -> Result<Option<String>, PollError> {
        if self.timestamp < 0 {
            return Err(PollError::InvalidCursor(self.timestamp));
        }

        let response = self.homeworks.fetch_statuses(self.timestamp).await?;

        match response.status {
            200 => info!("Review API answered 200"),
            408 | 500 => {
                return Err(PollError::Service {
                    status: response.status,
                });
            }
            status => return Err(PollError::Unreachable { status }),
        }

        let body: Value = serde_json::from_slice(&response.body)?;

        if let Some(rejection) = rejection(&body) {
            return Err(rejection);
        }

        let homeworks = check_response(&body)?;
        let current_date = body.get("current_date").map(Value::to_string);
        debug!(
            "Received {} homework(s), current_date={}",
            homeworks.len(),
            current_date.as_deref().unwrap_or("-")
        );

        match homeworks.first() {
            Some(homework) => Ok(Some(parse_status(homework)?)),
            None => Ok(None),
        }
    }

    /// Logs a failed cycle and alerts the chat unless this exact message was already sent
    async fn report_failure(&mut self, e: PollError) -> CycleOutcome {
        let message = format!("{}: {}", FAILURE_PREFIX, e);
        error!(service = e.is_service_error(), "{}", message);

        let alerted = if self.last_error.as_deref() == Some(message.as_str()) {
            debug!("Failure already reported, not alerting again");
            false
        } else if self.send(&message).await {
            self.last_error = Some(message.clone());
            true
        } else {
            warn!("Failure alert not delivered, will retry on the next failed cycle");
            false
        };

        CycleOutcome::Failed { message, alerted }
    }

    /// Delivers a message, swallowing delivery errors
    async fn send(&self, text: &str) -> bool {
        match self.messages.deliver(&self.chat_id, text).await {
            Ok(()) => {
                info!("Message sent to chat {}", self.chat_id);
                true
            }
            Err(e) => {
                error!("Failed to send message: {}", e);
                false
            }
        }
    }
}

/// Extracts an `error`/`code` rejection embedded in a 200 response
fn rejection(body: &Value) -> Option<PollError> {
    let error = body.get("error");
    let code = body.get("code");
    if error.is_none() && code.is_none() {
        return None;
    }

    let describe = |value: Option<&Value>| match value {
        None => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    Some(PollError::Rejected {
        error: describe(error),
        code: describe(code),
    })
}
