//! Homework Bot
//!
//! Watches the review status of a student's latest homework and reports
//! changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and tunables from the environment (and `.env`)
//! - Startup guard: refuses to start without every credential
//! - Repositories: seams over the review API and Telegram clients
//! - Scheduler: the poll-validate-notify loop
//!
//! The bot runs until it is stopped from outside. The only way it exits on
//! its own is a failed startup check.

mod config;
mod error;
mod repository;
mod scheduler;
mod startup;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::scheduler::{StatusPoller, SystemClock};
use homework_client::{PracticumClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Variables already in the environment win over .env
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=debug,homework_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Homework Bot");

    let config = load_config()?;
    info!(
        "Loaded configuration: endpoint={}, retry_period={:?}, request_timeout={:?}",
        config.endpoint, config.retry_period, config.request_timeout
    );

    let mut poller = build_poller(&config)?;

    info!("Bot initialized, entering poll loop");
    poller.run().await;

    Ok(())
}

/// Loads and validates configuration from the environment
fn load_config() -> Result<Config> {
    let config = Config::from_env();
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Runs the startup guard, then wires the clients into a poller
fn build_poller(config: &Config) -> Result<StatusPoller> {
    if !startup::check_credentials(&config.credentials) {
        anyhow::bail!("Required credentials are missing, refusing to start");
    }

    let http = homework_client::http_client(config.request_timeout)
        .context("Failed to build HTTP client")?;

    let practicum = PracticumClient::with_client(
        config.endpoint.clone(),
        config.credentials.practicum_token.clone(),
        http.clone(),
    );
    let telegram = TelegramClient::with_client(
        config.telegram_api_url.clone(),
        config.credentials.telegram_token.clone(),
        http,
    );

    Ok(StatusPoller::new(
        Arc::new(practicum),
        Arc::new(telegram),
        Arc::new(SystemClock),
        config.credentials.telegram_chat_id.clone(),
        config.retry_period,
        config.from_date,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;

    fn config(credentials: Credentials) -> Config {
        let mut config = Config::new(credentials);
        config.from_date = Some(1_000_000);
        config
    }

    #[test]
    fn test_missing_messaging_token_stops_startup() {
        let config = config(Credentials {
            practicum_token: "p".to_string(),
            telegram_token: String::new(),
            telegram_chat_id: "1".to_string(),
        });

        assert!(build_poller(&config).is_err());
    }

    #[test]
    fn test_missing_api_token_stops_startup() {
        let config = config(Credentials {
            practicum_token: String::new(),
            telegram_token: "t".to_string(),
            telegram_chat_id: "1".to_string(),
        });

        assert!(build_poller(&config).is_err());
    }

    #[test]
    fn test_poller_starts_from_configured_date() {
        let config = config(Credentials {
            practicum_token: "p".to_string(),
            telegram_token: "t".to_string(),
            telegram_chat_id: "1".to_string(),
        });

        let poller = build_poller(&config).unwrap();
        assert_eq!(poller.timestamp(), 1_000_000);
        assert_eq!(poller.last_error(), None);
    }
}
