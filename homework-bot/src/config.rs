//! Bot configuration
//!
//! Defines the credentials and tunables of the notifier. Everything is read
//! once at startup; nothing here changes while the poll loop runs.

use std::fmt;
use std::time::Duration;

use homework_client::TELEGRAM_API_URL;

/// Default homework statuses endpoint
pub const PRACTICUM_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Secrets needed to reach the review API and the chat
///
/// Missing variables are loaded as empty strings; the startup guard decides
/// whether the process may continue.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// OAuth token for the review API
    pub practicum_token: String,
    /// Telegram bot token
    pub telegram_token: String,
    /// Chat that receives notifications
    pub telegram_chat_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mask(value: &str) -> &'static str {
            if value.is_empty() { "<missing>" } else { "<set>" }
        }
        f.debug_struct("Credentials")
            .field("practicum_token", &mask(&self.practicum_token))
            .field("telegram_token", &mask(&self.telegram_token))
            .field("telegram_chat_id", &mask(&self.telegram_chat_id))
            .finish()
    }
}

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between two poll cycles
    pub retry_period: Duration,

    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,

    /// Initial cursor; `None` starts from the current time
    pub from_date: Option<i64>,
}

impl Config {
    /// Creates a configuration with default endpoints and intervals
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: PRACTICUM_ENDPOINT.to_string(),
            telegram_api_url: TELEGRAM_API_URL.to_string(),
            retry_period: Duration::from_secs(600), // 10 minutes
            request_timeout: Duration::from_secs(30),
            from_date: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID (checked by the startup guard)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    /// - FROM_DATE (optional, unix seconds, default: now)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let secs = |key: &str| {
            var(key)
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
        };

        let credentials = Credentials {
            practicum_token: var("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: var("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: var("TELEGRAM_CHAT_ID").unwrap_or_default(),
        };

        let mut config = Self::new(credentials);

        if let Some(endpoint) = var("PRACTICUM_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Some(api_url) = var("TELEGRAM_API_URL") {
            config.telegram_api_url = api_url;
        }
        if let Some(period) = secs("RETRY_PERIOD") {
            config.retry_period = period;
        }
        if let Some(timeout) = secs("REQUEST_TIMEOUT") {
            config.request_timeout = timeout;
        }
        config.from_date = var("FROM_DATE").and_then(|s| s.parse::<i64>().ok());

        config
    }

    /// Validates everything except the credentials
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.retry_period.is_zero() {
            anyhow::bail!("retry_period must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        if let Some(from_date) = self.from_date {
            if from_date < 0 {
                anyhow::bail!("from_date cannot be negative");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.endpoint, PRACTICUM_ENDPOINT);
        assert_eq!(config.telegram_api_url, "https://api.telegram.org");
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.from_date, None);
        assert_eq!(config.credentials, Credentials::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reads_variables() {
        let config = Config::from_lookup(lookup(&[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_TOKEN", "t-token"),
            ("TELEGRAM_CHAT_ID", " 1234 "),
            ("PRACTICUM_ENDPOINT", "http://localhost:9000/statuses/"),
            ("RETRY_PERIOD", "60"),
            ("REQUEST_TIMEOUT", "5"),
            ("FROM_DATE", "1000000"),
        ]));

        assert_eq!(config.credentials.practicum_token, "p-token");
        assert_eq!(config.credentials.telegram_token, "t-token");
        assert_eq!(config.credentials.telegram_chat_id, "1234");
        assert_eq!(config.endpoint, "http://localhost:9000/statuses/");
        assert_eq!(config.retry_period, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.from_date, Some(1_000_000));
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("RETRY_PERIOD", "ten minutes"),
            ("FROM_DATE", "yesterday"),
        ]));
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.from_date, None);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::new(Credentials::default());
        assert!(config.validate().is_ok());

        config.endpoint = "practicum.yandex.ru".to_string();
        assert!(config.validate().is_err());
        config.endpoint = PRACTICUM_ENDPOINT.to_string();

        config.retry_period = Duration::ZERO;
        assert!(config.validate().is_err());
        config.retry_period = Duration::from_secs(1);

        config.from_date = Some(-1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let credentials = Credentials {
            practicum_token: "p-secret".to_string(),
            telegram_token: "t-secret".to_string(),
            telegram_chat_id: String::new(),
        };
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<missing>"));
    }
}
