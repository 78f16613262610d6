//! Startup guard
//!
//! Runs once before the poll loop. Without a chat the bot cannot report
//! anything, and without an API token every cycle would fail, so both are
//! fatal here.

use tracing::{error, info};

use crate::config::Credentials;
use crate::error::ConfigError;

/// Checks that every credential is present
///
/// Telegram credentials are checked first: if they are missing no failure
/// can ever be reported to the user.
pub fn verify(credentials: &Credentials) -> Result<(), ConfigError> {
    let mut missing = Vec::new();
    if credentials.telegram_token.is_empty() {
        missing.push("TELEGRAM_TOKEN");
    }
    if credentials.telegram_chat_id.is_empty() {
        missing.push("TELEGRAM_CHAT_ID");
    }
    if !missing.is_empty() {
        return Err(ConfigError::MissingMessaging { vars: missing });
    }

    if credentials.practicum_token.is_empty() {
        return Err(ConfigError::MissingApiToken);
    }

    Ok(())
}

/// Returns `true` only if all credentials are present, logging the failure otherwise
pub fn check_credentials(credentials: &Credentials) -> bool {
    match verify(credentials) {
        Ok(()) => {
            info!("All credentials present");
            true
        }
        Err(e) => {
            error!(critical = true, "{}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Credentials {
        Credentials {
            practicum_token: "p".to_string(),
            telegram_token: "t".to_string(),
            telegram_chat_id: "1".to_string(),
        }
    }

    #[test]
    fn test_all_present() {
        assert!(verify(&full()).is_ok());
        assert!(check_credentials(&full()));
    }

    #[test]
    fn test_missing_messaging() {
        let mut credentials = full();
        credentials.telegram_token.clear();
        assert_eq!(
            verify(&credentials),
            Err(ConfigError::MissingMessaging {
                vars: vec!["TELEGRAM_TOKEN"]
            })
        );
        assert!(!check_credentials(&credentials));

        credentials.telegram_chat_id.clear();
        credentials.practicum_token.clear();
        assert_eq!(
            verify(&credentials),
            Err(ConfigError::MissingMessaging {
                vars: vec!["TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"]
            })
        );
    }

    #[test]
    fn test_missing_api_token() {
        let mut credentials = full();
        credentials.practicum_token.clear();
        assert_eq!(verify(&credentials), Err(ConfigError::MissingApiToken));
        assert!(!check_credentials(&credentials));
    }

    #[test]
    fn test_nothing_set() {
        assert!(!check_credentials(&Credentials::default()));
    }
}
