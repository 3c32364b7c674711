use std::env;
use std::time::Duration;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_SESSION_IDLE_MINUTES: u32 = 120;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: Option<SecretString>,
    pub openai_api_base: Option<String>,
    pub openai_model: String,
    pub openai_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub session_idle_minutes: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            openai_api_base: env::var("OPENAI_API_BASE")
                .ok()
                .filter(|base| !base.trim().is_empty()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            openai_timeout_secs: env::var("OPENAI_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            session_idle_minutes: parse_idle_minutes(env::var("SESSION_IDLE_MINUTES").ok()),
        }
    }

    /// The credential for the remote endpoint. Its absence locks the app.
    pub fn api_key(&self) -> AppResult<&SecretString> {
        self.openai_api_key.as_ref().ok_or(AppError::MissingCredential)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.openai_timeout_secs)
    }

    pub fn session_idle_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.session_idle_minutes))
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: Some(SecretString::from("sk-test".to_string())),
            openai_api_base: None,
            openai_model: DEFAULT_MODEL.to_string(),
            openai_timeout_secs: 5,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            session_idle_minutes: 120,
        }
    }
}

/// Negative, zero and out-of-range values fall back to the default.
fn parse_idle_minutes(raw: Option<String>) -> u32 {
    raw.and_then(|m| m.trim().parse::<u32>().ok())
        .filter(|m| *m > 0)
        .unwrap_or(DEFAULT_SESSION_IDLE_MINUTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.openai_model.is_empty());
        assert!(!config.web_server_host.is_empty());
        assert!(config.openai_timeout_secs > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.openai_model, "gpt-4o");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.api_key().unwrap().expose_secret(), "sk-test");
    }

    #[test]
    fn missing_key_is_a_credential_error() {
        let config = Config {
            openai_api_key: None,
            ..Config::test_config()
        };

        assert!(matches!(config.api_key(), Err(AppError::MissingCredential)));
    }

    #[test]
    fn idle_minutes_outside_range_use_default() {
        assert_eq!(parse_idle_minutes(Some("30".to_string())), 30);
        assert_eq!(parse_idle_minutes(None), 120);
        assert_eq!(parse_idle_minutes(Some("-5".to_string())), 120);
        assert_eq!(parse_idle_minutes(Some("0".to_string())), 120);
        assert_eq!(parse_idle_minutes(Some("1000000000000".to_string())), 120);
    }

    #[test]
    fn largest_idle_ttl_is_representable() {
        let config = Config {
            session_idle_minutes: u32::MAX,
            ..Config::test_config()
        };

        assert!(chrono::Utc::now()
            .checked_sub_signed(config.session_idle_ttl())
            .is_some());
    }
}
