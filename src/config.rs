//! Configuration management for the e-card runtime.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honored if present.

use crate::delivery::REVOKE_DELAY;
use crate::error::{ConfigError, ConfigResult};
use crate::notify::NOTIFICATION_TTL;
use crate::services::{DEFAULT_CHAT_DOMAIN, DEFAULT_CHAT_MESSAGE};
use crate::vcard::VCardDialect;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the e-card runtime.
#[derive(Debug, Clone)]
pub struct Config {
    /// Card HTML page (default: "index.html")
    pub page_path: PathBuf,

    /// Directory receiving downloaded contact files (default: ".")
    pub output_dir: PathBuf,

    /// JSON file holding the persisted preference (default: ".ecard-preferences.json")
    pub preferences_path: PathBuf,

    /// User-agent string of the client; decides the delivery strategy (default: empty)
    pub user_agent: String,

    /// Chat deep-link host (default: "wa.me")
    pub chat_domain: String,

    /// Message prefilled in the chat
    pub chat_message: String,

    /// How vCard values are written (default: strict)
    pub vcard_dialect: VCardDialect,

    /// Delay before a download's object URL is released (default: 100 ms)
    pub revoke_delay: Duration,

    /// Time a notification stays on the page (default: 3000 ms)
    pub notification_ttl: Duration,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ECARD_PAGE`: Card HTML page
    /// - `ECARD_OUTPUT_DIR`: Download directory
    /// - `ECARD_PREFERENCES_PATH`: Preference file
    /// - `ECARD_USER_AGENT`: Client user-agent string
    /// - `ECARD_CHAT_DOMAIN`: Chat deep-link host
    /// - `ECARD_CHAT_MESSAGE`: Prefilled chat message
    /// - `ECARD_VCARD_DIALECT`: `strict` or `legacy`
    /// - `ECARD_REVOKE_DELAY_MS`: Object URL release delay
    /// - `ECARD_NOTIFICATION_TTL_MS`: Notification lifetime
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let chat_domain =
            env::var("ECARD_CHAT_DOMAIN").unwrap_or_else(|_| defaults.chat_domain.clone());
        if chat_domain.is_empty()
            || chat_domain.contains(|c: char| c == '/' || c.is_whitespace())
        {
            return Err(ConfigError::InvalidValue {
                var: "ECARD_CHAT_DOMAIN".to_string(),
                reason: "Must be a bare host name".to_string(),
            });
        }

        let vcard_dialect = match env::var("ECARD_VCARD_DIALECT") {
            Ok(val) => val
                .parse::<VCardDialect>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "ECARD_VCARD_DIALECT".to_string(),
                    reason,
                })?,
            Err(_) => defaults.vcard_dialect,
        };

        let revoke_delay = Duration::from_millis(Self::parse_env_u64(
            "ECARD_REVOKE_DELAY_MS",
            defaults.revoke_delay.as_millis() as u64,
        )?);
        let notification_ttl = Duration::from_millis(Self::parse_env_u64(
            "ECARD_NOTIFICATION_TTL_MS",
            defaults.notification_ttl.as_millis() as u64,
        )?);

        Ok(Config {
            page_path: Self::env_path("ECARD_PAGE", defaults.page_path),
            output_dir: Self::env_path("ECARD_OUTPUT_DIR", defaults.output_dir),
            preferences_path: Self::env_path("ECARD_PREFERENCES_PATH", defaults.preferences_path),
            user_agent: env::var("ECARD_USER_AGENT").unwrap_or(defaults.user_agent),
            chat_domain,
            chat_message: env::var("ECARD_CHAT_MESSAGE").unwrap_or(defaults.chat_message),
            vcard_dialect,
            revoke_delay,
            notification_ttl,
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    fn env_path(var_name: &str, default: PathBuf) -> PathBuf {
        env::var_os(var_name)
            .filter(|val| !val.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page_path: PathBuf::from("index.html"),
            output_dir: PathBuf::from("."),
            preferences_path: PathBuf::from(".ecard-preferences.json"),
            user_agent: String::new(),
            chat_domain: DEFAULT_CHAT_DOMAIN.to_string(),
            chat_message: DEFAULT_CHAT_MESSAGE.to_string(),
            vcard_dialect: VCardDialect::Strict,
            revoke_delay: REVOKE_DELAY,
            notification_ttl: NOTIFICATION_TTL,
            log_level: "error".to_string(),
        }
    }
}
