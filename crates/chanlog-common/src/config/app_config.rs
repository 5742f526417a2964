//! Application configuration structs
//!
//! Loads configuration from environment variables (with .env support).

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub display: DisplayConfig,
    pub poller: PollerConfig,
    pub forward: ForwardConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Default presentation settings for dialog and message listings
///
/// The sort mode strings are validated by the domain layer when parsed;
/// here they are carried verbatim from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_channel_sort")]
    pub channel_sort: String,
    #[serde(default = "default_message_sort")]
    pub message_sort: String,
    /// Default lookback for reaction-change queries, in hours
    #[serde(default = "default_reaction_window_hours")]
    pub reaction_window_hours: u32,
}

/// Upstream polling settings
#[derive(Debug, Clone, Deserialize)]
pub struct PollerConfig {
    /// Maximum number of messages fetched per channel per pass
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: u32,
    /// Pause between per-channel fetches, in seconds
    #[serde(default = "default_fetch_pause_secs")]
    pub fetch_pause_secs: u64,
}

/// Outbound forwarding configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ForwardConfig {
    /// Default destination for assembled documents; `None` disables forwarding
    /// unless a request names a target explicitly
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_forward_timeout_secs")]
    pub timeout_secs: u64,
}

// Default value functions
fn default_app_name() -> String {
    "chanlog".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_channel_sort() -> String {
    "none".to_string()
}

fn default_message_sort() -> String {
    "telegram".to_string()
}

fn default_reaction_window_hours() -> u32 {
    24
}

fn default_fetch_limit() -> u32 {
    100
}

fn default_fetch_pause_secs() -> u64 {
    1
}

fn default_forward_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            display: DisplayConfig {
                channel_sort: env::var("CHANNEL_SORT").unwrap_or_else(|_| default_channel_sort()),
                message_sort: env::var("MESSAGE_SORT").unwrap_or_else(|_| default_message_sort()),
                reaction_window_hours: env::var("REACTION_WINDOW_HOURS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_reaction_window_hours),
            },
            poller: PollerConfig {
                fetch_limit: env::var("FETCH_LIMIT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_fetch_limit),
                fetch_pause_secs: env::var("FETCH_PAUSE_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_fetch_pause_secs),
            },
            forward: ForwardConfig {
                url: env::var("FORWARD_URL").ok().filter(|s| !s.is_empty()),
                timeout_secs: env::var("FORWARD_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_forward_timeout_secs),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
