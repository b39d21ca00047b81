//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub meme: MemeConfig,
    pub signs: SignsConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Redis configuration for the correlation store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedisConfig {
    pub url: String,
    pub prefix: String,
}

/// Meme lifecycle configuration
///
/// `group_id` is the admin review group, `channel_id` the public channel and
/// `channel_group_id` the channel's linked discussion group. When `comments`
/// is enabled, voting happens in the discussion group instead of inline
/// buttons on the channel post.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MemeConfig {
    pub group_id: i64,
    pub channel_id: i64,
    pub channel_group_id: i64,
    pub comments: bool,
}

/// Attribution sign configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignsConfig {
    /// Line-list file of anonymous display names
    pub names_file: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("MEMEBOARD").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::MemeBoardError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/memeboard".to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            redis: RedisConfig {
                url: "redis://localhost:6379".to_string(),
                prefix: "memeboard:".to_string(),
            },
            meme: MemeConfig {
                group_id: 0,
                channel_id: 0,
                channel_group_id: 0,
                comments: false,
            },
            signs: SignsConfig {
                names_file: "resources/anonym_names.md".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/memeboard".to_string(),
            },
        }
    }
}
