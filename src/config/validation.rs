//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{MemeBoardError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_database_config(&settings.database)?;
    validate_redis_config(&settings.redis)?;
    validate_meme_config(&settings.meme)?;
    validate_signs_config(&settings.signs)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(MemeBoardError::Config(
            "Bot token is required".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(MemeBoardError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(MemeBoardError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(MemeBoardError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    Ok(())
}

/// Validate Redis configuration
fn validate_redis_config(config: &super::RedisConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(MemeBoardError::Config(
            "Redis URL is required".to_string()
        ));
    }

    Ok(())
}

/// Validate meme lifecycle configuration
fn validate_meme_config(config: &super::MemeConfig) -> Result<()> {
    if config.group_id == 0 {
        return Err(MemeBoardError::Config(
            "Admin group ID is required".to_string()
        ));
    }

    if config.channel_id == 0 {
        return Err(MemeBoardError::Config(
            "Channel ID is required".to_string()
        ));
    }

    if config.comments && config.channel_group_id == 0 {
        return Err(MemeBoardError::Config(
            "Channel group ID is required when comments are enabled".to_string()
        ));
    }

    Ok(())
}

/// Validate sign configuration
fn validate_signs_config(config: &super::SignsConfig) -> Result<()> {
    if config.names_file.is_empty() {
        return Err(MemeBoardError::Config(
            "Anonymous names file path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(MemeBoardError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(MemeBoardError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
