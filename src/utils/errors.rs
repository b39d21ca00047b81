//! Error handling for MemeBoard
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy. All post lifecycle
//! operations return this crate's `Result`; Telegram API failures propagate
//! to the calling handler instead of being swallowed.

use thiserror::Error;

/// Main error type for the MemeBoard application
#[derive(Error, Debug)]
pub enum MemeBoardError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No pending post for admin group message {group_message_id} in chat {group_id}")]
    PendingPostNotFound { group_id: i64, group_message_id: i32 },

    #[error("No correlation entry for channel {channel_id}, message {message_id}")]
    MissingCorrelation { channel_id: i64, message_id: i32 },
}

/// Result type alias for MemeBoard operations
pub type Result<T> = std::result::Result<T, MemeBoardError>;

impl MemeBoardError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            MemeBoardError::Database(_) => false,
            MemeBoardError::Migration(_) => false,
            MemeBoardError::Telegram(_) => true,
            MemeBoardError::Redis(_) => true,
            MemeBoardError::Serialization(_) => false,
            MemeBoardError::Io(_) => true,
            MemeBoardError::Config(_) => false,
            MemeBoardError::InvalidInput(_) => false,
            MemeBoardError::PendingPostNotFound { .. } => false,
            // A missing correlation entry is a broken lifecycle invariant,
            // never something to retry.
            MemeBoardError::MissingCorrelation { .. } => false,
        }
    }
}
