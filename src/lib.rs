//! MemeBoard Telegram Bot
//!
//! A Telegram bot that collects user-submitted meme posts, forwards them to
//! an admin group for approval, and on approval publishes them to a public
//! channel with voting and attribution.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod event;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{MemeBoardError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use event::EventContext;
pub use services::ServiceFactory;
pub use state::CorrelationStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
