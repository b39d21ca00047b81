//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! helpers for the post lifecycle.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// The returned guard keeps the background file writer alive; the caller
/// must hold it for the lifetime of the process or file logs stop flushing.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "memeboard.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a post lifecycle transition with structured data
pub fn log_post_event(user_id: i64, chat_id: i64, message_id: i32, event: &str) {
    info!(
        user_id = user_id,
        chat_id = chat_id,
        message_id = message_id,
        event = event,
        "Post lifecycle event"
    );
}

/// Log an admin review decision
pub fn log_review_decision(admin_id: i64, group_message_id: i32, approved: bool) {
    if approved {
        info!(
            admin_id = admin_id,
            group_message_id = group_message_id,
            "Post approved by admin"
        );
    } else {
        warn!(
            admin_id = admin_id,
            group_message_id = group_message_id,
            "Post rejected by admin"
        );
    }
}
