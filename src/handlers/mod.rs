//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Callback handlers for inline keyboard interactions
//! - Message handlers for submissions and discussion-group echoes

pub mod callbacks;
pub mod commands;
pub mod messages;

pub use callbacks::handle_callback_query;
pub use messages::handle_message;
