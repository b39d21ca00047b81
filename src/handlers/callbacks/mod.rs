//! Callback query handlers module
//!
//! This module contains handlers for all inline keyboard button callbacks.
//! Callback data follows the `prefix:action` convention.

pub mod approval;
pub mod submission;

use teloxide::{Bot, types::CallbackQuery};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::event::EventContext;
use crate::handlers::commands::settings as settings_cmd;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Main callback query dispatcher
pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    services: ServiceFactory,
    settings: Settings,
) -> Result<()> {
    let event = EventContext::from_callback(bot, query);

    let Some(data) = event.query_data().map(str::to_string) else {
        warn!("Callback query without data");
        event.answer_callback_query(None).await;
        return Ok(());
    };

    debug!(user_id = ?event.user_id(), callback_data = %data, "Processing callback query");

    let (prefix, action) = match data.split_once(':') {
        Some(parts) => parts,
        None => {
            warn!(data = %data, "Invalid callback data format");
            event.answer_callback_query(None).await;
            return Ok(());
        }
    };

    match (prefix, action) {
        ("confirm", "yes") => {
            submission::handle_confirm(&event, &services).await?;
        }
        ("confirm", "no") => {
            submission::handle_cancel(&event).await?;
        }
        ("approve", action) => {
            approval::handle_review(&event, &services, &settings, action == "yes").await?;
        }
        ("credit", action) => {
            settings_cmd::handle_credit_callback(&event, &services, action == "on").await?;
        }
        ("vote", _) => {
            // Vote tallying is out of scope; just release the button.
            event.answer_callback_query(None).await;
        }
        _ => {
            warn!(prefix = %prefix, action = %action, "Unknown callback action");
            event.answer_callback_query(None).await;
        }
    }

    Ok(())
}
