//! Submission confirmation callbacks
//!
//! A submitter confirms or cancels the prompt the bot attached to their
//! post. Confirming forwards the post to the admin group; the outcome is
//! always reported back to the submitter.

use teloxide::prelude::*;
use tracing::{error, warn};

use crate::event::EventContext;
use crate::services::ServiceFactory;
use crate::utils::errors::{MemeBoardError, Result};

/// Handle a `confirm:yes` callback: forward the post to the admins
pub async fn handle_confirm(event: &EventContext, services: &ServiceFactory) -> Result<()> {
    let chat_id = event.chat_id().ok_or_else(|| {
        MemeBoardError::InvalidInput("Confirmation callback has no chat".to_string())
    })?;

    match services.post_service.submit_to_admins(event).await {
        Ok(_) => {
            event.answer_callback_query(Some("Submitted!")).await;
            event
                .bot()
                .send_message(chat_id, "Your post has been sent to the admins for review. 📬")
                .await?;
        }
        Err(e) => {
            error!(user_id = ?event.user_id(), error = %e, "Failed to forward post to admins");
            event.answer_callback_query(None).await;
            event
                .bot()
                .send_message(
                    chat_id,
                    "Something went wrong while forwarding your post. Please try again later.",
                )
                .await?;
        }
    }

    remove_prompt(event).await;
    Ok(())
}

/// Handle a `confirm:no` callback: drop the submission
pub async fn handle_cancel(event: &EventContext) -> Result<()> {
    event.answer_callback_query(Some("Cancelled")).await;

    if let Some(chat_id) = event.chat_id() {
        event
            .bot()
            .send_message(chat_id, "Submission cancelled.")
            .await?;
    }

    remove_prompt(event).await;
    Ok(())
}

/// Delete the confirmation prompt, best-effort
async fn remove_prompt(event: &EventContext) {
    if let (Some(chat_id), Some(message_id)) = (event.chat_id(), event.message_id()) {
        if let Err(e) = event.bot().delete_message(chat_id, message_id).await {
            warn!(error = %e, "Failed to delete confirmation prompt");
        }
    }
}
