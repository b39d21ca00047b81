//! Admin review callbacks
//!
//! An admin approves or rejects a post from the review keyboard in the admin
//! group. Either way the pending post is consumed and the submitter is
//! notified of the decision.

use teloxide::prelude::*;
use teloxide::types::{ChatId, MessageId, ReplyParameters};
use tracing::error;

use crate::config::Settings;
use crate::event::EventContext;
use crate::models::PendingPost;
use crate::services::ServiceFactory;
use crate::utils::errors::{MemeBoardError, Result};
use crate::utils::logging::log_review_decision;

/// Handle an `approve:yes` / `approve:no` callback from the admin group
pub async fn handle_review(
    event: &EventContext,
    services: &ServiceFactory,
    settings: &Settings,
    approved: bool,
) -> Result<()> {
    let group_message_id = event.message_id().ok_or_else(|| {
        MemeBoardError::InvalidInput("Review callback has no message".to_string())
    })?;

    // Consuming the pending post is atomic: when two admins race on the
    // same review message, only the first decision counts.
    let pending = services
        .post_service
        .take_pending(group_message_id.0)
        .await?
        .ok_or(MemeBoardError::PendingPostNotFound {
            group_id: settings.meme.group_id,
            group_message_id: group_message_id.0,
        })?;

    let admin_id = event.user_id().unwrap_or(0);
    log_review_decision(admin_id, group_message_id.0, approved);

    if approved {
        event.answer_callback_query(Some("Approved ✅")).await;

        if let Err(e) = services
            .post_service
            .publish_to_channel(event, pending.user_id)
            .await
        {
            error!(user_id = pending.user_id, error = %e, "Failed to publish approved post");
            notify_submitter(
                event,
                &pending,
                "Your post was approved, but publishing it failed. Please send it again.",
            )
            .await?;
            return Err(e);
        }

        notify_submitter(event, &pending, "Your post has been approved and published! 🎉")
            .await?;
    } else {
        event.answer_callback_query(Some("Rejected ❌")).await;
        notify_submitter(event, &pending, "Your post has been rejected by the admins.")
            .await?;
    }

    Ok(())
}

/// Tell the submitter what happened to their post, replying to the original
/// submission
async fn notify_submitter(
    event: &EventContext,
    pending: &PendingPost,
    text: &str,
) -> Result<()> {
    event
        .bot()
        .send_message(ChatId(pending.user_chat_id), text)
        .reply_parameters(ReplyParameters::new(MessageId(pending.user_message_id)))
        .await?;

    Ok(())
}
