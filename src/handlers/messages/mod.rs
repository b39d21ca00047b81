//! Message handlers module
//!
//! Handles private-chat submissions and the automatic forwards the channel's
//! linked discussion group receives for every channel post.

use teloxide::{Bot, types::{Message, MessageKind}, prelude::*};
use teloxide::types::ReplyParameters;
use tracing::{debug, error};

use crate::config::Settings;
use crate::event::EventContext;
use crate::services::ServiceFactory;
use crate::utils::errors::{MemeBoardError, Result};
use crate::utils::keyboards::confirm_keyboard;

/// Handle incoming messages that are not commands
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    services: ServiceFactory,
    settings: Settings,
) -> Result<()> {
    // An automatic forward into the discussion group is the echo of a
    // just-published channel post.
    if msg.chat.id.0 == settings.meme.channel_group_id && is_automatic_forward(&msg) {
        return handle_group_echo(bot, msg, services).await;
    }

    if msg.chat.is_private() {
        return handle_private_submission(bot, msg, services).await;
    }

    Ok(())
}

/// Attribute a freshly echoed channel post in the discussion group
async fn handle_group_echo(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    debug!(chat_id = msg.chat.id.0, message_id = msg.id.0, "Discussion group echo received");

    let event = EventContext::from_message(bot, msg);
    if let Err(e) = services.post_service.publish_to_group(&event).await {
        // A missing correlation entry means the lifecycle invariant broke
        // (duplicate echo or lost state); skipping the attribution is the
        // only safe reaction.
        error!(error = %e, "Failed to attribute discussion group echo");
        return Err(e);
    }

    Ok(())
}

/// Ask a private-chat submitter to confirm their submission
async fn handle_private_submission(
    bot: Bot,
    msg: Message,
    services: ServiceFactory,
) -> Result<()> {
    let event = EventContext::from_message(bot, msg);

    let user_id = event.user_id().ok_or_else(|| {
        MemeBoardError::InvalidInput("No user in private message".to_string())
    })?;
    let chat_id = event.chat_id().ok_or_else(|| {
        MemeBoardError::InvalidInput("No chat in private message".to_string())
    })?;

    services
        .user_service
        .register_or_get_user(user_id, event.username().map(str::to_string))
        .await?;

    if event.is_valid_message_type() == Some(true) {
        let message_id = event.message_id().ok_or_else(|| {
            MemeBoardError::InvalidInput("No message id in private message".to_string())
        })?;

        event
            .bot()
            .send_message(chat_id, "Submit this post for review?")
            .reply_parameters(ReplyParameters::new(message_id))
            .reply_markup(confirm_keyboard())
            .await?;
    } else {
        event
            .bot()
            .send_message(
                chat_id,
                "This content type is not supported. Send text, a photo, voice, \
                 audio, video, GIF, sticker or poll.",
            )
            .await?;
    }

    Ok(())
}

/// Whether the message is Telegram's automatic forward of a channel post
/// into the linked discussion group
fn is_automatic_forward(msg: &Message) -> bool {
    matches!(&msg.kind, MessageKind::Common(common) if common.is_automatic_forward)
}
