//! /start command handler

use teloxide::{Bot, types::Message, prelude::*};
use tracing::debug;

use crate::services::ServiceFactory;
use crate::utils::errors::{MemeBoardError, Result};

const WELCOME_TEXT: &str = "Welcome to MemeBoard! 👋\n\n\
    Send me a meme (photo, video, sticker, poll or plain text) and I'll ask \
    you to confirm before forwarding it to the admins for review. Approved \
    posts are published to the channel.\n\n\
    Use /settings to choose whether published posts show your username.";

/// Handle the /start command: register the user and explain the flow
pub async fn handle_start(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        MemeBoardError::InvalidInput("No user in /start message".to_string())
    })?;

    let user_id = user.id.0 as i64;
    debug!(user_id = user_id, "Processing /start");

    services
        .user_service
        .register_or_get_user(user_id, user.username.clone())
        .await?;

    bot.send_message(msg.chat.id, WELCOME_TEXT).await?;

    Ok(())
}
