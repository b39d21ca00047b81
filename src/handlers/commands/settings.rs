//! /settings command and credit preference callbacks

use teloxide::{Bot, types::Message, prelude::*};
use tracing::debug;

use crate::event::EventContext;
use crate::services::ServiceFactory;
use crate::utils::errors::{MemeBoardError, Result};
use crate::utils::keyboards::credit_keyboard;

/// Handle the /settings command: show the attribution preference keyboard
pub async fn handle_settings(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        MemeBoardError::InvalidInput("No user in /settings message".to_string())
    })?;

    let user_id = user.id.0 as i64;
    let credited = services.user_service.is_credited(user_id).await?;

    let current = if credited {
        "your username is shown under published posts"
    } else {
        "published posts are signed with a random pseudonym"
    };

    bot.send_message(
        msg.chat.id,
        format!("Attribution settings\n\nCurrently {}.", current),
    )
    .reply_markup(credit_keyboard())
    .await?;

    Ok(())
}

/// Handle a `credit:on` / `credit:off` callback
pub async fn handle_credit_callback(
    event: &EventContext,
    services: &ServiceFactory,
    credited: bool,
) -> Result<()> {
    let user_id = event.user_id().ok_or_else(|| {
        MemeBoardError::InvalidInput("Credit callback has no sender".to_string())
    })?;

    debug!(user_id = user_id, credited = credited, "Processing credit preference callback");

    services
        .user_service
        .register_or_get_user(user_id, event.username().map(str::to_string))
        .await?;
    services.user_service.set_credited(user_id, credited).await?;

    let confirmation = if credited {
        "Your username will be shown under published posts."
    } else {
        "Your posts will be signed with a random pseudonym."
    };
    event.answer_callback_query(Some(confirmation)).await;

    if let Some(chat_id) = event.chat_id() {
        event.bot().send_message(chat_id, confirmation).await?;
    }

    Ok(())
}
