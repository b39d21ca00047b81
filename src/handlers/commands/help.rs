//! /help command handler

use teloxide::{Bot, types::Message, prelude::*};

use crate::utils::errors::Result;

const HELP_TEXT: &str = "MemeBoard commands:\n\n\
    /start — register and see how submissions work\n\
    /help — show this message\n\
    /settings — choose between anonymous and credited attribution\n\n\
    To submit a post, just send it to me in this chat and confirm.";

/// Handle the /help command
pub async fn handle_help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, HELP_TEXT).await?;
    Ok(())
}
