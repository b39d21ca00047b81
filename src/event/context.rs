//! Event context implementation
//!
//! An `EventContext` is built once per inbound update by one of three named
//! factory paths — from a message, from a callback query, or from a
//! background job carrying no update. Which fields are guaranteed present is
//! explicit at each construction site; every derived accessor returns an
//! `Option` instead of panicking when its source is absent.

use teloxide::prelude::*;
use teloxide::types::{
    CallbackQuery, ChatId, ChatKind, InlineKeyboardMarkup, MaybeInaccessibleMessage, Message,
    MessageId,
};
use tracing::warn;

/// Immutable snapshot of the update that triggered a handler
#[derive(Debug, Clone)]
pub struct EventContext {
    bot: Bot,
    message: Option<Message>,
    query: Option<CallbackQuery>,
}

impl EventContext {
    /// Build a context from a message update
    pub fn from_message(bot: Bot, message: Message) -> Self {
        Self {
            bot,
            message: Some(message),
            query: None,
        }
    }

    /// Build a context from a callback query update.
    ///
    /// The wrapped message is the query's originating message when Telegram
    /// still considers it accessible.
    pub fn from_callback(bot: Bot, query: CallbackQuery) -> Self {
        let message = match &query.message {
            Some(MaybeInaccessibleMessage::Regular(message)) => Some((**message).clone()),
            _ => None,
        };

        Self {
            bot,
            message,
            query: Some(query),
        }
    }

    /// Build a context from a background job trigger carrying no update
    pub fn from_job(bot: Bot) -> Self {
        Self {
            bot,
            message: None,
            query: None,
        }
    }

    /// The bot handle this context was built with
    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    /// The message that caused the update, if any
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// The callback query that caused the update, if any
    pub fn query(&self) -> Option<&CallbackQuery> {
        self.query.as_ref()
    }

    /// Id of the chat where the event happened
    pub fn chat_id(&self) -> Option<ChatId> {
        self.message.as_ref().map(|m| m.chat.id)
    }

    /// Kind of the chat where the event happened
    pub fn chat_kind(&self) -> Option<&ChatKind> {
        self.message.as_ref().map(|m| &m.chat.kind)
    }

    /// Whether the chat is a private chat
    pub fn is_private_chat(&self) -> Option<bool> {
        self.message.as_ref().map(|m| m.chat.is_private())
    }

    /// Text of the message that caused the update
    pub fn text(&self) -> Option<&str> {
        self.message.as_ref().and_then(|m| m.text())
    }

    /// Id of the message that caused the update
    pub fn message_id(&self) -> Option<MessageId> {
        self.message.as_ref().map(|m| m.id)
    }

    /// Reply markup of the message that caused the update
    pub fn reply_markup(&self) -> Option<&InlineKeyboardMarkup> {
        self.message.as_ref().and_then(|m| m.reply_markup())
    }

    /// Whether the message carries a supported content kind.
    ///
    /// Supported kinds are text, photo, voice, audio, video, animation,
    /// sticker and poll.
    pub fn is_valid_message_type(&self) -> Option<bool> {
        self.message.as_ref().map(|m| {
            m.text().is_some()
                || m.photo().is_some()
                || m.voice().is_some()
                || m.audio().is_some()
                || m.video().is_some()
                || m.animation().is_some()
                || m.sticker().is_some()
                || m.poll().is_some()
        })
    }

    /// Id of the user that caused the update.
    ///
    /// A callback query's sender wins over the message author: the message
    /// wrapped by a callback is usually one the bot itself sent.
    pub fn user_id(&self) -> Option<i64> {
        if let Some(query) = &self.query {
            return Some(query.from.id.0 as i64);
        }
        self.message
            .as_ref()
            .and_then(|m| m.from.as_ref())
            .map(|u| u.id.0 as i64)
    }

    /// Username of the user that caused the update
    pub fn username(&self) -> Option<&str> {
        if let Some(query) = &self.query {
            return query.from.username.as_deref();
        }
        self.message
            .as_ref()
            .and_then(|m| m.from.as_ref())
            .and_then(|u| u.username.as_deref())
    }

    /// Id of the callback query that caused the update
    pub fn query_id(&self) -> Option<&str> {
        self.query.as_ref().map(|q| q.id.as_str())
    }

    /// Data associated with the callback query that caused the update
    pub fn query_data(&self) -> Option<&str> {
        self.query.as_ref().and_then(|q| q.data.as_deref())
    }

    /// Best-effort acknowledgement of the callback query.
    ///
    /// Telegram rejects acknowledgements for queries that are too old or
    /// already answered; that is never worth failing a handler over, so the
    /// error is logged and dropped.
    pub async fn answer_callback_query(&self, text: Option<&str>) {
        let Some(query) = &self.query else {
            return;
        };

        let mut request = self.bot.answer_callback_query(query.id.clone());
        if let Some(text) = text {
            request = request.text(text);
        }

        if let Err(e) = request.await {
            warn!(query_id = %query.id, error = %e, "Failed to answer callback query");
        }
    }
}
