//! Post lifecycle service
//!
//! Implements the three forwarding operations that move a post through its
//! lifecycle:
//!
//! ```text
//! SUBMITTED -> (admin review) -> { APPROVED -> PUBLISHED, REJECTED }
//! PUBLISHED -> ECHOED_TO_GROUP        (comments mode only)
//! ```
//!
//! All operations return this crate's `Result`; a failing Telegram call
//! propagates to the calling handler and persists nothing.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{ChatId, InputPollOption, MessageOrigin, ReplyParameters};
use tracing::debug;

use crate::config::Settings;
use crate::database::PostStore;
use crate::event::EventContext;
use crate::models::{NewPendingPost, NewPublishedPost, PendingPost, PublishedPost};
use crate::services::sign::SignService;
use crate::state::CorrelationStore;
use crate::utils::errors::{MemeBoardError, Result};
use crate::utils::keyboards::{approve_keyboard, vote_keyboard};
use crate::utils::logging::log_post_event;

/// Service driving the post lifecycle
#[derive(Clone)]
pub struct PostService {
    bot: Bot,
    settings: Settings,
    posts: Arc<dyn PostStore>,
    correlation: Arc<dyn CorrelationStore>,
    signs: SignService,
}

impl PostService {
    /// Create a new PostService instance
    pub fn new(
        bot: Bot,
        settings: Settings,
        posts: Arc<dyn PostStore>,
        correlation: Arc<dyn CorrelationStore>,
        signs: SignService,
    ) -> Self {
        Self {
            bot,
            settings,
            posts,
            correlation,
            signs,
        }
    }

    /// Forward a submission to the admin group for review.
    ///
    /// The context's message is the bot's confirmation prompt, sent as a
    /// reply to the user's original submission. Polls are re-created in the
    /// admin group as anonymous polls preserving question, option order and
    /// quiz fields; everything else is copied verbatim. Both carry the
    /// approve keyboard. A `PendingPost` is persisted only after the remote
    /// call succeeds.
    pub async fn submit_to_admins(&self, event: &EventContext) -> Result<PendingPost> {
        let message = event.message().ok_or_else(|| {
            MemeBoardError::InvalidInput("Submission confirmation carries no message".to_string())
        })?;
        let original = message.reply_to_message().ok_or_else(|| {
            MemeBoardError::InvalidInput(
                "Submission confirmation is not a reply to the original post".to_string(),
            )
        })?;
        let user_id = event.user_id().ok_or_else(|| {
            MemeBoardError::InvalidInput("Submission has no identifiable sender".to_string())
        })?;

        let group_id = ChatId(self.settings.meme.group_id);

        let group_message_id = if let Some(poll) = original.poll() {
            let options: Vec<InputPollOption> = poll
                .options
                .iter()
                .map(|option| InputPollOption::new(option.text.clone()))
                .collect();

            let mut request = self
                .bot
                .send_poll(group_id, poll.question.clone(), options)
                .is_anonymous(true)
                .type_(poll.poll_type.clone())
                .allows_multiple_answers(poll.allows_multiple_answers)
                .reply_markup(approve_keyboard());
            if let Some(correct_option_id) = poll.correct_option_id {
                request = request.correct_option_id(correct_option_id);
            }

            request.await?.id
        } else {
            self.bot
                .copy_message(group_id, original.chat.id, original.id)
                .reply_markup(approve_keyboard())
                .await?
        };

        let pending = self
            .posts
            .create_pending(NewPendingPost {
                user_id,
                user_chat_id: original.chat.id.0,
                user_message_id: original.id.0,
                group_id: group_id.0,
                group_message_id: group_message_id.0,
            })
            .await?;

        log_post_event(user_id, group_id.0, group_message_id.0, "submitted_for_review");

        Ok(pending)
    }

    /// Publish an approved post to the public channel.
    ///
    /// The context's message is the admin-group copy. With comments
    /// disabled the channel copy gets the vote keyboard, a `PublishedPost`
    /// record and a `"by: <sign>"` reply. With comments enabled the copy is
    /// bare and the submitter is parked in the correlation store until the
    /// discussion-group echo arrives.
    pub async fn publish_to_channel(&self, event: &EventContext, user_id: i64) -> Result<()> {
        let message = event.message().ok_or_else(|| {
            MemeBoardError::InvalidInput("Publication request carries no message".to_string())
        })?;

        let channel_id = ChatId(self.settings.meme.channel_id);
        let comments = self.settings.meme.comments;

        let request = self.bot.copy_message(channel_id, message.chat.id, message.id);
        let published_id = if comments {
            request.await?
        } else {
            request.reply_markup(vote_keyboard()).await?
        };

        if comments {
            self.correlation
                .put(channel_id.0, published_id.0, user_id)
                .await?;
            debug!(
                channel_id = channel_id.0,
                message_id = published_id.0,
                user_id = user_id,
                "Awaiting discussion group echo"
            );
        } else {
            self.posts
                .create_published(NewPublishedPost {
                    chat_id: channel_id.0,
                    message_id: published_id.0,
                })
                .await?;

            let sign = self.signs.get_sign(user_id).await?;
            self.bot
                .send_message(channel_id, format!("by: {}", sign))
                .reply_parameters(ReplyParameters::new(published_id))
                .await?;
        }

        let event_name = if comments {
            "published_awaiting_echo"
        } else {
            "published"
        };
        log_post_event(user_id, channel_id.0, published_id.0, event_name);

        Ok(())
    }

    /// Attribute a channel post in its linked discussion group.
    ///
    /// The context's message is the automatic forward of a just-published
    /// channel post. The correlation entry recorded by
    /// [`publish_to_channel`](Self::publish_to_channel) is consumed exactly
    /// once; a missing entry (duplicate echo, restart, expired entry) is a
    /// broken lifecycle invariant and fails with
    /// [`MemeBoardError::MissingCorrelation`].
    pub async fn publish_to_group(&self, event: &EventContext) -> Result<PublishedPost> {
        let message = event.message().ok_or_else(|| {
            MemeBoardError::InvalidInput("Group echo carries no message".to_string())
        })?;

        let Some(MessageOrigin::Channel {
            chat, message_id, ..
        }) = message.forward_origin()
        else {
            return Err(MemeBoardError::InvalidInput(
                "Group echo has no channel forward origin".to_string(),
            ));
        };

        let channel_id = chat.id.0;
        let origin_message_id = message_id.0;

        let user_id = self
            .correlation
            .take_if_present(channel_id, origin_message_id)
            .await?
            .ok_or(MemeBoardError::MissingCorrelation {
                channel_id,
                message_id: origin_message_id,
            })?;

        let sign = self.signs.get_sign(user_id).await?;
        let group_id = ChatId(self.settings.meme.channel_group_id);

        let sent = self
            .bot
            .send_message(group_id, format!("by: {}", sign))
            .reply_markup(vote_keyboard())
            .reply_parameters(ReplyParameters::new(message.id))
            .await?;

        let published = self
            .posts
            .create_published(NewPublishedPost {
                chat_id: group_id.0,
                message_id: sent.id.0,
            })
            .await?;

        log_post_event(user_id, group_id.0, sent.id.0, "attributed_in_group");

        Ok(published)
    }

    /// Consume the pending post for an admin-group review message
    pub async fn take_pending(&self, group_message_id: i32) -> Result<Option<PendingPost>> {
        self.posts
            .take_pending_by_group_message(self.settings.meme.group_id, group_message_id)
            .await
    }
}

impl std::fmt::Debug for PostService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostService")
            .field("settings", &self.settings.meme)
            .finish_non_exhaustive()
    }
}
