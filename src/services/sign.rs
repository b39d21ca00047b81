//! Sign generation service
//!
//! A "sign" is the attribution string shown under a published post: a random
//! pseudonym for anonymous users, or `@username` for users who opted into
//! being credited.

use std::sync::Arc;

use rand::seq::SliceRandom;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::{debug, warn};

use crate::database::UserStore;
use crate::utils::errors::{MemeBoardError, Result};

/// Service computing attribution signs
#[derive(Clone)]
pub struct SignService {
    bot: Bot,
    users: Arc<dyn UserStore>,
    names: Vec<String>,
}

impl SignService {
    /// Create a new SignService over a pre-loaded pseudonym list
    pub fn new(bot: Bot, users: Arc<dyn UserStore>, names: Vec<String>) -> Self {
        Self { bot, users, names }
    }

    /// Load the pseudonym line-list from a markdown-backed file
    pub async fn load_names(path: &str) -> Result<Vec<String>> {
        let content = tokio::fs::read_to_string(path).await?;
        let names = parse_names(&content);

        if names.is_empty() {
            return Err(MemeBoardError::Config(format!(
                "Anonymous name list {} contains no names",
                path
            )));
        }

        debug!(path = path, count = names.len(), "Loaded anonymous name list");
        Ok(names)
    }

    /// Compute the sign for a user.
    ///
    /// Picks a fresh random pseudonym per call. Credited users get
    /// `@username` when the bot can resolve a non-empty handle via
    /// `getChat`; otherwise they fall back to a pseudonym — attribution is
    /// decoration, a publication never fails over it.
    pub async fn get_sign(&self, user_id: i64) -> Result<String> {
        if self.users.is_credited(user_id).await? {
            match self.bot.get_chat(ChatId(user_id)).await {
                Ok(chat) => {
                    if let Some(username) = chat.username() {
                        if !username.is_empty() {
                            return Ok(format!("@{}", username));
                        }
                    }
                }
                Err(e) => {
                    warn!(user_id = user_id, error = %e,
                          "Failed to resolve username for credited user, falling back to pseudonym");
                }
            }
        }

        self.names
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| MemeBoardError::Config("Anonymous name list is empty".to_string()))
    }
}

impl std::fmt::Debug for SignService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignService")
            .field("names", &self.names.len())
            .finish_non_exhaustive()
    }
}

/// Parse a pseudonym list: one name per non-empty line, comments starting
/// with '#' skipped
fn parse_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
