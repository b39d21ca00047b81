//! Post models
//!
//! A `PendingPost` links a submitter's original message to its copy in the
//! admin group while review is underway; it is consumed when an admin
//! approves or rejects. A `PublishedPost` records a post live in the public
//! channel or its discussion group.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PendingPost {
    pub id: i64,
    /// Telegram id of the submitter
    pub user_id: i64,
    /// Chat the original submission lives in (the submitter's private chat)
    pub user_chat_id: i64,
    /// Message id of the original submission
    pub user_message_id: i32,
    /// Admin group the post was copied into
    pub group_id: i64,
    /// Message id of the admin-group copy
    pub group_message_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPendingPost {
    pub user_id: i64,
    pub user_chat_id: i64,
    pub user_message_id: i32,
    pub group_id: i64,
    pub group_message_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PublishedPost {
    pub id: i64,
    /// Channel or discussion group the post is live in
    pub chat_id: i64,
    pub message_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPublishedPost {
    pub chat_id: i64,
    pub message_id: i32,
}
