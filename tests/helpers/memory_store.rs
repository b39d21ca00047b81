//! In-memory storage backends for testing
//!
//! These implement the storage traits over plain mutex-guarded collections so
//! lifecycle tests run without Postgres.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use MemeBoard::database::{PostStore, UserStore};
use MemeBoard::models::{NewPendingPost, NewPublishedPost, PendingPost, PublishedPost, User};
use MemeBoard::utils::errors::Result;

/// In-memory PostStore
#[derive(Clone, Default)]
pub struct InMemoryPostStore {
    pending: Arc<Mutex<Vec<PendingPost>>>,
    published: Arc<Mutex<Vec<PublishedPost>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    pub fn published(&self) -> Vec<PublishedPost> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn create_pending(&self, post: NewPendingPost) -> Result<PendingPost> {
        let pending = PendingPost {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            user_id: post.user_id,
            user_chat_id: post.user_chat_id,
            user_message_id: post.user_message_id,
            group_id: post.group_id,
            group_message_id: post.group_message_id,
            created_at: Utc::now(),
        };
        self.pending.lock().unwrap().push(pending.clone());
        Ok(pending)
    }

    async fn take_pending_by_group_message(
        &self,
        group_id: i64,
        group_message_id: i32,
    ) -> Result<Option<PendingPost>> {
        let mut pending = self.pending.lock().unwrap();
        let position = pending
            .iter()
            .position(|p| p.group_id == group_id && p.group_message_id == group_message_id);
        Ok(position.map(|i| pending.remove(i)))
    }

    async fn create_published(&self, post: NewPublishedPost) -> Result<PublishedPost> {
        let published = PublishedPost {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            chat_id: post.chat_id,
            message_id: post.message_id,
            created_at: Utc::now(),
        };
        self.published.lock().unwrap().push(published.clone());
        Ok(published)
    }
}

/// In-memory UserStore
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<HashMap<i64, User>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user with the given credit preference
    pub fn with_user(self, telegram_id: i64, username: Option<&str>, credited: bool) -> Self {
        let now = Utc::now();
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            telegram_id,
            username: username.map(str::to_string),
            is_credited: credited,
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().insert(telegram_id, user);
        self
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_or_create(&self, telegram_id: i64, username: Option<String>) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.get(&telegram_id) {
            return Ok(user.clone());
        }

        let now = Utc::now();
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            telegram_id,
            username,
            is_credited: false,
            created_at: now,
            updated_at: now,
        };
        users.insert(telegram_id, user.clone());
        Ok(user)
    }

    async fn is_credited(&self, telegram_id: i64) -> Result<bool> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&telegram_id).map(|u| u.is_credited).unwrap_or(false))
    }

    async fn set_credited(&self, telegram_id: i64, credited: bool) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.get_mut(&telegram_id) {
            user.is_credited = credited;
            user.updated_at = Utc::now();
        }
        Ok(())
    }
}
