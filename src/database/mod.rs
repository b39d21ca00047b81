//! Database module
//!
//! Connection pooling, sqlx repositories and the storage traits the post
//! lifecycle services depend on. The traits keep persistence injectable so
//! the lifecycle operations can run against in-memory stores in tests.

pub mod connection;
pub mod repositories;

use async_trait::async_trait;

use crate::models::{NewPendingPost, NewPublishedPost, PendingPost, PublishedPost, User};
use crate::utils::errors::Result;

// Re-export commonly used database components
pub use connection::{DatabasePool, create_pool, run_migrations, health_check};
pub use repositories::{PendingPostRepository, PublishedPostRepository, UserRepository};

/// Storage for posts moving through the submission lifecycle
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Record a post awaiting admin review
    async fn create_pending(&self, post: NewPendingPost) -> Result<PendingPost>;

    /// Atomically consume the pending post for an admin-group message.
    ///
    /// Returns `None` when no pending post matches, which happens when two
    /// admins race on the same review message: exactly one of them wins.
    async fn take_pending_by_group_message(
        &self,
        group_id: i64,
        group_message_id: i32,
    ) -> Result<Option<PendingPost>>;

    /// Record a post published to the channel or its discussion group
    async fn create_published(&self, post: NewPublishedPost) -> Result<PublishedPost>;
}

/// Storage for user records and the credit preference
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_or_create(&self, telegram_id: i64, username: Option<String>) -> Result<User>;

    async fn is_credited(&self, telegram_id: i64) -> Result<bool>;

    async fn set_credited(&self, telegram_id: i64, credited: bool) -> Result<()>;
}

/// Aggregate over all sqlx repositories, cloned into services
#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub pending_posts: PendingPostRepository,
    pub published_posts: PublishedPostRepository,
    pub users: UserRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            pending_posts: PendingPostRepository::new(pool.clone()),
            published_posts: PublishedPostRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }
}

#[async_trait]
impl PostStore for DatabaseService {
    async fn create_pending(&self, post: NewPendingPost) -> Result<PendingPost> {
        self.pending_posts.create(post).await
    }

    async fn take_pending_by_group_message(
        &self,
        group_id: i64,
        group_message_id: i32,
    ) -> Result<Option<PendingPost>> {
        self.pending_posts
            .take_by_group_message(group_id, group_message_id)
            .await
    }

    async fn create_published(&self, post: NewPublishedPost) -> Result<PublishedPost> {
        self.published_posts.create(post).await
    }
}

#[async_trait]
impl UserStore for DatabaseService {
    async fn find_or_create(&self, telegram_id: i64, username: Option<String>) -> Result<User> {
        self.users.find_or_create(telegram_id, username).await
    }

    async fn is_credited(&self, telegram_id: i64) -> Result<bool> {
        self.users.is_credited(telegram_id).await
    }

    async fn set_credited(&self, telegram_id: i64, credited: bool) -> Result<()> {
        self.users.set_credited(telegram_id, credited).await
    }
}
