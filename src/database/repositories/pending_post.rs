//! Pending post repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::{NewPendingPost, PendingPost};
use crate::utils::errors::MemeBoardError;

#[derive(Debug, Clone)]
pub struct PendingPostRepository {
    pool: PgPool,
}

impl PendingPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new pending post
    pub async fn create(&self, request: NewPendingPost) -> Result<PendingPost, MemeBoardError> {
        let post = sqlx::query_as::<_, PendingPost>(
            r#"
            INSERT INTO pending_posts (user_id, user_chat_id, user_message_id, group_id, group_message_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, user_chat_id, user_message_id, group_id, group_message_id, created_at
            "#
        )
        .bind(request.user_id)
        .bind(request.user_chat_id)
        .bind(request.user_message_id)
        .bind(request.group_id)
        .bind(request.group_message_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    /// Delete and return the pending post for an admin-group message.
    ///
    /// The DELETE ... RETURNING makes consumption atomic: when an approval
    /// and a rejection race on the same message, only one caller gets the
    /// row back.
    pub async fn take_by_group_message(
        &self,
        group_id: i64,
        group_message_id: i32,
    ) -> Result<Option<PendingPost>, MemeBoardError> {
        let post = sqlx::query_as::<_, PendingPost>(
            r#"
            DELETE FROM pending_posts
            WHERE group_id = $1 AND group_message_id = $2
            RETURNING id, user_id, user_chat_id, user_message_id, group_id, group_message_id, created_at
            "#
        )
        .bind(group_id)
        .bind(group_message_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Count posts awaiting review
    pub async fn count(&self) -> Result<i64, MemeBoardError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pending_posts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
