//! Published post repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::{NewPublishedPost, PublishedPost};
use crate::utils::errors::MemeBoardError;

#[derive(Debug, Clone)]
pub struct PublishedPostRepository {
    pool: PgPool,
}

impl PublishedPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a published post
    pub async fn create(&self, request: NewPublishedPost) -> Result<PublishedPost, MemeBoardError> {
        let post = sqlx::query_as::<_, PublishedPost>(
            r#"
            INSERT INTO published_posts (chat_id, message_id, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, chat_id, message_id, created_at
            "#
        )
        .bind(request.chat_id)
        .bind(request.message_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    /// Find a published post by its chat and message ids
    pub async fn find_by_message(
        &self,
        chat_id: i64,
        message_id: i32,
    ) -> Result<Option<PublishedPost>, MemeBoardError> {
        let post = sqlx::query_as::<_, PublishedPost>(
            "SELECT id, chat_id, message_id, created_at FROM published_posts WHERE chat_id = $1 AND message_id = $2"
        )
        .bind(chat_id)
        .bind(message_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Count published posts
    pub async fn count(&self) -> Result<i64, MemeBoardError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM published_posts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
