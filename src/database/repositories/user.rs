//! User repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::User;
use crate::utils::errors::MemeBoardError;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by Telegram ID, creating the record if it does not exist
    pub async fn find_or_create(
        &self,
        telegram_id: i64,
        username: Option<String>,
    ) -> Result<User, MemeBoardError> {
        if let Some(user) = self.find_by_telegram_id(telegram_id).await? {
            return Ok(user);
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (telegram_id, username, is_credited, created_at, updated_at)
            VALUES ($1, $2, FALSE, $3, $4)
            ON CONFLICT (telegram_id) DO UPDATE SET username = EXCLUDED.username
            RETURNING id, telegram_id, username, is_credited, created_at, updated_at
            "#
        )
        .bind(telegram_id)
        .bind(username)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by Telegram ID
    pub async fn find_by_telegram_id(
        &self,
        telegram_id: i64,
    ) -> Result<Option<User>, MemeBoardError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, telegram_id, username, is_credited, created_at, updated_at FROM users WHERE telegram_id = $1"
        )
        .bind(telegram_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Whether the user wants to be credited under published posts.
    ///
    /// Unknown users default to anonymous.
    pub async fn is_credited(&self, telegram_id: i64) -> Result<bool, MemeBoardError> {
        Ok(self
            .find_by_telegram_id(telegram_id)
            .await?
            .map(|u| u.is_credited)
            .unwrap_or(false))
    }

    /// Set the credit preference
    pub async fn set_credited(
        &self,
        telegram_id: i64,
        credited: bool,
    ) -> Result<(), MemeBoardError> {
        sqlx::query(
            r#"
            UPDATE users
            SET is_credited = $2, updated_at = $3
            WHERE telegram_id = $1
            "#
        )
        .bind(telegram_id)
        .bind(credited)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
