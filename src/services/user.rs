//! User service implementation
//!
//! Registration and the credit preference that controls post attribution.

use std::sync::Arc;

use tracing::{debug, info};

use crate::database::UserStore;
use crate::models::User;
use crate::utils::errors::Result;

/// User service for managing user operations
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Register a new user or get the existing record
    pub async fn register_or_get_user(
        &self,
        telegram_id: i64,
        username: Option<String>,
    ) -> Result<User> {
        debug!(telegram_id = telegram_id, "Registering or fetching user");
        self.users.find_or_create(telegram_id, username).await
    }

    /// Whether the user wants their username shown under published posts
    pub async fn is_credited(&self, telegram_id: i64) -> Result<bool> {
        self.users.is_credited(telegram_id).await
    }

    /// Set the credit preference
    pub async fn set_credited(&self, telegram_id: i64, credited: bool) -> Result<()> {
        self.users.set_credited(telegram_id, credited).await?;
        info!(
            telegram_id = telegram_id,
            credited = credited,
            "Credit preference updated"
        );
        Ok(())
    }
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}
