//! Services module
//!
//! This module contains business logic services

pub mod post;
pub mod sign;
pub mod user;

// Re-export commonly used services
pub use post::PostService;
pub use sign::SignService;
pub use user::UserService;

use std::sync::Arc;

use teloxide::Bot;

use crate::config::Settings;
use crate::database::{PostStore, UserStore};
use crate::state::CorrelationStore;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub post_service: PostService,
    pub sign_service: SignService,
    pub user_service: UserService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(
        bot: Bot,
        settings: Settings,
        posts: Arc<dyn PostStore>,
        users: Arc<dyn UserStore>,
        correlation: Arc<dyn CorrelationStore>,
        anonym_names: Vec<String>,
    ) -> Self {
        let sign_service = SignService::new(bot.clone(), users.clone(), anonym_names);
        let post_service = PostService::new(
            bot,
            settings,
            posts,
            correlation,
            sign_service.clone(),
        );
        let user_service = UserService::new(users);

        Self {
            post_service,
            sign_service,
            user_service,
        }
    }
}
