//! Data models module

pub mod post;
pub mod user;

pub use post::{PendingPost, PublishedPost, NewPendingPost, NewPublishedPost};
pub use user::User;
