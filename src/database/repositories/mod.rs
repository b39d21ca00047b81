//! Repository implementations

pub mod pending_post;
pub mod published_post;
pub mod user;

pub use pending_post::PendingPostRepository;
pub use published_post::PublishedPostRepository;
pub use user::UserRepository;
