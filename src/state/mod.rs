//! Transient state module
//!
//! Holds the correlation store that bridges a channel publication to its
//! discussion-group echo when comments mode is enabled.

pub mod correlation;

pub use correlation::{CorrelationStore, InMemoryCorrelationStore, RedisCorrelationStore};
