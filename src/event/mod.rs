//! Event context module
//!
//! Wraps an inbound update in an immutable snapshot with uniform
//! Option-returning accessors.

pub mod context;

pub use context::EventContext;
