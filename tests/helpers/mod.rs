//! Test helpers module
//!
//! This module provides utilities and helpers for testing the MemeBoard
//! application: a mock Telegram API server, in-memory storage backends and
//! update fixtures.

pub mod memory_store;
pub mod telegram_mock;
pub mod test_data;

pub use memory_store::*;
pub use telegram_mock::*;
pub use test_data::*;
