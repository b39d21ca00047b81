//! Utility modules
//!
//! Error types, logging setup and inline keyboard builders.

pub mod errors;
pub mod keyboards;
pub mod logging;

pub use errors::{MemeBoardError, Result};
