//! Command handlers module

pub mod help;
pub mod settings;
pub mod start;
