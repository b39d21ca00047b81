//! Inline keyboard builders
//!
//! Callback data follows the `prefix:action` convention used by the
//! callback dispatcher.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Keyboard attached to a post copied into the admin group
pub fn approve_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("✅ Approve", "approve:yes"),
        InlineKeyboardButton::callback("❌ Reject", "approve:no"),
    ]])
}

/// Voting keyboard attached to a published post
pub fn vote_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("👍", "vote:up"),
        InlineKeyboardButton::callback("👎", "vote:down"),
    ]])
}

/// Keyboard asking a submitter to confirm their submission
pub fn confirm_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("📤 Submit", "confirm:yes"),
        InlineKeyboardButton::callback("🗑 Cancel", "confirm:no"),
    ]])
}

/// Keyboard for toggling the credit preference in /settings
pub fn credit_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("👤 Show my username", "credit:on"),
        InlineKeyboardButton::callback("🎭 Stay anonymous", "credit:off"),
    ]])
}
