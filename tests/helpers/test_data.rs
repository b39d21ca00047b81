//! Update fixtures for lifecycle tests
//!
//! Messages and callback queries are built from Bot API JSON payloads, the
//! same wire format the mock server speaks.

use serde_json::{json, Value};
use teloxide::types::{CallbackQuery, Message};

use super::telegram_mock::test_user_id;

/// Admin review group id used across fixtures
pub fn test_group_id() -> i64 {
    -1001111111111
}

/// Public channel id used across fixtures
pub fn test_channel_id() -> i64 {
    -1002222222222
}

/// Linked discussion group id used across fixtures
pub fn test_channel_group_id() -> i64 {
    -1003333333333
}

fn user_json(id: i64, username: Option<&str>) -> Value {
    let mut user = json!({
        "id": id,
        "is_bot": false,
        "first_name": "Test"
    });
    if let Some(username) = username {
        user.as_object_mut()
            .unwrap()
            .insert("username".to_string(), json!(username));
    }
    user
}

fn bot_user_json() -> Value {
    json!({
        "id": 12345,
        "is_bot": true,
        "first_name": "TestBot",
        "username": "test_bot"
    })
}

fn private_chat_json(id: i64) -> Value {
    json!({"id": id, "type": "private", "first_name": "Test"})
}

fn message(payload: Value) -> Message {
    serde_json::from_value(payload).expect("valid message payload")
}

/// A user's original text submission in their private chat
pub fn submission_message(message_id: i32, text: &str) -> Value {
    json!({
        "message_id": message_id,
        "date": 1640995200,
        "chat": private_chat_json(test_user_id()),
        "from": user_json(test_user_id(), Some("submitter")),
        "text": text
    })
}

/// A user's original poll submission in their private chat
pub fn poll_submission_message(message_id: i32) -> Value {
    json!({
        "message_id": message_id,
        "date": 1640995200,
        "chat": private_chat_json(test_user_id()),
        "from": user_json(test_user_id(), Some("submitter")),
        "poll": {
            "id": "poll-orig",
            "question": "Best crab?",
            "options": [
                {"text": "Ferris", "voter_count": 0},
                {"text": "Sebastian", "voter_count": 0}
            ],
            "total_voter_count": 0,
            "is_closed": false,
            "is_anonymous": false,
            "type": "regular",
            "allows_multiple_answers": true
        }
    })
}

/// A user's original quiz-poll submission in their private chat
pub fn quiz_submission_message(message_id: i32) -> Value {
    json!({
        "message_id": message_id,
        "date": 1640995200,
        "chat": private_chat_json(test_user_id()),
        "from": user_json(test_user_id(), Some("submitter")),
        "poll": {
            "id": "poll-quiz",
            "question": "First stable Rust release?",
            "options": [
                {"text": "2013", "voter_count": 0},
                {"text": "2015", "voter_count": 0},
                {"text": "2018", "voter_count": 0}
            ],
            "total_voter_count": 0,
            "is_closed": false,
            "is_anonymous": false,
            "type": "quiz",
            "allows_multiple_answers": false,
            "correct_option_id": 1
        }
    })
}

/// The bot's "Submit this post for review?" prompt replying to an original
/// submission
pub fn confirm_prompt_message(original: Value) -> Message {
    message(json!({
        "message_id": 2,
        "date": 1640995210,
        "chat": private_chat_json(test_user_id()),
        "from": bot_user_json(),
        "text": "Submit this post for review?",
        "reply_to_message": original
    }))
}

/// A confirmation callback pressed by the submitter on the bot's prompt
pub fn confirm_callback(data: &str, prompt: Message) -> CallbackQuery {
    callback_query(test_user_id(), Some("submitter"), data, prompt)
}

/// A review callback pressed by an admin on the admin-group copy
pub fn review_callback(admin_id: i64, data: &str, group_message_id: i32) -> CallbackQuery {
    let group_copy = message(json!({
        "message_id": group_message_id,
        "date": 1640995220,
        "chat": {"id": test_group_id(), "type": "supergroup", "title": "Review"},
        "from": bot_user_json(),
        "text": "submitted content"
    }));
    callback_query(admin_id, Some("admin"), data, group_copy)
}

/// Telegram's automatic forward of a channel post into the linked discussion
/// group
pub fn group_echo_message(echo_message_id: i32, origin_message_id: i32) -> Message {
    message(json!({
        "message_id": echo_message_id,
        "date": 1640995230,
        "chat": {"id": test_channel_group_id(), "type": "supergroup", "title": "Comments"},
        "sender_chat": {"id": test_channel_id(), "type": "channel", "title": "Memes"},
        "is_automatic_forward": true,
        "forward_origin": {
            "type": "channel",
            "chat": {"id": test_channel_id(), "type": "channel", "title": "Memes"},
            "message_id": origin_message_id,
            "date": 1640995225
        },
        "text": "published content"
    }))
}

fn callback_query(from_id: i64, username: Option<&str>, data: &str, msg: Message) -> CallbackQuery {
    let payload = json!({
        "id": "query-1",
        "from": user_json(from_id, username),
        "chat_instance": "instance",
        "data": data,
        "message": serde_json::to_value(&msg).expect("message serializes")
    });
    serde_json::from_value(payload).expect("valid callback query payload")
}
