//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            custom_response: None,
        }
    }
}

impl MockResponseConfig {
    pub fn failure() -> Self {
        Self {
            success: false,
            custom_response: None,
        }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Create a bot wired to this mock server
    pub fn bot(&self) -> Bot {
        Bot::new(test_bot_token()).set_api_url(
            self.server
                .uri()
                .parse()
                .expect("mock server uri is a valid url"),
        )
    }

    // Telegram method names are case-insensitive; teloxide sends them in
    // PascalCase, so the path matcher must ignore case.
    fn endpoint_path_pattern(endpoint: &str) -> String {
        format!("(?i)^/bot{}/{}$", test_bot_token(), endpoint)
    }

    async fn mount_endpoint(&self, endpoint: &str, config: MockResponseConfig, success_body: Value) {
        let response_body = config.custom_response.unwrap_or_else(|| {
            if config.success {
                success_body
            } else {
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: mocked failure"
                })
            }
        });

        let response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(response_body);

        Mock::given(method("POST"))
            .and(path_regex(Self::endpoint_path_pattern(endpoint)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        self.mount_endpoint(
            "sendMessage",
            config,
            json!({
                "ok": true,
                "result": {
                    "message_id": 123,
                    "from": test_bot_user_json(),
                    "chat": {
                        "id": -1001234567890_i64,
                        "title": "Test Group",
                        "type": "supergroup"
                    },
                    "date": 1640995200,
                    "text": "Test message"
                }
            }),
        )
        .await;
    }

    /// Setup mock for copyMessage endpoint
    pub async fn mock_copy_message(&self, config: MockResponseConfig) {
        self.mount_endpoint(
            "copyMessage",
            config,
            json!({
                "ok": true,
                "result": {
                    "message_id": 777
                }
            }),
        )
        .await;
    }

    /// Setup mock for sendPoll endpoint
    pub async fn mock_send_poll(&self, config: MockResponseConfig) {
        self.mount_endpoint(
            "sendPoll",
            config,
            json!({
                "ok": true,
                "result": {
                    "message_id": 778,
                    "from": test_bot_user_json(),
                    "chat": {
                        "id": -1001234567890_i64,
                        "title": "Test Group",
                        "type": "supergroup"
                    },
                    "date": 1640995200,
                    "poll": {
                        "id": "poll-1",
                        "question": "Test poll?",
                        "options": [
                            {"text": "Yes", "voter_count": 0},
                            {"text": "No", "voter_count": 0}
                        ],
                        "total_voter_count": 0,
                        "is_closed": false,
                        "is_anonymous": true,
                        "type": "regular",
                        "allows_multiple_answers": false
                    }
                }
            }),
        )
        .await;
    }

    /// Setup mock for answerCallbackQuery endpoint
    pub async fn mock_answer_callback_query(&self, config: MockResponseConfig) {
        self.mount_endpoint(
            "answerCallbackQuery",
            config,
            json!({
                "ok": true,
                "result": true
            }),
        )
        .await;
    }

    /// Setup mock for deleteMessage endpoint
    pub async fn mock_delete_message(&self, config: MockResponseConfig) {
        self.mount_endpoint(
            "deleteMessage",
            config,
            json!({
                "ok": true,
                "result": true
            }),
        )
        .await;
    }

    /// Setup mock for getChat endpoint resolving to a private chat with the
    /// given username
    pub async fn mock_get_chat(&self, config: MockResponseConfig, username: Option<&str>) {
        let mut chat = json!({
            "id": test_user_id(),
            "type": "private",
            "first_name": "Test",
            "accent_color_id": 0,
            "max_reaction_count": 11
        });
        if let Some(username) = username {
            chat.as_object_mut()
                .unwrap()
                .insert("username".to_string(), json!(username));
        }

        self.mount_endpoint(
            "getChat",
            config,
            json!({
                "ok": true,
                "result": chat
            }),
        )
        .await;
    }

    /// Setup all common mocks with default success responses
    pub async fn setup_default_mocks(&self) {
        let config = MockResponseConfig::default();

        self.mock_send_message(config.clone()).await;
        self.mock_copy_message(config.clone()).await;
        self.mock_send_poll(config.clone()).await;
        self.mock_answer_callback_query(config.clone()).await;
        self.mock_delete_message(config).await;
    }

    /// Count the calls a specific endpoint received
    pub async fn endpoint_calls(&self, endpoint: &str) -> usize {
        let received_requests = self.server.received_requests().await.unwrap();
        let suffix = format!("/{}", endpoint.to_ascii_lowercase());
        received_requests
            .iter()
            .filter(|req| req.url.path().to_ascii_lowercase().ends_with(&suffix))
            .count()
    }

    /// Verify that a specific endpoint was called an exact number of times
    pub async fn verify_endpoint_called(&self, endpoint: &str, times: usize) {
        let calls = self.endpoint_calls(endpoint).await;
        assert_eq!(
            calls, times,
            "Expected {} calls to {}, but got {}",
            times, endpoint, calls
        );
    }
}

fn test_bot_user_json() -> Value {
    json!({
        "id": 12345,
        "is_bot": true,
        "first_name": "TestBot",
        "username": "test_bot"
    })
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create test user ID
pub fn test_user_id() -> i64 {
    987654321
}
