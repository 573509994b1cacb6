//! Mock upstream providers for testing
//!
//! Provides wiremock-based stand-ins for:
//! - OpenAI: `POST /v1/chat/completions`, `GET /v1/models`
//! - Anthropic: `POST /v1/messages`
//!
//! Expectations are verified when the mock server is dropped.

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

use crate::common::constants;

/// Mock upstream server wrapper
pub struct MockUpstream {
    server: MockServer,
}

impl MockUpstream {
    /// Start a new mock upstream
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Requests the server has seen so far
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .expect("Request recording is enabled by default")
    }

    // =========================================================================
    // OpenAI
    // =========================================================================

    pub fn chat_completion_body() -> Value {
        json!({
            "id": "chatcmpl-test123",
            "object": "chat.completion",
            "created": 1706745600,
            "model": "gpt-4o",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": "Awareness post drafted."
                    },
                    "finish_reason": "stop"
                }
            ],
            "usage": {
                "prompt_tokens": 12,
                "completion_tokens": 4,
                "total_tokens": 16
            }
        })
    }

    /// Chat completion that only matches the proxy's bearer credential
    pub async fn mock_openai_chat_completion(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header(
                "authorization",
                format!("Bearer {}", constants::TEST_OPENAI_API_KEY).as_str(),
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Self::chat_completion_body())
                    .insert_header("x-request-id", "req_openai_123"),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Model list for GET requests
    pub async fn mock_openai_models(&self) {
        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "data": [
                    { "id": "gpt-4o", "object": "model", "created": 1706745600, "owned_by": "openai" }
                ]
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Upstream error response with a raw body
    pub async fn mock_error(&self, http_method: &str, route: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_raw(body.as_bytes().to_vec(), "application/json")
                    .insert_header("retry-after", "20"),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Catch-all that must never be hit
    pub async fn expect_no_requests(&self) {
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    // =========================================================================
    // Anthropic
    // =========================================================================

    pub fn message_body() -> Value {
        json!({
            "id": "msg_test123",
            "type": "message",
            "role": "assistant",
            "model": "claude-3-5-sonnet-20241022",
            "content": [{ "type": "text", "text": "Caption ready." }],
            "stop_reason": "end_turn",
            "usage": { "input_tokens": 10, "output_tokens": 3 }
        })
    }

    /// Messages endpoint that only matches the proxy's key and version
    pub async fn mock_anthropic_messages(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", constants::TEST_ANTHROPIC_API_KEY))
            .and(header("anthropic-version", "2023-06-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::message_body()))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Server-sent event stream, as returned for `"stream": true`
    pub async fn mock_anthropic_stream(&self, events: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(events.as_bytes().to_vec(), "text/event-stream"),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }
}
