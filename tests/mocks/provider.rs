//! Mock upstream provider for testing
//!
//! Provides wiremock-based mocks for the OpenAI-compatible chat completions
//! endpoint, in both streaming (SSE) and buffered form.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::mocks::provider::MockProvider;
//!
//! #[tokio::test]
//! async fn test_with_mock_provider() {
//!     let upstream = MockProvider::start().await;
//!     upstream.mock_chat_stream_success("data: {...}\n\n").await;
//!     // Point the app's provider base URLs at upstream.uri()
//! }
//! ```

use wiremock::{
    matchers::{header_exists, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock upstream provider server wrapper
pub struct MockProvider {
    server: MockServer,
}

impl MockProvider {
    /// Start a new mock provider server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Mock a successful streaming chat completion with a raw SSE body
    pub async fn mock_chat_stream_success(&self, sse_body: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header_exists("Authorization"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(sse_body)
                    .insert_header("Content-Type", "text/event-stream")
                    .insert_header("Cache-Control", "no-cache"),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a successful buffered chat completion response
    pub async fn mock_chat_completion_success(&self, response: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response))
            .mount(&self.server)
            .await;
    }

    /// Mock an error response with a verbatim body
    pub async fn mock_chat_error(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_string(body)
                    .insert_header("Content-Type", "application/json"),
            )
            .mount(&self.server)
            .await;
    }

    /// All requests the mock server has received so far
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server
            .received_requests()
            .await
            .expect("request recording should be enabled")
    }
}

/// Factory for provider-framed SSE test bodies
pub struct ProviderTestData;

impl ProviderTestData {
    /// A small provider stream that spells "Hello" across two deltas,
    /// terminated by the provider's own [DONE] marker
    pub fn hello_stream() -> String {
        concat!(
            "data: {\"choices\":[{\"delta\":{\"content\":\"He\"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"llo\"}}]}\n\n",
            "data: [DONE]\n\n",
        )
        .to_string()
    }

    /// A buffered chat completion response body
    pub fn simple_completion(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-test123",
            "object": "chat.completion",
            "created": 1706745600,
            "model": "llama-3.1-8b-instant",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": content
                    },
                    "finish_reason": "stop"
                }
            ],
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": 8,
                "total_tokens": 18
            }
        })
    }
}
