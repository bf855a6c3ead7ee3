//! Common test utilities for Courier
//!
//! Shared fixtures used across the integration tests: a full app instance
//! wired to a wiremock upstream.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;

use courier::{routes, AppState, Config};

use crate::mocks::provider::MockProvider;

/// A running app instance with every provider pointed at one mock upstream
pub struct TestApp {
    pub server: TestServer,
    pub upstream: MockProvider,
}

impl TestApp {
    /// Stand up the mock upstream and the real router around it
    pub async fn new() -> Self {
        let upstream = MockProvider::start().await;

        let config = Config::for_testing(&upstream.uri());
        let state = Arc::new(AppState::new(config).expect("Failed to build app state"));
        let app = routes::create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, upstream }
    }
}

/// Sample request data for tests
pub mod test_data {
    use serde_json::json;

    /// Minimal valid chat request
    pub fn simple_chat_request() -> serde_json::Value {
        json!({
            "messages": [
                {
                    "role": "user",
                    "content": "hi"
                }
            ],
            "model": "llama-3.1-8b-instant"
        })
    }

    /// Chat request with a system message and no explicit model
    pub fn system_chat_request() -> serde_json::Value {
        json!({
            "messages": [
                {
                    "role": "system",
                    "content": "You are terse."
                },
                {
                    "role": "user",
                    "content": "hi"
                }
            ]
        })
    }

    /// Chat request naming a provider that does not exist
    pub fn unknown_provider_request() -> serde_json::Value {
        json!({
            "messages": [
                {
                    "role": "user",
                    "content": "hi"
                }
            ],
            "provider": "mistral"
        })
    }
}
