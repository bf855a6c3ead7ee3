//! Health endpoint integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_reports_key_presence_and_prefixes() {
    let app = TestApp::new().await;

    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["ok"], true);
    assert_eq!(body["hasGroqKey"], true);
    // First 4 chars of "test-groq-key"
    assert_eq!(body["groqPrefix"], "test");
    assert_eq!(body["hasXaiKey"], true);
    // First 3 chars of "test-xai-key"
    assert_eq!(body["xaiPrefix"], "tes");
}
