//! Health check endpoint
//!
//! Reports which provider keys are configured, with a short prefix of each
//! key so a misconfigured environment is recognizable without leaking the
//! credential.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    pub has_groq_key: bool,
    pub groq_prefix: Option<String>,
    pub has_xai_key: bool,
    pub xai_prefix: Option<String>,
}

fn key_prefix(key: Option<&str>, len: usize) -> Option<String> {
    key.map(|k| k.chars().take(len).collect())
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let groq_key = state.config.groq.api_key.as_deref();
    let xai_key = state.config.xai.api_key.as_deref();

    Json(HealthResponse {
        ok: true,
        has_groq_key: groq_key.is_some(),
        groq_prefix: key_prefix(groq_key, 4),
        has_xai_key: xai_key.is_some(),
        xai_prefix: key_prefix(xai_key, 3),
    })
}
