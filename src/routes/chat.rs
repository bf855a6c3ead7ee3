//! Chat relay endpoints
//!
//! `POST /api/chat` relays a chat completion as a live event stream;
//! `POST /api/chat-nostream` buffers the full upstream response and returns
//! it verbatim, for diagnosing provider-side errors that streaming framing
//! would obscure.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    provider::{build_upstream_request, ChatRequest},
    relay::RelaySession,
    AppState,
};

/// Parse the inbound chat request body
async fn parse_request(request: axum::extract::Request) -> AppResult<ChatRequest> {
    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to read request body: {}", e)))?;

    serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))
}

/// Handle streaming chat relay requests
///
/// The streaming commit is deferred until the upstream call is established:
/// establishment failures still have the plain JSON error path, and the
/// in-stream diagnostic frame is reserved for failures after the commit
/// point (mid-stream drop, idle timeout).
pub async fn chat(
    State(state): State<Arc<AppState>>,
    request: axum::extract::Request,
) -> AppResult<Response> {
    let chat_request = parse_request(request).await?;
    let provider = state.registry.resolve(chat_request.provider.as_deref())?;
    let upstream_request = build_upstream_request(provider, &chat_request, true);

    info!(
        provider = %provider.id,
        model = %upstream_request.body.model,
        messages = chat_request.messages.len(),
        "Opening streaming relay"
    );

    let upstream = state.upstream.open_stream(&upstream_request).await?;

    let session = RelaySession::new(
        upstream,
        Duration::from_secs(state.config.idle_timeout_secs),
    );

    info!(
        session = %session.id(),
        provider = %provider.id,
        "Upstream established, streaming to client"
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .header(header::CONNECTION, "keep-alive")
        .header("X-Accel-Buffering", "no")
        .body(Body::from_stream(session.into_sse()))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build response: {}", e)))
}

/// Handle buffered fallback requests
///
/// The upstream status code and body are relayed verbatim, whatever they
/// are; no sentinel framing is added.
pub async fn chat_nostream(
    State(state): State<Arc<AppState>>,
    request: axum::extract::Request,
) -> AppResult<Response> {
    let chat_request = parse_request(request).await?;
    let provider = state.registry.resolve(chat_request.provider.as_deref())?;
    let upstream_request = build_upstream_request(provider, &chat_request, false);

    info!(
        provider = %provider.id,
        model = %upstream_request.body.model,
        messages = chat_request.messages.len(),
        "Forwarding buffered chat request"
    );

    let upstream = state.upstream.send_buffered(&upstream_request).await?;

    let status =
        StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = upstream
        .content_type
        .unwrap_or_else(|| "application/json".to_string());

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(upstream.body))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build response: {}", e)))
}
