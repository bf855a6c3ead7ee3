//! Error types for Courier
//!
//! This module defines custom error types used throughout the application.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream error{}", fmt_status(.status))]
    Upstream {
        status: Option<u16>,
        body: Option<String>,
    },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

fn fmt_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" {}", s)).unwrap_or_default()
}

/// Error response body for non-upstream failures
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Wire shape for upstream failures, shared with the in-stream diagnostic
/// frame so clients parse one format on both paths.
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamErrorBody {
    pub error: &'static str,
    pub status: Option<u16>,
    pub body: Option<String>,
}

impl UpstreamErrorBody {
    pub fn new(status: Option<u16>, body: Option<String>) -> Self {
        Self {
            error: "upstream_error",
            status,
            body,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream failures use the relay wire shape; the rest use the
        // standard error envelope.
        match self {
            AppError::Upstream { status, body } => (
                StatusCode::BAD_GATEWAY,
                Json(UpstreamErrorBody::new(status, body)),
            )
                .into_response(),
            AppError::Http(e) => (
                StatusCode::BAD_GATEWAY,
                Json(UpstreamErrorBody::new(None, Some(e.to_string()))),
            )
                .into_response(),
            other => {
                let (status, code, message) = match &other {
                    AppError::UnknownProvider(name) => (
                        StatusCode::BAD_REQUEST,
                        "UNKNOWN_PROVIDER",
                        format!("Unknown provider: {}", name),
                    ),
                    AppError::ProviderNotConfigured(name) => (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "PROVIDER_NOT_CONFIGURED",
                        format!("Provider not configured: {}", name),
                    ),
                    AppError::BadRequest(msg) => {
                        (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone())
                    }
                    AppError::Json(_) => (
                        StatusCode::BAD_REQUEST,
                        "INVALID_JSON",
                        "Invalid JSON in request".to_string(),
                    ),
                    _ => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "Internal server error".to_string(),
                    ),
                };

                let body = ErrorResponse {
                    error: ErrorBody {
                        code: code.to_string(),
                        message,
                    },
                };

                (status, Json(body)).into_response()
            }
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
