//! Upstream HTTP client
//!
//! Executes the requests produced by the adapter: streaming
//! establishment for the relay path and a fully buffered call for the
//! fallback path. Establishment is fail-fast; a non-success status is
//! surfaced with the upstream's error body, never retried.

use std::pin::Pin;

use bytes::Bytes;
use futures::Stream;
use tracing::debug;

use crate::error::{AppError, AppResult};

use super::adapter::UpstreamRequest;

/// Stream type for upstream response bodies
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>;

/// Fully buffered upstream response, for the non-stream fallback path
#[derive(Debug)]
pub struct BufferedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Client for the providers' chat completions endpoints
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

impl UpstreamClient {
    /// Create a new upstream client over a shared connection pool
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Establish a streaming upstream call and hand back its body stream.
    ///
    /// A non-success status reads the error body and fails with
    /// `AppError::Upstream`; a transport failure surfaces as
    /// `AppError::Http`. The caller commits to streaming only after this
    /// returns Ok.
    pub async fn open_stream(&self, request: &UpstreamRequest) -> AppResult<ByteStream> {
        let response = self
            .client
            .post(&request.url)
            .bearer_auth(&request.api_key)
            .json(&request.body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status: Some(status),
                body: Some(text),
            });
        }

        debug!(url = %request.url, "Upstream stream established");
        Ok(Box::pin(response.bytes_stream()))
    }

    /// Issue the call and buffer the full response, whatever its status.
    ///
    /// The fallback endpoint relays provider errors verbatim, so unlike
    /// `open_stream` this does not treat non-success as a failure.
    pub async fn send_buffered(&self, request: &UpstreamRequest) -> AppResult<BufferedResponse> {
        let response = self
            .client
            .post(&request.url)
            .bearer_auth(&request.api_key)
            .json(&request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.bytes().await?;

        debug!(url = %request.url, status, body_len = body.len(), "Upstream buffered response");
        Ok(BufferedResponse {
            status,
            content_type,
            body,
        })
    }
}
