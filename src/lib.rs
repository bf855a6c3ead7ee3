//! Courier - Streaming chat relay for OpenAI-compatible LLM providers
//!
//! This library provides the core functionality for the Courier relay
//! server. It accepts chat conversations over HTTP, forwards them to a
//! configured upstream provider, and streams the incrementally generated
//! response back to the client.

pub mod config;
pub mod error;
pub mod provider;
pub mod relay;
pub mod routes;

use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::provider::{ProviderRegistry, UpstreamClient};
pub use crate::relay::RelaySession;

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    /// Read-only provider table, built once at startup
    pub registry: ProviderRegistry,
    /// Upstream HTTP client over a shared connection pool
    pub upstream: UpstreamClient,
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Connection pooling for upstream calls. No overall request timeout:
        // it would cut off long generations mid-stream; stalls are bounded
        // by the bridge's idle timeout instead.
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()?;

        let registry = ProviderRegistry::from_config(&config);
        let upstream = UpstreamClient::new(http_client);

        Ok(Self {
            config,
            registry,
            upstream,
            start_time: Instant::now(),
        })
    }
}
