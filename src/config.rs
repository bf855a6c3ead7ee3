//! Configuration management for Courier
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

use crate::provider::ProviderId;

/// Settings for one upstream provider
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Bearer token for the provider API (None when not configured)
    pub api_key: Option<String>,
    /// Base URL of the provider's OpenAI-compatible API
    pub base_url: String,
    /// Model used when the client does not name one
    pub default_model: String,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Provider used when a request carries no provider hint
    pub default_provider: ProviderId,
    /// Seconds of upstream silence before a streaming relay is abandoned
    pub idle_timeout_secs: u64,

    /// Groq provider settings
    pub groq: ProviderSettings,
    /// xAI provider settings
    pub xai: ProviderSettings,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("COURIER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("COURIER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid COURIER_PORT")?,

            default_provider: env::var("COURIER_DEFAULT_PROVIDER")
                .unwrap_or_else(|_| "groq".to_string())
                .parse()
                .context("Invalid COURIER_DEFAULT_PROVIDER")?,
            idle_timeout_secs: env::var("COURIER_IDLE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .context("Invalid COURIER_IDLE_TIMEOUT_SECS")?,

            groq: ProviderSettings {
                api_key: env::var("GROQ_API_KEY").ok(),
                base_url: env::var("GROQ_BASE_URL")
                    .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
                default_model: env::var("GROQ_DEFAULT_MODEL")
                    .unwrap_or_else(|_| "llama-3.1-8b-instant".to_string()),
            },
            xai: ProviderSettings {
                api_key: env::var("XAI_API_KEY").ok(),
                base_url: env::var("XAI_BASE_URL")
                    .unwrap_or_else(|_| "https://api.x.ai/v1".to_string()),
                default_model: env::var("XAI_DEFAULT_MODEL")
                    .unwrap_or_else(|_| "grok-2-latest".to_string()),
            },
        })
    }

    /// Create a config pointing every provider at one base URL, for tests
    /// that stand up a mock upstream.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn for_testing(upstream_url: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            default_provider: ProviderId::Groq,
            idle_timeout_secs: 5,
            groq: ProviderSettings {
                api_key: Some("test-groq-key".to_string()),
                base_url: upstream_url.to_string(),
                default_model: "llama-3.1-8b-instant".to_string(),
            },
            xai: ProviderSettings {
                api_key: Some("test-xai-key".to_string()),
                base_url: upstream_url.to_string(),
                default_model: "grok-2-latest".to_string(),
            },
        }
    }
}
