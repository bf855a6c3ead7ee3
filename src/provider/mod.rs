//! Upstream provider registry
//!
//! Maps a per-request provider hint to the read-only configuration of one of
//! the supported OpenAI-compatible chat providers. Provider selection is
//! per-request with a configured default; there is no process-wide mutable
//! "active provider" switch.

pub mod adapter;
pub mod client;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, AppResult};

pub use adapter::{build_upstream_request, ChatMessage, ChatRequest, Role, UpstreamRequest};
pub use client::{BufferedResponse, ByteStream, UpstreamClient};

/// Identifier of a supported upstream provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Groq,
    Xai,
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::Groq => write!(f, "groq"),
            ProviderId::Xai => write!(f, "xai"),
        }
    }
}

impl FromStr for ProviderId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "groq" => Ok(ProviderId::Groq),
            "xai" => Ok(ProviderId::Xai),
            other => Err(AppError::UnknownProvider(other.to_string())),
        }
    }
}

/// Read-only configuration of one provider, resolved at startup
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub id: ProviderId,
    pub base_url: String,
    pub api_key: String,
    pub default_model: String,
}

/// Table of configured providers plus the default selection
///
/// Built once from [`Config`] and shared read-only across sessions. Providers
/// without an API key are absent from the table and resolve to an error.
#[derive(Debug)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderId, ProviderConfig>,
    default: ProviderId,
}

impl ProviderRegistry {
    /// Build the registry from configuration
    pub fn from_config(config: &Config) -> Self {
        let mut providers = HashMap::new();

        let settings = [
            (ProviderId::Groq, &config.groq),
            (ProviderId::Xai, &config.xai),
        ];

        for (id, s) in settings {
            if let Some(ref api_key) = s.api_key {
                providers.insert(
                    id,
                    ProviderConfig {
                        id,
                        base_url: s.base_url.clone(),
                        api_key: api_key.clone(),
                        default_model: s.default_model.clone(),
                    },
                );
            }
        }

        Self {
            providers,
            default: config.default_provider,
        }
    }

    /// Resolve a per-request provider hint to a configuration.
    ///
    /// `None` selects the configured default. An id that is not a supported
    /// provider fails with `UnknownProvider`; a supported provider without an
    /// API key fails with `ProviderNotConfigured`. Both are reported before
    /// any upstream call is made.
    pub fn resolve(&self, hint: Option<&str>) -> AppResult<&ProviderConfig> {
        let id = match hint {
            Some(name) => name.parse()?,
            None => self.default,
        };

        self.providers
            .get(&id)
            .ok_or_else(|| AppError::ProviderNotConfigured(id.to_string()))
    }
}
