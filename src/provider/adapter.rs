//! Provider request adapter
//!
//! Pure mapping from the inbound chat request to the provider-specific
//! upstream request. No I/O, no retries, no mutation beyond field mapping;
//! the conversation is forwarded verbatim, system messages included
//! in-line.

use serde::{Deserialize, Serialize};

use super::ProviderConfig;

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One entry of the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

fn default_temperature() -> f64 {
    0.7
}

/// Inbound chat request body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Per-request provider hint; the configured default applies when absent
    #[serde(default)]
    pub provider: Option<String>,
}

/// JSON body sent to the provider's chat completions endpoint
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamBody {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub stream: bool,
}

/// Everything needed to issue one upstream HTTP call
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub url: String,
    pub api_key: String,
    pub body: UpstreamBody,
}

/// Build the upstream request for one provider.
///
/// `stream` is true on the relay path and false on the buffered fallback
/// path. The provider's default model is substituted when the client named
/// none.
pub fn build_upstream_request(
    provider: &ProviderConfig,
    request: &ChatRequest,
    stream: bool,
) -> UpstreamRequest {
    let model = request
        .model
        .clone()
        .unwrap_or_else(|| provider.default_model.clone());

    UpstreamRequest {
        url: format!("{}/chat/completions", provider.base_url),
        api_key: provider.api_key.clone(),
        body: UpstreamBody {
            model,
            messages: request.messages.clone(),
            temperature: request.temperature,
            stream,
        },
    }
}
