//! Completion Provider Abstraction
//!
//! Narrow capability interface over the external chat-completion
//! service: two ordered messages in, one completion text out. Keeping
//! the seam this small lets the provider be swapped or stubbed without
//! touching pipeline logic.
//!
//! A pipeline invocation makes exactly one attempt; no retry lives at
//! this layer.

mod openai;

pub use openai::OpenAiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::constants;
use crate::prompt::PromptPair;
use crate::types::{CopyError, Result};

/// Fixed sampling configuration sent with every completion call.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: constants::sampling::TEMPERATURE,
            max_tokens: constants::sampling::MAX_TOKENS,
            top_p: constants::sampling::TOP_P,
            frequency_penalty: constants::sampling::FREQUENCY_PENALTY,
            presence_penalty: constants::sampling::PRESENCE_PENALTY,
        }
    }
}

/// Completion provider trait: system message first, user message second.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the two-message exchange and return the raw completion text.
    async fn complete(&self, prompt: &PromptPair, sampling: &SamplingParams) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;

    /// Check if the provider is reachable
    async fn health_check(&self) -> Result<bool>;
}

/// Shared provider handle for use across pipeline and CLI.
pub type SharedProvider = Arc<dyn CompletionProvider>;

/// Configuration for completion providers.
///
/// API keys are redacted in debug output and never serialized.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider backend name ("openai")
    pub provider: String,
    /// Model name (provider-specific)
    pub model: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// API key; falls back to the OPENAI_API_KEY env var
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL (for custom endpoints)
    pub api_base: Option<String>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: None,
            timeout_secs: constants::network::DEFAULT_TIMEOUT_SECS,
            api_key: None,
            api_base: None,
        }
    }
}

/// Create a shared provider from configuration.
pub fn create_provider(config: &ProviderConfig) -> Result<SharedProvider> {
    match config.provider.as_str() {
        "openai" => Ok(Arc::new(OpenAiProvider::new(config.clone())?)),
        other => Err(CopyError::Config(format!(
            "Unknown provider: {}. Supported: openai",
            other
        ))),
    }
}

// =============================================================================
// Post-processing
// =============================================================================

/// Trim whitespace, then peel one layer of surrounding double quotes and
/// one layer of surrounding single quotes.
///
/// Models occasionally wrap short copy in quotes despite instructions;
/// only a single symmetric layer is removed so quoted copy inside the
/// text survives.
pub fn postprocess(raw: &str) -> String {
    let trimmed = raw.trim();
    let peeled = strip_quote_layer(trimmed, '"');
    let peeled = strip_quote_layer(peeled, '\'');
    peeled.to_string()
}

fn strip_quote_layer(text: &str, quote: char) -> &str {
    let mut chars = text.chars();
    if text.chars().count() >= 2 && chars.next() == Some(quote) && chars.next_back() == Some(quote)
    {
        &text[quote.len_utf8()..text.len() - quote.len_utf8()]
    } else {
        text
    }
}

// =============================================================================
// Test Support
// =============================================================================
