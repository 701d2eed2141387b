//! Unified Error Type System
//!
//! Single error type (CopyError) for the entire application.
//!
//! All domain errors are terminal for the current operation: no local
//! recovery, no automatic retry. They propagate to the CLI boundary as a
//! human-readable message rather than a crash.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CopyError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// The request named a campaign type with no registered template.
    #[error("Unsupported campaign_type: {0}")]
    UnsupportedCampaignType(String),

    /// Template substitution referenced a slot with no bound parameter.
    /// Registries validate slot names at load time, so hitting this at
    /// render time indicates a template-authoring bug.
    #[error("Template render failed for '{campaign}': no value for slot '{slot}'")]
    TemplateRender { campaign: String, slot: String },

    /// The completion provider call failed for any reason: transport,
    /// authentication, rate limiting, or a malformed response. Surfaced
    /// after a single attempt; retry policy belongs to the caller.
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl CopyError {
    /// Create a provider error from an HTTP status and response body.
    pub fn provider_status(status: reqwest::StatusCode, body: &str) -> Self {
        Self::Provider(format!("completion API error ({}): {}", status, body))
    }
}

pub type Result<T> = std::result::Result<T, CopyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_campaign_type_display() {
        let err = CopyError::UnsupportedCampaignType("billboards".to_string());
        assert_eq!(err.to_string(), "Unsupported campaign_type: billboards");
    }

    #[test]
    fn test_template_render_display() {
        let err = CopyError::TemplateRender {
            campaign: "ppc_ads".to_string(),
            slot: "tone".to_string(),
        };
        assert!(err.to_string().contains("ppc_ads"));
        assert!(err.to_string().contains("'tone'"));
    }

    #[test]
    fn test_provider_status() {
        let err = CopyError::provider_status(
            reqwest::StatusCode::TOO_MANY_REQUESTS,
            "rate limit exceeded",
        );
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("rate limit exceeded"));
    }
}
