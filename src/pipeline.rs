//! Content Pipeline
//!
//! Orchestrates one generation: template lookup, prompt construction,
//! a single provider call, post-processing, and platform-length
//! truncation. The first failure at any step aborts the operation and
//! propagates; there are no retries.

use tracing::{debug, info};

use crate::constants;
use crate::prompt::PromptPair;
use crate::provider::{self, SamplingParams, SharedProvider};
use crate::template::TemplateRegistry;
use crate::types::{Artifact, CampaignRequest, Result};

pub struct ContentPipeline {
    registry: TemplateRegistry,
    provider: SharedProvider,
    sampling: SamplingParams,
}

impl ContentPipeline {
    pub fn new(provider: SharedProvider) -> Result<Self> {
        Ok(Self {
            registry: TemplateRegistry::builtin()?,
            provider,
            sampling: SamplingParams::default(),
        })
    }

    pub fn with_registry(provider: SharedProvider, registry: TemplateRegistry) -> Self {
        Self {
            registry,
            provider,
            sampling: SamplingParams::default(),
        }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Produce one artifact for the request.
    pub async fn generate(&self, request: &CampaignRequest) -> Result<Artifact> {
        let template = self.registry.lookup(&request.campaign_type)?;
        let language = request.effective_language();

        info!(
            campaign_type = %request.campaign_type,
            platform = %request.platform,
            language = %language,
            "generating content"
        );

        let prompt = PromptPair::build(
            template,
            &request.params(),
            language,
            request.system_prompt.as_deref(),
            request.feedback.as_deref(),
        )?;

        let raw = self.provider.complete(&prompt, &self.sampling).await?;
        let mut content = provider::postprocess(&raw);

        if let Some(limit) = constants::platform::limit(&request.platform) {
            content = truncate_chars(content, limit);
            debug!(limit, "applied platform truncation");
        }

        Ok(Artifact::new(content, language))
    }
}

/// Hard truncation to at most `limit` characters. No ellipsis, no
/// word-boundary awareness; this mirrors the platform's character
/// ceiling, not its semantic integrity.
fn truncate_chars(text: String, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text,
    }
}
