//! One-shot generation command.
//!
//! The CLI equivalent of the generation endpoint: builds one request,
//! runs the pipeline once, prints the artifact as text or as a
//! `{"generated_content": ...}` JSON object.

use serde_json::json;

use crate::config::ConfigLoader;
use crate::pipeline::ContentPipeline;
use crate::provider::create_provider;
use crate::types::{CampaignRequest, Result};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub campaign_type: String,
    pub tone: String,
    pub platform: String,
    pub topic: String,
    pub audience: String,
    pub language: Option<String>,
    pub system_prompt: Option<String>,
    pub feedback: Option<String>,
    pub json: bool,
}

impl GenerateOptions {
    pub fn into_request(self, default_language: &str) -> CampaignRequest {
        CampaignRequest {
            campaign_type: self.campaign_type,
            tone: self.tone,
            platform: self.platform,
            topic: self.topic,
            audience: self.audience,
            language: self.language.unwrap_or_else(|| default_language.to_string()),
            system_prompt: self.system_prompt,
            feedback: self.feedback,
        }
    }
}

pub async fn run(options: GenerateOptions) -> Result<()> {
    let config = ConfigLoader::load()?;
    let provider = create_provider(&config.provider)?;
    let pipeline = ContentPipeline::new(provider)?;

    let json_output = options.json;
    let request = options.into_request(&config.session.default_language);
    let artifact = pipeline.generate(&request).await?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "generated_content": artifact.content }))?
        );
    } else {
        println!("{}", artifact.content);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_language_applied() {
        let options = GenerateOptions {
            campaign_type: "ppc_ads".to_string(),
            tone: "urgent".to_string(),
            platform: "Twitter".to_string(),
            topic: "winter sale".to_string(),
            audience: String::new(),
            language: None,
            system_prompt: None,
            feedback: None,
            json: false,
        };
        let request = options.into_request("Spanish");
        assert_eq!(request.language, "Spanish");
    }

    #[test]
    fn test_options_explicit_language_wins() {
        let options = GenerateOptions {
            campaign_type: "ppc_ads".to_string(),
            tone: String::new(),
            platform: String::new(),
            topic: String::new(),
            audience: String::new(),
            language: Some("French".to_string()),
            system_prompt: None,
            feedback: None,
            json: false,
        };
        let request = options.into_request("English");
        assert_eq!(request.language, "French");
    }
}
