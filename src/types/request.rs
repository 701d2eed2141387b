//! Campaign Request Types
//!
//! The request payload accepted by the content pipeline, using the same
//! field names as the JSON generation API (`campaign_type`,
//! `system_prompt`, ...). Parameter fields default to empty strings;
//! an empty value is acceptable, a missing template binding is not.

use serde::{Deserialize, Serialize};

use crate::constants;

/// One content-generation request. Immutable once handed to the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignRequest {
    /// Must match a key in the template registry.
    pub campaign_type: String,
    pub tone: String,
    pub platform: String,
    pub topic: String,
    pub audience: String,
    /// Target output language. Defaults to English.
    pub language: String,
    /// Extra instructions appended to the default system message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    /// Accumulated user feedback, space-joined most-recent-first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl Default for CampaignRequest {
    fn default() -> Self {
        Self {
            campaign_type: String::new(),
            tone: String::new(),
            platform: String::new(),
            topic: String::new(),
            audience: String::new(),
            language: constants::session::DEFAULT_LANGUAGE.to_string(),
            system_prompt: None,
            feedback: None,
        }
    }
}

impl CampaignRequest {
    /// Target language with the English fallback applied.
    pub fn effective_language(&self) -> &str {
        if self.language.trim().is_empty() {
            constants::session::DEFAULT_LANGUAGE
        } else {
            &self.language
        }
    }

    /// The four fields bound to template slots.
    pub fn params(&self) -> TemplateParams {
        TemplateParams {
            tone: self.tone.clone(),
            platform: self.platform.clone(),
            topic: self.topic.clone(),
            audience: self.audience.clone(),
        }
    }
}

/// Values substituted into template slots.
///
/// Only these four names are legal slots; anything else is rejected when
/// the registry is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateParams {
    pub tone: String,
    pub platform: String,
    pub topic: String,
    pub audience: String,
}

impl TemplateParams {
    /// Resolve a slot name to its bound value.
    pub fn get(&self, slot: &str) -> Option<&str> {
        match slot {
            "tone" => Some(&self.tone),
            "platform" => Some(&self.platform),
            "topic" => Some(&self.topic),
            "audience" => Some(&self.audience),
            _ => None,
        }
    }
}
