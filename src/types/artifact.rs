//! Generated Artifact
//!
//! One piece of generated text output by the pipeline for a single
//! request. Immutable once produced; the refinement session only ever
//! replaces or evicts whole artifacts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    /// Trimmed, quote-stripped, platform-truncated text.
    pub content: String,
    /// Language the artifact was requested in.
    pub language: String,
    /// When the artifact was produced, for history display.
    pub created_at: DateTime<Utc>,
}

impl Artifact {
    pub fn new(content: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            language: language.into(),
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
