//! Configuration Types
//!
//! Configuration structures with sensible defaults. Supports global
//! (~/.config/copysmith/) and project (.copysmith/) level configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants;
use crate::provider::ProviderConfig;
use crate::types::{CopyError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Completion provider settings
    pub provider: ProviderConfig,

    /// Interactive session settings
    pub session: SessionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            provider: ProviderConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `CopyError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.provider.timeout_secs == 0 {
            return Err(CopyError::Config(
                "Provider timeout_secs must be greater than 0".to_string(),
            ));
        }

        if let Some(api_base) = &self.provider.api_base {
            Url::parse(api_base).map_err(|e| {
                CopyError::Config(format!("Invalid provider api_base '{}': {}", api_base, e))
            })?;
        }

        if self.session.default_language.trim().is_empty() {
            return Err(CopyError::Config(
                "Session default_language must not be blank".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Session Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Language selected before the user picks one.
    pub default_language: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_language: constants::session::DEFAULT_LANGUAGE.to_string(),
        }
    }
}
