//! Copysmith - Template-Driven Marketing Copy Generator
//!
//! Renders a structured campaign request into a system/user prompt pair
//! via a fixed template registry, sends it to an OpenAI-compatible
//! completion API, post-processes the result, and supports iterative
//! refinement of the same content through an interactive session.
//!
//! ## Quick Start
//!
//! ```ignore
//! use copysmith::pipeline::ContentPipeline;
//! use copysmith::provider::{ProviderConfig, create_provider};
//! use copysmith::session::RefinementSession;
//! use copysmith::types::CampaignRequest;
//!
//! let provider = create_provider(&ProviderConfig::default())?;
//! let pipeline = ContentPipeline::new(provider)?;
//! let mut session = RefinementSession::new(pipeline);
//!
//! let request = CampaignRequest {
//!     campaign_type: "social_media".into(),
//!     tone: "casual".into(),
//!     platform: "LinkedIn".into(),
//!     topic: "spring launch".into(),
//!     ..Default::default()
//! };
//! let artifact = session.generate(request).await?;
//! session.improve("shorter, add a hashtag").await?;
//! session.translate("Spanish").await?;
//! ```
//!
//! ## Modules
//!
//! - [`template`]: campaign-type template registry and rendering
//! - [`prompt`]: system/user message construction
//! - [`provider`]: completion provider abstraction and post-processing
//! - [`pipeline`]: one-shot content generation
//! - [`session`]: the refinement state machine (history, feedback, diffs)
//! - [`config`]: figment-merged configuration

pub mod cli;
pub mod config;
pub mod constants;
pub mod pipeline;
pub mod prompt;
pub mod provider;
pub mod session;
pub mod template;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use config::{Config, ConfigLoader};
pub use pipeline::ContentPipeline;
pub use prompt::PromptPair;
pub use provider::{CompletionProvider, ProviderConfig, SamplingParams, SharedProvider};
pub use session::RefinementSession;
pub use template::{Template, TemplateRegistry};
pub use types::{Artifact, CampaignRequest, CopyError, Result, TemplateParams};
