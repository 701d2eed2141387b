//! Core Types
//!
//! Request/artifact value types and the unified error type.

pub mod artifact;
pub mod error;
pub mod request;

pub use artifact::Artifact;
pub use error::{CopyError, Result};
pub use request::{CampaignRequest, TemplateParams};
