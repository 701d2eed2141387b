//! Configuration
//!
//! Figment-merged configuration: defaults, global file, project file,
//! then `COPYSMITH_*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{Config, SessionConfig};
