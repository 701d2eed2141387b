//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Platform output limits
pub mod platform {
    /// Maximum output length in characters per platform.
    ///
    /// Mirrors each platform's hard character ceiling. Output for an
    /// unlisted platform is returned untruncated.
    pub const LIMITS: &[(&str, usize)] = &[
        ("linkedin", 1300),
        ("twitter", 280),
        ("facebook", 63206),
    ];

    /// Look up the character limit for a platform, case-insensitive.
    pub fn limit(name: &str) -> Option<usize> {
        let normalized = name.trim().to_lowercase();
        LIMITS
            .iter()
            .find(|(platform, _)| *platform == normalized)
            .map(|(_, limit)| *limit)
    }
}

/// Sampling parameters for the completion provider
///
/// Fixed for every request; tuned for short, varied marketing copy.
pub mod sampling {
    pub const TEMPERATURE: f32 = 0.6;
    pub const MAX_TOKENS: u32 = 180;
    pub const TOP_P: f32 = 0.9;
    pub const FREQUENCY_PENALTY: f32 = 0.2;
    pub const PRESENCE_PENALTY: f32 = 0.1;
}

/// Refinement session constants
pub mod session {
    /// Maximum number of artifacts kept in the rolling history.
    /// Oldest entries are evicted first (FIFO by insertion order).
    pub const HISTORY_CAP: usize = 5;

    /// Target language used before the user picks one.
    pub const DEFAULT_LANGUAGE: &str = "English";
}

/// HTTP/Network constants
pub mod network {
    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
}
