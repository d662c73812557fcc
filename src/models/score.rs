//! # Scoring Rule Models
//!
//! Templates may grade by a weighted score instead of per-detector ranges.
//! Each rule maps an output-channel combination to the minimum score that
//! routes there.

use serde::{Deserialize, Serialize};

/// One scoring rule: an output-channel combination and its score threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRule {
    /// Primary output channel.
    pub out: String,

    /// Alternate output channel, used to balance load across two lanes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subout: Option<String>,

    pub score: f64,
}

impl ScoreRule {
    /// Key identifying the `(out, subout)` combination for duplicate checks.
    pub fn channel_key(&self) -> String {
        format!("{}-{}", self.out, self.subout.as_deref().unwrap_or(""))
    }
}

/// A template's scoring configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Whether score-based grading is active for the owning template.
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub rules: Vec<ScoreRule>,
}
