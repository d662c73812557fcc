//! # Template Model
//!
//! A named, independently selectable bundle of detector weightings, scoring
//! rules and acceptance ranges. The device switches behavior by pointing its
//! base settings at a different template id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::detector::DetectorConfig;
use super::score::ScoreConfig;

/// One grading template.
///
/// Detector keys are unique display names (`weight`, `water`, ...); the map
/// is ordered so validation output is deterministic regardless of the order
/// the caller assembled it in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Authoritative key, unique across the owning template set.
    pub id: String,

    /// Display name; uniqueness is cosmetic and enforced only as a warning.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub scores: ScoreConfig,

    #[serde(default)]
    pub detectors: BTreeMap<String, DetectorConfig>,
}

impl Template {
    /// A template is live when it can actually route product somewhere:
    /// score-based grading is enabled, or at least one detector carries a
    /// positive weight.
    pub fn is_live(&self) -> bool {
        self.scores.enabled
            || self
                .detectors
                .values()
                .any(|d| d.parsed_weight().is_some_and(|w| w > 0.0))
    }
}
