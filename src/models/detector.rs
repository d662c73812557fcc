//! # Detector Configuration Model
//!
//! One measurement channel within a template. The device document stores the
//! importance weight and value ceiling as decimal text attributes (`wg`,
//! `max`), so both fields stay strings here and are parsed at validation
//! time.

use serde::{Deserialize, Serialize};

use super::level::LevelRange;

/// Per-detector configuration: importance weight, optional value ceiling and
/// the two acceptance-range lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Importance weight as decimal text, expected to parse into `[0, 100]`.
    #[serde(default)]
    pub weight: String,

    /// Optional value ceiling as decimal text; when present and non-empty it
    /// must parse to a positive number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling: Option<String>,

    /// Ranges classifying a reading as defective, checked first by the
    /// detection pipeline.
    #[serde(default)]
    pub bad_levels: Vec<LevelRange>,

    /// Ranges classifying a reading as acceptable.
    #[serde(default)]
    pub good_levels: Vec<LevelRange>,
}

impl DetectorConfig {
    /// Parse the weight attribute, `None` when empty or not a number.
    pub fn parsed_weight(&self) -> Option<f64> {
        let raw = self.weight.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>().ok().filter(|w| w.is_finite())
    }

    /// Parse the ceiling attribute, `None` when absent, empty or not a
    /// number.
    pub fn parsed_ceiling(&self) -> Option<f64> {
        let raw = self.ceiling.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>().ok().filter(|c| c.is_finite())
    }

    /// True when neither level list contains a range.
    pub fn has_no_levels(&self) -> bool {
        self.bad_levels.is_empty() && self.good_levels.is_empty()
    }
}
