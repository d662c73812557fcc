//! # Base Settings Model
//!
//! The global settings block: the active template selection plus the two
//! calibration offsets applied to raw measurements.

use serde::{Deserialize, Serialize};

/// The device's global settings block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseSettings {
    /// Id of the template the device is currently grading with.
    pub current_template_id: String,

    /// Calibration offset added to raw weight readings.
    #[serde(default)]
    pub weight_offset: f64,

    /// Calibration offset added to raw water readings.
    #[serde(default)]
    pub water_offset: f64,
}

impl Default for BaseSettings {
    fn default() -> Self {
        Self {
            current_template_id: String::new(),
            weight_offset: 0.0,
            water_offset: 0.0,
        }
    }
}

/// A partial settings update: only the fields being changed are present.
///
/// This is the shape an operator-facing settings form submits before the
/// change is committed; [`crate::impact::assess_impact`] diffs it against the
/// current [`BaseSettings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseSettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_template_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_offset: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_offset: Option<f64>,
}

impl BaseSettingsPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.current_template_id.is_none()
            && self.weight_offset.is_none()
            && self.water_offset.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_deserializes_with_missing_fields() {
        let patch: BaseSettingsPatch =
            serde_json::from_str(r#"{"weight_offset": 3.5}"#).unwrap();
        assert_eq!(patch.weight_offset, Some(3.5));
        assert!(patch.current_template_id.is_none());
        assert!(patch.water_offset.is_none());
        assert!(!patch.is_empty());
    }

    #[test]
    fn empty_patch_is_empty() {
        let patch: BaseSettingsPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }
}
