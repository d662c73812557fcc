//! # Change-Impact Assessment
//!
//! Diffs a proposed base-settings update against the current settings and
//! template set, and classifies how risky committing it would be. The caller
//! (typically a settings form) decides whether to proceed, block or require
//! confirmation based on the classification; the engine only reports.

use serde::{Deserialize, Serialize};

use crate::config::ValidationPolicy;
use crate::models::{BaseSettings, BaseSettingsPatch, Template};

/// Coarse risk classification for a proposed settings change.
///
/// Ordered so that assessment steps can only raise the level, never lower
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

/// Outcome of an impact assessment: the classification plus human-readable
/// change lines and recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub impact: ImpactLevel,
    pub changes: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ImpactAssessment {
    fn none() -> Self {
        Self {
            impact: ImpactLevel::Low,
            changes: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    fn raise(&mut self, level: ImpactLevel) {
        self.impact = self.impact.max(level);
    }
}

/// Assess the impact of a partial settings update.
///
/// Steps run in a fixed order and each can only raise the classification:
/// switching the active template is always high impact; offset changes are
/// low unless the delta magnitude crosses the policy threshold, which makes
/// them at least medium. A patch touching nothing yields a low-impact,
/// empty assessment.
pub fn assess_impact(
    old: &BaseSettings,
    patch: &BaseSettingsPatch,
    templates: &[Template],
    policy: &ValidationPolicy,
) -> ImpactAssessment {
    let mut assessment = ImpactAssessment::none();

    if let Some(new_id) = patch.current_template_id.as_deref() {
        if new_id != old.current_template_id {
            assessment.changes.push(format!(
                "active template: '{}' -> '{}'",
                template_display(templates, &old.current_template_id),
                template_display(templates, new_id)
            ));
            assessment.raise(ImpactLevel::High);
            assessment
                .recommendations
                .push("back up the configuration before switching templates".to_string());
        }
    }

    if let Some(new_weight) = patch.weight_offset {
        if new_weight != old.weight_offset {
            let delta = new_weight - old.weight_offset;
            assessment.changes.push(format!(
                "weight offset: {} -> {} ({:+})",
                old.weight_offset, new_weight, delta
            ));
            if delta.abs() > policy.weight_delta_medium {
                assessment.raise(ImpactLevel::Medium);
                assessment.recommendations.push(
                    "large weight offset change may affect grading precision; re-verify calibration"
                        .to_string(),
                );
            }
        }
    }

    if let Some(new_water) = patch.water_offset {
        if new_water != old.water_offset {
            let delta = new_water - old.water_offset;
            assessment.changes.push(format!(
                "water offset: {} -> {} ({:+})",
                old.water_offset, new_water, delta
            ));
            if delta.abs() > policy.water_delta_medium {
                assessment.raise(ImpactLevel::Medium);
                assessment.recommendations.push(
                    "large water offset change may affect grading precision; re-verify calibration"
                        .to_string(),
                );
            }
        }
    }

    tracing::debug!(
        impact = ?assessment.impact,
        changes = assessment.changes.len(),
        "settings change assessed"
    );
    assessment
}

/// Resolve a template's display name, falling back to the id when the
/// template is unknown or its name is blank.
fn template_display<'a>(templates: &'a [Template], id: &'a str) -> &'a str {
    templates
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.name.as_str())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> ValidationPolicy {
        ValidationPolicy::default()
    }

    fn settings(id: &str, weight: f64, water: f64) -> BaseSettings {
        BaseSettings {
            current_template_id: id.to_string(),
            weight_offset: weight,
            water_offset: water,
        }
    }

    fn template(id: &str, name: &str) -> Template {
        Template {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_patch_is_low_impact_and_empty() {
        let assessment = assess_impact(
            &settings("A", 0.0, 0.0),
            &BaseSettingsPatch::default(),
            &[template("A", "First")],
            &policy(),
        );
        assert_eq!(assessment.impact, ImpactLevel::Low);
        assert!(assessment.changes.is_empty());
        assert!(assessment.recommendations.is_empty());
    }

    #[test]
    fn template_switch_is_high_impact_with_backup_recommendation() {
        let patch = BaseSettingsPatch {
            current_template_id: Some("B".to_string()),
            ..Default::default()
        };
        let templates = vec![template("A", "WaterFirst"), template("B", "WeightOnly")];
        let assessment = assess_impact(&settings("A", 0.0, 0.0), &patch, &templates, &policy());

        assert_eq!(assessment.impact, ImpactLevel::High);
        assert_eq!(
            assessment.changes,
            vec!["active template: 'WaterFirst' -> 'WeightOnly'"]
        );
        assert!(!assessment.recommendations.is_empty());
        assert!(assessment.recommendations[0].contains("back up"));
    }

    #[test]
    fn unknown_template_names_fall_back_to_ids() {
        let patch = BaseSettingsPatch {
            current_template_id: Some("Z".to_string()),
            ..Default::default()
        };
        let assessment = assess_impact(&settings("A", 0.0, 0.0), &patch, &[], &policy());
        assert_eq!(assessment.changes, vec!["active template: 'A' -> 'Z'"]);
    }

    #[test]
    fn same_template_id_is_not_a_change() {
        let patch = BaseSettingsPatch {
            current_template_id: Some("A".to_string()),
            ..Default::default()
        };
        let assessment = assess_impact(
            &settings("A", 0.0, 0.0),
            &patch,
            &[template("A", "First")],
            &policy(),
        );
        assert_eq!(assessment.impact, ImpactLevel::Low);
        assert!(assessment.changes.is_empty());
    }

    #[test]
    fn small_weight_offset_change_stays_low() {
        let patch = BaseSettingsPatch {
            weight_offset: Some(5.0),
            ..Default::default()
        };
        let assessment = assess_impact(&settings("A", 0.0, 0.0), &patch, &[], &policy());
        assert_eq!(assessment.impact, ImpactLevel::Low);
        assert_eq!(assessment.changes, vec!["weight offset: 0 -> 5 (+5)"]);
        assert!(assessment.recommendations.is_empty());
    }

    #[test]
    fn large_weight_offset_change_is_medium() {
        let patch = BaseSettingsPatch {
            weight_offset: Some(15.0),
            ..Default::default()
        };
        let assessment = assess_impact(&settings("A", 0.0, 0.0), &patch, &[], &policy());
        assert_eq!(assessment.impact, ImpactLevel::Medium);
        assert_eq!(assessment.changes, vec!["weight offset: 0 -> 15 (+15)"]);
        assert_eq!(assessment.recommendations.len(), 1);
    }

    #[test]
    fn negative_deltas_report_their_sign() {
        let patch = BaseSettingsPatch {
            water_offset: Some(-8.0),
            ..Default::default()
        };
        let assessment = assess_impact(&settings("A", 0.0, 0.0), &patch, &[], &policy());
        assert_eq!(assessment.impact, ImpactLevel::Medium);
        assert_eq!(assessment.changes, vec!["water offset: 0 -> -8 (-8)"]);
    }

    #[test]
    fn impact_is_never_lowered_by_later_steps() {
        let patch = BaseSettingsPatch {
            current_template_id: Some("B".to_string()),
            weight_offset: Some(1.0),
            water_offset: Some(1.0),
        };
        let templates = vec![template("A", "First"), template("B", "Second")];
        let assessment = assess_impact(&settings("A", 0.0, 0.0), &patch, &templates, &policy());
        assert_eq!(assessment.impact, ImpactLevel::High);
        assert_eq!(assessment.changes.len(), 3);
    }

    #[test]
    fn medium_threshold_is_exclusive() {
        // A delta of exactly the threshold stays low.
        let patch = BaseSettingsPatch {
            water_offset: Some(5.0),
            ..Default::default()
        };
        let assessment = assess_impact(&settings("A", 0.0, 0.0), &patch, &[], &policy());
        assert_eq!(assessment.impact, ImpactLevel::Low);
    }
}
