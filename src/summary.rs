//! Read-only snapshot of a configuration, suitable for a status endpoint or
//! an operator dashboard. Summarizing never fails: unresolved references
//! degrade to sentinel values instead of errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{BaseSettings, Template};

/// Aggregate view over the base settings and the template set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSummary {
    pub active_template_id: String,
    pub active_template_name: String,
    pub template_count: usize,
    pub live_template_count: usize,
    pub scoring_enabled: bool,
    pub score_rule_count: usize,
    pub detector_count: usize,
    pub weight_offset: f64,
    pub water_offset: f64,
    pub generated_at: DateTime<Utc>,
}

/// Build a summary of the current configuration.
///
/// The `scoring_enabled`, `score_rule_count` and `detector_count` fields
/// describe the active template; when `current_template_id` does not match
/// any template they fall back to `false`, zero and zero, and the name is
/// reported as "unknown template". Offsets are echoed verbatim, even when
/// they would fail validation.
pub fn summarize(settings: &BaseSettings, templates: &[Template]) -> ConfigSummary {
    let active = templates
        .iter()
        .find(|t| t.id == settings.current_template_id);

    ConfigSummary {
        active_template_id: settings.current_template_id.clone(),
        active_template_name: active
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "unknown template".to_string()),
        template_count: templates.len(),
        live_template_count: templates.iter().filter(|t| t.is_live()).count(),
        scoring_enabled: active.map(|t| t.scores.enabled).unwrap_or(false),
        score_rule_count: active.map(|t| t.scores.rules.len()).unwrap_or(0),
        detector_count: active.map(|t| t.detectors.len()).unwrap_or(0),
        weight_offset: settings.weight_offset,
        water_offset: settings.water_offset,
        generated_at: Utc::now(),
    }
}
