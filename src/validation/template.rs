//! Whole-template validation: identity, scoring rules, detectors and the
//! weight-sum policy.

use crate::config::ValidationPolicy;
use crate::models::Template;

use super::ValidationReport;
use super::detector::validate_detector;
use super::score_rules::validate_score_rules;

/// Validate one template.
///
/// The weight-sum check is advisory: a partial or disabled detector set is a
/// legitimate transitional state, so a sum other than the target produces a
/// warning naming the actual sum, never an error. Unparsable weights count
/// as 0 here; their own error was already recorded by the detector check.
pub fn validate_template(template: &Template, policy: &ValidationPolicy) -> ValidationReport {
    let mut report = ValidationReport::new();

    if template.id.trim().is_empty() {
        report.error("template id must not be empty");
    }
    if template.name.trim().is_empty() {
        report.error("template name must not be empty");
    }

    if template.scores.enabled && !template.scores.rules.is_empty() {
        report.merge(validate_score_rules(&template.scores.rules, policy));
    }

    for (name, detector) in &template.detectors {
        report.merge(validate_detector(name, detector, policy));
    }

    let weight_sum: f64 = template
        .detectors
        .values()
        .filter_map(|d| d.parsed_weight())
        .sum();
    if (weight_sum - policy.weight_sum_target).abs() > policy.weight_sum_epsilon {
        report.warning(format!(
            "detector weights sum to {weight_sum}, expected {}; adjust the weights to total {}",
            policy.weight_sum_target, policy.weight_sum_target
        ));
    }

    report
}
