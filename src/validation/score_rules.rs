//! Scoring-rule validation for one template.

use std::collections::BTreeMap;

use crate::config::ValidationPolicy;
use crate::models::ScoreRule;

use super::ValidationReport;

/// Validate a template's scoring-rule list.
///
/// Positions in messages are 1-based. Duplicate `(out, subout)` combinations
/// are reported once as a set-level error listing the distinct duplicated
/// combinations, after the per-rule checks.
pub fn validate_score_rules(rules: &[ScoreRule], policy: &ValidationPolicy) -> ValidationReport {
    let mut report = ValidationReport::new();

    if rules.is_empty() {
        report.warning("no scoring rules configured");
        return report;
    }

    for (index, rule) in rules.iter().enumerate() {
        let position = index + 1;

        if rule.out.trim().is_empty() {
            report.error(format!(
                "score rule {position}: output channel must not be empty"
            ));
        }

        if !rule.score.is_finite() {
            report.error(format!("score rule {position}: score is not a finite number"));
        } else if !(0.0..=100.0).contains(&rule.score) {
            report.error(format!(
                "score rule {position}: score {} is outside the 0-100 range",
                rule.score
            ));
        } else if rule.score < policy.low_score_warn {
            report.warning(format!(
                "score rule {position}: score {} is unusually low",
                rule.score
            ));
        }
    }

    // Duplicate detection over the full list, first-seen order.
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    let mut duplicated: Vec<String> = Vec::new();
    for rule in rules {
        let key = rule.channel_key();
        let count = seen.entry(key.clone()).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicated.push(key);
        }
    }
    if !duplicated.is_empty() {
        report.error(format!(
            "duplicate output channel combinations: {}",
            duplicated.join(", ")
        ));
    }

    report
}
