//! Template-set validation: set-level identity checks plus per-member
//! validation.

use std::collections::BTreeMap;

use crate::config::ValidationPolicy;
use crate::models::Template;

use super::ValidationReport;
use super::template::validate_template;

/// Validate a collection of templates for intra-set consistency.
///
/// An empty set returns immediately with a single error; no downstream check
/// is meaningful without at least one template, and this is the engine's one
/// legitimate short-circuit. Per-member findings are prefixed with
/// `"Template {id}: "`, falling back to the member's 1-based ordinal when
/// the id is blank.
pub fn validate_template_set(
    templates: &[Template],
    policy: &ValidationPolicy,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    if templates.is_empty() {
        report.error("at least one template is required");
        return report;
    }

    let duplicate_ids = duplicates(templates.iter().map(|t| t.id.as_str()));
    if !duplicate_ids.is_empty() {
        report.error(format!(
            "duplicate template ids: {}",
            duplicate_ids.join(", ")
        ));
    }

    // Names are cosmetic; ids are the authoritative key.
    let duplicate_names = duplicates(
        templates
            .iter()
            .map(|t| t.name.as_str())
            .filter(|n| !n.trim().is_empty()),
    );
    if !duplicate_names.is_empty() {
        report.warning(format!(
            "duplicate template names: {}",
            duplicate_names.join(", ")
        ));
    }

    for (index, template) in templates.iter().enumerate() {
        let label = if template.id.trim().is_empty() {
            (index + 1).to_string()
        } else {
            template.id.clone()
        };
        report.merge_prefixed(
            &format!("Template {label}: "),
            validate_template(template, policy),
        );
    }

    report
}

/// Distinct values occurring more than once, in first-seen order.
fn duplicates<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut repeated = Vec::new();
    for value in values {
        let count = counts.entry(value).or_insert(0);
        *count += 1;
        if *count == 2 {
            repeated.push(value.to_string());
        }
    }
    repeated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DetectorConfig, LevelRange};

    fn policy() -> ValidationPolicy {
        ValidationPolicy::default()
    }

    fn template(id: &str, name: &str) -> Template {
        let mut template = Template {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        };
        template.detectors.insert(
            "weight".to_string(),
            DetectorConfig {
                weight: "100".to_string(),
                ceiling: None,
                bad_levels: vec![LevelRange {
                    out: "1".to_string(),
                    min: 0.0,
                    max: 100.0,
                }],
                good_levels: vec![LevelRange {
                    out: "14".to_string(),
                    min: 101.0,
                    max: 200.0,
                }],
            },
        );
        template
    }

    #[test]
    fn empty_set_short_circuits_with_one_error() {
        let report = validate_template_set(&[], &policy());
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["at least one template is required"]);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn well_formed_set_is_valid() {
        let set = vec![template("1", "WaterFirst"), template("2", "WeightOnly")];
        let report = validate_template_set(&set, &policy());
        assert!(report.valid, "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn duplicate_ids_are_an_error_listing_distinct_ids() {
        let set = vec![
            template("1", "A"),
            template("1", "B"),
            template("1", "C"),
            template("2", "D"),
            template("2", "E"),
        ];
        let report = validate_template_set(&set, &policy());
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["duplicate template ids: 1, 2"]);
    }

    #[test]
    fn duplicate_names_are_only_a_warning() {
        let set = vec![template("1", "Same"), template("2", "Same")];
        let report = validate_template_set(&set, &policy());
        assert!(report.valid);
        assert_eq!(report.warnings, vec!["duplicate template names: Same"]);
    }

    #[test]
    fn empty_names_never_count_as_duplicates() {
        let mut a = template("1", "");
        let mut b = template("2", "");
        // Blank names fail per-template validation; strip detectors so the
        // only findings are the ones under test.
        a.detectors.clear();
        b.detectors.clear();
        let report = validate_template_set(&[a, b], &policy());
        assert!(report.warnings.iter().all(|w| !w.contains("names")));
    }

    #[test]
    fn member_findings_are_prefixed_with_id_or_ordinal() {
        let mut anonymous = template("", "Anon");
        anonymous.detectors.clear();
        let set = vec![template("7", ""), anonymous];
        let report = validate_template_set(&set, &policy());
        assert!(
            report
                .errors
                .iter()
                .any(|e| e == "Template 7: template name must not be empty")
        );
        assert!(
            report
                .errors
                .iter()
                .any(|e| e == "Template 2: template id must not be empty")
        );
    }
}
