//! Cross-entity integrity checks between the base settings and the template
//! set.

use crate::models::{BaseSettings, Template};

use super::ValidationReport;

/// Validate referential integrity and liveness.
///
/// A dangling active-template reference is a structural error: the device
/// cannot operate with an unresolvable active template. An entirely inert
/// template set (nothing scoring-enabled, no positive detector weight) only
/// warns, since the configuration is still structurally applicable.
pub fn validate_integrity(settings: &BaseSettings, templates: &[Template]) -> ValidationReport {
    let mut report = ValidationReport::new();

    if !templates
        .iter()
        .any(|t| t.id == settings.current_template_id)
    {
        report.error(format!(
            "current template id '{}' does not match any template",
            settings.current_template_id
        ));
    }

    if !templates.iter().any(Template::is_live) {
        report.warning(
            "no template is live: scoring is disabled and every detector weight is zero, \
             so the device would not sort anything",
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DetectorConfig, ScoreConfig};

    fn settings(id: &str) -> BaseSettings {
        BaseSettings {
            current_template_id: id.to_string(),
            weight_offset: 0.0,
            water_offset: 0.0,
        }
    }

    fn template(id: &str, weight: &str) -> Template {
        let mut template = Template {
            id: id.to_string(),
            name: format!("template-{id}"),
            ..Default::default()
        };
        template.detectors.insert(
            "weight".to_string(),
            DetectorConfig {
                weight: weight.to_string(),
                ..Default::default()
            },
        );
        template
    }

    #[test]
    fn dangling_reference_is_exactly_one_error() {
        let set = vec![template("A", "100"), template("B", "100")];
        let report = validate_integrity(&settings("Z"), &set);
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("'Z'"));
    }

    #[test]
    fn resolvable_reference_passes() {
        let set = vec![template("A", "100")];
        let report = validate_integrity(&settings("A"), &set);
        assert!(report.valid);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn inert_set_warns() {
        let set = vec![template("A", "0"), template("B", "0")];
        let report = validate_integrity(&settings("A"), &set);
        assert!(report.valid);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("no template is live"));
    }

    #[test]
    fn scoring_enabled_counts_as_live() {
        let mut inert = template("A", "0");
        inert.scores = ScoreConfig {
            enabled: true,
            rules: Vec::new(),
        };
        let report = validate_integrity(&settings("A"), &[inert]);
        assert!(report.warnings.is_empty());
    }
}
