//! # Configuration Validation
//!
//! The rules deciding whether a candidate configuration (base settings plus
//! a set of templates) is structurally sound, internally consistent and safe
//! to apply. Structural errors make a configuration invalid and are expected
//! to block any commit action by the caller; policy warnings are advisory
//! and surfaced for human judgment.
//!
//! Every validator accumulates into a [`ValidationReport`] rather than
//! returning early, so one malformed detector does not hide its siblings:
//! callers get the complete list of problems in a single pass. Within one
//! call, messages are appended in a fixed order (base checks, per-item
//! checks in input order, then set-level checks), so identical inputs always
//! produce byte-identical reports.

use serde::{Deserialize, Serialize};

use crate::config::ValidationPolicy;
use crate::models::{BaseSettings, Template};

pub mod base_settings;
pub mod detector;
pub mod document;
pub mod integrity;
pub mod levels;
pub mod score_rules;
pub mod template;
pub mod template_set;

/// Accumulated outcome of a validation pass.
///
/// `valid` is maintained as `errors.is_empty()`; warnings never affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    /// A clean report: valid, nothing to say.
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record a structural error; the report becomes invalid.
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.valid = false;
    }

    /// Record an advisory warning; validity is unaffected.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append another report's findings, preserving their order.
    pub fn merge(&mut self, other: ValidationReport) {
        self.valid = self.valid && other.valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Append another report's findings with every message prefixed.
    pub fn merge_prefixed(&mut self, prefix: &str, other: ValidationReport) {
        self.valid = self.valid && other.valid;
        self.errors
            .extend(other.errors.into_iter().map(|m| format!("{prefix}{m}")));
        self.warnings
            .extend(other.warnings.into_iter().map(|m| format!("{prefix}{m}")));
    }
}

/// Validate a complete candidate configuration.
///
/// Runs the base-settings checks, the template-set checks and the
/// cross-entity integrity checks, in that order, merging everything into one
/// report. This is the entry point a dry-run endpoint calls before any
/// persistence is attempted.
pub fn validate_configuration(
    settings: &BaseSettings,
    templates: &[Template],
    policy: &ValidationPolicy,
) -> ValidationReport {
    let mut report = base_settings::validate_base_settings(settings, policy);
    report.merge(template_set::validate_template_set(templates, policy));
    report.merge(integrity::validate_integrity(settings, templates));

    tracing::debug!(
        valid = report.valid,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "configuration validated"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_flips_validity_and_warning_does_not() {
        let mut report = ValidationReport::new();
        assert!(report.valid);

        report.warning("advisory");
        assert!(report.valid);

        report.error("structural");
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn merge_prefixed_prefixes_both_streams() {
        let mut inner = ValidationReport::new();
        inner.error("id must not be empty");
        inner.warning("weights sum to 90");

        let mut outer = ValidationReport::new();
        outer.merge_prefixed("Template 2: ", inner);

        assert!(!outer.valid);
        assert_eq!(outer.errors, vec!["Template 2: id must not be empty"]);
        assert_eq!(outer.warnings, vec!["Template 2: weights sum to 90"]);
    }

    #[test]
    fn merge_preserves_ordering() {
        let mut first = ValidationReport::new();
        first.error("a");
        let mut second = ValidationReport::new();
        second.error("b");
        second.warning("c");

        first.merge(second);
        assert_eq!(first.errors, vec!["a", "b"]);
        assert_eq!(first.warnings, vec!["c"]);
    }
}
