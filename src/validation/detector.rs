//! Per-detector validation: weight and ceiling parsing plus both
//! acceptance-range lists.

use crate::config::ValidationPolicy;
use crate::models::DetectorConfig;

use super::ValidationReport;
use super::levels::{LevelKind, validate_level_set};

/// Validate one detector configuration.
///
/// The weight and ceiling fields are decimal text in the device document, so
/// parse failure is reported as its own error, distinct from an out-of-range
/// value. Level findings are prefixed with the detector's display name so
/// two detectors' messages stay distinguishable after they are unioned into
/// the template report.
pub fn validate_detector(
    name: &str,
    detector: &DetectorConfig,
    policy: &ValidationPolicy,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    let prefix = format!("detector {name}: ");

    match detector.parsed_weight() {
        None => {
            report.error(format!(
                "detector {name}: weight '{}' is not a number",
                detector.weight
            ));
        }
        Some(weight) if !(0.0..=100.0).contains(&weight) => {
            report.error(format!(
                "detector {name}: weight {weight} is outside the 0-100 range"
            ));
        }
        Some(_) => {}
    }

    if let Some(raw) = detector.ceiling.as_deref() {
        if !raw.trim().is_empty() {
            match detector.parsed_ceiling() {
                None => {
                    report.error(format!("detector {name}: ceiling '{raw}' is not a number"));
                }
                Some(ceiling) if ceiling <= 0.0 => {
                    report.error(format!(
                        "detector {name}: ceiling {ceiling} must be greater than zero"
                    ));
                }
                Some(_) => {}
            }
        }
    }

    report.merge_prefixed(
        &prefix,
        validate_level_set(LevelKind::Bad, &detector.bad_levels, policy),
    );
    report.merge_prefixed(
        &prefix,
        validate_level_set(LevelKind::Good, &detector.good_levels, policy),
    );

    if detector.has_no_levels() {
        // A detector may intentionally gate on weight alone.
        report.warning(format!(
            "detector {name}: no detection levels configured"
        ));
    }

    report
}
