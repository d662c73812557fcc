//! Base settings validation: active-template reference and calibration
//! offsets.

use crate::config::ValidationPolicy;
use crate::models::BaseSettings;

use super::ValidationReport;

/// Validate the global settings block.
///
/// Structural errors: empty `current_template_id`, non-finite offsets.
/// Advisory warnings: offsets whose magnitude exceeds the policy thresholds;
/// such values are plausible but unusually large for a calibration offset.
pub fn validate_base_settings(
    settings: &BaseSettings,
    policy: &ValidationPolicy,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    if settings.current_template_id.trim().is_empty() {
        report.error("current template id must not be empty");
    }

    if !settings.weight_offset.is_finite() {
        report.error("weight offset is not a finite number");
    } else if settings.weight_offset.abs() > policy.weight_offset_warn {
        report.warning(format!(
            "weight offset {} is unusually large (expected magnitude <= {})",
            settings.weight_offset, policy.weight_offset_warn
        ));
    }

    if !settings.water_offset.is_finite() {
        report.error("water offset is not a finite number");
    } else if settings.water_offset.abs() > policy.water_offset_warn {
        report.warning(format!(
            "water offset {} is unusually large (expected magnitude <= {})",
            settings.water_offset, policy.water_offset_warn
        ));
    }

    report
}
