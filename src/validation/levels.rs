//! Acceptance-range validation: per-range checks plus pairwise overlap
//! detection.
//!
//! "Good" and "bad" level lists share the same rules; the `kind` tag only
//! changes the message prefix.

use crate::config::ValidationPolicy;
use crate::models::LevelRange;

use super::ValidationReport;

/// Which of a detector's two level lists is being validated. Only affects
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelKind {
    Good,
    Bad,
}

impl LevelKind {
    fn label(self) -> &'static str {
        match self {
            LevelKind::Good => "good",
            LevelKind::Bad => "bad",
        }
    }
}

/// All-pairs overlap scan over half-open `[min, max)` intervals.
///
/// Returns index pairs `(i, j)` with `i < j` whose ranges overlap; touching
/// endpoints do not count. The quadratic scan is deliberate: per-template
/// range counts stay in the single or double digits.
pub fn overlapping_pairs(levels: &[LevelRange]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..levels.len() {
        for j in (i + 1)..levels.len() {
            if levels[i].overlaps(&levels[j]) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Validate one acceptance-range list.
///
/// Structural errors: empty output channel, non-finite bounds, `min >= max`
/// (the message distinguishes the non-finite case from the ordering case).
/// Warnings: bounds outside the policy plausibility window, and one warning
/// per distinct overlapping pair naming both ranges' bounds. Overlaps are
/// operationally ambiguous but not structurally invalid, so they never
/// error.
pub fn validate_level_set(
    kind: LevelKind,
    levels: &[LevelRange],
    policy: &ValidationPolicy,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    let label = kind.label();

    for (index, level) in levels.iter().enumerate() {
        let position = index + 1;

        if level.out.trim().is_empty() {
            report.error(format!(
                "{label} level {position}: output channel must not be empty"
            ));
        }

        if !level.min.is_finite() || !level.max.is_finite() {
            report.error(format!(
                "{label} level {position}: min/max is not a finite number"
            ));
        } else if level.min >= level.max {
            report.error(format!(
                "{label} level {position}: min {} must be less than max {}",
                level.min, level.max
            ));
        }

        if level.min < policy.level_min_floor || level.max > policy.level_max_ceiling {
            report.warning(format!(
                "{label} level {position}: bounds [{}, {}) are outside the plausible window [{}, {}]",
                level.min, level.max, policy.level_min_floor, policy.level_max_ceiling
            ));
        }
    }

    for (i, j) in overlapping_pairs(levels) {
        report.warning(format!(
            "{label} levels [{}, {}) and [{}, {}) overlap",
            levels[i].min, levels[i].max, levels[j].min, levels[j].max
        ));
    }

    report
}
