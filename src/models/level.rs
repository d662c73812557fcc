//! # Acceptance Range Model

use serde::{Deserialize, Serialize};

/// A `[min, max)` acceptance window mapped to an output channel.
///
/// A detector reading falling inside the window is routed to channel `out`.
/// The interval is half-open: two ranges that merely touch at an endpoint do
/// not overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRange {
    /// Output channel the window routes to.
    pub out: String,

    pub min: f64,
    pub max: f64,
}

impl LevelRange {
    /// Half-open interval overlap test.
    pub fn overlaps(&self, other: &LevelRange) -> bool {
        self.max > other.min && self.min < other.max
    }
}
