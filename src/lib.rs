//! # Grading Device Configuration Engine
//!
//! This library validates the configuration of a multi-channel weight/quality
//! grading device: named templates (detector weightings, scoring rules,
//! acceptance ranges) plus a small base settings block (active template,
//! calibration offsets). It also estimates how risky a proposed settings
//! change is before it is committed, and derives a human-facing summary from
//! a resolved configuration.
//!
//! The engine is pure and synchronous: every entry point reads immutable
//! snapshots and returns plain result structures. Transport, persistence and
//! the detection pipeline itself belong to the caller.

pub mod config;
pub mod impact;
pub mod models;
pub mod summary;
pub mod telemetry;
pub mod validation;

pub use impact::{ImpactAssessment, ImpactLevel, assess_impact};
pub use summary::{ConfigSummary, summarize};
pub use validation::{ValidationReport, validate_configuration};
