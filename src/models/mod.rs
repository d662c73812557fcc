//! # Data Models
//!
//! Plain data structures for the grading-device configuration: the base
//! settings block, templates, detector configurations, acceptance ranges and
//! scoring rules. The field vocabulary follows the device's XML document
//! (`curtemplateId`, per-detector `wg`/`max` attributes, `badLevel` and
//! `goodLevel` lists).
//!
//! All types are inert serde structs; validators borrow them and never
//! mutate.

pub mod base_settings;
pub mod detector;
pub mod level;
pub mod score;
pub mod template;

pub use base_settings::{BaseSettings, BaseSettingsPatch};
pub use detector::DetectorConfig;
pub use level::LevelRange;
pub use score::{ScoreConfig, ScoreRule};
pub use template::Template;
