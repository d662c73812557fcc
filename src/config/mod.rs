//! Configuration loading for the grading-device engine.
//!
//! Loads layered `.env` files and environment variables prefixed with
//! `GRADECFG_`, producing a typed [`EngineConfig`]. The interesting part is
//! the [`ValidationPolicy`]: the advisory thresholds the validators and the
//! change-impact assessor consult. They are policy constants, not hard
//! limits, so operators can tune them per installation.

use std::{collections::BTreeMap, env, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine configuration derived from `GRADECFG_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct EngineConfig {
    #[serde(default = "default_profile")]
    pub profile: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
    #[serde(default)]
    pub policy: ValidationPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            policy: ValidationPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Validates the configuration, returning an error if any policy bound
    /// is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.policy.validate()
    }
}

/// Advisory thresholds consulted by the validators and the change-impact
/// assessor.
///
/// Crossing one of these never makes a configuration invalid; it produces a
/// warning (or raises the impact classification) for human judgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ValidationPolicy {
    /// Absolute weight-offset magnitude above which the base settings get a
    /// plausibility warning (default: 100)
    ///
    /// Environment variable: `GRADECFG_POLICY_WEIGHT_OFFSET_WARN`
    #[serde(default = "default_weight_offset_warn")]
    pub weight_offset_warn: f64,

    /// Absolute water-offset magnitude above which the base settings get a
    /// plausibility warning (default: 50)
    ///
    /// Environment variable: `GRADECFG_POLICY_WATER_OFFSET_WARN`
    #[serde(default = "default_water_offset_warn")]
    pub water_offset_warn: f64,

    /// Score below which a scoring rule is flagged as plausible-but-low
    /// (default: 20)
    ///
    /// Environment variable: `GRADECFG_POLICY_LOW_SCORE_WARN`
    #[serde(default = "default_low_score_warn")]
    pub low_score_warn: f64,

    /// Lower bound of the plausible acceptance-range window (default: -1000)
    ///
    /// Environment variable: `GRADECFG_POLICY_LEVEL_MIN_FLOOR`
    #[serde(default = "default_level_min_floor")]
    pub level_min_floor: f64,

    /// Upper bound of the plausible acceptance-range window (default: 10000)
    ///
    /// Environment variable: `GRADECFG_POLICY_LEVEL_MAX_CEILING`
    #[serde(default = "default_level_max_ceiling")]
    pub level_max_ceiling: f64,

    /// Value the per-template detector weights are expected to sum to
    /// (default: 100)
    ///
    /// Environment variable: `GRADECFG_POLICY_WEIGHT_SUM_TARGET`
    #[serde(default = "default_weight_sum_target")]
    pub weight_sum_target: f64,

    /// Absolute tolerance applied to the weight-sum comparison so that
    /// floating-point summation artifacts do not produce spurious warnings
    /// (default: 1e-6)
    ///
    /// Environment variable: `GRADECFG_POLICY_WEIGHT_SUM_EPSILON`
    #[serde(default = "default_weight_sum_epsilon")]
    pub weight_sum_epsilon: f64,

    /// Weight-offset delta magnitude above which a settings change is rated
    /// at least medium impact (default: 10)
    ///
    /// Environment variable: `GRADECFG_POLICY_WEIGHT_DELTA_MEDIUM`
    #[serde(default = "default_weight_delta_medium")]
    pub weight_delta_medium: f64,

    /// Water-offset delta magnitude above which a settings change is rated
    /// at least medium impact (default: 5)
    ///
    /// Environment variable: `GRADECFG_POLICY_WATER_DELTA_MEDIUM`
    #[serde(default = "default_water_delta_medium")]
    pub water_delta_medium: f64,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            weight_offset_warn: default_weight_offset_warn(),
            water_offset_warn: default_water_offset_warn(),
            low_score_warn: default_low_score_warn(),
            level_min_floor: default_level_min_floor(),
            level_max_ceiling: default_level_max_ceiling(),
            weight_sum_target: default_weight_sum_target(),
            weight_sum_epsilon: default_weight_sum_epsilon(),
            weight_delta_medium: default_weight_delta_medium(),
            water_delta_medium: default_water_delta_medium(),
        }
    }
}

impl ValidationPolicy {
    /// Validate policy bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.weight_offset_warn.is_finite() && self.weight_offset_warn > 0.0) {
            return Err(ConfigError::InvalidOffsetWarnThreshold {
                field: "weight_offset_warn".to_string(),
                value: self.weight_offset_warn,
            });
        }
        if !(self.water_offset_warn.is_finite() && self.water_offset_warn > 0.0) {
            return Err(ConfigError::InvalidOffsetWarnThreshold {
                field: "water_offset_warn".to_string(),
                value: self.water_offset_warn,
            });
        }
        if !self.low_score_warn.is_finite() || self.low_score_warn < 0.0 {
            return Err(ConfigError::InvalidLowScoreThreshold {
                value: self.low_score_warn,
            });
        }
        if !(self.level_min_floor.is_finite() && self.level_max_ceiling.is_finite())
            || self.level_min_floor >= self.level_max_ceiling
        {
            return Err(ConfigError::InvalidLevelWindow {
                floor: self.level_min_floor,
                ceiling: self.level_max_ceiling,
            });
        }
        if !(self.weight_sum_target.is_finite() && self.weight_sum_target > 0.0) {
            return Err(ConfigError::InvalidWeightSumTarget {
                value: self.weight_sum_target,
            });
        }
        if !self.weight_sum_epsilon.is_finite()
            || self.weight_sum_epsilon < 0.0
            || self.weight_sum_epsilon >= self.weight_sum_target
        {
            return Err(ConfigError::InvalidWeightSumEpsilon {
                value: self.weight_sum_epsilon,
            });
        }
        if !(self.weight_delta_medium.is_finite() && self.weight_delta_medium > 0.0) {
            return Err(ConfigError::InvalidImpactDeltaThreshold {
                field: "weight_delta_medium".to_string(),
                value: self.weight_delta_medium,
            });
        }
        if !(self.water_delta_medium.is_finite() && self.water_delta_medium > 0.0) {
            return Err(ConfigError::InvalidImpactDeltaThreshold {
                field: "water_delta_medium".to_string(),
                value: self.water_delta_medium,
            });
        }
        Ok(())
    }
}

fn default_profile() -> String {
    "local".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_weight_offset_warn() -> f64 {
    100.0
}

fn default_water_offset_warn() -> f64 {
    50.0
}

fn default_low_score_warn() -> f64 {
    20.0
}

fn default_level_min_floor() -> f64 {
    -1000.0
}

fn default_level_max_ceiling() -> f64 {
    10000.0
}

fn default_weight_sum_target() -> f64 {
    100.0
}

fn default_weight_sum_epsilon() -> f64 {
    1e-6
}

fn default_weight_delta_medium() -> f64 {
    10.0
}

fn default_water_delta_medium() -> f64 {
    5.0
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load environment file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        source: dotenvy::Error,
    },
    #[error("policy {field} must be a finite positive number, got {value}")]
    InvalidOffsetWarnThreshold { field: String, value: f64 },
    #[error("policy low_score_warn must be a finite non-negative number, got {value}")]
    InvalidLowScoreThreshold { value: f64 },
    #[error(
        "policy level plausibility window is invalid: floor {floor} must be below ceiling {ceiling}"
    )]
    InvalidLevelWindow { floor: f64, ceiling: f64 },
    #[error("policy weight_sum_target must be a finite positive number, got {value}")]
    InvalidWeightSumTarget { value: f64 },
    #[error(
        "policy weight_sum_epsilon must be finite, non-negative and below the sum target, got {value}"
    )]
    InvalidWeightSumEpsilon { value: f64 },
    #[error("policy {field} must be a finite positive number, got {value}")]
    InvalidImpactDeltaThreshold { field: String, value: f64 },
}

/// Loads configuration using layered `.env` files and `GRADECFG_*` env vars.
pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a new loader rooted at the current working directory.
    pub fn new() -> Self {
        Self {
            base_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Creates a loader rooted at the provided directory (useful for tests).
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Loads the engine configuration.
    ///
    /// Layering order, later entries winning: `.env`, `.env.local`,
    /// `.env.{profile}`, `.env.{profile}.local`, process environment.
    pub fn load(&self) -> Result<EngineConfig, ConfigError> {
        let (mut layered, profile_hint) = self.collect_layered_env()?;

        // Overlay process environment last so it wins.
        for (key, value) in env::vars() {
            if let Some(stripped) = key.strip_prefix("GRADECFG_") {
                layered.insert(stripped.to_string(), value);
            }
        }

        let profile = layered
            .remove("PROFILE")
            .filter(|v| !v.is_empty())
            .unwrap_or(profile_hint);
        let log_level = layered
            .remove("LOG_LEVEL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_log_level);
        let log_format = layered
            .remove("LOG_FORMAT")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_log_format);

        let policy = ValidationPolicy {
            weight_offset_warn: parse_or(&mut layered, "POLICY_WEIGHT_OFFSET_WARN", || {
                default_weight_offset_warn()
            }),
            water_offset_warn: parse_or(&mut layered, "POLICY_WATER_OFFSET_WARN", || {
                default_water_offset_warn()
            }),
            low_score_warn: parse_or(&mut layered, "POLICY_LOW_SCORE_WARN", || {
                default_low_score_warn()
            }),
            level_min_floor: parse_or(&mut layered, "POLICY_LEVEL_MIN_FLOOR", || {
                default_level_min_floor()
            }),
            level_max_ceiling: parse_or(&mut layered, "POLICY_LEVEL_MAX_CEILING", || {
                default_level_max_ceiling()
            }),
            weight_sum_target: parse_or(&mut layered, "POLICY_WEIGHT_SUM_TARGET", || {
                default_weight_sum_target()
            }),
            weight_sum_epsilon: parse_or(&mut layered, "POLICY_WEIGHT_SUM_EPSILON", || {
                default_weight_sum_epsilon()
            }),
            weight_delta_medium: parse_or(&mut layered, "POLICY_WEIGHT_DELTA_MEDIUM", || {
                default_weight_delta_medium()
            }),
            water_delta_medium: parse_or(&mut layered, "POLICY_WATER_DELTA_MEDIUM", || {
                default_water_delta_medium()
            }),
        };

        let config = EngineConfig {
            profile,
            log_level,
            log_format,
            policy,
        };

        config.validate()?;
        Ok(config)
    }

    fn collect_layered_env(&self) -> Result<(BTreeMap<String, String>, String), ConfigError> {
        let mut values = BTreeMap::new();

        self.merge_dotenv(self.base_dir.join(".env"), &mut values)?;
        self.merge_dotenv(self.base_dir.join(".env.local"), &mut values)?;

        let profile = env::var("GRADECFG_PROFILE")
            .ok()
            .or_else(|| values.get("PROFILE").cloned())
            .unwrap_or_else(default_profile);

        self.merge_dotenv(
            self.base_dir.join(format!(".env.{}", &profile)),
            &mut values,
        )?;
        self.merge_dotenv(
            self.base_dir.join(format!(".env.{}.local", &profile)),
            &mut values,
        )?;

        Ok((values, profile))
    }

    fn merge_dotenv(
        &self,
        path: PathBuf,
        values: &mut BTreeMap<String, String>,
    ) -> Result<(), ConfigError> {
        match dotenvy::from_path_iter(&path) {
            Ok(iter) => {
                for item in iter {
                    let (key, value) = item.map_err(|source| ConfigError::EnvFile {
                        path: path.clone(),
                        source,
                    })?;
                    if let Some(stripped) = key.strip_prefix("GRADECFG_") {
                        values.insert(stripped.to_string(), value);
                    }
                }
                Ok(())
            }
            Err(dotenvy::Error::Io(ref io_err))
                if io_err.kind() == std::io::ErrorKind::NotFound =>
            {
                Ok(())
            }
            Err(err) => Err(ConfigError::EnvFile { path, source: err }),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_or(
    layered: &mut BTreeMap<String, String>,
    key: &str,
    fallback: impl FnOnce() -> f64,
) -> f64 {
    layered
        .remove(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(fallback)
}
