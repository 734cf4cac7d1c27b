//! Top-level hive configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    ExtractionConfig, InfluenceConfig, ObservabilityConfig, SegmenterConfig, VelocityConfig,
};
use crate::constants::MAX_TREE_DEPTH;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`HIVE_*`)
/// 2. Config file passed to [`HiveConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiveConfig {
    pub segmenter: SegmenterConfig,
    pub extraction: ExtractionConfig,
    pub velocity: VelocityConfig,
    pub influence: InfluenceConfig,
    pub observability: ObservabilityConfig,
}

impl HiveConfig {
    /// Load configuration: defaults, then `path` (if given), then `HIVE_*`
    /// environment overrides, then validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `HIVE_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("HIVE_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Some(v) = lookup("HIVE_FILL_GAPS") {
            self.segmenter.fill_gaps = parse_env("HIVE_FILL_GAPS", &v)?;
        }
        if let Some(v) = lookup("HIVE_MIN_GAP_MS") {
            self.segmenter.min_gap_ms = Some(parse_env("HIVE_MIN_GAP_MS", &v)?);
        }
        if let Some(v) = lookup("HIVE_MIN_EVENT_DURATION_MS") {
            self.segmenter.min_event_duration_ms =
                Some(parse_env("HIVE_MIN_EVENT_DURATION_MS", &v)?);
        }
        if let Some(v) = lookup("HIVE_TIME_THRESHOLD_MS") {
            self.influence.time_threshold_ms = parse_env("HIVE_TIME_THRESHOLD_MS", &v)?;
        }
        if let Some(v) = lookup("HIVE_VEL_CHANGE_THRESHOLD") {
            self.influence.vel_change_threshold = parse_env("HIVE_VEL_CHANGE_THRESHOLD", &v)?;
        }
        if let Some(v) = lookup("HIVE_MAX_DEPTH") {
            self.influence.max_depth = parse_env("HIVE_MAX_DEPTH", &v)?;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.influence.max_depth == 0 || self.influence.max_depth > MAX_TREE_DEPTH {
            return Err(ConfigError::ValidationFailed {
                field: "influence.max_depth".to_string(),
                message: format!("must be between 1 and {MAX_TREE_DEPTH}"),
            });
        }
        if self.influence.time_threshold_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "influence.time_threshold_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !self.influence.vel_change_threshold.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "influence.vel_change_threshold".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        if self.velocity.window_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "velocity.window_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::ValidationFailed {
            field: name.to_string(),
            message: format!("cannot parse `{value}`"),
        })
}
