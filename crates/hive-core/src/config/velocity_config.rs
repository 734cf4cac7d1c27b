use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::defaults;
use super::segmenter_config::millis;

/// Velocity enrichment configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VelocityConfig {
    /// Length of the averaging window before and after an interaction.
    pub window_ms: u64,
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self {
            window_ms: defaults::DEFAULT_VELOCITY_WINDOW_MS,
        }
    }
}

impl VelocityConfig {
    pub fn window(&self) -> Duration {
        millis(self.window_ms)
    }
}
