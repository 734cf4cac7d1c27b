use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::defaults;
use super::segmenter_config::millis;
use crate::constants::MAX_TREE_DEPTH;

/// Influence-tree construction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfluenceConfig {
    /// Look-back window for causally relevant interactions.
    pub time_threshold_ms: u64,
    /// Minimum focal speed change for an interaction to count as exciting.
    pub vel_change_threshold: f64,
    /// Nodes at or before this instant are not expanded. `None` expands all.
    pub time_stop: Option<DateTime<Utc>>,
    /// Maximum tree depth (root is depth 0).
    pub max_depth: usize,
    /// Skip candidates whose entity already appears on the path to the root.
    pub forbid_revisits: bool,
}

impl Default for InfluenceConfig {
    fn default() -> Self {
        Self {
            time_threshold_ms: defaults::DEFAULT_TIME_THRESHOLD_MS,
            vel_change_threshold: defaults::DEFAULT_VEL_CHANGE_THRESHOLD,
            time_stop: None,
            max_depth: MAX_TREE_DEPTH,
            forbid_revisits: defaults::DEFAULT_FORBID_REVISITS,
        }
    }
}

impl InfluenceConfig {
    pub fn time_threshold(&self) -> Duration {
        millis(self.time_threshold_ms)
    }

    /// Whether a node at `timestamp` lies inside the analysis horizon.
    pub fn within_horizon(&self, timestamp: DateTime<Utc>) -> bool {
        self.time_stop.map_or(true, |stop| timestamp > stop)
    }
}
