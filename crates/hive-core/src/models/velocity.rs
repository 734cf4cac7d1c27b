use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point of an entity's speed time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocitySample {
    pub timestamp: DateTime<Utc>,
    /// Speed in mm/s.
    pub velocity: f64,
}

/// Change in mean speed across an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VelocityChange {
    /// `mean_after - mean_before`; `None` when either side has no samples.
    pub absolute: Option<f64>,
    /// Absolute change relative to `mean_before`, in percent.
    pub relative_percent: Option<f64>,
}
