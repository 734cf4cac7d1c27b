//! Test fixture loader and builders for hive golden datasets and scenarios.
//!
//! Provides typed deserialization of the fixture JSON files plus small
//! constructors for detections, timeline items, and focal interaction rows.

use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;

use hive_core::models::{
    EntityId, FocalInteraction, PairKey, Pose, RawDetection, TimelineItem, VelocitySample,
};

/// Epoch all fixture offsets are relative to: 2023-07-22T04:26:40Z.
pub const BASE_EPOCH_SECS: i64 = 1_690_000_000;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

// ── Builders ─────────────────────────────────────────────────────────────

/// Timestamp `secs` seconds after [`BASE_EPOCH_SECS`].
pub fn ts(secs: i64) -> DateTime<Utc> {
    ts_ms(secs * 1_000)
}

/// Timestamp `ms` milliseconds after [`BASE_EPOCH_SECS`].
pub fn ts_ms(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(BASE_EPOCH_SECS, 0).unwrap() + Duration::milliseconds(ms)
}

/// Timeline item for pair `(a, b)` at `ms`. Poses encode the offset in `x`.
pub fn item(a: EntityId, b: EntityId, ms: i64, category: &str) -> TimelineItem {
    let (key, _) = PairKey::ordered(a, b);
    TimelineItem {
        key,
        timestamp: ts_ms(ms),
        category: category.to_string(),
        pose_a: Pose::new(ms as f64, 0.0, 0.0),
        pose_b: Pose::new(ms as f64, 1.0, 0.0),
    }
}

/// Detection between `bee0` and `bee1` at `ms`, each at a pose tagged by its id.
pub fn detection(bee0: EntityId, bee1: EntityId, ms: i64) -> RawDetection {
    RawDetection {
        bee_id0: bee0,
        bee_id1: bee1,
        timestamp: ts_ms(ms),
        location_info_bee0: Pose::new(bee0 as f64, ms as f64, 0.0),
        location_info_bee1: Pose::new(bee1 as f64, ms as f64, 0.0),
    }
}

/// Detections for a pair at a fixed frame interval over `[from_ms, to_ms]`.
pub fn detection_run(
    bee0: EntityId,
    bee1: EntityId,
    from_ms: i64,
    to_ms: i64,
    step_ms: i64,
) -> Vec<RawDetection> {
    (from_ms..=to_ms)
        .step_by(step_ms as usize)
        .map(|ms| detection(bee0, bee1, ms))
        .collect()
}

/// Constant-speed series sampled once per second over `[from_secs, to_secs]`.
pub fn velocity_series(from_secs: i64, to_secs: i64, speed: f64) -> Vec<VelocitySample> {
    (from_secs..=to_secs)
        .map(|s| VelocitySample {
            timestamp: ts(s),
            velocity: speed,
        })
        .collect()
}

/// Focal interaction row with neutral metrics. `vel` is the focal speed change.
pub fn focal_row(
    focal: EntityId,
    non_focal: EntityId,
    start_secs: i64,
    vel: Option<f64>,
) -> FocalInteraction {
    FocalInteraction {
        bee_id_focal: focal,
        bee_id_non_focal: non_focal,
        interaction_start: ts(start_secs),
        interaction_end: ts(start_secs + 1),
        phase_focal: Some(12.0),
        phase_non_focal: Some(6.0),
        age_focal: Some(focal as f64),
        age_non_focal: Some(non_focal as f64),
        r_squared_focal: Some(0.9),
        r_squared_non_focal: Some(0.8),
        x_pos_start_focal: focal as f64,
        y_pos_start_focal: start_secs as f64,
        x_pos_start_non_focal: non_focal as f64,
        y_pos_start_non_focal: start_secs as f64,
        theta_start_focal: None,
        theta_start_non_focal: None,
        vel_change_bee_focal: vel,
        vel_change_bee_non_focal: None,
        rel_change_bee_focal: None,
        rel_change_bee_non_focal: None,
    }
}
