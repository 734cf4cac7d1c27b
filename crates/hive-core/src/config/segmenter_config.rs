use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::defaults;

/// Stream segmenter configuration.
///
/// The defaults are the ones used for proximity interactions: 2 s gap
/// tolerance, 1 s minimum episode, no gap episodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// A same-category delay longer than this starts a new episode. `None` disables gaps.
    pub min_gap_ms: Option<u64>,
    /// Episodes shorter than this are discarded. `None` keeps everything.
    pub min_event_duration_ms: Option<u64>,
    /// Insert synthetic `"Gap"` episodes between split runs.
    pub fill_gaps: bool,
    /// Field names used when reading generic detection rows.
    pub fields: FieldNames,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            min_gap_ms: Some(defaults::DEFAULT_MIN_GAP_MS),
            min_event_duration_ms: Some(defaults::DEFAULT_MIN_EVENT_DURATION_MS),
            fill_gaps: defaults::DEFAULT_FILL_GAPS,
            fields: FieldNames::default(),
        }
    }
}

impl SegmenterConfig {
    /// Settings for proximity interactions (the defaults).
    pub fn interactions() -> Self {
        Self::default()
    }

    /// Settings for generic category timelines: 1 s gaps, gap episodes, no minimum.
    pub fn timeline() -> Self {
        Self {
            min_gap_ms: Some(defaults::TIMELINE_MIN_GAP_MS),
            min_event_duration_ms: None,
            fill_gaps: true,
            fields: FieldNames::default(),
        }
    }

    pub fn min_gap(&self) -> Option<Duration> {
        self.min_gap_ms.map(millis)
    }

    pub fn min_event_duration(&self) -> Option<Duration> {
        self.min_event_duration_ms.map(millis)
    }
}

/// Names of the fields read from a generic detection row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    pub time: String,
    pub key: String,
    pub category: String,
    pub loc_info_0: String,
    pub loc_info_1: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            time: defaults::DEFAULT_TIME_FIELD.to_string(),
            key: defaults::DEFAULT_KEY_FIELD.to_string(),
            category: defaults::DEFAULT_CATEGORY_FIELD.to_string(),
            loc_info_0: defaults::DEFAULT_LOC_INFO_0_FIELD.to_string(),
            loc_info_1: defaults::DEFAULT_LOC_INFO_1_FIELD.to_string(),
        }
    }
}

pub(crate) fn millis(ms: u64) -> Duration {
    Duration::milliseconds(i64::try_from(ms).unwrap_or(i64::MAX / 1_000_000))
}
