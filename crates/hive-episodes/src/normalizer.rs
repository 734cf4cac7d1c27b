//! Canonicalization of raw detections into per-pair timeline items.

use chrono::{DateTime, Utc};
use serde_json::Value;

use hive_core::config::FieldNames;
use hive_core::constants::INTERACTION_CATEGORY;
use hive_core::errors::EpisodeError;
use hive_core::models::{PairKey, Pose, RawDetection, TimelineItem};

/// Maps detections onto canonical, unordered pair keys.
#[derive(Debug, Clone, Default)]
pub struct DetectionNormalizer {
    fields: FieldNames,
}

impl DetectionNormalizer {
    pub fn new(fields: FieldNames) -> Self {
        Self { fields }
    }

    /// Canonical item for a typed detection. Poses follow the key order.
    pub fn normalize(&self, detection: &RawDetection) -> TimelineItem {
        let (key, swapped) = PairKey::ordered(detection.bee_id0, detection.bee_id1);
        let (pose_a, pose_b) = if swapped {
            (detection.location_info_bee1, detection.location_info_bee0)
        } else {
            (detection.location_info_bee0, detection.location_info_bee1)
        };
        TimelineItem {
            key,
            timestamp: detection.timestamp,
            category: INTERACTION_CATEGORY.to_string(),
            pose_a,
            pose_b,
        }
    }

    pub fn normalize_all<'a, I>(&self, detections: I) -> Vec<TimelineItem>
    where
        I: IntoIterator<Item = &'a RawDetection>,
    {
        detections.into_iter().map(|d| self.normalize(d)).collect()
    }

    /// Read a generic row using the configured field names.
    ///
    /// The key is `"idA_idB"`, the time an RFC 3339 string, and each location
    /// either `[x, y, theta]` or `{"x", "y", "theta"}`. A missing or unreadable
    /// field is fatal.
    pub fn normalize_row(&self, row: &Value) -> Result<TimelineItem, EpisodeError> {
        let timestamp = self.time_field(row)?;
        let (key, swapped) = self.key_field(row)?;
        let category = self
            .field(row, &self.fields.category)?
            .as_str()
            .ok_or_else(|| malformed(&self.fields.category))?
            .to_string();
        let loc_0 = self.pose_field(row, &self.fields.loc_info_0)?;
        let loc_1 = self.pose_field(row, &self.fields.loc_info_1)?;

        let (pose_a, pose_b) = if swapped { (loc_1, loc_0) } else { (loc_0, loc_1) };
        Ok(TimelineItem {
            key,
            timestamp,
            category,
            pose_a,
            pose_b,
        })
    }

    pub fn normalize_rows(&self, rows: &[Value]) -> Result<Vec<TimelineItem>, EpisodeError> {
        rows.iter().map(|row| self.normalize_row(row)).collect()
    }

    fn field<'v>(&self, row: &'v Value, name: &str) -> Result<&'v Value, EpisodeError> {
        row.get(name)
            .filter(|v| !v.is_null())
            .ok_or_else(|| malformed(name))
    }

    fn time_field(&self, row: &Value) -> Result<DateTime<Utc>, EpisodeError> {
        let name = &self.fields.time;
        self.field(row, name)?
            .as_str()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| malformed(name))
    }

    fn key_field(&self, row: &Value) -> Result<(PairKey, bool), EpisodeError> {
        let raw = self
            .field(row, &self.fields.key)?
            .as_str()
            .ok_or_else(|| malformed(&self.fields.key))?;
        PairKey::parse_ordered(raw)
    }

    fn pose_field(&self, row: &Value, name: &str) -> Result<Pose, EpisodeError> {
        let value = self.field(row, name)?;
        if let Some(items) = value.as_array() {
            let coords: Option<Vec<f64>> = items.iter().map(Value::as_f64).collect();
            return match coords.as_deref() {
                Some(&[x, y, theta]) => Ok(Pose::new(x, y, theta)),
                _ => Err(malformed(name)),
            };
        }
        serde_json::from_value(value.clone()).map_err(|_| malformed(name))
    }
}

fn malformed(field: &str) -> EpisodeError {
    EpisodeError::MalformedDetection {
        field: field.to_string(),
    }
}
