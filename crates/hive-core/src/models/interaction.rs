//! Interaction rows: extracted records, velocity-enriched records, and the
//! focal/non-focal table consumed by influence-tree construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{EntityId, Pose};

/// A flat interaction extracted from one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub bee_id0: EntityId,
    pub bee_id1: EntityId,
    pub interaction_start: DateTime<Utc>,
    pub interaction_end: DateTime<Utc>,
    pub pose_start_bee0: Pose,
    pub pose_start_bee1: Pose,
    pub pose_end_bee0: Pose,
    pub pose_end_bee1: Pose,
}

/// An interaction record with per-entity velocity changes attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedInteraction {
    #[serde(flatten)]
    pub record: InteractionRecord,
    pub vel_change_bee0: Option<f64>,
    pub rel_change_bee0: Option<f64>,
    pub vel_change_bee1: Option<f64>,
    pub rel_change_bee1: Option<f64>,
}

/// Per-entity metrics supplied by external feature tables.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityProfile {
    /// Circadian phase.
    pub phase: Option<f64>,
    /// Age in days.
    pub age: Option<f64>,
    /// Goodness of fit of the circadian model.
    pub r_squared: Option<f64>,
}

/// One row of the focal/non-focal interaction table.
///
/// Every interaction appears twice in the table, once per entity as focal.
/// Nullable metric columns must still be present when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocalInteraction {
    pub bee_id_focal: EntityId,
    pub bee_id_non_focal: EntityId,
    pub interaction_start: DateTime<Utc>,
    pub interaction_end: DateTime<Utc>,

    #[serde(deserialize_with = "required_nullable")]
    pub phase_focal: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub phase_non_focal: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub age_focal: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub age_non_focal: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub r_squared_focal: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub r_squared_non_focal: Option<f64>,

    pub x_pos_start_focal: f64,
    pub y_pos_start_focal: f64,
    pub x_pos_start_non_focal: f64,
    pub y_pos_start_non_focal: f64,
    #[serde(default)]
    pub theta_start_focal: Option<f64>,
    #[serde(default)]
    pub theta_start_non_focal: Option<f64>,

    #[serde(deserialize_with = "required_nullable")]
    pub vel_change_bee_focal: Option<f64>,
    #[serde(default)]
    pub vel_change_bee_non_focal: Option<f64>,
    #[serde(default)]
    pub rel_change_bee_focal: Option<f64>,
    #[serde(default)]
    pub rel_change_bee_non_focal: Option<f64>,
}

impl FocalInteraction {
    /// Whether the focal entity's speed changed by more than `threshold`.
    /// An undefined change never qualifies.
    pub fn excites_focal(&self, threshold: f64) -> bool {
        self.vel_change_bee_focal.is_some_and(|v| v > threshold)
    }

    /// The same interaction seen from the other entity.
    pub fn swapped(self) -> Self {
        Self {
            bee_id_focal: self.bee_id_non_focal,
            bee_id_non_focal: self.bee_id_focal,
            interaction_start: self.interaction_start,
            interaction_end: self.interaction_end,
            phase_focal: self.phase_non_focal,
            phase_non_focal: self.phase_focal,
            age_focal: self.age_non_focal,
            age_non_focal: self.age_focal,
            r_squared_focal: self.r_squared_non_focal,
            r_squared_non_focal: self.r_squared_focal,
            x_pos_start_focal: self.x_pos_start_non_focal,
            y_pos_start_focal: self.y_pos_start_non_focal,
            x_pos_start_non_focal: self.x_pos_start_focal,
            y_pos_start_non_focal: self.y_pos_start_focal,
            theta_start_focal: self.theta_start_non_focal,
            theta_start_non_focal: self.theta_start_focal,
            vel_change_bee_focal: self.vel_change_bee_non_focal,
            vel_change_bee_non_focal: self.vel_change_bee_focal,
            rel_change_bee_focal: self.rel_change_bee_non_focal,
            rel_change_bee_non_focal: self.rel_change_bee_focal,
        }
    }
}

/// A column that must be present but may be `null`.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)
}
