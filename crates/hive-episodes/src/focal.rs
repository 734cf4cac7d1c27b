//! Focal/non-focal pivot of enriched interactions, and the egocentric
//! coordinate transform of a partner's pose.

use std::collections::HashMap;

use hive_core::models::{EnrichedInteraction, EntityId, EntityProfile, FocalInteraction, Pose};

/// Two rows per interaction: first with `bee_id0` focal, then with `bee_id1`
/// focal. Entities without a profile get undefined metrics.
pub fn pivot(
    interactions: &[EnrichedInteraction],
    profiles: &HashMap<EntityId, EntityProfile>,
) -> Vec<FocalInteraction> {
    interactions
        .iter()
        .flat_map(|interaction| {
            let bee0 = Side::bee0(interaction, profiles);
            let bee1 = Side::bee1(interaction, profiles);
            [row(interaction, &bee0, &bee1), row(interaction, &bee1, &bee0)]
        })
        .collect()
}

struct Side {
    id: EntityId,
    profile: EntityProfile,
    pose: Pose,
    vel_change: Option<f64>,
    rel_change: Option<f64>,
}

impl Side {
    fn bee0(i: &EnrichedInteraction, profiles: &HashMap<EntityId, EntityProfile>) -> Self {
        Self {
            id: i.record.bee_id0,
            profile: profiles.get(&i.record.bee_id0).copied().unwrap_or_default(),
            pose: i.record.pose_start_bee0,
            vel_change: i.vel_change_bee0,
            rel_change: i.rel_change_bee0,
        }
    }

    fn bee1(i: &EnrichedInteraction, profiles: &HashMap<EntityId, EntityProfile>) -> Self {
        Self {
            id: i.record.bee_id1,
            profile: profiles.get(&i.record.bee_id1).copied().unwrap_or_default(),
            pose: i.record.pose_start_bee1,
            vel_change: i.vel_change_bee1,
            rel_change: i.rel_change_bee1,
        }
    }
}

fn row(i: &EnrichedInteraction, focal: &Side, other: &Side) -> FocalInteraction {
    FocalInteraction {
        bee_id_focal: focal.id,
        bee_id_non_focal: other.id,
        interaction_start: i.record.interaction_start,
        interaction_end: i.record.interaction_end,
        phase_focal: focal.profile.phase,
        phase_non_focal: other.profile.phase,
        age_focal: focal.profile.age,
        age_non_focal: other.profile.age,
        r_squared_focal: focal.profile.r_squared,
        r_squared_non_focal: other.profile.r_squared,
        x_pos_start_focal: focal.pose.x,
        y_pos_start_focal: focal.pose.y,
        x_pos_start_non_focal: other.pose.x,
        y_pos_start_non_focal: other.pose.y,
        theta_start_focal: Some(focal.pose.theta),
        theta_start_non_focal: Some(other.pose.theta),
        vel_change_bee_focal: focal.vel_change,
        vel_change_bee_non_focal: other.vel_change,
        rel_change_bee_focal: focal.rel_change,
        rel_change_bee_non_focal: other.rel_change,
    }
}

/// Reorient every row so the focal entity is the less rhythmic one (lower
/// `r_squared`). Rows with an undefined fit on either side are kept as is.
pub fn low_rhythmicity_focal(rows: Vec<FocalInteraction>) -> Vec<FocalInteraction> {
    rows.into_iter()
        .map(|row| match (row.r_squared_focal, row.r_squared_non_focal) {
            (Some(focal), Some(other)) if focal > other => row.swapped(),
            _ => row,
        })
        .collect()
}

/// Pose of `other` in the frame of `focal`: focal at the origin, facing angle 0.
pub fn egocentric(focal: Pose, other: Pose) -> Pose {
    let dx = other.x - focal.x;
    let dy = other.y - focal.y;
    let (sin, cos) = (-focal.theta).sin_cos();
    Pose {
        x: cos * dx - sin * dy,
        y: sin * dx + cos * dy,
        theta: other.theta - focal.theta,
    }
}
