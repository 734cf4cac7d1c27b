//! Influence tree nodes and the attributes they are created from.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hive_core::models::{EntityId, FocalInteraction};

/// Identity of a node within one tree.
///
/// `seq` separates nodes sharing an `(entity_id, timestamp)` pair: 0 for the
/// first inserted, 1 for the next, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeKey {
    pub entity_id: EntityId,
    pub timestamp: DateTime<Utc>,
    pub seq: u32,
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}#{}", self.entity_id, self.timestamp.to_rfc3339(), self.seq)
    }
}

/// Attributes of an entity at one instant, before it is placed in a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub entity_id: EntityId,
    pub timestamp: DateTime<Utc>,
    pub phase: Option<f64>,
    pub x_pos: f64,
    pub y_pos: f64,
    /// Focal speed change of the interaction that produced this node.
    pub velocity_change: Option<f64>,
    pub r_squared: Option<f64>,
    pub age: Option<f64>,
}

/// Root of an influence tree.
pub type Seed = NodeSpec;

impl NodeSpec {
    /// A bare seed with no attributes.
    pub fn at(entity_id: EntityId, timestamp: DateTime<Utc>) -> Self {
        Self {
            entity_id,
            timestamp,
            phase: None,
            x_pos: 0.0,
            y_pos: 0.0,
            velocity_change: None,
            r_squared: None,
            age: None,
        }
    }

    /// Seed from the focal side of an interaction, at its start.
    pub fn from_interaction(row: &FocalInteraction) -> Self {
        Self {
            entity_id: row.bee_id_focal,
            timestamp: row.interaction_start,
            phase: row.phase_focal,
            x_pos: row.x_pos_start_focal,
            y_pos: row.y_pos_start_focal,
            velocity_change: row.vel_change_bee_focal,
            r_squared: row.r_squared_focal,
            age: row.age_focal,
        }
    }

    /// Child candidate: the non-focal partner of an interaction that excited
    /// the focal entity.
    pub fn from_partner(row: &FocalInteraction) -> Self {
        Self {
            entity_id: row.bee_id_non_focal,
            timestamp: row.interaction_start,
            phase: row.phase_non_focal,
            x_pos: row.x_pos_start_non_focal,
            y_pos: row.y_pos_start_non_focal,
            velocity_change: row.vel_change_bee_focal,
            r_squared: row.r_squared_non_focal,
            age: row.age_non_focal,
        }
    }
}

/// A placed node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluenceNode {
    pub key: NodeKey,
    /// Distance from the root; the root is 0.
    pub depth: usize,
    pub phase: Option<f64>,
    pub x_pos: f64,
    pub y_pos: f64,
    pub velocity_change_from_parent: Option<f64>,
    pub r_squared: Option<f64>,
    pub age: Option<f64>,
}

impl InfluenceNode {
    pub(crate) fn from_spec(spec: &NodeSpec, seq: u32, depth: usize) -> Self {
        Self {
            key: NodeKey {
                entity_id: spec.entity_id,
                timestamp: spec.timestamp,
                seq,
            },
            depth,
            phase: spec.phase,
            x_pos: spec.x_pos,
            y_pos: spec.y_pos,
            velocity_change_from_parent: spec.velocity_change,
            r_squared: spec.r_squared,
            age: spec.age,
        }
    }

    pub fn entity_id(&self) -> EntityId {
        self.key.entity_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.key.timestamp
    }
}
