//! Forest → one row per (tree, path, node).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use hive_core::models::EntityId;
use hive_core::tracing_setup::events;

use crate::forest::Forest;
use crate::tree::InfluenceTree;

/// A node as seen along one root-to-leaf path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    pub bee_id: EntityId,
    pub datetime: DateTime<Utc>,
    pub phase: Option<f64>,
    pub x_pos: f64,
    pub y_pos: f64,
    pub vel_change_parent: Option<f64>,
    pub r_squared: Option<f64>,
    pub age: Option<f64>,
    pub is_root: bool,
    pub depth: usize,
    pub is_leaf: bool,
    pub n_children: usize,
    pub parent: Option<EntityId>,
    pub tree_id: usize,
    /// `parent.datetime - datetime`; zero at the root. Serialized in seconds.
    #[serde(serialize_with = "as_seconds", deserialize_with = "from_seconds")]
    pub time_gap: Duration,
    pub path_id: usize,
}

fn as_seconds<S: Serializer>(gap: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    let secs = match gap.num_microseconds() {
        Some(micros) => micros as f64 / 1e6,
        None => gap.num_milliseconds() as f64 / 1e3,
    };
    serializer.serialize_f64(secs)
}

fn from_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let secs = f64::deserialize(deserializer)?;
    Ok(Duration::microseconds((secs * 1e6).round() as i64))
}

/// Rows for one tree. Paths are numbered from 0 in leaf insertion order.
pub fn flatten_tree(tree: &InfluenceTree, tree_id: usize) -> Vec<PathRecord> {
    let mut rows = Vec::new();
    for (path_id, path) in tree.paths_to_leaves().into_iter().enumerate() {
        for (position, &idx) in path.iter().enumerate() {
            let node = tree.node(idx);
            let parent = position.checked_sub(1).map(|p| tree.node(path[p]));
            rows.push(PathRecord {
                bee_id: node.entity_id(),
                datetime: node.timestamp(),
                phase: node.phase,
                x_pos: node.x_pos,
                y_pos: node.y_pos,
                vel_change_parent: node.velocity_change_from_parent,
                r_squared: node.r_squared,
                age: node.age,
                is_root: parent.is_none(),
                depth: node.depth,
                is_leaf: tree.is_leaf(idx),
                n_children: tree.children(idx).len(),
                parent: parent.map(|p| p.entity_id()),
                tree_id,
                time_gap: parent.map_or_else(Duration::zero, |p| p.timestamp() - node.timestamp()),
                path_id,
            });
        }
    }
    rows
}

/// Rows for every tree, numbered in forest order.
pub fn flatten_forest(forest: &Forest) -> Vec<PathRecord> {
    let mut paths = 0;
    let rows: Vec<PathRecord> = forest
        .trees()
        .iter()
        .enumerate()
        .flat_map(|(tree_id, outcome)| {
            let rows = flatten_tree(&outcome.tree, tree_id);
            paths += rows.iter().filter(|r| r.is_leaf).count();
            rows
        })
        .collect();
    events::forest_flattened(forest.len(), paths, rows.len());
    rows
}
