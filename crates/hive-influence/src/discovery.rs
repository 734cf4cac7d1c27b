//! Child discovery: which interactions could have excited an entity shortly
//! before a given instant.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use hive_core::errors::InfluenceError;
use hive_core::models::{EntityId, FocalInteraction};
use hive_core::time::saturating_sub;

use crate::tree::NodeSpec;

/// Look-back interval relative to a node at `t` with threshold `thr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// `(t - thr, t]`, used for the seed.
    Root,
    /// `[t - thr, t)`, used for every other node.
    Descendant,
}

/// Focal interaction rows grouped by focal entity, sorted by start time.
#[derive(Debug, Clone, Default)]
pub struct InteractionIndex {
    by_focal: HashMap<EntityId, Vec<FocalInteraction>>,
    len: usize,
}

impl InteractionIndex {
    /// Index typed rows. Rows sharing a start time keep their input order.
    pub fn new(rows: Vec<FocalInteraction>) -> Result<Self, InfluenceError> {
        if rows.is_empty() {
            return Err(InfluenceError::NoInteractions);
        }
        let len = rows.len();
        let mut by_focal: HashMap<EntityId, Vec<FocalInteraction>> = HashMap::new();
        for row in rows {
            by_focal.entry(row.bee_id_focal).or_default().push(row);
        }
        for rows in by_focal.values_mut() {
            rows.sort_by_key(|row| row.interaction_start);
        }
        Ok(Self { by_focal, len })
    }

    /// Index untyped rows. A missing column or a wrongly typed value is
    /// reported with the offending row number.
    pub fn from_json_rows(rows: &[Value]) -> Result<Self, InfluenceError> {
        let typed = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                serde_json::from_value::<FocalInteraction>(row.clone()).map_err(|e| {
                    InfluenceError::MalformedRecord {
                        row: i,
                        reason: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(typed)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Rows with `entity` focal whose start falls in `window` around `t`.
    pub fn window(
        &self,
        entity: EntityId,
        t: DateTime<Utc>,
        threshold: Duration,
        window: Window,
    ) -> &[FocalInteraction] {
        let Some(rows) = self.by_focal.get(&entity) else {
            return &[];
        };
        let from = saturating_sub(t, threshold);
        let (lo, hi) = match window {
            Window::Root => (
                rows.partition_point(|r| r.interaction_start <= from),
                rows.partition_point(|r| r.interaction_start <= t),
            ),
            Window::Descendant => (
                rows.partition_point(|r| r.interaction_start < from),
                rows.partition_point(|r| r.interaction_start < t),
            ),
        };
        &rows[lo..hi.max(lo)]
    }

    /// Partners that excited `entity` within `window`, as child candidates.
    /// An undefined speed change never qualifies.
    pub fn candidates(
        &self,
        entity: EntityId,
        t: DateTime<Utc>,
        threshold: Duration,
        vel_change_threshold: f64,
        window: Window,
    ) -> Vec<NodeSpec> {
        self.window(entity, t, threshold, window)
            .iter()
            .filter(|row| row.excites_focal(vel_change_threshold))
            .map(NodeSpec::from_partner)
            .collect()
    }

    /// All rows, grouped by focal entity in ascending id order.
    pub fn rows(&self) -> Vec<&FocalInteraction> {
        let mut entities: Vec<_> = self.by_focal.keys().copied().collect();
        entities.sort_unstable();
        entities
            .into_iter()
            .flat_map(|e| self.by_focal[&e].iter())
            .collect()
    }
}
