//! Weighted interaction multigraph over `(entity, time)` events.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::Directed;
use serde::{Deserialize, Serialize};

use hive_core::models::{EntityId, FocalInteraction};

/// Which column of a focal interaction row weights its edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeWeightField {
    #[default]
    VelChangeBeeNonFocal,
    VelChangeBeeFocal,
    RelChangeBeeNonFocal,
    RelChangeBeeFocal,
}

impl EdgeWeightField {
    pub fn weight(&self, row: &FocalInteraction) -> Option<f64> {
        match self {
            Self::VelChangeBeeNonFocal => row.vel_change_bee_non_focal,
            Self::VelChangeBeeFocal => row.vel_change_bee_focal,
            Self::RelChangeBeeNonFocal => row.rel_change_bee_non_focal,
            Self::RelChangeBeeFocal => row.rel_change_bee_focal,
        }
    }
}

/// An entity at an instant: the focal side at interaction start, or the
/// non-focal side at interaction end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventNode {
    pub entity_id: EntityId,
    pub timestamp: DateTime<Utc>,
    pub age: Option<f64>,
}

impl EventNode {
    fn key(&self) -> EventKey {
        (self.entity_id, self.timestamp, self.age.map(f64::to_bits))
    }
}

type EventKey = (EntityId, DateTime<Utc>, Option<u64>);

/// One interaction, from the focal start event to the non-focal end event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEdge {
    pub weight: f64,
    pub interaction_start: DateTime<Utc>,
    pub interaction_end: DateTime<Utc>,
}

pub type InteractionStableGraph = StableGraph<EventNode, InteractionEdge, Directed>;

/// Multigraph with indexed access to event nodes.
pub struct InteractionGraph {
    pub graph: InteractionStableGraph,
    node_index: HashMap<EventKey, NodeIndex>,
    field: EdgeWeightField,
}

impl InteractionGraph {
    pub fn new(field: EdgeWeightField) -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
            field,
        }
    }

    /// Graph over all `rows`. Rows whose weight is undefined or non-finite
    /// add their events but no edge.
    pub fn from_interactions<'a, I>(rows: I, field: EdgeWeightField) -> Self
    where
        I: IntoIterator<Item = &'a FocalInteraction>,
    {
        let mut graph = Self::new(field);
        for row in rows {
            graph.add_interaction(row);
        }
        graph
    }

    /// Add one row. Returns whether an edge was created.
    pub fn add_interaction(&mut self, row: &FocalInteraction) -> bool {
        let source = self.ensure_node(EventNode {
            entity_id: row.bee_id_focal,
            timestamp: row.interaction_start,
            age: row.age_focal,
        });
        let target = self.ensure_node(EventNode {
            entity_id: row.bee_id_non_focal,
            timestamp: row.interaction_end,
            age: row.age_non_focal,
        });
        match self.field.weight(row).filter(|w| w.is_finite()) {
            Some(weight) => {
                self.graph.add_edge(
                    source,
                    target,
                    InteractionEdge {
                        weight,
                        interaction_start: row.interaction_start,
                        interaction_end: row.interaction_end,
                    },
                );
                true
            }
            None => false,
        }
    }

    /// Get or create the node for `event`.
    pub fn ensure_node(&mut self, event: EventNode) -> NodeIndex {
        let key = event.key();
        if let Some(&idx) = self.node_index.get(&key) {
            return idx;
        }
        let idx = self.graph.add_node(event);
        self.node_index.insert(key, idx);
        idx
    }

    pub fn get_node(
        &self,
        entity_id: EntityId,
        timestamp: DateTime<Utc>,
        age: Option<f64>,
    ) -> Option<NodeIndex> {
        self.node_index
            .get(&(entity_id, timestamp, age.map(f64::to_bits)))
            .copied()
    }

    /// Weights of edges leaving `idx`.
    pub fn out_weights(&self, idx: NodeIndex) -> Vec<f64> {
        self.graph.edges(idx).map(|e| e.weight().weight).collect()
    }

    pub fn weight_field(&self) -> EdgeWeightField {
        self.field
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for InteractionGraph {
    fn default() -> Self {
        Self::new(EdgeWeightField::default())
    }
}
