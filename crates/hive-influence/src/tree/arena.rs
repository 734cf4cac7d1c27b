//! petgraph arena holding one influence tree.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use hive_core::models::EntityId;

use super::node::{InfluenceNode, NodeKey, NodeSpec};

/// Edges point from parent to child.
pub type InfluenceGraph = DiGraph<InfluenceNode, ()>;

/// A rooted tree of influence nodes with O(1) lookup by [`NodeKey`].
#[derive(Debug, Clone)]
pub struct InfluenceTree {
    graph: InfluenceGraph,
    node_index: HashMap<NodeKey, NodeIndex>,
    sequences: HashMap<(EntityId, DateTime<Utc>), u32>,
    root: NodeIndex,
}

impl InfluenceTree {
    /// A tree holding only the root.
    pub fn new(seed: &NodeSpec) -> Self {
        let mut tree = Self {
            graph: DiGraph::new(),
            node_index: HashMap::new(),
            sequences: HashMap::new(),
            root: NodeIndex::new(0),
        };
        tree.root = tree.insert(seed, 0);
        tree
    }

    fn insert(&mut self, spec: &NodeSpec, depth: usize) -> NodeIndex {
        let seq = self
            .sequences
            .entry((spec.entity_id, spec.timestamp))
            .or_insert(0);
        let node = InfluenceNode::from_spec(spec, *seq, depth);
        *seq += 1;
        let key = node.key;
        let idx = self.graph.add_node(node);
        self.node_index.insert(key, idx);
        idx
    }

    /// Attach a new child under `parent`.
    pub fn add_child(&mut self, parent: NodeIndex, spec: &NodeSpec) -> NodeIndex {
        let depth = self.graph[parent].depth + 1;
        let child = self.insert(spec, depth);
        self.graph.add_edge(parent, child, ());
        child
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn node(&self, idx: NodeIndex) -> &InfluenceNode {
        &self.graph[idx]
    }

    pub fn get(&self, key: &NodeKey) -> Option<NodeIndex> {
        self.node_index.get(key).copied()
    }

    /// Children in insertion order.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut children: Vec<_> = self.graph.neighbors(idx).collect();
        children.sort_unstable();
        children
    }

    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .next()
    }

    pub fn is_leaf(&self, idx: NodeIndex) -> bool {
        self.graph.neighbors(idx).next().is_none()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &InfluenceNode)> + '_ {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    pub fn leaves(&self) -> Vec<NodeIndex> {
        self.graph
            .node_indices()
            .filter(|&idx| self.is_leaf(idx))
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Depth of the deepest node.
    pub fn depth(&self) -> usize {
        self.graph
            .node_weights()
            .map(|node| node.depth)
            .max()
            .unwrap_or(0)
    }

    /// Whether `entity` occurs on the path from `idx` up to the root, `idx` included.
    pub fn path_contains_entity(&self, idx: NodeIndex, entity: EntityId) -> bool {
        let mut cursor = Some(idx);
        while let Some(current) = cursor {
            if self.graph[current].entity_id() == entity {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Every root-to-leaf path, ordered by when each leaf was inserted.
    pub fn paths_to_leaves(&self) -> Vec<Vec<NodeIndex>> {
        self.leaves()
            .into_iter()
            .map(|leaf| {
                let mut path = vec![leaf];
                let mut cursor = self.parent(leaf);
                while let Some(idx) = cursor {
                    path.push(idx);
                    cursor = self.parent(idx);
                }
                path.reverse();
                path
            })
            .collect()
    }

    pub fn graph(&self) -> &InfluenceGraph {
        &self.graph
    }
}
