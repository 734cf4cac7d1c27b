//! Breadth-first backward expansion of one influence tree.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use tracing::debug;

use hive_core::config::InfluenceConfig;
use hive_core::constants::MAX_TREE_DEPTH;
use hive_core::tracing_setup::events;

use super::arena::InfluenceTree;
use super::node::{NodeSpec, Seed};
use crate::discovery::{InteractionIndex, Window};

/// A finished tree plus how its expansion ended.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub tree: InfluenceTree,
    /// A node at the depth cap still had eligible children.
    pub truncated: bool,
    /// Depth of the deepest node.
    pub depth: usize,
}

/// Expands seeds into influence trees under an [`InfluenceConfig`].
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    config: InfluenceConfig,
}

impl TreeBuilder {
    /// `max_depth` is clamped to [`MAX_TREE_DEPTH`].
    pub fn new(mut config: InfluenceConfig) -> Self {
        config.max_depth = config.max_depth.min(MAX_TREE_DEPTH);
        Self { config }
    }

    pub fn config(&self) -> &InfluenceConfig {
        &self.config
    }

    /// Build the tree rooted at `seed`.
    ///
    /// The root is always expanded; other nodes only while they lie after
    /// `time_stop`. A root left childless by its own window is expanded once
    /// more like any other leaf. Nodes at `max_depth` are never expanded.
    pub fn build(&self, index: &InteractionIndex, seed: &Seed) -> BuildOutcome {
        let mut tree = InfluenceTree::new(seed);
        let mut frontier = VecDeque::from([tree.root()]);
        let mut truncated = false;

        while let Some(idx) = frontier.pop_front() {
            let node = tree.node(idx);
            let (entity, timestamp, depth) = (node.entity_id(), node.timestamp(), node.depth);
            let window = if idx == tree.root() {
                Window::Root
            } else if self.config.within_horizon(timestamp) {
                Window::Descendant
            } else {
                continue;
            };

            let mut candidates = self.discover(index, &tree, idx, window);
            if candidates.is_empty()
                && window == Window::Root
                && self.config.within_horizon(timestamp)
            {
                candidates = self.discover(index, &tree, idx, Window::Descendant);
            }
            if candidates.is_empty() {
                continue;
            }
            if depth >= self.config.max_depth {
                truncated = true;
                continue;
            }

            debug!(
                entity,
                depth,
                children = candidates.len(),
                "expanding influence node"
            );
            for candidate in &candidates {
                let child = tree.add_child(idx, candidate);
                frontier.push_back(child);
            }
        }

        let depth = tree.depth();
        events::tree_built(seed.entity_id, tree.node_count(), depth);
        if truncated {
            events::tree_truncated(seed.entity_id, self.config.max_depth);
        }
        BuildOutcome {
            tree,
            truncated,
            depth,
        }
    }

    fn discover(
        &self,
        index: &InteractionIndex,
        tree: &InfluenceTree,
        idx: NodeIndex,
        window: Window,
    ) -> Vec<NodeSpec> {
        let node = tree.node(idx);
        let mut candidates = index.candidates(
            node.entity_id(),
            node.timestamp(),
            self.config.time_threshold(),
            self.config.vel_change_threshold,
            window,
        );
        if self.config.forbid_revisits {
            candidates.retain(|c| !tree.path_contains_entity(idx, c.entity_id));
        }
        candidates
    }
}
