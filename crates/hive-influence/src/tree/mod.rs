//! Influence trees: nodes, the owning arena, and the breadth-first builder.

pub mod arena;
pub mod builder;
pub mod node;

pub use arena::{InfluenceGraph, InfluenceTree};
pub use builder::{BuildOutcome, TreeBuilder};
pub use node::{InfluenceNode, NodeKey, NodeSpec, Seed};
