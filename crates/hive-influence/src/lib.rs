//! # hive-influence
//!
//! The "who set this bee in motion" engine. Searches backward in time from a
//! seed through interactions that excited the focal entity, builds one
//! influence tree per seed over a `petgraph` arena, and flattens the forest
//! into path records. Also builds the weighted interaction multigraph.

pub mod discovery;
pub mod engine;
pub mod flatten;
pub mod forest;
pub mod graph;
pub mod tree;

pub use discovery::{InteractionIndex, Window};
pub use engine::InfluenceEngine;
pub use flatten::{flatten_forest, PathRecord};
pub use forest::Forest;
pub use graph::{EdgeWeightField, InteractionGraph};
pub use tree::{BuildOutcome, InfluenceNode, InfluenceTree, NodeKey, NodeSpec, Seed, TreeBuilder};
