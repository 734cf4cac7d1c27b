//! One influence tree per seed.

use rayon::prelude::*;

use hive_core::errors::InfluenceError;

use crate::discovery::InteractionIndex;
use crate::tree::{BuildOutcome, Seed, TreeBuilder};

/// Trees in seed order. A tree's position is its `tree_id`.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    trees: Vec<BuildOutcome>,
}

impl Forest {
    /// Build every seed's tree. Seeds are independent and built in parallel;
    /// the output order matches `seeds`.
    pub fn build(
        builder: &TreeBuilder,
        index: &InteractionIndex,
        seeds: &[Seed],
    ) -> Result<Self, InfluenceError> {
        if seeds.is_empty() {
            return Err(InfluenceError::NoSeeds);
        }
        let trees = seeds
            .par_iter()
            .map(|seed| builder.build(index, seed))
            .collect();
        Ok(Self { trees })
    }

    /// Sequential variant of [`Forest::build`].
    pub fn build_sequential(
        builder: &TreeBuilder,
        index: &InteractionIndex,
        seeds: &[Seed],
    ) -> Result<Self, InfluenceError> {
        if seeds.is_empty() {
            return Err(InfluenceError::NoSeeds);
        }
        let trees = seeds.iter().map(|seed| builder.build(index, seed)).collect();
        Ok(Self { trees })
    }

    pub fn trees(&self) -> &[BuildOutcome] {
        &self.trees
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn truncated_count(&self) -> usize {
        self.trees.iter().filter(|t| t.truncated).count()
    }
}
