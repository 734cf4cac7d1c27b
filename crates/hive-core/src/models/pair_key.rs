//! Unordered entity-pair identifier with the `"idA_idB"` text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::constants::PAIR_KEY_SEPARATOR;
use crate::errors::EpisodeError;

/// Unordered pair of entities. Always stored with the lower id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PairKey {
    low: EntityId,
    high: EntityId,
}

impl PairKey {
    /// Canonical key for the pair `(a, b)` in either order.
    pub fn new(a: EntityId, b: EntityId) -> Self {
        Self::ordered(a, b).0
    }

    /// Canonical key plus whether `(a, b)` had to be swapped to reach it.
    pub fn ordered(a: EntityId, b: EntityId) -> (Self, bool) {
        if a <= b {
            (Self { low: a, high: b }, false)
        } else {
            (Self { low: b, high: a }, true)
        }
    }

    /// Entity whose pose is carried in the `a` slot of timeline items and episodes.
    pub fn first(&self) -> EntityId {
        self.low
    }

    /// Entity whose pose is carried in the `b` slot.
    pub fn second(&self) -> EntityId {
        self.high
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.low == entity || self.high == entity
    }

    /// Parse `"idA_idB"`, reporting whether the written order was swapped.
    pub fn parse_ordered(s: &str) -> Result<(Self, bool), EpisodeError> {
        let invalid = || EpisodeError::InvalidPairKey { key: s.to_string() };
        let (a, b) = s.split_once(PAIR_KEY_SEPARATOR).ok_or_else(invalid)?;
        let a = a.trim().parse::<EntityId>().map_err(|_| invalid())?;
        let b = b.trim().parse::<EntityId>().map_err(|_| invalid())?;
        Ok(Self::ordered(a, b))
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.low, PAIR_KEY_SEPARATOR, self.high)
    }
}

impl FromStr for PairKey {
    type Err = EpisodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_ordered(s).map(|(key, _)| key)
    }
}

impl From<PairKey> for String {
    fn from(key: PairKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for PairKey {
    type Error = EpisodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
