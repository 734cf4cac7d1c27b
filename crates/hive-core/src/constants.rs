/// Hive system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard upper bound on influence-tree depth.
pub const MAX_TREE_DEPTH: usize = 200;

/// Category label of synthetic gap episodes.
pub const GAP_CATEGORY: &str = "Gap";

/// Category label assigned to proximity detections.
pub const INTERACTION_CATEGORY: &str = "interaction";

/// Separator between the two entity ids of a pair key.
pub const PAIR_KEY_SEPARATOR: char = '_';
