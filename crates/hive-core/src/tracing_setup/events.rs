//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the end of a segmentation pass.
pub fn segmentation_completed(items: usize, keys: usize, episodes: usize) {
    tracing::info!(
        event = "segmentation_completed",
        items = items,
        keys = keys,
        episodes = episodes,
        "segmentation completed"
    );
}

/// Log the extraction of interaction records.
pub fn interactions_extracted(records: usize) {
    tracing::info!(
        event = "interactions_extracted",
        records = records,
        "interaction records extracted"
    );
}

/// Log a completed influence tree.
pub fn tree_built(root_entity: u64, nodes: usize, depth: usize) {
    tracing::debug!(
        event = "tree_built",
        root_entity = root_entity,
        nodes = nodes,
        depth = depth,
        "influence tree built"
    );
}

/// Log a tree whose expansion stopped at the depth cap.
pub fn tree_truncated(root_entity: u64, max_depth: usize) {
    tracing::warn!(
        event = "tree_truncated",
        root_entity = root_entity,
        max_depth = max_depth,
        "influence tree truncated at depth cap"
    );
}

/// Log the flattening of a forest into path records.
pub fn forest_flattened(trees: usize, paths: usize, rows: usize) {
    tracing::info!(
        event = "forest_flattened",
        trees = trees,
        paths = paths,
        rows = rows,
        "forest flattened into path records"
    );
}
