// Single source of truth for all default values.

// --- Segmenter ---
pub const DEFAULT_MIN_GAP_MS: u64 = 2_000;
pub const DEFAULT_MIN_EVENT_DURATION_MS: u64 = 1_000;
pub const DEFAULT_FILL_GAPS: bool = false;
pub const TIMELINE_MIN_GAP_MS: u64 = 1_000;

// --- Field names of generic detection rows ---
pub const DEFAULT_TIME_FIELD: &str = "time";
pub const DEFAULT_KEY_FIELD: &str = "y";
pub const DEFAULT_CATEGORY_FIELD: &str = "color";
pub const DEFAULT_LOC_INFO_0_FIELD: &str = "loc_info_0";
pub const DEFAULT_LOC_INFO_1_FIELD: &str = "loc_info_1";

// --- Velocity ---
pub const DEFAULT_VELOCITY_WINDOW_MS: u64 = 30_000;

// --- Influence ---
pub const DEFAULT_TIME_THRESHOLD_MS: u64 = 60_000;
pub const DEFAULT_VEL_CHANGE_THRESHOLD: f64 = 0.0;
pub const DEFAULT_FORBID_REVISITS: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
