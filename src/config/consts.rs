// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Tables
pub const GENERAL_TABLE_CLASS: &str = "rally_results";
pub const STAGE_TABLE_CLASS: &str = "rally_results_stres_right";
pub const SELECTED_TABLE_INDEX: usize = 1; // first match is a header duplicate
pub const GENERAL_MIN_COLUMNS: usize = 7;
pub const STAGE_MIN_COLUMNS: usize = 5;

// Tracks
pub const LEG_COUNT: u32 = 6;
pub const TRACKS_PER_LEG: usize = 3;

// Poll loop
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

// Query output
pub const STAGE_TOP_N: usize = 5;
pub const GENERAL_TOP_N: usize = 10;
pub const NOT_AVAILABLE: &str = "N/A";
