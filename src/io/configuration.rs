//! Analysis constants and runtime configuration defaults

// Report settings
/// Number of n-grams surfaced by every ranked report
pub const TOP_NGRAMS_REPORTED: usize = 5;
/// Delimiter joining the tokens of an n-gram
pub const NGRAM_DELIMITER: &str = " ";

// Placement bounds inside the rendered viewport
/// Smallest x coordinate a label may start at
pub const CANVAS_MIN_X: i32 = 200;
/// Largest x coordinate a label may extend to
pub const CANVAS_MAX_X: i32 = 1720;
/// Smallest y coordinate a label may start at
pub const CANVAS_MIN_Y: i32 = 100;
/// Largest y coordinate a label may extend to
pub const CANVAS_MAX_Y: i32 = 980;

/// Width of the rendered SVG viewport
pub const VIEWPORT_WIDTH: u32 = 1920;
/// Height of the rendered SVG viewport
pub const VIEWPORT_HEIGHT: u32 = 1080;

// Salience ladder, checked from the top down
/// Minimum relative weight of the largest tier
pub const TIER_TOP_THRESHOLD: f64 = 0.90;
/// Minimum relative weight of the second tier
pub const TIER_HIGH_THRESHOLD: f64 = 0.75;
/// Minimum relative weight of the third tier
pub const TIER_MID_THRESHOLD: f64 = 0.50;

/// Relative weight below which words are left out of the cloud
pub const CLOUD_CUTOFF: f64 = 0.20;

// Bounds the collision retry loop; one attempt per detected overlap
/// Default number of collision retries before a label is exhausted
pub const DEFAULT_MAX_ATTEMPTS: usize = 200;

/// Edge length of a spatial index cell in canvas units
pub const GRID_CELL_SIZE: i32 = 64;

/// Fixed seed for reproducible layouts
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// File name of the aggregate cloud when no target is given
pub const DEFAULT_CLOUD_STEM: &str = "word_cloud";
/// Directory receiving per-file clouds when no target is given
pub const DEFAULT_CLOUD_DIRECTORY: &str = "word_clouds";
/// Extension appended to every rendered cloud
pub const CLOUD_EXTENSION: &str = "svg";

// Progress bar display settings
/// Minimum number of items before a progress bar is shown
pub const PROGRESS_MIN_ITEMS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Logging
/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";
