//! Carousel-wide constants.
//!
//! Centralizes tuning values and the names of the styling hooks the
//! controller publishes, so hosts and configuration share one source.

// ============================================================================
// Gesture Tuning
// ============================================================================

/// Net horizontal displacement (in pixels) a drag must exceed to navigate.
/// The comparison is strict: a drag of exactly this distance is a click.
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = 30.0;

/// Delay after a drag ends before item clicks are honoured again.
pub const DEFAULT_SUPPRESSION_DELAY_MS: u64 = 100;

// ============================================================================
// Styling Hooks
// ============================================================================

/// Layout variable receiving the tallest item title, in pixels.
pub const TITLE_HEIGHT_VARIABLE: &str = "--min-title-height";

/// Class toggled on every item whose position precedes the current index.
pub const PASSED_CLASS: &str = "is-passed";

/// Class toggled on the content wrapper while a drag is in progress.
pub const GRABBING_CLASS: &str = "is-grabbing";

/// Touch action applied to the root when a drag begins: native vertical
/// panning stays available while horizontal movement is captured.
pub const DRAG_TOUCH_ACTION: &str = "pan-y";

// ============================================================================
// Profiling
// ============================================================================

/// Budget for a single geometry recompute before a warning is logged.
pub const RECOMPUTE_BUDGET_MS: f64 = 4.0;

/// Budget for a single event dispatch before a warning is logged.
pub const DISPATCH_BUDGET_MS: f64 = 1.0;
