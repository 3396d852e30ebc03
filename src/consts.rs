//! Shared constants for the ratiolock crate.

// ── Dimensions ──────────────────────────────────────────────────

/// Absolute tolerance when comparing node dimensions for uniformity.
pub const DIMENSION_TOLERANCE: f64 = 0.01;

/// Smallest width or height the document accepts on a resize.
pub const MIN_NODE_SIZE: f64 = 0.01;

// ── UI panel ────────────────────────────────────────────────────

/// Default width of the plugin panel, in CSS pixels.
pub const DEFAULT_UI_WIDTH: u32 = 350;

/// Default height of the plugin panel, in CSS pixels.
pub const DEFAULT_UI_HEIGHT: u32 = 540;

// ── Notifications ───────────────────────────────────────────────

pub const NOTIFY_NOT_NUMBERS: &str = "Width and height must be numbers.";
pub const NOTIFY_NOTHING_RESIZABLE: &str = "Select at least one object that can be resized.";
pub const NOTIFY_APPLIED_AND_LOCKED: &str = "Applied ratio and locked proportions.";
pub const NOTIFY_APPLIED: &str = "Applied ratio to selection.";
