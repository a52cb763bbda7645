//! Series alignment and zoom windows.
//!
//! - `aligner`: pad named series onto a shared timeline, with the connector rule
//! - `window`: zoom windows and range presets
//! - `scan`: null-aware position lookups

/// Padding series onto a shared timeline.
pub mod aligner;
/// Null-aware scans over value sequences.
pub mod scan;
/// Zoom windows and symbolic range presets.
pub mod window;

pub use aligner::{align, align_labeled};
pub use scan::{last_non_null, locate_first_non_null, locate_last_non_null};
pub use window::{DEFAULT_LOOKAHEAD, RangePreset, compute_window, window_for_preset};
