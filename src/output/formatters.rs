//! Formatting utilities for terminal output

use crate::core::{PLACEHOLDER, is_separator};

/// How a reveal cell should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Hidden,
    Separator,
    Letter,
}

/// Classify one character of a reveal
#[must_use]
pub fn cell_kind(c: char) -> CellKind {
    if c == PLACEHOLDER {
        CellKind::Hidden
    } else if is_separator(c) {
        CellKind::Separator
    } else {
        CellKind::Letter
    }
}

/// Character drawn for a reveal cell
///
/// Spaces in the word are drawn as `_` so word breaks stay visible.
#[must_use]
pub const fn cell_glyph(c: char) -> char {
    if c == ' ' { '_' } else { c }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Widest error bar; larger limits are scaled down to this many cells
pub const MAX_ERROR_BAR_WIDTH: usize = 20;

/// Format the error count as a bar, one cell per allowed error up to
/// `MAX_ERROR_BAR_WIDTH`
#[must_use]
pub fn error_bar(errors_used: u32, error_limit: u32) -> String {
    create_progress_bar(
        f64::from(errors_used),
        f64::from(error_limit),
        (error_limit as usize).min(MAX_ERROR_BAR_WIDTH),
    )
}
