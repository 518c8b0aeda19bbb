//! Formatting utilities for terminal output

use crate::solver::{StrategyTree, TraceRow};
use std::fmt::Write;

/// Format one solve row as `row: guess : Bn Wn`
#[must_use]
pub fn format_progress_row(row: &TraceRow) -> String {
    format!(
        "{}: {} : B{} W{}",
        row.row,
        row.guess,
        row.feedback.exact(),
        row.feedback.partial()
    )
}

/// Render the strategy as an indented outline
///
/// The root guess sits on its own line. Every other line is indented with one
/// tab per level and starts with the feedback that leads to it.
#[must_use]
pub fn render_outline(tree: &StrategyTree) -> String {
    let mut out = String::new();

    for entry in tree.outline() {
        match entry.feedback {
            None => {
                let _ = writeln!(out, "{}", entry.guess);
            }
            Some(feedback) => {
                let _ = writeln!(out, "{}{feedback} {}", "\t".repeat(entry.depth), entry.guess);
            }
        }
    }

    out
}

/// Create a bar of `width` cells filled in proportion to `value / max`
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).max(usize::from(value > 0)).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
