//! Minimax guess selection
//!
//! Implements Knuth's worst-case minimization rule for Mastermind.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, group_by_feedback};
pub use selector::select_next;
