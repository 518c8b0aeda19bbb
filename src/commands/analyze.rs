//! Guess analysis command
//!
//! Shows how a single guess splits the full code universe.

use crate::core::{Code, CodeError, Feedback};
use crate::solver::Solver;
use crate::solver::minimax::group_by_feedback;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    /// Feedback classes in canonical order with their sizes
    pub partition: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    pub total_candidates: usize,
    pub is_opening: bool,
}

/// Analyze how a guess partitions every code in the universe
///
/// # Errors
///
/// Returns an error if the guess does not parse as a code for the solver's
/// configuration.
pub fn analyze_guess(guess: &str, solver: &Solver) -> Result<AnalysisResult, CodeError> {
    let guess = Code::parse(guess, solver.config())?;
    let universe = solver.space().universe();

    let mut partition: Vec<(Feedback, usize)> =
        group_by_feedback(&guess, universe).into_iter().collect();
    partition.sort_unstable_by_key(|(feedback, _)| *feedback);

    let worst_case = partition.iter().map(|(_, n)| *n).max().unwrap_or(0);

    Ok(AnalysisResult {
        guess,
        partition,
        worst_case,
        total_candidates: universe.len(),
        is_opening: guess == solver.space().first_guess(),
    })
}
