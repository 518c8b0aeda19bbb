//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible feedback.

use crate::core::{Code, FEEDBACK_BUCKETS, Feedback};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each possible feedback that could result from this guess:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use mastermind_knuth::core::GameConfig;
/// use mastermind_knuth::solver::CodeSpace;
/// use mastermind_knuth::solver::minimax::calculate_max_remaining;
///
/// let space = CodeSpace::generate(GameConfig::default());
///
/// // 1122 leaves at worst the 256 codes built from 3, 4, 5 and 6
/// let max_remaining = calculate_max_remaining(&space.first_guess(), space.universe());
/// assert_eq!(max_remaining, 256);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    // Hot path: a dense histogram avoids hashing on every evaluation
    let mut counts = [0usize; FEEDBACK_BUCKETS];

    for candidate in candidates {
        counts[Feedback::calculate(guess, candidate).bucket()] += 1;
    }

    counts.iter().max().copied().unwrap_or(0)
}

/// Group candidates by the feedback they produce with the guess
///
/// # Examples
/// ```
/// use mastermind_knuth::core::{Feedback, GameConfig};
/// use mastermind_knuth::solver::CodeSpace;
/// use mastermind_knuth::solver::minimax::group_by_feedback;
///
/// let space = CodeSpace::generate(GameConfig::default());
/// let groups = group_by_feedback(&space.first_guess(), space.universe());
///
/// assert_eq!(groups[&Feedback::new(4, 0)], 1);
/// assert_eq!(groups.values().sum::<usize>(), 1296);
/// ```
#[must_use]
pub fn group_by_feedback(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::calculate(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}
