//! Candidate filtering
//!
//! Narrows a candidate set to the codes consistent with one observed feedback.

use crate::core::{Code, Feedback};

/// Keep the candidates that would have produced `observed` for `guess`
///
/// The guess itself is always dropped, even though it trivially scores as
/// solved against itself: a played guess is never offered again. Input order
/// is preserved, so a sorted candidate set stays sorted.
///
/// # Examples
/// ```
/// use mastermind_knuth::core::{Code, Feedback, GameConfig};
/// use mastermind_knuth::solver::{CodeSpace, filter_candidates};
///
/// let space = CodeSpace::generate(GameConfig::default());
/// let guess = space.first_guess();
///
/// // No 1s or 2s anywhere: only codes over {3, 4, 5, 6} remain
/// let remaining = filter_candidates(space.universe(), &guess, Feedback::new(0, 0));
/// assert_eq!(remaining.len(), 256);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, observed: Feedback) -> Vec<Code> {
    candidates
        .iter()
        .filter(|&candidate| candidate != guess)
        .filter(|&candidate| Feedback::calculate(guess, candidate) == observed)
        .copied()
        .collect()
}
