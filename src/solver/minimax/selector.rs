//! Minimax-based guess selection strategy
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;

/// Select the next guess by minimizing worst-case remaining candidates
///
/// `untried` is scanned in order and must be in the universe's sorted order;
/// `candidates` must be sorted as well. Returns the chosen guess and its
/// worst case, or `None` if `untried` is empty.
///
/// # Tie-break
/// A later guess with the same worst case replaces the current choice only
/// when the current choice can no longer be the secret and the later guess
/// can. Otherwise the earliest minimizer wins.
///
/// # Examples
/// ```
/// use mastermind_knuth::core::{Code, GameConfig};
/// use mastermind_knuth::solver::minimax::select_next;
///
/// let config = GameConfig::new(2, 3, true).unwrap();
/// let parse = |t: &str| Code::parse(t, &config).unwrap();
///
/// let candidates = vec![parse("12"), parse("21")];
/// let untried = vec![parse("11"), parse("13"), parse("21")];
///
/// // 13 and 21 both split the candidates, but 21 might be the secret
/// let (best, worst) = select_next(&candidates, &untried).unwrap();
/// assert_eq!(best, parse("21"));
/// assert_eq!(worst, 1);
/// ```
#[must_use]
pub fn select_next(candidates: &[Code], untried: &[Code]) -> Option<(Code, usize)> {
    let is_candidate = |code: &Code| candidates.binary_search(code).is_ok();
    let mut best: Option<(Code, usize)> = None;

    for &guess in untried {
        let max_remaining = calculate_max_remaining(&guess, candidates);

        best = match best {
            None => Some((guess, max_remaining)),
            Some((_, min)) if max_remaining < min => Some((guess, max_remaining)),
            Some((current, min))
                if max_remaining == min && !is_candidate(&current) && is_candidate(&guess) =>
            {
                Some((guess, max_remaining))
            }
            kept => kept,
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::solver::CodeSpace;

    fn codes(texts: &[&str]) -> Vec<Code> {
        let config = GameConfig::new(2, 3, true).unwrap();
        texts
            .iter()
            .map(|t| Code::parse(t, &config).unwrap())
            .collect()
    }

    #[test]
    fn selects_lowest_max_remaining() {
        let candidates = codes(&["12", "21"]);
        // 11 leaves both candidates together, 12 separates them
        let (best, worst) = select_next(&candidates, &codes(&["11", "12"])).unwrap();
        assert_eq!(best, codes(&["12"])[0]);
        assert_eq!(worst, 1);
    }

    #[test]
    fn tie_keeps_earlier_candidate() {
        // 12 is a candidate; 13 ties but cannot be the secret
        let candidates = codes(&["12", "21"]);
        let (best, _) = select_next(&candidates, &codes(&["12", "13"])).unwrap();
        assert_eq!(best, codes(&["12"])[0]);
    }

    #[test]
    fn tie_prefers_later_candidate_over_non_candidate() {
        let candidates = codes(&["12", "21"]);
        let (best, _) = select_next(&candidates, &codes(&["13", "21"])).unwrap();
        assert_eq!(best, codes(&["21"])[0]);
    }

    #[test]
    fn tie_between_non_candidates_keeps_earliest() {
        let candidates = codes(&["12", "21"]);
        let (best, worst) = select_next(&candidates, &codes(&["13", "31"])).unwrap();
        assert_eq!(best, codes(&["13"])[0]);
        assert_eq!(worst, 1);
    }

    #[test]
    fn tie_between_candidates_keeps_earliest() {
        let candidates = codes(&["12", "21"]);
        let (best, _) = select_next(&candidates, &codes(&["12", "21"])).unwrap();
        assert_eq!(best, codes(&["12"])[0]);
    }

    #[test]
    fn strictly_better_non_candidate_still_wins() {
        // Candidates 11, 12, 13 with untried [11, 23]:
        // 11 scores B2W0, B1W0, B1W0 -> worst 2
        // 23 scores B0W0, B0W1, B1W0 -> worst 1
        let candidates = codes(&["11", "12", "13"]);
        let (best, worst) = select_next(&candidates, &codes(&["11", "23"])).unwrap();
        assert_eq!(best, codes(&["23"])[0]);
        assert_eq!(worst, 1);
    }

    #[test]
    fn returns_none_when_nothing_untried() {
        let candidates = codes(&["12"]);
        assert!(select_next(&candidates, &[]).is_none());
    }

    #[test]
    fn selection_is_deterministic() {
        let space = CodeSpace::generate(GameConfig::default());
        let candidates: Vec<Code> = space.universe().iter().step_by(7).copied().collect();
        let first = select_next(&candidates, space.universe());
        let second = select_next(&candidates, space.universe());
        assert_eq!(first, second);
    }
}
