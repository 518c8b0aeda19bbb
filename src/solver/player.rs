//! Game player
//!
//! Plays one full game against a known secret: guess, score, filter, pick the
//! minimax follow-up, repeat until solved. Every step also extends the shared
//! strategy tree so that games with the same history land on the same node.

use super::codespace::CodeSpace;
use super::filter::filter_candidates;
use super::minimax::select_next;
use super::tree::{NodeId, StrategyTree};
use crate::core::{Code, Feedback};

/// A single guess in a solve trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRow {
    /// 1-based guess number
    pub row: usize,
    pub guess: Code,
    pub feedback: Feedback,
    /// Candidates consistent with all earlier feedback
    pub candidates_before: usize,
    /// Candidates left after this feedback (0 once solved)
    pub candidates_after: usize,
    /// Tree node that holds `guess`
    pub node: NodeId,
}

/// Every guess played against one secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveTrace {
    secret: Code,
    rows: Vec<TraceRow>,
}

impl SolveTrace {
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[TraceRow] {
        &self.rows
    }

    /// Number of guesses needed, the winning guess included
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the last row matched every peg
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.rows
            .last()
            .is_some_and(|row| row.feedback.is_solved(self.secret.digit_count()))
    }
}

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameState {
    Guessing { guess: Code, node: NodeId },
    Solved,
}

/// Drives one solve for one secret
pub struct GamePlayer<'a> {
    space: &'a CodeSpace,
    secret: Code,
    candidates: Vec<Code>,
    untried: Vec<Code>,
    row: usize,
    state: GameState,
    rows: Vec<TraceRow>,
}

impl<'a> GamePlayer<'a> {
    /// Start a game: opening guess, full candidate set, nothing tried yet
    #[must_use]
    pub fn new(space: &'a CodeSpace, secret: Code, tree: &StrategyTree) -> Self {
        Self {
            space,
            secret,
            candidates: space.universe().to_vec(),
            untried: space.universe().to_vec(),
            row: 1,
            state: GameState::Guessing {
                guess: space.first_guess(),
                node: tree.root(),
            },
            rows: Vec::new(),
        }
    }

    /// Check if the secret has been found
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == GameState::Solved
    }

    /// Play the current guess and choose the next one
    ///
    /// Returns the row just played, or `None` if the game was already solved.
    ///
    /// # Panics
    /// Panics if no untried guess remains while unsolved. The secret itself
    /// stays untried until it is guessed, so this cannot happen for a secret
    /// taken from the code space.
    pub fn step(&mut self, tree: &mut StrategyTree) -> Option<TraceRow> {
        let GameState::Guessing { guess, node } = self.state else {
            return None;
        };

        if let Ok(index) = self.untried.binary_search(&guess) {
            self.untried.remove(index);
        }

        let feedback = Feedback::calculate(&self.secret, &guess);
        let candidates_before = self.candidates.len();
        let digits_in_code = self.space.config().digits_in_code();

        let candidates_after = if feedback.is_solved(digits_in_code) {
            self.state = GameState::Solved;
            0
        } else {
            self.candidates = filter_candidates(&self.candidates, &guess, feedback);
            let (next, _) = select_next(&self.candidates, &self.untried)
                .expect("secret remains untried until it is guessed");

            self.state = GameState::Guessing {
                guess: next,
                node: tree.add_guess(node, feedback, next),
            };
            self.candidates.len()
        };

        let row = TraceRow {
            row: self.row,
            guess,
            feedback,
            candidates_before,
            candidates_after,
            node,
        };
        self.rows.push(row);
        self.row += 1;

        Some(row)
    }

    /// Play until solved and return the full trace
    ///
    /// Each step consumes one untried code, so the loop ends within the
    /// size of the universe.
    #[must_use]
    pub fn play(mut self, tree: &mut StrategyTree) -> SolveTrace {
        while self.step(tree).is_some() {}

        SolveTrace {
            secret: self.secret,
            rows: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn space() -> CodeSpace {
        CodeSpace::generate(GameConfig::default())
    }

    fn play(space: &CodeSpace, text: &str) -> (SolveTrace, StrategyTree) {
        let secret = Code::parse(text, space.config()).unwrap();
        let mut tree = StrategyTree::new(space.first_guess());
        let trace = GamePlayer::new(space, secret, &tree).play(&mut tree);
        (trace, tree)
    }

    #[test]
    fn opening_guess_solves_immediately() {
        let space = space();
        let (trace, tree) = play(&space, "1122");

        assert_eq!(trace.guess_count(), 1);
        assert!(trace.is_solved());
        assert_eq!(trace.rows()[0].feedback, Feedback::solved(4));
        assert_eq!(trace.rows()[0].node, tree.root());
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn first_row_scores_against_opening() {
        let space = space();
        for (secret, expected) in [
            ("3456", Feedback::new(0, 0)),
            ("1123", Feedback::new(3, 0)),
            ("2211", Feedback::new(0, 4)),
        ] {
            let (trace, _) = play(&space, secret);
            let first = trace.rows()[0];
            assert_eq!(first.row, 1);
            assert_eq!(first.guess.to_string(), "1122");
            assert_eq!(first.feedback, expected, "secret {secret}");
        }
    }

    #[test]
    fn solves_within_knuth_bound() {
        let space = space();
        for secret in ["3456", "6543", "2211", "1123", "6666", "5151"] {
            let (trace, _) = play(&space, secret);
            assert!(trace.is_solved());
            assert!(trace.guess_count() <= 5, "{secret} took {}", trace.guess_count());
            assert_eq!(trace.rows().last().unwrap().guess.to_string(), secret);
        }
    }

    #[test]
    fn rows_are_numbered_consecutively() {
        let space = space();
        let (trace, _) = play(&space, "3456");
        for (i, row) in trace.rows().iter().enumerate() {
            assert_eq!(row.row, i + 1);
        }
    }

    #[test]
    fn candidates_shrink_and_keep_secret() {
        let space = space();
        let secret = Code::parse("4365", space.config()).unwrap();
        let mut tree = StrategyTree::new(space.first_guess());
        let mut player = GamePlayer::new(&space, secret, &tree);

        let mut previous = space.universe().len();
        while let Some(row) = player.step(&mut tree) {
            assert!(row.candidates_before <= previous);
            assert!(row.candidates_after <= row.candidates_before);
            previous = row.candidates_after;

            if !player.is_solved() {
                assert!(player.candidates.contains(&secret));
            }
        }
        assert!(player.is_solved());
    }

    #[test]
    fn guesses_never_repeat() {
        let space = space();
        let (trace, _) = play(&space, "6165");
        let mut guesses: Vec<Code> = trace.rows().iter().map(|r| r.guess).collect();
        guesses.sort();
        guesses.dedup();
        assert_eq!(guesses.len(), trace.guess_count());
    }

    #[test]
    fn trace_nodes_follow_tree() {
        let space = space();
        let (trace, tree) = play(&space, "3456");

        for pair in trace.rows().windows(2) {
            assert_eq!(tree.child(pair[0].node, pair[0].feedback), Some(pair[1].node));
            assert_eq!(tree.node(pair[1].node).guess(), pair[1].guess);
        }
    }

    #[test]
    fn same_secret_gives_same_trace() {
        let space = space();
        let (first, _) = play(&space, "5326");
        let (second, _) = play(&space, "5326");
        assert_eq!(first, second);
    }

    #[test]
    fn step_after_solved_returns_none() {
        let space = space();
        let mut tree = StrategyTree::new(space.first_guess());
        let mut player = GamePlayer::new(&space, space.first_guess(), &tree);

        assert!(player.step(&mut tree).is_some());
        assert!(player.is_solved());
        assert!(player.step(&mut tree).is_none());
    }
}
