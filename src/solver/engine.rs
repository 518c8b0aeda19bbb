//! Main Mastermind solver interface

use super::codespace::CodeSpace;
use super::player::{GamePlayer, SolveTrace};
use super::tree::StrategyTree;
use crate::core::{Code, GameConfig};
use tracing::{debug, info};

/// Main Mastermind solver
///
/// Owns the code universe for one configuration and plays games against it.
pub struct Solver {
    space: CodeSpace,
}

impl Solver {
    /// Create a solver, enumerating every code for `config`
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let space = CodeSpace::generate(config);
        debug!(
            codes = space.universe().len(),
            first_guess = %space.first_guess(),
            "generated code space"
        );
        Self { space }
    }

    #[inline]
    #[must_use]
    pub const fn space(&self) -> &CodeSpace {
        &self.space
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        self.space.config()
    }

    /// An empty tree rooted at this configuration's opening guess
    #[must_use]
    pub fn new_tree(&self) -> StrategyTree {
        StrategyTree::new(self.space.first_guess())
    }

    /// Play one game against `secret` on its own
    ///
    /// # Examples
    /// ```
    /// use mastermind_knuth::core::{Code, GameConfig};
    /// use mastermind_knuth::solver::Solver;
    ///
    /// let solver = Solver::new(GameConfig::default());
    /// let secret = Code::parse("3456", solver.config()).unwrap();
    ///
    /// let trace = solver.solve(secret);
    /// assert!(trace.is_solved());
    /// assert!(trace.guess_count() <= 5);
    /// ```
    #[must_use]
    pub fn solve(&self, secret: Code) -> SolveTrace {
        let mut tree = self.new_tree();
        self.solve_into(secret, &mut tree)
    }

    /// Play one game against `secret`, recording its guesses in `tree`
    #[must_use]
    pub fn solve_into(&self, secret: Code, tree: &mut StrategyTree) -> SolveTrace {
        let trace = GamePlayer::new(&self.space, secret, tree).play(tree);
        debug!(
            secret = %secret,
            guesses = trace.guess_count(),
            nodes = tree.node_count(),
            "solved"
        );
        trace
    }

    /// Play every code in the universe, in order, into one shared tree
    ///
    /// `on_trace` sees each game as soon as it finishes.
    pub fn build_strategy<F>(&self, mut on_trace: F) -> StrategyTree
    where
        F: FnMut(&SolveTrace),
    {
        let mut tree = self.new_tree();

        for &secret in self.space.universe() {
            let trace = self.solve_into(secret, &mut tree);
            on_trace(&trace);
        }

        info!(
            config = %self.config(),
            nodes = tree.node_count(),
            depth = tree.depth(),
            "strategy complete"
        );
        tree
    }
}
