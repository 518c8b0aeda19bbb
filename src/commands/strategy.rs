//! Strategy command
//!
//! Builds the complete decision tree by solving every code in the universe.

use crate::solver::{SolveTrace, Solver, StrategyTree};
use std::time::{Duration, Instant};

/// The finished strategy and a summary of how it was built
pub struct StrategyReport {
    pub tree: StrategyTree,
    pub games: usize,
    pub max_guesses: usize,
    pub duration: Duration,
}

/// Solve every code, passing each finished game to `on_trace`
pub fn build_strategy<F>(solver: &Solver, mut on_trace: F) -> StrategyReport
where
    F: FnMut(&SolveTrace),
{
    let start = Instant::now();
    let mut games = 0;
    let mut max_guesses = 0;

    let tree = solver.build_strategy(|trace| {
        games += 1;
        max_guesses = max_guesses.max(trace.guess_count());
        on_trace(trace);
    });

    StrategyReport {
        tree,
        games,
        max_guesses,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn report_counts_every_game() {
        let solver = Solver::new(GameConfig::new(3, 3, true).unwrap());
        let mut seen = Vec::new();
        let report = build_strategy(&solver, |trace| seen.push(trace.secret()));

        assert_eq!(report.games, 27);
        assert_eq!(seen, solver.space().universe());
        assert_eq!(report.max_guesses, report.tree.depth());
    }

    #[test]
    fn report_tree_starts_with_opening() {
        let solver = Solver::new(GameConfig::new(3, 4, false).unwrap());
        let report = build_strategy(&solver, |_| {});

        assert_eq!(report.games, 24);
        assert_eq!(
            report.tree.node(report.tree.root()).guess().to_string(),
            "123"
        );
    }
}
