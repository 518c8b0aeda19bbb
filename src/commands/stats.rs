//! Strategy statistics - comprehensive solver evaluation
//!
//! Builds the full strategy while tracking how many guesses every code needs.

use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Hardest codes kept in the summary
const HARDEST_LIMIT: usize = 10;

/// Statistics from solving every code
#[derive(Debug)]
pub struct StrategyStatistics {
    pub total_codes: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub hardest_codes: Vec<(String, usize)>,
    pub node_count: usize,
}

/// Solve every code in the universe and summarize the results
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_stats(solver: &Solver) -> StrategyStatistics {
    let total_codes = solver.space().universe().len();

    let pb = ProgressBar::new(total_codes as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut results: Vec<(String, usize)> = Vec::with_capacity(total_codes);
    let mut total_guesses = 0;

    let start = Instant::now();

    let tree = solver.build_strategy(|trace| {
        let guesses = trace.guess_count();
        total_guesses += guesses;
        *guess_distribution.entry(guesses).or_insert(0) += 1;
        results.push((trace.secret().to_string(), guesses));

        if results.len() % 16 == 0 {
            let avg = total_guesses as f64 / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.3}"));
        }
        pb.inc(1);
    });

    pb.finish_with_message("Complete!");

    let total_time = start.elapsed();

    let average_guesses = if results.is_empty() {
        0.0
    } else {
        total_guesses as f64 / results.len() as f64
    };

    let max_guesses = results.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let min_guesses = results.iter().map(|(_, n)| *n).min().unwrap_or(0);

    // Stable sort keeps codes with equal counts in ascending order
    let mut hardest_codes = results;
    hardest_codes.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_codes.truncate(HARDEST_LIMIT);

    StrategyStatistics {
        total_codes,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        hardest_codes,
        node_count: tree.node_count(),
    }
}
