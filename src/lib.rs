//! Mastermind Strategy Builder
//!
//! Builds Donald Knuth's minimax strategy for Mastermind: every secret code is
//! solved in turn and the guesses are merged into one decision tree keyed by
//! the feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_knuth::core::{Code, Feedback, GameConfig};
//! use mastermind_knuth::solver::Solver;
//!
//! // Classic Mastermind: 4 pegs, 6 colours, repeats allowed
//! let solver = Solver::new(GameConfig::default());
//!
//! // Score a guess against a secret
//! let secret = Code::parse("3456", solver.config()).unwrap();
//! let feedback = Feedback::calculate(&secret, &solver.space().first_guess());
//! println!("Feedback: {feedback}");
//!
//! // Build the full strategy tree
//! let tree = solver.build_strategy(|_| {});
//! println!("Worst case: {} guesses", tree.depth());
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
