//! Code solving command
//!
//! Plays a single game against a chosen (or random) secret.

use crate::core::{Code, CodeError};
use crate::solver::{SolveTrace, Solver};
use rand::prelude::IndexedRandom;

/// Configuration for solving a code
pub struct SolveConfig {
    /// Secret to play against, or `None` to pick one at random
    pub secret: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Option<String>) -> Self {
        Self { secret }
    }
}

/// Solve a specific code using the given solver
///
/// # Errors
///
/// Returns an error if the secret does not parse as a code for the solver's
/// configuration (wrong length, digit out of range, or repeated digit when
/// repeats are disallowed).
pub fn solve_code(config: &SolveConfig, solver: &Solver) -> Result<SolveTrace, CodeError> {
    let secret = match &config.secret {
        Some(text) => Code::parse(text, solver.config())?,
        None => random_secret(solver),
    };

    Ok(solver.solve(secret))
}

fn random_secret(solver: &Solver) -> Code {
    // The universe is never empty for a validated configuration
    *solver
        .space()
        .universe()
        .choose(&mut rand::rng())
        .unwrap_or(&solver.space().first_guess())
}
