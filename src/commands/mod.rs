//! Command implementations

pub mod analyze;
pub mod solve;
pub mod stats;
pub mod strategy;

pub use analyze::{AnalysisResult, analyze_guess};
pub use solve::{SolveConfig, solve_code};
pub use stats::{StrategyStatistics, run_stats};
pub use strategy::{StrategyReport, build_strategy};
