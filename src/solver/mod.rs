//! Mastermind solving algorithms
//!
//! Code enumeration, candidate filtering, minimax guess selection, single-game
//! play and the shared strategy tree that collects every game.

mod codespace;
mod engine;
mod filter;
pub mod minimax;
mod player;
mod tree;

pub use codespace::CodeSpace;
pub use engine::Solver;
pub use filter::filter_candidates;
pub use player::{GamePlayer, SolveTrace, TraceRow};
pub use tree::{NodeId, OutlineEntry, StrategyNode, StrategyTree};
