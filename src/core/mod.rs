//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod config;
mod feedback;

pub use code::{Code, CodeError, MAX_DIGITS};
pub use config::{ConfigError, GameConfig, MAX_DIGIT_VALUE};
pub use feedback::Feedback;
pub(crate) use feedback::FEEDBACK_BUCKETS;
