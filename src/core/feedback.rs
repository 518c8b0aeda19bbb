//! Mastermind feedback calculation and representation
//!
//! Feedback is the pair of peg counts returned for a guess:
//! - exact (black): right digit in the right position
//! - partial (white): right digit in the wrong position, counted only among
//!   the digits left over after exact matches are removed

use super::code::{Code, MAX_DIGITS};
use std::cmp::Ordering;
use std::fmt;

/// Number of distinct histogram buckets needed to index any feedback
pub(crate) const FEEDBACK_BUCKETS: usize = (MAX_DIGITS + 1) * (MAX_DIGITS + 1);

/// Feedback for a Mastermind guess
///
/// Ordering is the canonical strategy order: more exact matches first, then
/// more partial matches first. Sorting a list of feedback values therefore
/// lists the most informative outcomes at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    /// Create feedback from raw peg counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// The feedback that ends a game with codes of length `digits_in_code`
    #[inline]
    #[must_use]
    pub const fn solved(digits_in_code: usize) -> Self {
        Self::new(digits_in_code as u8, 0)
    }

    /// Number of exact (black) pegs
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of partial (white) pegs
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Check if every peg matched exactly
    #[inline]
    #[must_use]
    pub const fn is_solved(self, digits_in_code: usize) -> bool {
        self.exact as usize == digits_in_code
    }

    /// Dense index used for fixed-size histograms
    #[inline]
    pub(crate) const fn bucket(self) -> usize {
        self.exact as usize * (MAX_DIGITS + 1) + self.partial as usize
    }

    /// Calculate the feedback between two codes of equal length
    ///
    /// The result does not depend on which argument is the guess and which is
    /// the solution.
    ///
    /// # Algorithm
    /// 1. First pass: count positions with equal digits and consume them on both sides
    /// 2. Second pass: for each remaining digit of `a`, consume the first
    ///    unconsumed equal digit of `b`, scanning left to right
    ///
    /// # Panics
    /// Panics if the peg total exceeds the code length. That can only happen
    /// through a defect in this function and the search cannot continue from it.
    ///
    /// # Examples
    /// ```
    /// use mastermind_knuth::core::{Code, Feedback};
    ///
    /// let guess = Code::from_digits(&[1, 1, 2, 2]).unwrap();
    /// let secret = Code::from_digits(&[2, 2, 1, 1]).unwrap();
    ///
    /// assert_eq!(Feedback::calculate(&secret, &guess), Feedback::new(0, 4));
    /// ```
    #[must_use]
    pub fn calculate(a: &Code, b: &Code) -> Self {
        debug_assert_eq!(a.digit_count(), b.digit_count(), "codes differ in length");

        let len = a.digit_count();
        // 0 marks a consumed peg; real digits are never 0
        let mut left = a.buffer();
        let mut right = b.buffer();

        let mut exact = 0u8;
        for (l, r) in left[..len].iter_mut().zip(&mut right[..len]) {
            if *l == *r {
                exact += 1;
                *l = 0;
                *r = 0;
            }
        }

        let mut partial = 0u8;
        for l in &mut left[..len] {
            if *l == 0 {
                continue;
            }
            if let Some(r) = right[..len].iter_mut().find(|r| **r == *l) {
                partial += 1;
                *l = 0;
                *r = 0;
            }
        }

        assert!(
            usize::from(exact + partial) <= len,
            "feedback B{exact}W{partial} exceeds code length {len}"
        );

        Self { exact, partial }
    }
}

impl Ord for Feedback {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .exact
            .cmp(&self.exact)
            .then_with(|| other.partial.cmp(&self.partial))
    }
}

impl PartialOrd for Feedback {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}W{}", self.exact, self.partial)
    }
}
