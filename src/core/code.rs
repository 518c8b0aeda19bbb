//! Mastermind code representation
//!
//! A Code stores its pegs as a fixed-size array of small integers. Unused
//! slots past the code length are always zero, so the derived ordering matches
//! the numeric ordering of the code read as a base-10 integer.

use super::config::GameConfig;
use std::fmt;

/// Longest supported code
pub const MAX_DIGITS: usize = 9;

/// A guess or a secret: `len` digits, each in `1..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    digits: [u8; MAX_DIGITS],
    len: u8,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength { expected: usize, found: usize },
    InvalidCharacter(char),
    DigitOutOfRange { digit: u8, max: u8 },
    RepeatedDigit(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, found } => {
                write!(f, "Code must have exactly {expected} digits, got {found}")
            }
            Self::InvalidCharacter(ch) => write!(f, "Code contains invalid character '{ch}'"),
            Self::DigitOutOfRange { digit, max } => {
                write!(f, "Digit {digit} is out of range (expected 1-{max})")
            }
            Self::RepeatedDigit(digit) => {
                write!(f, "Digit {digit} is repeated but repeats are not allowed")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from its digits
    ///
    /// # Errors
    /// Returns `CodeError` if there are no digits, more than `MAX_DIGITS` digits,
    /// or any digit outside `1..=9`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_knuth::core::Code;
    ///
    /// let code = Code::from_digits(&[1, 1, 2, 2]).unwrap();
    /// assert_eq!(code.to_string(), "1122");
    /// assert_eq!(code.value(), 1122);
    ///
    /// assert!(Code::from_digits(&[0, 1]).is_err());
    /// ```
    pub fn from_digits(digits: &[u8]) -> Result<Self, CodeError> {
        if digits.is_empty() || digits.len() > MAX_DIGITS {
            return Err(CodeError::InvalidLength {
                expected: digits.len().clamp(1, MAX_DIGITS),
                found: digits.len(),
            });
        }

        let mut stored = [0u8; MAX_DIGITS];
        for (slot, &digit) in stored.iter_mut().zip(digits) {
            if !(1..=9).contains(&digit) {
                return Err(CodeError::DigitOutOfRange { digit, max: 9 });
            }
            *slot = digit;
        }

        Ok(Self {
            digits: stored,
            len: digits.len() as u8,
        })
    }

    /// Build a code from a prefix buffer produced by enumeration
    ///
    /// The caller guarantees slots `len..` are zero and slots `..len` are non-zero.
    #[inline]
    pub(crate) const fn from_buffer(digits: [u8; MAX_DIGITS], len: usize) -> Self {
        Self {
            digits,
            len: len as u8,
        }
    }

    /// Parse a code such as `"3456"` and check it against a configuration
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The number of digits differs from the configured code length
    /// - A character is not a digit
    /// - A digit is 0 or above the configured alphabet size
    /// - A digit repeats while repeats are disallowed
    ///
    /// # Examples
    /// ```
    /// use mastermind_knuth::core::{Code, GameConfig};
    ///
    /// let config = GameConfig::default();
    /// let code = Code::parse("3456", &config).unwrap();
    /// assert_eq!(code.digits(), &[3, 4, 5, 6]);
    ///
    /// assert!(Code::parse("3457", &config).is_err()); // 7 is outside 1-6
    /// assert!(Code::parse("345", &config).is_err());
    /// ```
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self, CodeError> {
        let text = text.trim();
        let found = text.chars().count();
        if found != config.digits_in_code() {
            return Err(CodeError::InvalidLength {
                expected: config.digits_in_code(),
                found,
            });
        }

        let mut stored = [0u8; MAX_DIGITS];
        for (position, ch) in text.chars().enumerate() {
            let digit = ch
                .to_digit(10)
                .ok_or(CodeError::InvalidCharacter(ch))? as u8;

            if digit == 0 || digit > config.digits_possible() {
                return Err(CodeError::DigitOutOfRange {
                    digit,
                    max: config.digits_possible(),
                });
            }

            if !config.repeats() && stored[..position].contains(&digit) {
                return Err(CodeError::RepeatedDigit(digit));
            }

            stored[position] = digit;
        }

        Ok(Self::from_buffer(stored, found))
    }

    /// The code's digits, in peg order
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..usize::from(self.len)]
    }

    /// Raw storage including the zeroed tail
    #[inline]
    pub(crate) const fn buffer(&self) -> [u8; MAX_DIGITS] {
        self.digits
    }

    /// Number of pegs in the code
    #[inline]
    #[must_use]
    pub const fn digit_count(&self) -> usize {
        self.len as usize
    }

    /// The code read as a base-10 integer (`[1, 1, 2, 2]` is `1122`)
    #[must_use]
    pub fn value(&self) -> u32 {
        self.digits()
            .iter()
            .fold(0, |acc, &digit| acc * 10 + u32::from(digit))
    }

    /// Check whether any digit appears more than once
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        let digits = self.digits();
        digits
            .iter()
            .enumerate()
            .any(|(i, digit)| digits[..i].contains(digit))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
