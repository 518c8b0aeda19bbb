//! Game configuration
//!
//! The three values that fully determine a Mastermind variant: code length,
//! alphabet size and whether digits may repeat. A `GameConfig` is validated
//! once at construction and then threaded immutably through every component.

use super::code::{Code, MAX_DIGITS};
use std::fmt;

/// Largest digit usable in a code (digits are written in base 10, 0 is never used)
pub const MAX_DIGIT_VALUE: u8 = 9;

/// Opening pattern used when digits may repeat
const REPEATING_OPENING: [u8; 4] = [1, 1, 2, 2];

/// A validated Mastermind configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    digits_in_code: usize,
    digits_possible: u8,
    repeats: bool,
}

/// Error type for invalid configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidCodeLength(usize),
    InvalidAlphabet(u8),
    AlphabetTooSmall {
        digits_in_code: usize,
        digits_possible: u8,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCodeLength(len) => {
                write!(f, "Code length must be between 1 and {MAX_DIGITS}, got {len}")
            }
            Self::InvalidAlphabet(size) => write!(
                f,
                "Number of possible digits must be between 1 and {MAX_DIGIT_VALUE}, got {size}"
            ),
            Self::AlphabetTooSmall {
                digits_in_code,
                digits_possible,
            } => write!(
                f,
                "Cannot build {digits_in_code}-digit codes without repeats from only {digits_possible} digits"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Create a new configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - `digits_in_code` is 0 or larger than `MAX_DIGITS`
    /// - `digits_possible` is 0 or larger than 9
    /// - repeats are disallowed and there are fewer digits than positions
    ///
    /// # Examples
    /// ```
    /// use mastermind_knuth::core::GameConfig;
    ///
    /// let config = GameConfig::new(4, 6, false).unwrap();
    /// assert_eq!(config.universe_size(), 360);
    ///
    /// assert!(GameConfig::new(5, 4, false).is_err());
    /// ```
    pub const fn new(
        digits_in_code: usize,
        digits_possible: u8,
        repeats: bool,
    ) -> Result<Self, ConfigError> {
        if digits_in_code == 0 || digits_in_code > MAX_DIGITS {
            return Err(ConfigError::InvalidCodeLength(digits_in_code));
        }

        if digits_possible == 0 || digits_possible > MAX_DIGIT_VALUE {
            return Err(ConfigError::InvalidAlphabet(digits_possible));
        }

        if !repeats && (digits_possible as usize) < digits_in_code {
            return Err(ConfigError::AlphabetTooSmall {
                digits_in_code,
                digits_possible,
            });
        }

        Ok(Self {
            digits_in_code,
            digits_possible,
            repeats,
        })
    }

    /// Number of pegs in every code
    #[inline]
    #[must_use]
    pub const fn digits_in_code(&self) -> usize {
        self.digits_in_code
    }

    /// Number of distinct digits available (digits run from 1 to this value)
    #[inline]
    #[must_use]
    pub const fn digits_possible(&self) -> u8 {
        self.digits_possible
    }

    /// Whether a code may reuse a digit
    #[inline]
    #[must_use]
    pub const fn repeats(&self) -> bool {
        self.repeats
    }

    /// The fixed opening guess for this configuration
    ///
    /// With repeats the pattern `1,1,2,2` is cycled to the code length, without
    /// repeats the digits simply count up from 1. Digits are clamped to the
    /// alphabet so single-digit games still get a legal opening.
    ///
    /// # Examples
    /// ```
    /// use mastermind_knuth::core::GameConfig;
    ///
    /// assert_eq!(GameConfig::default().first_guess().to_string(), "1122");
    /// assert_eq!(GameConfig::new(4, 6, false).unwrap().first_guess().to_string(), "1234");
    /// ```
    #[must_use]
    pub fn first_guess(&self) -> Code {
        let digits: Vec<u8> = (0..self.digits_in_code)
            .map(|position| {
                if self.repeats {
                    REPEATING_OPENING[position % REPEATING_OPENING.len()].min(self.digits_possible)
                } else {
                    // Validated: digits_in_code <= digits_possible <= 9
                    position as u8 + 1
                }
            })
            .collect();

        Code::from_digits(&digits).expect("opening digits are within the validated alphabet")
    }

    /// Number of codes in the universe for this configuration
    #[must_use]
    pub fn universe_size(&self) -> usize {
        let possible = usize::from(self.digits_possible);
        if self.repeats {
            possible.pow(self.digits_in_code as u32)
        } else {
            (0..self.digits_in_code).map(|i| possible - i).product()
        }
    }
}

impl Default for GameConfig {
    /// Classic Mastermind: 4 pegs, 6 colours, repeats allowed
    fn default() -> Self {
        Self {
            digits_in_code: 4,
            digits_possible: 6,
            repeats: true,
        }
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} digits from 1-{}, {}",
            self.digits_in_code,
            self.digits_possible,
            if self.repeats {
                "repeats allowed"
            } else {
                "no repeats"
            }
        )
    }
}
