//! Code universe enumeration
//!
//! Builds every legal code for a configuration, in ascending order, together
//! with the configuration's fixed opening guess.

use crate::core::{Code, GameConfig, MAX_DIGITS};

/// The full set of codes for one configuration
#[derive(Debug, Clone)]
pub struct CodeSpace {
    config: GameConfig,
    universe: Vec<Code>,
    first_guess: Code,
}

impl CodeSpace {
    /// Enumerate every code for `config`
    ///
    /// # Examples
    /// ```
    /// use mastermind_knuth::core::GameConfig;
    /// use mastermind_knuth::solver::CodeSpace;
    ///
    /// let space = CodeSpace::generate(GameConfig::default());
    /// assert_eq!(space.universe().len(), 1296);
    /// assert_eq!(space.first_guess().to_string(), "1122");
    /// ```
    #[must_use]
    pub fn generate(config: GameConfig) -> Self {
        let mut universe = Vec::with_capacity(config.universe_size());
        add_digit([0; MAX_DIGITS], 0, &config, &mut universe);
        universe.sort_unstable();

        Self {
            config,
            universe,
            first_guess: config.first_guess(),
        }
    }

    /// The configuration this space was built from
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Every legal code, sorted ascending
    #[inline]
    #[must_use]
    pub fn universe(&self) -> &[Code] {
        &self.universe
    }

    /// The fixed opening guess
    #[inline]
    #[must_use]
    pub const fn first_guess(&self) -> Code {
        self.first_guess
    }

    /// Check if a code belongs to this space
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.universe.binary_search(code).is_ok()
    }
}

/// Extend `prefix` at `position` with every allowed digit, recursing to full length
fn add_digit(
    mut prefix: [u8; MAX_DIGITS],
    position: usize,
    config: &GameConfig,
    universe: &mut Vec<Code>,
) {
    if position == config.digits_in_code() {
        universe.push(Code::from_buffer(prefix, position));
        return;
    }

    for digit in 1..=config.digits_possible() {
        if !config.repeats() && prefix[..position].contains(&digit) {
            continue;
        }
        prefix[position] = digit;
        add_digit(prefix, position + 1, config, universe);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_size_with_repeats() {
        let space = CodeSpace::generate(GameConfig::default());
        assert_eq!(space.universe().len(), 6 * 6 * 6 * 6);
    }

    #[test]
    fn universe_size_without_repeats() {
        let space = CodeSpace::generate(GameConfig::new(4, 6, false).unwrap());
        assert_eq!(space.universe().len(), 6 * 5 * 4 * 3);
        assert!(space.universe().iter().all(|c| !c.has_repeats()));
    }

    #[test]
    fn universe_is_sorted_and_unique() {
        let space = CodeSpace::generate(GameConfig::default());
        assert!(space.universe().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(space.universe().first().unwrap().to_string(), "1111");
        assert_eq!(space.universe().last().unwrap().to_string(), "6666");
    }

    #[test]
    fn universe_codes_respect_config() {
        let config = GameConfig::new(3, 5, true).unwrap();
        let space = CodeSpace::generate(config);
        for code in space.universe() {
            assert_eq!(code.digit_count(), 3);
            assert!(code.digits().iter().all(|&d| (1..=5).contains(&d)));
        }
        assert_eq!(space.universe().len(), config.universe_size());
    }

    #[test]
    fn universe_matches_parsed_codes() {
        let config = GameConfig::new(2, 3, false).unwrap();
        let space = CodeSpace::generate(config);
        let rendered: Vec<String> = space.universe().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["12", "13", "21", "23", "31", "32"]);

        let parsed = Code::parse("23", &config).unwrap();
        assert!(space.contains(&parsed));
    }

    #[test]
    fn first_guess_is_in_universe() {
        for config in [
            GameConfig::default(),
            GameConfig::new(4, 6, false).unwrap(),
            GameConfig::new(5, 8, true).unwrap(),
            GameConfig::new(3, 2, true).unwrap(),
        ] {
            let space = CodeSpace::generate(config);
            assert!(space.contains(&space.first_guess()), "{config}");
        }
    }
}
