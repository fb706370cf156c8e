//! A single six-sided die value.

use serde::{Deserialize, Serialize};

use super::rng::{GameRng, DIE_FACES};

/// Face that scores nothing.
pub const ZERO_FACE: u8 = 3;

/// Immutable die face value in `1..=6`.
///
/// Dice are compared by value only; two dice showing the same face are
/// interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Die(u8);

impl Die {
    /// Create a die showing `value`.
    ///
    /// Panics if `value` is outside `1..=6`.
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!(
            (1..=DIE_FACES).contains(&value),
            "Die value must be 1-{DIE_FACES}, got {value}"
        );
        Self(value)
    }

    /// Roll a fresh die.
    pub fn roll(rng: &mut GameRng) -> Self {
        Self(rng.roll_die())
    }

    /// The face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Points this die contributes to a score. A 3 counts as zero.
    #[must_use]
    pub const fn points(self) -> u32 {
        if self.0 == ZERO_FACE {
            0
        } else {
            self.0 as u32
        }
    }
}

impl TryFrom<u8> for Die {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=DIE_FACES).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!("die value {value} out of range 1-{DIE_FACES}"))
        }
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> Self {
        die.0
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build dice from face values. Handy for tests and fixed scenarios.
///
/// Panics if any value is outside `1..=6`.
pub fn dice(values: &[u8]) -> Vec<Die> {
    values.iter().copied().map(Die::new).collect()
}
