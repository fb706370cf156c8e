//! One player's turn: repeated rolls until every slot holds a kept die.
//!
//! ## State machine
//!
//! A turn starts in progress with nothing kept. Each round rolls exactly
//! as many dice as there are free slots; the caller keeps between one and
//! all of them. The turn is over the moment the kept count reaches the
//! capacity, and it never goes back.

use smallvec::SmallVec;

use super::die::Die;
use super::rng::GameRng;

/// Default number of dice a turn must keep.
pub const DEFAULT_DICE_PER_TURN: usize = 5;

/// Largest turn a simulation may be configured with.
pub const MAX_DICE_PER_TURN: usize = 255;

/// Kept dice for a single turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    /// Kept dice in keep order.
    kept: SmallVec<[Die; DEFAULT_DICE_PER_TURN]>,
    capacity: usize,
    dice_rolled: usize,
}

impl Default for Turn {
    fn default() -> Self {
        Self::new(DEFAULT_DICE_PER_TURN)
    }
}

impl Turn {
    /// Create an empty turn that must keep `capacity` dice.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Turn capacity must be at least 1");

        Self {
            kept: SmallVec::new(),
            capacity,
            dice_rolled: 0,
        }
    }

    /// Roll one die for every slot still open.
    ///
    /// Nothing is kept automatically. Returns an empty vec once the turn
    /// is over.
    pub fn roll(&mut self, rng: &mut GameRng) -> Vec<Die> {
        let count = self.remaining();
        self.dice_rolled += count;
        (0..count).map(|_| Die::roll(rng)).collect()
    }

    /// Commit `selected` to the kept dice.
    ///
    /// Panics unless `1 <= selected.len() <= remaining()`. An out-of-range
    /// selection is a bug in the caller, never a game condition.
    pub fn keep(&mut self, selected: &[Die]) {
        let remaining = self.remaining();
        assert!(
            !selected.is_empty() && selected.len() <= remaining,
            "Must keep between 1 and {remaining} dice, got {}",
            selected.len()
        );

        self.kept.extend_from_slice(selected);
    }

    /// Whether every slot is filled.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.kept.len() == self.capacity
    }

    /// Kept dice in the order they were kept.
    #[must_use]
    pub fn kept(&self) -> &[Die] {
        &self.kept
    }

    /// Number of dice still to be kept.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.kept.len()
    }

    /// Total dice this turn must keep.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total dice rolled across all rounds of this turn.
    #[must_use]
    pub fn dice_rolled(&self) -> usize {
        self.dice_rolled
    }
}
