//! Fixed-face strategies: keep every die showing one of a set of faces.

use crate::core::{Die, GameRng, ZERO_FACE};
use crate::game::{GameView, Player};

use super::{keep_matching_or_lowest, Strategy};

fn keep_faces(dice: &[Die], faces: &[u8]) -> Vec<Die> {
    keep_matching_or_lowest(dice, |d| faces.contains(&d.value()))
}

/// Keep every 3 (they score nothing), otherwise the lowest die.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleStrategy;

impl Strategy for SimpleStrategy {
    fn name(&self) -> &str {
        "SimpleStrategy"
    }

    fn select(&self, _: &GameView<'_>, _: &Player, dice: &[Die], _: &mut GameRng) -> Vec<Die> {
        keep_faces(dice, &[ZERO_FACE])
    }
}

/// Keep every 3 and every 1, otherwise the lowest die.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepOnesStrategy;

impl Strategy for KeepOnesStrategy {
    fn name(&self) -> &str {
        "KeepOnesStrategy"
    }

    fn select(&self, _: &GameView<'_>, _: &Player, dice: &[Die], _: &mut GameRng) -> Vec<Die> {
        keep_faces(dice, &[ZERO_FACE, 1])
    }
}

/// Keep every 3, 1 and 2, otherwise the lowest die.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepOnesAndTwosStrategy;

impl Strategy for KeepOnesAndTwosStrategy {
    fn name(&self) -> &str {
        "KeepOnesAndTwosStrategy"
    }

    fn select(&self, _: &GameView<'_>, _: &Player, dice: &[Die], _: &mut GameRng) -> Vec<Die> {
        keep_faces(dice, &[ZERO_FACE, 1, 2])
    }
}
