use crate::core::{Die, GameRng};
use crate::game::{GameView, Player};

use super::Strategy;

/// Keep exactly one die, chosen uniformly at random.
///
/// Baseline for comparing the rule-based strategies.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "RandomStrategy"
    }

    fn select(&self, _: &GameView<'_>, _: &Player, dice: &[Die], rng: &mut GameRng) -> Vec<Die> {
        rng.choose(dice).copied().into_iter().collect()
    }
}
