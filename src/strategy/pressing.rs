//! A strategy that reads the table before deciding.

use crate::core::{Die, GameRng, ZERO_FACE};
use crate::game::{GameView, Player};

use super::{keep_matching_or_lowest, Strategy};

/// Keep every 3; keep 1s too while not behind.
///
/// "Not behind" means at least one opponent has finished and every
/// finished opponent's score is strictly higher than this player's
/// current score. Lower scores win, so that is when a cheap 1 presses
/// the lead. Falls back to the lowest die when nothing qualifies.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepOnesUnlessLosingStrategy;

impl Strategy for KeepOnesUnlessLosingStrategy {
    fn name(&self) -> &str {
        "KeepOnesUnlessLosingStrategy"
    }

    fn select(&self, game: &GameView<'_>, player: &Player, dice: &[Die], _: &mut GameRng) -> Vec<Die> {
        let ahead = game
            .best_finished_score()
            .is_some_and(|best| best > player.score());

        keep_matching_or_lowest(dice, |d| d.value() == ZERO_FACE || (ahead && d.value() == 1))
    }
}
