//! A seated player: one turn plus the strategy that drives it.

use std::sync::Arc;

use crate::core::{Die, GameRng, Turn};
use crate::strategy::Strategy;

use super::view::GameView;

/// A player in one game.
///
/// Owns its turn exclusively; the strategy is shared with every other game
/// of the run. The player's display name is its strategy's name.
#[derive(Clone)]
pub struct Player {
    strategy: Arc<dyn Strategy>,
    turn: Turn,
}

impl Player {
    /// Create a player with the default number of dice per turn.
    pub fn new(strategy: Arc<dyn Strategy>) -> Self {
        Self {
            strategy,
            turn: Turn::default(),
        }
    }

    /// Create a player whose turn keeps `dice_per_turn` dice.
    pub fn with_dice_per_turn(strategy: Arc<dyn Strategy>, dice_per_turn: usize) -> Self {
        Self {
            strategy,
            turn: Turn::new(dice_per_turn),
        }
    }

    /// Name used for reporting, i.e. the strategy name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.strategy.name()
    }

    /// The strategy making this player's decisions.
    #[must_use]
    pub fn strategy(&self) -> &Arc<dyn Strategy> {
        &self.strategy
    }

    /// This player's turn.
    #[must_use]
    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    /// Whether this player has kept every die.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.turn.is_over()
    }

    /// Current score: sum of kept faces, with every 3 counting as zero.
    ///
    /// Recomputed on each call. Lower is better.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.turn.kept().iter().map(|die| die.points()).sum()
    }

    /// Commit dice directly to this player's turn.
    ///
    /// Same contract as [`Turn::keep`]: panics on an empty selection or one
    /// larger than the open slots.
    pub fn keep(&mut self, dice: &[Die]) {
        self.turn.keep(dice);
    }

    /// Play one round: roll the open slots, ask the strategy, keep its pick.
    ///
    /// Panics if the strategy breaks its contract, i.e. returns nothing,
    /// too many dice, or dice that were not rolled.
    pub fn do_round(&mut self, game: &GameView<'_>, rng: &mut GameRng) {
        let rolled = self.turn.roll(rng);
        let kept = self.strategy.select(game, self, &rolled, rng);

        assert!(
            is_drawn_from(&kept, &rolled),
            "{} kept {:?} which is not a selection from {:?}",
            self.name(),
            kept,
            rolled
        );
        log::trace!("{} rolled {:?}, kept {:?}", self.name(), rolled, kept);

        self.turn.keep(&kept);
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("strategy", &self.name())
            .field("turn", &self.turn)
            .finish()
    }
}

/// Whether `selection` is a sub-multiset of `pool`, by face value.
fn is_drawn_from(selection: &[Die], pool: &[Die]) -> bool {
    let mut available = pool.to_vec();
    selection.iter().all(|die| {
        match available.iter().position(|d| d == die) {
            Some(i) => {
                available.swap_remove(i);
                true
            }
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice;
    use crate::strategy::{RandomStrategy, SimpleStrategy};

    /// Keeps a face that was never rolled.
    struct Cheater;

    impl Strategy for Cheater {
        fn name(&self) -> &str {
            "Cheater"
        }

        fn select(&self, _: &GameView<'_>, _: &Player, dice: &[Die], _: &mut GameRng) -> Vec<Die> {
            let missing = (1..=6u8)
                .find(|face| dice.iter().all(|d| d.value() != *face))
                .unwrap_or(1);
            vec![Die::new(missing)]
        }
    }

    /// Keeps nothing.
    struct Hoarder;

    impl Strategy for Hoarder {
        fn name(&self) -> &str {
            "Hoarder"
        }

        fn select(&self, _: &GameView<'_>, _: &Player, _: &[Die], _: &mut GameRng) -> Vec<Die> {
            Vec::new()
        }
    }

    #[test]
    fn test_score_zeroes_threes() {
        let mut player = Player::new(Arc::new(SimpleStrategy));
        player.keep(&dice(&[3, 3, 1, 6, 2]));
        assert_eq!(player.score(), 9);
        assert!(player.is_done());
    }

    #[test]
    fn test_name_is_strategy_name() {
        let player = Player::new(Arc::new(RandomStrategy));
        assert_eq!(player.name(), "RandomStrategy");
    }

    #[test]
    fn test_do_round_keeps_at_least_one() {
        let mut rng = GameRng::new(42);
        let mut player = Player::with_dice_per_turn(Arc::new(RandomStrategy), 4);

        player.do_round(&GameView::new(&[]), &mut rng);

        assert_eq!(player.turn().kept().len(), 1);
        assert_eq!(player.turn().dice_rolled(), 4);
    }

    #[test]
    fn test_do_round_until_done() {
        let mut rng = GameRng::new(9);
        let mut player = Player::new(Arc::new(SimpleStrategy));
        let view = GameView::new(&[]);

        let mut rounds = 0;
        while !player.is_done() {
            player.do_round(&view, &mut rng);
            rounds += 1;
        }

        assert!((1..=5).contains(&rounds));
        assert_eq!(player.turn().kept().len(), 5);
    }

    #[test]
    #[should_panic(expected = "not a selection from")]
    fn test_foreign_dice_panic() {
        let mut rng = GameRng::new(1);
        let mut player = Player::new(Arc::new(Cheater));
        player.do_round(&GameView::new(&[]), &mut rng);
    }

    #[test]
    #[should_panic(expected = "Must keep between 1 and 5 dice, got 0")]
    fn test_empty_selection_panics() {
        let mut rng = GameRng::new(1);
        let mut player = Player::new(Arc::new(Hoarder));
        player.do_round(&GameView::new(&[]), &mut rng);
    }

    #[test]
    fn test_is_drawn_from() {
        assert!(is_drawn_from(&dice(&[3, 3]), &dice(&[3, 5, 3])));
        assert!(!is_drawn_from(&dice(&[3, 3]), &dice(&[3, 5])));
        assert!(is_drawn_from(&[], &dice(&[1])));
    }
}
