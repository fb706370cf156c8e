//! Read-only view of a game handed to strategies.

use super::player::Player;

/// What a strategy may see of the table while its player acts.
///
/// Holds shared references to every *other* player, so a strategy can
/// inspect opponents' scores and progress but cannot change anything.
#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    /// Opponents seated before the acting player.
    before: &'a [Player],
    /// Opponents seated after the acting player.
    after: &'a [Player],
}

impl<'a> GameView<'a> {
    /// A view over the given opponents.
    #[must_use]
    pub fn new(opponents: &'a [Player]) -> Self {
        Self {
            before: opponents,
            after: &[],
        }
    }

    /// A view over the seats on either side of the acting player.
    #[must_use]
    pub(crate) fn around(before: &'a [Player], after: &'a [Player]) -> Self {
        Self { before, after }
    }

    /// Opponents in seat order.
    pub fn opponents(&self) -> impl Iterator<Item = &'a Player> + 'a {
        let (before, after) = (self.before, self.after);
        before.iter().chain(after)
    }

    /// Number of opponents.
    #[must_use]
    pub fn opponent_count(&self) -> usize {
        self.before.len() + self.after.len()
    }

    /// Scores of opponents who have finished their turn.
    pub fn finished_scores(&self) -> impl Iterator<Item = u32> + 'a {
        self.opponents()
            .filter(|p| p.is_done())
            .map(Player::score)
    }

    /// Lowest (best) score among finished opponents, if any have finished.
    #[must_use]
    pub fn best_finished_score(&self) -> Option<u32> {
        self.finished_scores().min()
    }
}
