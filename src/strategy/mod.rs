//! Keep strategies: which of the rolled dice a player keeps each round.
//!
//! Strategies are trait-based so new ones can be added without touching
//! the game:
//! - `RandomStrategy`: one die at random
//! - `SimpleStrategy`, `KeepOnesStrategy`, `KeepOnesAndTwosStrategy`:
//!   keep every die showing one of a fixed set of faces
//! - `KeepOnesUnlessLosingStrategy`: keep 3s, and 1s while not behind
//!
//! Every rule-based strategy falls back to the single lowest die when its
//! rule selects nothing, so a selection is never empty.
//!
//! ## Example
//!
//! ```
//! use lowball_dice::core::{dice, GameRng};
//! use lowball_dice::game::{GameView, Player};
//! use lowball_dice::strategy::{SimpleStrategy, Strategy};
//! use std::sync::Arc;
//!
//! let player = Player::new(Arc::new(SimpleStrategy));
//! let kept = SimpleStrategy.select(
//!     &GameView::new(&[]),
//!     &player,
//!     &dice(&[3, 3, 5, 2, 1]),
//!     &mut GameRng::new(0),
//! );
//! assert_eq!(kept, dice(&[3, 3]));
//! ```

mod faces;
mod pressing;
mod random;
mod registry;

pub use faces::{KeepOnesAndTwosStrategy, KeepOnesStrategy, SimpleStrategy};
pub use pressing::KeepOnesUnlessLosingStrategy;
pub use random::RandomStrategy;
pub use registry::{ParseStrategyError, StrategyKind};

use crate::core::{Die, GameRng};
use crate::game::{GameView, Player};

/// Decides which rolled dice to keep.
///
/// Implementations must be stateless with respect to games: one instance is
/// shared by every game of a run.
pub trait Strategy: Send + Sync {
    /// Name used to identify this strategy in reports.
    fn name(&self) -> &str;

    /// Pick the dice to keep from `dice`.
    ///
    /// `dice` holds between one and five freshly rolled dice. The result
    /// must be a non-empty selection from `dice` (by face value) and never
    /// longer than it. `rng` is the game's random source, for strategies
    /// that need one.
    fn select(
        &self,
        game: &GameView<'_>,
        player: &Player,
        dice: &[Die],
        rng: &mut GameRng,
    ) -> Vec<Die>;
}

/// Keep every die matching `rule`, or the lowest die if none match.
pub(crate) fn keep_matching_or_lowest(dice: &[Die], rule: impl Fn(Die) -> bool) -> Vec<Die> {
    let keep: Vec<Die> = dice.iter().copied().filter(|&d| rule(d)).collect();
    if !keep.is_empty() {
        return keep;
    }

    dice.iter().copied().min().into_iter().collect()
}
