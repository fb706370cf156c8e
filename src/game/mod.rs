//! Game orchestration: players, the read-only view strategies see, and
//! winner determination.
//!
//! A game seats players in a fixed order. Each player takes a complete
//! turn (rolling and keeping until five dice are kept) before the next
//! player starts. The lowest score wins; ties are kept as co-winners.

mod game;
mod player;
mod view;

pub use game::{Game, GameResult};
pub use player::Player;
pub use view::GameView;
