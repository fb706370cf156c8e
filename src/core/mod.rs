//! Core value types: dice, turns, seats, RNG.
//!
//! These know nothing about strategies or games; the game layer builds on them.

pub mod die;
pub mod player;
pub mod rng;
pub mod turn;

pub use die::{dice, Die, ZERO_FACE};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::{GameRng, DIE_FACES};
pub use turn::{Turn, DEFAULT_DICE_PER_TURN, MAX_DICE_PER_TURN};
