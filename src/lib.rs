//! # lowball-dice
//!
//! Monte Carlo comparison of keep strategies for a small low-score dice game.
//!
//! ## Rules
//!
//! Each player takes one turn. A turn rolls five dice, keeps at least one,
//! rerolls the rest, and repeats until five dice are kept. The score is the
//! sum of the kept faces, except that a 3 counts as zero. Players take their
//! turns one after another in a fixed seat order, and later players can see
//! earlier players' final scores. Lowest score wins; equal lowest scores tie.
//!
//! ## Design Principles
//!
//! 1. **Explicit randomness**: one seeded `GameRng` is threaded through every
//!    roll and random decision, so runs are reproducible.
//!
//! 2. **Read-only strategies**: strategies receive a `GameView` of the other
//!    players and cannot mutate the game.
//!
//! 3. **Loud contract failures**: a strategy that keeps nothing, too much,
//!    or dice it was not offered panics instead of being clamped.
//!
//! ## Modules
//!
//! - `core`: Dice, turns, seats, RNG
//! - `strategy`: Strategy trait, built-in strategies, registry
//! - `game`: Players, game orchestration, winners
//! - `simulation`: Many-game driver and win-rate report
//! - `config`: Run configuration
//! - `error`: Error types

pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod simulation;
pub mod strategy;

// Re-export commonly used types
pub use crate::config::{Seating, SimulationConfig};
pub use crate::core::{Die, GameRng, PlayerId, PlayerMap, Turn};
pub use crate::error::{ConfigError, Error, Result};
pub use crate::game::{Game, GameResult, GameView, Player};
pub use crate::simulation::{Simulation, SimulationReport, StrategyTally};
pub use crate::strategy::{
    KeepOnesAndTwosStrategy, KeepOnesStrategy, KeepOnesUnlessLosingStrategy, RandomStrategy,
    SimpleStrategy, Strategy, StrategyKind,
};
