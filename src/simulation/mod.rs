//! Monte Carlo comparison of strategies.
//!
//! A run plays a fixed number of independent games from a single seeded
//! RNG and counts how often each strategy wins outright. Same seed and
//! config always give the same report.
//!
//! ## Example
//!
//! ```
//! use lowball_dice::config::SimulationConfig;
//! use lowball_dice::simulation::Simulation;
//! use lowball_dice::strategy::StrategyKind;
//!
//! let config = SimulationConfig::new()
//!     .with_trials(1_000)
//!     .with_strategies([StrategyKind::Simple, StrategyKind::Random]);
//!
//! let report = Simulation::new(config).unwrap().run();
//! assert_eq!(report.trials, 1_000);
//! for (name, pct) in report.percentages() {
//!     println!("{name}: {pct:.2}%");
//! }
//! ```

mod report;
mod runner;

pub use report::{SimulationReport, StrategyTally};
pub use runner::Simulation;
