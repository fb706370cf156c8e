//! Simulation configuration.
//!
//! Defaults reproduce the reference experiment: a million games of
//! `SimpleStrategy` against `KeepOnesUnlessLosingStrategy`, five dice per
//! turn, with the strategy list reversed to form the seat order.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::core::{DEFAULT_DICE_PER_TURN, MAX_DICE_PER_TURN, MAX_PLAYERS};
use crate::error::{ConfigError, Error, Result};
use crate::strategy::StrategyKind;

/// How the strategy list maps to seats in each game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Seating {
    /// Seat in list order.
    Listed,
    /// Seat in reverse list order.
    #[default]
    Reversed,
    /// Fresh random order every game, drawn from the simulation RNG.
    Shuffled,
}

impl FromStr for Seating {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "listed" => Ok(Seating::Listed),
            "reversed" => Ok(Seating::Reversed),
            "shuffled" => Ok(Seating::Shuffled),
            _ => Err(ConfigError::UnknownSeating(s.to_string())),
        }
    }
}

/// Simulation run parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub trials: u64,

    /// Dice each player must keep per turn.
    pub dice_per_turn: usize,

    /// RNG seed. Same seed and config give an identical report.
    pub seed: u64,

    /// Log progress every this many games (0 = never).
    pub progress_interval: u64,

    /// Seat order policy.
    pub seating: Seating,

    /// Strategies to compare, one player each.
    pub strategies: Vec<StrategyKind>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: 1_000_000,
            dice_per_turn: DEFAULT_DICE_PER_TURN,
            seed: 42,
            progress_interval: 10_000,
            seating: Seating::default(),
            strategies: vec![StrategyKind::Simple, StrategyKind::KeepOnesUnlessLosing],
        }
    }
}

impl SimulationConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a JSON file. Missing fields take default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Set dice per turn.
    #[must_use]
    pub fn with_dice_per_turn(mut self, dice: usize) -> Self {
        self.dice_per_turn = dice;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the progress logging interval.
    #[must_use]
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Set the seating policy.
    #[must_use]
    pub fn with_seating(mut self, seating: Seating) -> Self {
        self.seating = seating;
        self
    }

    /// Set the strategies to compare.
    #[must_use]
    pub fn with_strategies(mut self, strategies: impl IntoIterator<Item = StrategyKind>) -> Self {
        self.strategies = strategies.into_iter().collect();
        self
    }

    /// Check the config describes a runnable simulation.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.validate_for(self.strategies.len())
    }

    /// Validate against a strategy list supplied outside the config.
    pub(crate) fn validate_for(&self, strategy_count: usize) -> std::result::Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        if self.dice_per_turn == 0 {
            return Err(ConfigError::NoDice);
        }
        if self.dice_per_turn > MAX_DICE_PER_TURN {
            return Err(ConfigError::TooManyDice(self.dice_per_turn));
        }
        if strategy_count == 0 {
            return Err(ConfigError::NoStrategies);
        }
        if strategy_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyStrategies(strategy_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::new();
        assert_eq!(config.trials, 1_000_000);
        assert_eq!(config.dice_per_turn, 5);
        assert_eq!(config.progress_interval, 10_000);
        assert_eq!(config.seating, Seating::Reversed);
        assert_eq!(
            config.strategies,
            vec![StrategyKind::Simple, StrategyKind::KeepOnesUnlessLosing]
        );
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new()
            .with_trials(10)
            .with_dice_per_turn(3)
            .with_seed(7)
            .with_progress_interval(0)
            .with_seating(Seating::Shuffled)
            .with_strategies(StrategyKind::ALL);

        assert_eq!(config.trials, 10);
        assert_eq!(config.dice_per_turn, 3);
        assert_eq!(config.seed, 7);
        assert_eq!(config.progress_interval, 0);
        assert_eq!(config.seating, Seating::Shuffled);
        assert_eq!(config.strategies.len(), 5);
    }

    #[test]
    fn test_validate_rejects_degenerate_configs() {
        assert_eq!(
            SimulationConfig::new().with_trials(0).validate(),
            Err(ConfigError::NoTrials)
        );
        assert_eq!(
            SimulationConfig::new().with_dice_per_turn(0).validate(),
            Err(ConfigError::NoDice)
        );
        assert_eq!(
            SimulationConfig::new().with_dice_per_turn(256).validate(),
            Err(ConfigError::TooManyDice(256))
        );
        assert_eq!(
            SimulationConfig::new().with_dice_per_turn(usize::MAX).validate(),
            Err(ConfigError::TooManyDice(usize::MAX))
        );
        assert_eq!(
            SimulationConfig::new().with_dice_per_turn(MAX_DICE_PER_TURN).validate(),
            Ok(())
        );
        assert_eq!(
            SimulationConfig::new().with_strategies(Vec::new()).validate(),
            Err(ConfigError::NoStrategies)
        );
        assert_eq!(
            SimulationConfig::new()
                .with_strategies(vec![StrategyKind::Simple; 300])
                .validate(),
            Err(ConfigError::TooManyStrategies(300))
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"trials": 500, "seating": "shuffled", "strategies": ["random"]}"#)
                .unwrap();

        assert_eq!(config.trials, 500);
        assert_eq!(config.seating, Seating::Shuffled);
        assert_eq!(config.strategies, vec![StrategyKind::Random]);
        assert_eq!(config.dice_per_turn, 5);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_missing_file() {
        let err = SimulationConfig::from_json_file("/nonexistent/lowball.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_parse_seating() {
        assert_eq!("Listed".parse::<Seating>(), Ok(Seating::Listed));
        assert_eq!("shuffled".parse::<Seating>(), Ok(Seating::Shuffled));
        assert_eq!(
            "circle".parse::<Seating>(),
            Err(ConfigError::UnknownSeating("circle".to_string()))
        );
    }
}
