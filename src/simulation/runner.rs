//! Monte Carlo driver: play many independent games and tally outright wins.

use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::config::{Seating, SimulationConfig};
use crate::core::GameRng;
use crate::error::ConfigError;
use crate::game::{Game, GameResult, Player};
use crate::strategy::Strategy;

use super::report::SimulationReport;

/// A configured simulation run.
///
/// Strategy instances are built once and shared by every game; players,
/// turns and games are created fresh per trial.
pub struct Simulation {
    config: SimulationConfig,
    strategies: Vec<Arc<dyn Strategy>>,
    /// Report tally position for each entry of `strategies`.
    tally_positions: Vec<usize>,
    /// Names in strategy-list order, used to seed each report.
    names: Vec<String>,
}

impl Simulation {
    /// Create a simulation of the built-in strategies named in `config`.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let strategies = config.strategies.iter().map(|kind| kind.build()).collect();
        Self::with_strategies(config, strategies)
    }

    /// Create a simulation of arbitrary strategies.
    ///
    /// `config.strategies` is ignored; `strategies` defines the list.
    pub fn with_strategies(
        config: SimulationConfig,
        strategies: Vec<Arc<dyn Strategy>>,
    ) -> Result<Self, ConfigError> {
        config.validate_for(strategies.len())?;

        let names: Vec<String> = strategies.iter().map(|s| s.name().to_string()).collect();
        // First appearance of a name opens its tally, matching SimulationReport::new
        let mut by_name: FxHashMap<&str, usize> = FxHashMap::default();
        let tally_positions = names
            .iter()
            .map(|name| {
                let next = by_name.len();
                *by_name.entry(name.as_str()).or_insert(next)
            })
            .collect();

        Ok(Self {
            config,
            strategies,
            tally_positions,
            names,
        })
    }

    /// Run every trial with a fresh RNG seeded from the config.
    pub fn run(&self) -> SimulationReport {
        let mut rng = GameRng::new(self.config.seed);
        self.run_with(&mut rng)
    }

    /// Run every trial, drawing all randomness from `rng`.
    pub fn run_with(&self, rng: &mut GameRng) -> SimulationReport {
        let trials = self.config.trials;
        let interval = self.config.progress_interval;
        let mut report = SimulationReport::new(self.names.iter().cloned());

        log::info!(
            "Simulating {} games of {} (seed {})",
            trials,
            self.names.join(" vs "),
            rng.seed()
        );

        for trial in 0..trials {
            if interval > 0 && trial % interval == 0 {
                log::info!("Game {trial} of {trials}");
            }

            let order = self.seating_order(rng);
            let (_, result) = self.play_seated(&order, rng);
            match result.unique_winner() {
                Some(seat) => report.record_win(self.tally_positions[order[seat.index()]]),
                None => report.record_tie(),
            }
        }

        log::info!(
            "Finished {} games: {} ties ({:.2}%)",
            report.trials,
            report.ties,
            report.tie_percentage()
        );
        report
    }

    /// Seat fresh players, play one game, and return it with its result.
    pub fn play_game(&self, rng: &mut GameRng) -> (Game, GameResult) {
        let order = self.seating_order(rng);
        self.play_seated(&order, rng)
    }

    /// Strategy indices in seat order for the next game.
    fn seating_order(&self, rng: &mut GameRng) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.strategies.len()).collect();
        match self.config.seating {
            Seating::Listed => {}
            Seating::Reversed => order.reverse(),
            Seating::Shuffled => rng.shuffle(&mut order),
        }
        order
    }

    fn play_seated(&self, order: &[usize], rng: &mut GameRng) -> (Game, GameResult) {
        let players = order
            .iter()
            .map(|&i| {
                Player::with_dice_per_turn(Arc::clone(&self.strategies[i]), self.config.dice_per_turn)
            })
            .collect();
        let mut game = Game::new(players);
        let result = game.play(rng);
        (game, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{SimpleStrategy, StrategyKind};

    fn names(game: &Game) -> Vec<&str> {
        game.players().iter().map(Player::name).collect()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig::new().with_trials(0);
        assert_eq!(Simulation::new(config).err(), Some(ConfigError::NoTrials));

        let config = SimulationConfig::new();
        assert_eq!(
            Simulation::with_strategies(config, Vec::new()).err(),
            Some(ConfigError::NoStrategies)
        );

        let config = SimulationConfig::new().with_dice_per_turn(usize::MAX);
        assert_eq!(
            Simulation::new(config).err(),
            Some(ConfigError::TooManyDice(usize::MAX))
        );
    }

    #[test]
    fn test_reversed_seating() {
        let sim = Simulation::new(SimulationConfig::new()).unwrap();
        let (game, _) = sim.play_game(&mut GameRng::new(1));

        assert_eq!(names(&game), vec!["KeepOnesUnlessLosingStrategy", "SimpleStrategy"]);
    }

    #[test]
    fn test_listed_seating() {
        let config = SimulationConfig::new().with_seating(Seating::Listed);
        let sim = Simulation::new(config).unwrap();
        let (game, _) = sim.play_game(&mut GameRng::new(1));

        assert_eq!(names(&game), vec!["SimpleStrategy", "KeepOnesUnlessLosingStrategy"]);
    }

    #[test]
    fn test_shuffled_seating_varies() {
        let config = SimulationConfig::new()
            .with_seating(Seating::Shuffled)
            .with_strategies(StrategyKind::ALL);
        let sim = Simulation::new(config).unwrap();
        let mut rng = GameRng::new(3);

        let first_seats: Vec<String> = (0..30)
            .map(|_| sim.play_game(&mut rng).0.players()[0].name().to_string())
            .collect();

        assert!(first_seats.iter().any(|n| n != &first_seats[0]));
    }

    #[test]
    fn test_dice_per_turn_applies_to_every_player() {
        let config = SimulationConfig::new().with_dice_per_turn(3);
        let sim = Simulation::new(config).unwrap();
        let (game, _) = sim.play_game(&mut GameRng::new(8));

        assert!(game.players().iter().all(|p| p.turn().kept().len() == 3));
        assert!((6..=12).contains(&game.dice_rolled()));
    }

    #[test]
    fn test_every_game_is_counted() {
        let config = SimulationConfig::new()
            .with_trials(2_000)
            .with_progress_interval(0);
        let report = Simulation::new(config).unwrap().run();

        let wins: u64 = report.tallies.iter().map(|t| t.wins).sum();
        assert_eq!(report.trials, 2_000);
        assert_eq!(wins + report.ties, 2_000);
    }

    #[test]
    fn test_same_strategy_twice_always_credits_one_tally() {
        let config = SimulationConfig::new().with_trials(500);
        let strategies: Vec<Arc<dyn Strategy>> =
            vec![Arc::new(SimpleStrategy), Arc::new(SimpleStrategy)];
        let report = Simulation::with_strategies(config, strategies).unwrap().run();

        assert_eq!(report.tallies.len(), 1);
        assert_eq!(report.wins("SimpleStrategy"), Some(report.trials - report.ties));
    }

    #[test]
    fn test_wins_credit_the_seated_strategy() {
        // Distinct strategies, every seating: each win lands on the tally of
        // the strategy that sat in the winning seat.
        for seating in [Seating::Listed, Seating::Reversed, Seating::Shuffled] {
            let config = SimulationConfig::new()
                .with_trials(1)
                .with_seating(seating)
                .with_strategies(StrategyKind::ALL);
            let sim = Simulation::new(config).unwrap();

            for seed in 0..50 {
                let (game, result) = sim.play_game(&mut GameRng::new(seed));
                let report = sim.run_with(&mut GameRng::new(seed));

                assert_eq!(report.trials, 1);
                match result.unique_winner() {
                    Some(seat) => {
                        assert_eq!(report.wins(game.player(seat).name()), Some(1));
                        assert_eq!(report.ties, 0);
                    }
                    None => assert_eq!(report.ties, 1),
                }
            }
        }
    }
}
