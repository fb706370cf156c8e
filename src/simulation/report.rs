//! Aggregate win counts for a simulation run.

use serde::{Deserialize, Serialize};

/// Wins credited to one strategy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyTally {
    /// Strategy name.
    pub name: String,
    /// Games this strategy won outright.
    pub wins: u64,
}

/// Final counts of a simulation run.
///
/// Only outright wins are credited; a tied game counts towards `ties` and
/// awards nothing, so percentages sum to at most 100.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Games played.
    pub trials: u64,

    /// Games with more than one winner.
    pub ties: u64,

    /// One tally per distinct strategy name, in first-appearance order.
    pub tallies: Vec<StrategyTally>,
}

impl SimulationReport {
    /// Create an empty report. Repeated names share a single tally.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let mut tallies: Vec<StrategyTally> = Vec::new();
        for name in names {
            let name = name.into();
            if tallies.iter().all(|t| t.name != name) {
                tallies.push(StrategyTally { name, wins: 0 });
            }
        }

        Self {
            trials: 0,
            ties: 0,
            tallies,
        }
    }

    /// Position of a strategy's tally.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.tallies.iter().position(|t| t.name == name)
    }

    /// Record a game won outright by the tally at `position`.
    pub fn record_win(&mut self, position: usize) {
        self.trials += 1;
        self.tallies[position].wins += 1;
    }

    /// Record a tied game.
    pub fn record_tie(&mut self) {
        self.trials += 1;
        self.ties += 1;
    }

    /// Outright wins for a strategy.
    #[must_use]
    pub fn wins(&self, name: &str) -> Option<u64> {
        self.position(name).map(|i| self.tallies[i].wins)
    }

    /// Share of all games won outright by a strategy, in percent.
    #[must_use]
    pub fn win_percentage(&self, name: &str) -> Option<f64> {
        self.wins(name).map(|wins| self.percent(wins))
    }

    /// Share of games that ended in a tie, in percent.
    #[must_use]
    pub fn tie_percentage(&self) -> f64 {
        self.percent(self.ties)
    }

    /// `(name, win percentage)` for every strategy, in tally order.
    pub fn percentages(&self) -> Vec<(&str, f64)> {
        self.tallies
            .iter()
            .map(|t| (t.name.as_str(), self.percent(t.wins)))
            .collect()
    }

    fn percent(&self, count: u64) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            count as f64 / self.trials as f64 * 100.0
        }
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, pct) in self.percentages() {
            writeln!(f, "{name}: {pct:.4}%")?;
        }
        write!(f, "Ties: {:.4}% of {} games", self.tie_percentage(), self.trials)
    }
}
