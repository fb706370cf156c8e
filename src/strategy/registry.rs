//! Named registry of the built-in strategies.
//!
//! Lets configuration files and the command line refer to strategies by
//! name. Both the report name (`SimpleStrategy`) and a kebab-case short
//! form (`simple`) are accepted.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use super::{
    KeepOnesAndTwosStrategy, KeepOnesStrategy, KeepOnesUnlessLosingStrategy, RandomStrategy,
    SimpleStrategy, Strategy,
};

/// A built-in strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Random,
    Simple,
    KeepOnes,
    KeepOnesAndTwos,
    KeepOnesUnlessLosing,
}

/// Unknown strategy name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}'")]
pub struct ParseStrategyError(pub String);

impl StrategyKind {
    /// Every built-in strategy.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Random,
        StrategyKind::Simple,
        StrategyKind::KeepOnes,
        StrategyKind::KeepOnesAndTwos,
        StrategyKind::KeepOnesUnlessLosing,
    ];

    /// Instantiate the strategy.
    #[must_use]
    pub fn build(self) -> Arc<dyn Strategy> {
        match self {
            StrategyKind::Random => Arc::new(RandomStrategy),
            StrategyKind::Simple => Arc::new(SimpleStrategy),
            StrategyKind::KeepOnes => Arc::new(KeepOnesStrategy),
            StrategyKind::KeepOnesAndTwos => Arc::new(KeepOnesAndTwosStrategy),
            StrategyKind::KeepOnesUnlessLosing => Arc::new(KeepOnesUnlessLosingStrategy),
        }
    }

    /// Report name, identical to the built strategy's `name()`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "RandomStrategy",
            StrategyKind::Simple => "SimpleStrategy",
            StrategyKind::KeepOnes => "KeepOnesStrategy",
            StrategyKind::KeepOnesAndTwos => "KeepOnesAndTwosStrategy",
            StrategyKind::KeepOnesUnlessLosing => "KeepOnesUnlessLosingStrategy",
        }
    }

    /// Kebab-case short name.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Simple => "simple",
            StrategyKind::KeepOnes => "keep-ones",
            StrategyKind::KeepOnesAndTwos => "keep-ones-and-twos",
            StrategyKind::KeepOnesUnlessLosing => "keep-ones-unless-losing",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.name() == s || k.short_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
