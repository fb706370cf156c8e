//! Error types.
//!
//! Only the driver's outer layer can fail recoverably: bad configuration or
//! an unreadable config file. A strategy breaking its keep contract is a
//! bug and panics instead of producing an error.

use std::path::PathBuf;

/// Invalid simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("trial count must be at least 1")]
    NoTrials,

    #[error("dice per turn must be at least 1")]
    NoDice,

    #[error("{0} dice per turn given, at most 255 supported")]
    TooManyDice(usize),

    #[error("at least one strategy is required")]
    NoStrategies,

    #[error("{0} strategies given, at most 255 players supported")]
    TooManyStrategies(usize),

    #[error("unknown seating '{0}' (expected listed, reversed or shuffled)")]
    UnknownSeating(String),
}

/// Errors surfaced by the simulation driver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for driver operations.
pub type Result<T> = std::result::Result<T, Error>;
