//! Command-line driver: run a strategy comparison and print win rates.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use lowball_dice::config::{Seating, SimulationConfig};
use lowball_dice::simulation::Simulation;
use lowball_dice::strategy::StrategyKind;

#[derive(Parser)]
#[command(
    name = "lowball",
    about = "Compare dice-keeping strategies over many simulated games",
    version
)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of games to simulate
    #[arg(short, long)]
    trials: Option<u64>,

    /// Dice each player keeps per turn
    #[arg(short, long)]
    dice: Option<usize>,

    /// RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Strategy to include (repeatable), e.g. simple, keep-ones
    #[arg(long = "strategy")]
    strategies: Vec<StrategyKind>,

    /// Seat order: listed, reversed or shuffled
    #[arg(long)]
    seating: Option<Seating>,

    /// Log progress every N games (0 disables)
    #[arg(long)]
    progress_interval: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// List available strategies and exit
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn into_config(self) -> lowball_dice::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_json_file(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(dice) = self.dice {
            config.dice_per_turn = dice;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if !self.strategies.is_empty() {
            config.strategies = self.strategies;
        }
        if let Some(seating) = self.seating {
            config.seating = seating;
        }
        if let Some(interval) = self.progress_interval {
            config.progress_interval = interval;
        }

        Ok(config)
    }
}

fn run(cli: Cli) -> lowball_dice::Result<()> {
    if cli.list {
        for kind in StrategyKind::ALL {
            println!("{:<26} {}", kind.short_name(), kind.name());
        }
        return Ok(());
    }

    let json = cli.json;
    let config = cli.into_config()?;
    let report = Simulation::new(config)?.run();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lowball").chain(args.iter().copied())).unwrap()
    }

    fn write_config(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lowball-{}-{name}.json", process::id()));
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        assert_eq!(parse(&[]).into_config().unwrap(), SimulationConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = write_config(
            "override",
            r#"{"trials": 500, "dice_per_turn": 3, "seed": 9, "seating": "listed", "strategies": ["random"]}"#,
        );
        let file = path.to_string_lossy().into_owned();

        let config = parse(&[
            "--config", file.as_str(), "-t", "20", "--strategy", "simple", "--strategy", "keep-ones",
            "--seating", "shuffled",
        ])
        .into_config()
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.trials, 20);
        assert_eq!(config.strategies, vec![StrategyKind::Simple, StrategyKind::KeepOnes]);
        assert_eq!(config.seating, Seating::Shuffled);
        // Values without a flag come from the file
        assert_eq!(config.dice_per_turn, 3);
        assert_eq!(config.seed, 9);
        assert_eq!(config.progress_interval, 10_000);
    }

    #[test]
    fn test_oversized_dice_flag_is_a_config_error() {
        let config = parse(&["--dice", "1000"]).into_config().unwrap();
        let err = Simulation::new(config).err();
        assert_eq!(err, Some(lowball_dice::ConfigError::TooManyDice(1000)));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = parse(&["--config", "/nonexistent/lowball.json"]).into_config().unwrap_err();
        assert!(matches!(err, lowball_dice::Error::Io { .. }));
    }
}
