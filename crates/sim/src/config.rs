//! Simulator configuration from the environment and command line.
use std::env;
use std::path::PathBuf;

use clap::Parser;

/// Headless combat simulator.
#[derive(Parser, Debug)]
#[command(name = "combat-sim")]
#[command(about = "Runs an autopilot encounter and prints a summary", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Combat seed (default: `COMBAT_SEED` or 0)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Comma-separated enemy template ids
    #[arg(long, value_delimiter = ',', default_value = "goblin")]
    pub enemies: Vec<String>,

    /// Comma-separated relic ids the player owns
    #[arg(long, value_delimiter = ',')]
    pub relics: Vec<String>,

    /// Give up after this many turns
    #[arg(long, default_value_t = 60)]
    pub max_turns: u32,

    /// Player max HP
    #[arg(long, default_value_t = 80)]
    pub max_hp: u32,

    /// Combat tuning TOML file (default: `COMBAT_CONFIG` or the embedded tuning)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory with cards.ron and enemies.ron (default: embedded content)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Replay steps with their real delays
    #[arg(long)]
    pub paced: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Settings resolved from flags, then environment, then defaults.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub seed: u64,
    pub enemies: Vec<String>,
    pub relics: Vec<String>,
    pub max_turns: u32,
    pub max_hp: u32,
    pub config_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub paced: bool,
    pub json: bool,
}

impl SimConfig {
    /// Environment variables:
    /// - `COMBAT_SEED` - Combat seed when `--seed` is absent
    /// - `COMBAT_CONFIG` - Tuning TOML path when `--config` is absent
    pub fn resolve(cli: Cli) -> Self {
        Self {
            seed: cli.seed.or_else(|| read_env("COMBAT_SEED")).unwrap_or(0),
            enemies: cli.enemies,
            relics: cli.relics,
            max_turns: cli.max_turns.max(1),
            max_hp: cli.max_hp.max(1),
            config_path: cli
                .config
                .or_else(|| env::var("COMBAT_CONFIG").ok().map(PathBuf::from)),
            data_dir: cli.data_dir,
            paced: cli.paced,
            json: cli.json,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
