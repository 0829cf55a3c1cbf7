//! Headless combat simulator.
//!
//! Composition root: loads content and tuning, builds a session, drives it
//! with the autopilot and prints a summary.
//!
//! ```bash
//! combat-sim --seed 42 --enemies goblin,skeleton --relics anchor --json
//! COMBAT_SEED=7 combat-sim --paced
//! ```

mod autopilot;
mod config;
mod summary;

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use combat_content::{ConfigLoader, ContentFactory, ContentLibrary, builtin, builtin_relics};
use combat_core::{
    AchievementTracker, CombatConfig, CombatOutcome, CombatSession, CombatStats, PacingMode,
    PlayerStore, Resolution,
};

use crate::autopilot::{Autopilot, MAX_PLAYS_PER_TURN};
use crate::config::{Cli, SimConfig};
use crate::summary::Summary;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::resolve(Cli::parse());
    let summary = run(&config).await?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render_text());
    }
    Ok(())
}

async fn run(config: &SimConfig) -> Result<Summary> {
    let tuning = load_tuning(config)?;
    let library = load_library(config)?;
    let deck = library.starter_deck()?;
    let enemies = library.encounter(config.enemies.as_slice())?;

    let mut player = PlayerStore::new(config.max_hp);
    for relic in &config.relics {
        player.add_relic(relic);
    }

    let stats = Arc::new(Mutex::new(CombatStats::new()));
    let achievements = Arc::new(Mutex::new(AchievementTracker::new()));
    let pacing = if config.paced {
        PacingMode::Deferred
    } else {
        PacingMode::Immediate
    };

    tracing::info!(
        seed = config.seed,
        enemies = ?config.enemies,
        relics = ?config.relics,
        ?pacing,
        "starting encounter"
    );

    let mut session = CombatSession::builder()
        .config(tuning)
        .seed(config.seed)
        .relics(builtin_relics())
        .observer(Arc::clone(&stats))
        .observer(Arc::clone(&achievements))
        .pacing(pacing)
        .init_combat(&mut player, deck, &enemies)?;
    let paced = config.paced;
    replay_queued(&mut session, paced).await;

    let first = session.start_player_turn(&mut player)?;
    present(&mut session, first, paced).await;

    let autopilot = Autopilot;
    while !session.phase().is_terminal() {
        if session.turn() > config.max_turns {
            tracing::warn!(max_turns = config.max_turns, "turn limit reached");
            break;
        }

        for _ in 0..MAX_PLAYS_PER_TURN {
            let Some(play) = autopilot.choose(&session) else {
                break;
            };
            let resolution = session.play_card(&mut player, play.card, play.target)?;
            present(&mut session, resolution, paced).await;
            if session.phase().is_terminal() {
                break;
            }
        }
        if session.phase().is_terminal() {
            break;
        }

        let resolution = session.end_player_turn(&mut player)?;
        present(&mut session, resolution, paced).await;
    }

    let outcome = session.check_combat_end(&player);
    replay_queued(&mut session, paced).await;
    if outcome == CombatOutcome::Ongoing {
        tracing::info!(turn = session.turn(), "encounter stopped before an outcome");
    }

    let stats = stats
        .lock()
        .map_err(|_| anyhow!("stats observer poisoned"))?
        .clone();
    let achievements = achievements
        .lock()
        .map_err(|_| anyhow!("achievement observer poisoned"))?;
    Ok(Summary::collect(&session, &player, outcome, stats, &achievements))
}

fn load_tuning(config: &SimConfig) -> Result<CombatConfig> {
    match &config.config_path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading tuning from {}", path.display())),
        None => builtin::config(),
    }
}

fn load_library(config: &SimConfig) -> Result<ContentLibrary> {
    match &config.data_dir {
        Some(dir) => ContentFactory::new(dir.clone()).load_library(),
        None => builtin::library(),
    }
}

/// Logs the steps an immediate-mode operation returned, then drains the queue.
async fn present(session: &mut CombatSession, resolution: Resolution, paced: bool) {
    for step in resolution.steps {
        tracing::debug!(target: "combat::sim", event = ?step.event, "step");
    }
    replay_queued(session, paced).await;
}

/// Drains steps queued in the session. Paced runs sleep for each step's delay.
async fn replay_queued(session: &mut CombatSession, paced: bool) {
    while let Some(step) = session.next_step() {
        if paced && !step.delay.is_zero() {
            tokio::time::sleep(step.delay).await;
        }
        tracing::debug!(
            target: "combat::sim",
            delay_ms = u64::try_from(step.delay.as_millis()).unwrap_or(u64::MAX),
            event = ?step.event,
            "step"
        );
    }
}
