//! Authoritative combat state representation.
//!
//! This module owns the data structures that describe one encounter: the four
//! card piles, energy, the turn counter and phase, the player's combat-local
//! block and statuses, the enemy roster and the combat log. Callers read this
//! state for rendering but mutate it exclusively through
//! [`CombatSession`](crate::engine::CombatSession).
mod log;
mod piles;
mod status;

use std::collections::BTreeSet;

pub use log::{CombatLog, LogEntry};
pub use piles::{DrawOutcome, Piles};
pub use status::{Status, StatusKind, StatusSet};

use crate::enemy::{EnemyId, EnemyInstance};
use crate::terrain::TerrainKind;

/// Phase of the turn state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CombatPhase {
    /// Encounter prepared, first player turn not started yet.
    #[default]
    Setup,
    PlayerTurn,
    EnemyTurn,
    Victory,
    Defeat,
}

impl CombatPhase {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

/// Result of a combat end check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CombatOutcome {
    Ongoing,
    Victory,
    Defeat,
}

/// Either side of the fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Combatant {
    Player,
    Enemy(EnemyId),
}

/// Canonical snapshot of one encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    pub piles: Piles,
    pub energy: u32,
    pub max_energy: u32,
    /// Starts at 1 and increments once per completed round or extra turn.
    pub turn: u32,
    pub phase: CombatPhase,
    pub player_block: u32,
    pub player_statuses: StatusSet,
    /// Every enemy of the encounter in roster order. Dead enemies keep their slot.
    pub enemies: Vec<EnemyInstance>,
    /// Single terrain slot; last write wins.
    pub active_terrain: Option<TerrainKind>,
    /// Distinct card ids played this encounter.
    pub used_card_ids: BTreeSet<String>,
    pub extra_turn_pending: bool,
    /// Bonus cards added to the next turn-start draw.
    pub pending_draw: u32,
    /// Bonus energy added on top of the next energy reset.
    pub pending_energy: u32,
    pub log: CombatLog,
}

impl CombatState {
    pub fn new(max_energy: u32, log_capacity: usize) -> Self {
        Self {
            piles: Piles::default(),
            energy: 0,
            max_energy,
            turn: 1,
            phase: CombatPhase::Setup,
            player_block: 0,
            player_statuses: StatusSet::new(),
            enemies: Vec::new(),
            active_terrain: None,
            used_card_ids: BTreeSet::new(),
            extra_turn_pending: false,
            pending_draw: 0,
            pending_energy: 0,
            log: CombatLog::new(log_capacity),
        }
    }

    pub fn is_player_turn(&self) -> bool {
        self.phase == CombatPhase::PlayerTurn
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&EnemyInstance> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn enemy_index(&self, id: EnemyId) -> Option<usize> {
        self.enemies.iter().position(|e| e.id == id)
    }

    /// Indices of living enemies in roster order.
    pub fn living_enemy_indices(&self) -> Vec<usize> {
        self.enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn all_enemies_defeated(&self) -> bool {
        self.enemies.iter().all(|e| !e.is_alive())
    }

    /// Appends a message to the combat log, stamped with the current turn.
    pub fn log(&mut self, message: impl Into<String>) {
        self.log.push(self.turn, message);
    }
}
