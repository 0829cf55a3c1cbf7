//! Combat tuning constants and runtime-tunable parameters.

use core::time::Duration;

/// Combat configuration constants and tunable parameters.
///
/// Every field has a default matching the shipped balance, so partially
/// specified TOML files (behind the `serde` feature) are accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Cards drawn at the start of every player turn.
    pub hand_size: u32,
    /// Drawing stops once the hand holds this many cards.
    pub max_hand_size: u32,
    /// Energy restored at the start of every player turn.
    pub max_energy: u32,
    /// Number of entries retained by the combat log ring.
    pub log_capacity: usize,

    /// From this turn on the player gains VULNERABLE and HEAL_REDUCTION every turn,
    /// and all healing is halved.
    pub escalation_turn: u32,
    pub escalation_vulnerable: u32,
    pub escalation_heal_reduction: u32,
    /// From this turn on every living enemy gains STRENGTH at each player turn start.
    pub enrage_turn: u32,
    pub enrage_strength: u32,

    /// Stacks granted by a BUFF intent that does not name its own status.
    pub default_buff_strength: u32,
    /// Upper bound (inclusive) for costs rerolled by zero gravity.
    pub zero_gravity_max_cost: u32,

    pub terrain: TerrainTuning,
    pub pacing: PacingConfig,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of distinct status kinds carried by a single combatant.
    pub const MAX_STATUS_KINDS: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HAND_SIZE: u32 = 5;
    pub const DEFAULT_MAX_HAND_SIZE: u32 = 10;
    pub const DEFAULT_MAX_ENERGY: u32 = 3;
    pub const DEFAULT_LOG_CAPACITY: usize = 50;

    pub fn new() -> Self {
        Self {
            hand_size: Self::DEFAULT_HAND_SIZE,
            max_hand_size: Self::DEFAULT_MAX_HAND_SIZE,
            max_energy: Self::DEFAULT_MAX_ENERGY,
            log_capacity: Self::DEFAULT_LOG_CAPACITY,
            escalation_turn: 15,
            escalation_vulnerable: 2,
            escalation_heal_reduction: 2,
            enrage_turn: 25,
            enrage_strength: 3,
            default_buff_strength: 3,
            zero_gravity_max_cost: 3,
            terrain: TerrainTuning::default(),
            pacing: PacingConfig::default(),
        }
    }

    pub fn with_max_energy(mut self, max_energy: u32) -> Self {
        self.max_energy = max_energy;
        self
    }

    pub fn with_hand_size(mut self, hand_size: u32) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Returns true once the escalating-difficulty phase applies to `turn`.
    pub const fn is_escalated(&self, turn: u32) -> bool {
        turn >= self.escalation_turn
    }

    pub const fn is_enraged(&self, turn: u32) -> bool {
        turn >= self.enrage_turn
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Magnitudes of the end-of-turn and draw-triggered terrain effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TerrainTuning {
    /// POISON stacks added to every living combatant by the toxic swamp.
    pub swamp_poison: u32,
    /// Direct HP loss dealt to every living combatant by the volcano.
    pub eruption_damage: u32,
    pub lightning_strikes: u32,
    pub lightning_min: u32,
    pub lightning_max: u32,
    /// Ancient library spark damage before the strength bonus.
    pub library_base_damage: u32,
}

impl Default for TerrainTuning {
    fn default() -> Self {
        Self {
            swamp_poison: 2,
            eruption_damage: 3,
            lightning_strikes: 3,
            lightning_min: 3,
            lightning_max: 8,
            library_base_damage: 1,
        }
    }
}

/// Delay hints attached to pacing checkpoints.
///
/// The engine never sleeps; these values only travel with the emitted steps.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PacingConfig {
    pub attack_windup_ms: u64,
    pub status_decay_ms: u64,
    pub return_to_hand_ms: u64,
}

impl PacingConfig {
    /// Pacing with every delay collapsed to zero.
    pub const fn instant() -> Self {
        Self {
            attack_windup_ms: 0,
            status_decay_ms: 0,
            return_to_hand_ms: 0,
        }
    }

    pub const fn attack_windup(&self) -> Duration {
        Duration::from_millis(self.attack_windup_ms)
    }

    pub const fn status_decay(&self) -> Duration {
        Duration::from_millis(self.status_decay_ms)
    }

    pub const fn return_to_hand(&self) -> Duration {
        Duration::from_millis(self.return_to_hand_ms)
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            attack_windup_ms: 500,
            status_decay_ms: 400,
            return_to_hand_ms: 300,
        }
    }
}
