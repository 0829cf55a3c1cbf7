//! Combat events, pacing steps and the observers that watch them.
//!
//! Every state mutation the engine performs is mirrored by a [`CombatEvent`].
//! Events reach observers the moment they happen and are also collected into
//! [`Step`]s so a renderer can replay them with the configured delays.
mod achievements;
mod observer;
mod stats;

pub use achievements::{Achievement, AchievementTracker};
pub use observer::{CombatObserver, EventRecorder, NullObserver};
pub use stats::CombatStats;

use core::time::Duration;

use crate::card::{CardInstanceId, CardType};
use crate::enemy::{EnemyId, EnemyIntent};
use crate::state::{CombatOutcome, Combatant, StatusKind};
use crate::terrain::TerrainKind;

/// Where a damage amount came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageSource {
    Card,
    EnemyAttack(EnemyId),
    Poison,
    Terrain(TerrainKind),
    Relic,
    /// Sparks from the ancient library on draw.
    Library,
    /// Healing converted by UNDEAD.
    Undead,
    /// Self-inflicted HP loss from a card.
    SelfInflicted,
}

/// Pacing checkpoints. Each one precedes the mutations it paces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Checkpoint {
    /// An enemy attack is about to land.
    AttackWindup(EnemyId),
    /// An enemy's WEAK / VULNERABLE are about to decay.
    StatusDecay(EnemyId),
    /// A played card is about to return to the hand.
    ReturnToHand(CardInstanceId),
}

/// Card summary carried by hand snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandCard {
    pub instance_id: CardInstanceId,
    pub card_id: String,
    pub card_type: CardType,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    CombatStarted {
        deck_size: usize,
        enemies: Vec<EnemyId>,
    },
    TurnStarted {
        turn: u32,
    },
    TurnEnded {
        turn: u32,
    },
    CardsDrawn {
        count: u32,
        reshuffled: bool,
    },
    CardPlayed {
        instance_id: CardInstanceId,
        card_id: String,
        card_type: CardType,
        cost: u32,
    },
    HandChanged {
        cards: Vec<HandCard>,
    },
    EnergyChanged {
        energy: u32,
    },
    /// HP damage to an enemy. `amount` is HP actually lost.
    DamageDealt {
        target: EnemyId,
        amount: u32,
        blocked: u32,
        source: DamageSource,
    },
    /// HP damage to the player. `amount` is HP actually lost.
    PlayerDamaged {
        amount: u32,
        blocked: u32,
        source: DamageSource,
    },
    /// INVULNERABLE nulled an incoming amount.
    HitNullified {
        target: Combatant,
        amount: u32,
        source: DamageSource,
    },
    BlockGained {
        target: Combatant,
        amount: u32,
    },
    BlockDenied {
        target: Combatant,
    },
    StatusApplied {
        target: Combatant,
        status: StatusKind,
        stacks: u32,
    },
    /// WEAK, VULNERABLE or POISON landed on the player.
    DebuffVisual {
        status: StatusKind,
    },
    EnemyKilled {
        enemy: EnemyId,
        template_id: String,
    },
    PlayerHealed {
        amount: u32,
    },
    MaxHpChanged {
        delta: i32,
    },
    IntentTelegraphed {
        enemy: EnemyId,
        intent: EnemyIntent,
    },
    TerrainChanged {
        terrain: Option<TerrainKind>,
    },
    Checkpoint(Checkpoint),
    CombatEnded {
        outcome: CombatOutcome,
    },
}

/// One event plus the delay a renderer should wait before exposing it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub delay: Duration,
    pub event: CombatEvent,
}

/// Ordered steps produced by one engine operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub steps: Vec<Step>,
}

impl Resolution {
    pub fn events(&self) -> impl Iterator<Item = &CombatEvent> {
        self.steps.iter().map(|s| &s.event)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Sum of every step delay.
    pub fn total_delay(&self) -> Duration {
        self.steps.iter().map(|s| s.delay).sum()
    }

    /// Position of the first event matching `pred`.
    pub fn position(&self, pred: impl Fn(&CombatEvent) -> bool) -> Option<usize> {
        self.steps.iter().position(|s| pred(&s.event))
    }
}
