use super::{CombatEvent, CombatObserver, DamageSource};
use crate::state::{CombatOutcome, Combatant};

/// Per-encounter counters, flushed exactly once when combat ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub cards_played: u32,
    pub damage_dealt: u32,
    /// Damage enemy block absorbed from the player's hits.
    pub damage_blocked_by_enemies: u32,
    pub damage_taken: u32,
    /// Damage the player's block absorbed.
    pub damage_blocked: u32,
    pub block_gained: u32,
    pub statuses_applied: u32,
    pub kills: u32,
    pub highest_hit: u32,
    pub turns: u32,
    pub outcome: Option<CombatOutcome>,
    flushes: u32,
}

impl CombatStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the counters were flushed. Zero or one.
    pub fn flushes(&self) -> u32 {
        self.flushes
    }

    pub fn is_flushed(&self) -> bool {
        self.flushes > 0
    }

    fn flush(&mut self, outcome: CombatOutcome) {
        if self.is_flushed() {
            return;
        }
        self.outcome = Some(outcome);
        self.flushes += 1;
        tracing::info!(
            target: "combat::engine",
            %outcome,
            turns = self.turns,
            damage_dealt = self.damage_dealt,
            damage_taken = self.damage_taken,
            kills = self.kills,
            "combat stats flushed"
        );
    }
}

impl CombatObserver for CombatStats {
    fn on_event(&mut self, event: &CombatEvent) {
        if self.is_flushed() {
            return;
        }
        match event {
            CombatEvent::CardPlayed { .. } => self.cards_played += 1,
            CombatEvent::DamageDealt {
                amount,
                blocked,
                source,
                ..
            } => {
                self.damage_dealt += amount;
                self.damage_blocked_by_enemies += blocked;
                if matches!(source, DamageSource::Card) {
                    self.highest_hit = self.highest_hit.max(amount + blocked);
                }
            }
            CombatEvent::PlayerDamaged {
                amount, blocked, ..
            } => {
                self.damage_taken += amount;
                self.damage_blocked += blocked;
            }
            CombatEvent::BlockGained {
                target: Combatant::Player,
                amount,
            } => self.block_gained += amount,
            CombatEvent::StatusApplied { .. } => self.statuses_applied += 1,
            CombatEvent::EnemyKilled { .. } => self.kills += 1,
            CombatEvent::TurnStarted { turn } => self.turns = self.turns.max(*turn),
            CombatEvent::CombatEnded { outcome } => self.flush(*outcome),
            _ => {}
        }
    }
}
