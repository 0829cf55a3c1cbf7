use std::collections::BTreeSet;

use super::{CombatEvent, CombatObserver, DamageSource};
use crate::card::CardType;
use crate::state::{CombatOutcome, Combatant};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Achievement {
    /// First enemy killed.
    FirstBlood,
    /// A single card hit of at least 30 before block.
    HeavyHitter,
    /// At least 30 block gained within one turn.
    Fortress,
    /// Won without losing HP.
    Untouchable,
    /// A hand of at least five cards, all ATTACK.
    FullArsenal,
    /// Three kills in one combat.
    Exterminator,
}

/// Watches events and unlocks achievements. Never feeds back into the engine.
#[derive(Clone, Debug, Default)]
pub struct AchievementTracker {
    unlocked: BTreeSet<Achievement>,
    kills: u32,
    hp_lost: u32,
    block_this_turn: u32,
}

impl AchievementTracker {
    pub const HEAVY_HIT: u32 = 30;
    pub const FORTRESS_BLOCK: u32 = 30;
    pub const FULL_ARSENAL_HAND: usize = 5;
    pub const EXTERMINATOR_KILLS: u32 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.unlocked.contains(&achievement)
    }

    pub fn unlocked(&self) -> impl Iterator<Item = Achievement> + '_ {
        self.unlocked.iter().copied()
    }

    fn unlock(&mut self, achievement: Achievement) {
        if self.unlocked.insert(achievement) {
            tracing::info!(target: "combat::engine", %achievement, "achievement unlocked");
        }
    }
}

impl CombatObserver for AchievementTracker {
    fn on_event(&mut self, event: &CombatEvent) {
        match event {
            CombatEvent::TurnStarted { .. } => self.block_this_turn = 0,
            CombatEvent::EnemyKilled { .. } => {
                self.kills += 1;
                self.unlock(Achievement::FirstBlood);
                if self.kills >= Self::EXTERMINATOR_KILLS {
                    self.unlock(Achievement::Exterminator);
                }
            }
            CombatEvent::DamageDealt {
                amount,
                blocked,
                source: DamageSource::Card,
                ..
            } if amount + blocked >= Self::HEAVY_HIT => self.unlock(Achievement::HeavyHitter),
            CombatEvent::BlockGained {
                target: Combatant::Player,
                amount,
            } => {
                self.block_this_turn += amount;
                if self.block_this_turn >= Self::FORTRESS_BLOCK {
                    self.unlock(Achievement::Fortress);
                }
            }
            CombatEvent::PlayerDamaged { amount, .. } => self.hp_lost += amount,
            CombatEvent::HandChanged { cards } => {
                if cards.len() >= Self::FULL_ARSENAL_HAND
                    && cards.iter().all(|c| c.card_type == CardType::Attack)
                {
                    self.unlock(Achievement::FullArsenal);
                }
            }
            CombatEvent::CombatEnded {
                outcome: CombatOutcome::Victory,
            } if self.hp_lost == 0 => self.unlock(Achievement::Untouchable),
            _ => {}
        }
    }
}
