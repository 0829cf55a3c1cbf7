//! Mutation primitives shared by cards, enemies, terrain and relics.
//!
//! Every path that changes HP, block or statuses goes through one of these,
//! so terrain rules, INVULNERABLE / UNDYING and event emission apply the same
//! way regardless of who caused the change.

use super::CombatSession;
use crate::combat::{HitOutcome, resolve_direct_loss, resolve_hit};
use crate::env::PlayerResources;
use crate::events::{CombatEvent, DamageSource};
use crate::relic::RelicTrigger;
use crate::state::{Combatant, StatusKind};
use crate::terrain::{BlockRule, block_rule};

impl CombatSession {
    // ========================================================================
    // Enemies
    // ========================================================================

    /// Lands a hit of final size `amount` on the enemy at `idx`.
    pub(super) fn strike_enemy(
        &mut self,
        player: &mut dyn PlayerResources,
        idx: usize,
        amount: u32,
        source: DamageSource,
    ) -> HitOutcome {
        let Some(enemy) = self.state.enemies.get_mut(idx) else {
            return HitOutcome::default();
        };
        if !enemy.is_alive() {
            return HitOutcome::default();
        }
        let outcome = resolve_hit(amount, &mut enemy.block, enemy.current_hp, &enemy.statuses);
        self.land_on_enemy(player, idx, outcome, source);
        outcome
    }

    /// HP loss on the enemy at `idx` that skips block.
    pub(super) fn enemy_direct_loss(
        &mut self,
        player: &mut dyn PlayerResources,
        idx: usize,
        amount: u32,
        source: DamageSource,
    ) -> HitOutcome {
        let Some(enemy) = self.state.enemies.get(idx) else {
            return HitOutcome::default();
        };
        if !enemy.is_alive() || amount == 0 {
            return HitOutcome::default();
        }
        let outcome = resolve_direct_loss(amount, enemy.current_hp, &enemy.statuses, true);
        self.land_on_enemy(player, idx, outcome, source);
        outcome
    }

    fn land_on_enemy(
        &mut self,
        player: &mut dyn PlayerResources,
        idx: usize,
        outcome: HitOutcome,
        source: DamageSource,
    ) {
        let Some(enemy) = self.state.enemies.get_mut(idx) else {
            return;
        };
        let id = enemy.id;
        let name = enemy.name.clone();
        if outcome.nullified {
            self.emit(CombatEvent::HitNullified {
                target: Combatant::Enemy(id),
                amount: outcome.incoming,
                source,
            });
            self.state.log(format!("{name} is invulnerable!"));
            return;
        }

        let killed = enemy.lose_hp(outcome.hp_loss);
        let template_id = enemy.template_id.clone();
        tracing::debug!(
            target: "combat::engine",
            enemy = %id,
            hp_loss = outcome.hp_loss,
            blocked = outcome.blocked,
            ?source,
            "enemy damaged"
        );
        self.emit(CombatEvent::DamageDealt {
            target: id,
            amount: outcome.hp_loss,
            blocked: outcome.blocked,
            source,
        });
        if outcome.blocked > 0 {
            self.state.log(format!(
                "{name} takes {} damage ({} blocked).",
                outcome.hp_loss, outcome.blocked
            ));
        } else {
            self.state.log(format!("{name} takes {} damage.", outcome.hp_loss));
        }

        if killed {
            self.kills_this_card += 1;
            self.emit(CombatEvent::EnemyKilled {
                enemy: id,
                template_id,
            });
            self.state.log(format!("{name} is defeated!"));
            tracing::info!(target: "combat::engine", enemy = %id, "enemy defeated");
        }

        if outcome.hp_loss > 0 && matches!(source, DamageSource::Card | DamageSource::Library) {
            self.fire_relics(player, RelicTrigger::OnDamageDealt, outcome.hp_loss, false);
        }
    }

    pub(super) fn gain_enemy_block(&mut self, idx: usize, amount: u32) {
        let terrain = self.state.active_terrain;
        let Some(enemy) = self.state.enemies.get_mut(idx) else {
            return;
        };
        let id = enemy.id;
        let name = enemy.name.clone();
        let base = amount.saturating_add(enemy.statuses.stacks(StatusKind::Dexterity));
        let gained = match block_rule(terrain) {
            BlockRule::Denied => {
                self.emit(CombatEvent::BlockDenied {
                    target: Combatant::Enemy(id),
                });
                self.state.log(format!("Gladiator Arena denies {name}'s block!"));
                return;
            }
            BlockRule::Doubled => base.saturating_mul(2),
            BlockRule::Normal => base,
        };
        enemy.block = enemy.block.saturating_add(gained);
        self.emit(CombatEvent::BlockGained {
            target: Combatant::Enemy(id),
            amount: gained,
        });
        self.state.log(format!("{name} gains {gained} block."));
    }

    pub(super) fn apply_enemy_status(&mut self, idx: usize, kind: StatusKind, stacks: u32) {
        if stacks == 0 {
            return;
        }
        let Some(enemy) = self.state.enemies.get_mut(idx) else {
            return;
        };
        if !enemy.is_alive() {
            return;
        }
        enemy.statuses.apply(kind, stacks);
        let id = enemy.id;
        let name = enemy.name.clone();
        self.emit(CombatEvent::StatusApplied {
            target: Combatant::Enemy(id),
            status: kind,
            stacks,
        });
        self.state.log(format!("{name} gains {stacks} {kind}."));
    }

    // ========================================================================
    // Player
    // ========================================================================

    /// Lands a hit of final size `amount` on the player.
    pub(super) fn hit_player(
        &mut self,
        player: &mut dyn PlayerResources,
        amount: u32,
        source: DamageSource,
    ) -> HitOutcome {
        let outcome = resolve_hit(
            amount,
            &mut self.state.player_block,
            player.current_hp(),
            &self.state.player_statuses,
        );
        self.land_on_player(player, outcome, source);
        outcome
    }

    /// HP loss on the player that skips block.
    ///
    /// Self-inflicted losses pass `respect_invulnerable = false`.
    pub(super) fn player_direct_loss(
        &mut self,
        player: &mut dyn PlayerResources,
        amount: u32,
        source: DamageSource,
        respect_invulnerable: bool,
    ) -> HitOutcome {
        if amount == 0 {
            return HitOutcome::default();
        }
        let outcome = resolve_direct_loss(
            amount,
            player.current_hp(),
            &self.state.player_statuses,
            respect_invulnerable,
        );
        self.land_on_player(player, outcome, source);
        outcome
    }

    fn land_on_player(
        &mut self,
        player: &mut dyn PlayerResources,
        outcome: HitOutcome,
        source: DamageSource,
    ) {
        if outcome.nullified {
            self.emit(CombatEvent::HitNullified {
                target: Combatant::Player,
                amount: outcome.incoming,
                source,
            });
            self.state.log(format!("Invulnerable! {} damage blocked.", outcome.incoming));
            return;
        }

        if outcome.hp_loss > 0 {
            player.take_damage(outcome.hp_loss);
        }
        tracing::debug!(
            target: "combat::engine",
            hp_loss = outcome.hp_loss,
            blocked = outcome.blocked,
            hp = player.current_hp(),
            ?source,
            "player damaged"
        );
        self.emit(CombatEvent::PlayerDamaged {
            amount: outcome.hp_loss,
            blocked: outcome.blocked,
            source,
        });
        if outcome.blocked > 0 {
            self.state.log(format!(
                "You take {} damage ({} blocked).",
                outcome.hp_loss, outcome.blocked
            ));
        } else {
            self.state.log(format!("You take {} damage.", outcome.hp_loss));
        }

        if outcome.hp_loss > 0 {
            self.fire_relics(player, RelicTrigger::OnDamageTaken, outcome.hp_loss, false);
        }
    }

    /// Heals the player, honoring UNDEAD, HEAL_REDUCTION and escalation.
    pub(super) fn heal_player(&mut self, player: &mut dyn PlayerResources, amount: u32) {
        if amount == 0 {
            return;
        }
        if self.state.player_statuses.has(StatusKind::Undead) {
            self.state.log("Undead! Healing turns into damage.");
            self.player_direct_loss(player, amount, DamageSource::Undead, true);
            return;
        }
        let halved = self.state.player_statuses.has(StatusKind::HealReduction)
            || self.config.is_escalated(self.state.turn);
        let amount = if halved { amount / 2 } else { amount };

        let before = player.current_hp();
        player.heal_player(amount);
        let healed = player.current_hp().saturating_sub(before);
        self.emit(CombatEvent::PlayerHealed { amount: healed });
        self.state.log(format!("You heal {healed} HP."));
    }

    /// Grants block to the player through the terrain block rule.
    ///
    /// Returns the block actually gained.
    pub(super) fn gain_player_block(&mut self, amount: u32, with_dexterity: bool) -> u32 {
        let base = if with_dexterity {
            amount.saturating_add(self.state.player_statuses.stacks(StatusKind::Dexterity))
        } else {
            amount
        };
        let gained = match block_rule(self.state.active_terrain) {
            BlockRule::Denied => {
                self.emit(CombatEvent::BlockDenied {
                    target: Combatant::Player,
                });
                self.state.log("Gladiator Arena: block denied!");
                tracing::debug!(target: "combat::terrain", "block denied");
                return 0;
            }
            BlockRule::Doubled => base.saturating_mul(2),
            BlockRule::Normal => base,
        };
        if gained == 0 {
            return 0;
        }
        self.state.player_block = self.state.player_block.saturating_add(gained);
        self.emit(CombatEvent::BlockGained {
            target: Combatant::Player,
            amount: gained,
        });
        self.state.log(format!("You gain {gained} block."));
        gained
    }

    /// Applies a status to the player and raises the debuff visual when due.
    pub(super) fn apply_player_status(&mut self, kind: StatusKind, stacks: u32) {
        if stacks == 0 {
            return;
        }
        self.state.player_statuses.apply(kind, stacks);
        self.emit(CombatEvent::StatusApplied {
            target: Combatant::Player,
            status: kind,
            stacks,
        });
        if kind.shows_debuff_visual() {
            self.emit(CombatEvent::DebuffVisual { status: kind });
        }
        self.state.log(format!("You gain {stacks} {kind}."));
    }
}
