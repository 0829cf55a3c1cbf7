//! Card effect dispatch.
//!
//! One exhaustive match over [`Effect`]. Adding an effect kind fails to
//! compile until it is handled here.

use super::CombatSession;
use crate::card::{Effect, TargetScope};
use crate::combat::calculate_damage;
use crate::env::{PlayerResources, RngStream};
use crate::events::{CombatEvent, DamageSource};
use crate::state::StatusKind;

impl CombatSession {
    /// Resolves one effect. `target` is the roster index chosen for the card.
    pub(super) fn apply_effect(
        &mut self,
        player: &mut dyn PlayerResources,
        effect: &Effect,
        target: Option<usize>,
    ) {
        tracing::debug!(target: "combat::engine", ?effect, "resolving effect");
        match *effect {
            Effect::Damage { amount, scope } => {
                self.deal_card_damage(player, amount, scope, target);
            }
            Effect::DamagePerLostHp {
                base,
                ratio_percent,
                scope,
            } => {
                let lost = player.max_hp().saturating_sub(player.current_hp());
                let amount = base.saturating_add(lost.saturating_mul(ratio_percent) / 100);
                self.deal_card_damage(player, amount, scope, target);
            }
            Effect::DamagePerPlayed { per_card, scope } => {
                let played = u32::try_from(self.state.used_card_ids.len()).unwrap_or(u32::MAX);
                self.deal_card_damage(player, per_card.saturating_mul(played), scope, target);
            }
            Effect::DamageFromBlock { scope } => {
                let amount = self.state.player_block;
                self.deal_card_damage(player, amount, scope, target);
            }
            Effect::HalveEnemyHp { scope } => {
                for idx in self.targets(scope, target) {
                    let hp = self.state.enemies[idx].current_hp;
                    let loss = hp - (hp / 2).max(1);
                    if loss > 0 {
                        self.enemy_direct_loss(player, idx, loss, DamageSource::Card);
                    }
                }
            }

            Effect::Block { amount } => {
                self.gain_player_block(amount, true);
            }
            Effect::DoubleBlock => {
                let current = self.state.player_block;
                if current == 0 {
                    self.state.log("No block to double.");
                } else {
                    self.gain_player_block(current, false);
                }
            }
            Effect::BlockRetain { turns } => {
                self.apply_player_status(StatusKind::BlockRetain, turns);
            }

            Effect::ApplyStatus {
                status,
                stacks,
                scope,
            } => {
                if scope == TargetScope::Player {
                    self.apply_player_status(status, stacks);
                } else {
                    for idx in self.targets(scope, target) {
                        self.apply_enemy_status(idx, status, stacks);
                    }
                }
            }
            Effect::MultiplyStrength { factor } => {
                let strength = self.state.player_statuses.stacks(StatusKind::Strength);
                let multiplied = strength.saturating_mul(factor);
                if multiplied == strength {
                    self.state.log("No effect.");
                } else if multiplied > strength {
                    self.apply_player_status(StatusKind::Strength, multiplied - strength);
                } else {
                    self.state.player_statuses.set(StatusKind::Strength, multiplied);
                    self.state.log(format!("Strength is now {multiplied}."));
                }
            }

            Effect::Draw { count } => self.draw_cards(player, count),
            Effect::GainEnergy { amount } => {
                self.state.energy += amount;
                self.emit_energy();
                self.state.log(format!("You gain {amount} energy."));
            }
            Effect::Heal { amount } => self.heal_player(player, amount),
            Effect::LoseHp { amount } => {
                self.player_direct_loss(player, amount, DamageSource::SelfInflicted, false);
            }
            Effect::GainMaxHpOnKill { amount } => {
                if self.kills_this_card > 0 && amount > 0 {
                    let delta = i32::try_from(amount).unwrap_or(i32::MAX);
                    player.modify_max_hp(delta);
                    player.modify_hp(delta);
                    self.emit(CombatEvent::MaxHpChanged { delta });
                    self.state.log(format!("Max HP +{amount}!"));
                }
            }

            Effect::UpgradeHand => {
                let upgraded = self
                    .state
                    .piles
                    .hand
                    .iter_mut()
                    .map(|card| card.upgrade())
                    .filter(|changed| *changed)
                    .count();
                if upgraded == 0 {
                    self.state.log("Nothing to upgrade.");
                } else {
                    self.state.log(format!("Upgraded {upgraded} cards."));
                    self.emit_hand();
                }
            }
            Effect::ExtraTurn => {
                self.state.extra_turn_pending = true;
                self.state.log("You will take an extra turn.");
            }
            Effect::SetTerrain { terrain } => self.set_terrain(terrain),
        }
    }

    fn deal_card_damage(
        &mut self,
        player: &mut dyn PlayerResources,
        base: u32,
        scope: TargetScope,
        target: Option<usize>,
    ) {
        for idx in self.targets(scope, target) {
            let damage = calculate_damage(
                base,
                &self.state.player_statuses,
                &self.state.enemies[idx].statuses,
                self.state.active_terrain,
            );
            self.strike_enemy(player, idx, damage, DamageSource::Card);
        }
    }

    /// Living enemies an effect with `scope` lands on.
    fn targets(&mut self, scope: TargetScope, target: Option<usize>) -> Vec<usize> {
        match scope {
            TargetScope::Single => target
                .filter(|&idx| self.state.enemies.get(idx).is_some_and(|e| e.is_alive()))
                .into_iter()
                .collect(),
            TargetScope::All => self.state.living_enemy_indices(),
            TargetScope::Random => {
                let living = self.state.living_enemy_indices();
                self.rng
                    .pick_index(RngStream::Targeting, living.len())
                    .and_then(|pick| living.get(pick).copied())
                    .into_iter()
                    .collect()
            }
            TargetScope::Player => Vec::new(),
        }
    }
}
