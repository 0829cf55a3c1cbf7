//! The enemy phase.
//!
//! Enemies act strictly in roster order. For each living enemy: block reset,
//! poison, intent, then WEAK / VULNERABLE decay. An attack only lands after
//! its `AttackWindup` checkpoint, and the decay only after `StatusDecay`.

use super::CombatSession;
use crate::combat::calculate_damage;
use crate::enemy::EnemyIntent;
use crate::env::PlayerResources;
use crate::events::{Checkpoint, CombatEvent, DamageSource};
use crate::state::{CombatOutcome, CombatPhase, Status, StatusKind};

impl CombatSession {
    pub(super) fn run_enemy_phase(&mut self, player: &mut dyn PlayerResources) {
        self.state.phase = CombatPhase::EnemyTurn;
        tracing::info!(target: "combat::enemy", turn = self.state.turn, "enemy phase started");

        for idx in 0..self.state.enemies.len() {
            if player.is_dead() {
                break;
            }
            if self.state.enemies[idx].is_alive() {
                self.enemy_act(player, idx);
            }
        }

        if self.detect_outcome(player) != CombatOutcome::Ongoing {
            return;
        }

        let next_turn = self.state.turn + 1;
        for idx in self.state.living_enemy_indices() {
            self.telegraph_intent(idx, next_turn);
        }
        self.state.turn = next_turn;
        self.begin_player_turn(player, false);
    }

    fn enemy_act(&mut self, player: &mut dyn PlayerResources, idx: usize) {
        let enemy = &mut self.state.enemies[idx];
        enemy.block = 0;
        let id = enemy.id;
        let name = enemy.name.clone();
        let intent = enemy.intent;
        let poison = enemy.statuses.stacks(StatusKind::Poison);

        if poison > 0 {
            self.enemy_direct_loss(player, idx, poison, DamageSource::Poison);
            let enemy = &mut self.state.enemies[idx];
            enemy.statuses.decay(StatusKind::Poison);
            if !enemy.is_alive() {
                tracing::debug!(target: "combat::enemy", enemy = %id, "enemy succumbed to poison");
                return;
            }
        }

        tracing::debug!(target: "combat::enemy", enemy = %id, %intent, "enemy acts");
        match intent {
            EnemyIntent::Attack { damage } => {
                self.checkpoint(Checkpoint::AttackWindup(id));
                let dealt = calculate_damage(
                    damage,
                    &self.state.enemies[idx].statuses,
                    &self.state.player_statuses,
                    self.state.active_terrain,
                );
                self.state.log(format!("{name} attacks for {dealt}."));
                self.hit_player(player, dealt, DamageSource::EnemyAttack(id));
            }
            EnemyIntent::Defend { block } => self.gain_enemy_block(idx, block),
            EnemyIntent::Buff(status) => {
                let status = status.unwrap_or(Status::new(
                    StatusKind::Strength,
                    self.config.default_buff_strength,
                ));
                self.apply_enemy_status(idx, status.kind, status.stacks);
            }
            EnemyIntent::Debuff(status) => {
                self.state.log(format!("{name} casts {}.", status.kind));
                self.apply_player_status(status.kind, status.stacks);
            }
        }

        self.checkpoint(Checkpoint::StatusDecay(id));
        let statuses = &mut self.state.enemies[idx].statuses;
        statuses.decay(StatusKind::Weak);
        statuses.decay(StatusKind::Vulnerable);
    }

    /// Recomputes an enemy's intent for `turn` from its archetype script.
    fn telegraph_intent(&mut self, idx: usize, turn: u32) {
        let Some(enemy) = self.state.enemies.get(idx) else {
            return;
        };
        let Some(script) = self.scripts.get(&enemy.archetype) else {
            tracing::debug!(
                target: "combat::enemy",
                archetype = %enemy.archetype,
                "no intent script"
            );
            return;
        };
        let id = enemy.id;
        let intent = script(turn, &mut self.rng);
        if let Some(enemy) = self.state.enemies.get_mut(idx) {
            enemy.intent = intent;
        }
        self.emit(CombatEvent::IntentTelegraphed { enemy: id, intent });
    }
}
