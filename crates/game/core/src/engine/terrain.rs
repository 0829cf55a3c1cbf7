//! Terrain activation and terrain-driven damage.

use super::CombatSession;
use crate::env::{PlayerResources, RngStream};
use crate::events::{CombatEvent, DamageSource};
use crate::state::StatusKind;
use crate::terrain::{TerrainKind, TerrainPulse};

impl CombatSession {
    /// Replaces the active terrain.
    ///
    /// Leaving zero gravity restores hand costs before the new terrain is
    /// announced; entering it rerolls every hand card's cost once.
    pub(super) fn set_terrain(&mut self, terrain: TerrainKind) {
        let previous = self.state.active_terrain;
        if previous == Some(TerrainKind::ZeroGravity) && terrain != TerrainKind::ZeroGravity {
            self.state.piles.restore_hand_costs();
            self.state.log("Gravity returns. Card costs restored.");
        }

        self.state.active_terrain = Some(terrain);
        tracing::info!(target: "combat::terrain", %terrain, ?previous, "terrain changed");
        self.emit(CombatEvent::TerrainChanged {
            terrain: Some(terrain),
        });
        self.state.log(format!("Terrain: {}.", terrain.display_name()));

        if terrain == TerrainKind::ZeroGravity {
            let max_cost = self.config.zero_gravity_max_cost;
            for card in &mut self.state.piles.hand {
                card.cost = self.rng.range_inclusive(RngStream::CostReroll, 0, max_cost);
            }
            self.state.log("Card costs in hand are scrambled!");
            self.emit_hand();
        }
    }

    /// Applies the active terrain's end-of-turn pulse, if it has one.
    pub(super) fn terrain_end_of_turn(&mut self, player: &mut dyn PlayerResources) {
        let Some(terrain) = self.state.active_terrain else {
            return;
        };
        let Some(pulse) = terrain.end_of_turn_pulse() else {
            return;
        };
        let tuning = self.config.terrain.clone();
        let source = DamageSource::Terrain(terrain);
        tracing::debug!(target: "combat::terrain", %terrain, ?pulse, "terrain pulse");

        match pulse {
            TerrainPulse::PoisonEveryone => {
                self.state.log("Toxic fumes poison everyone!");
                self.apply_player_status(StatusKind::Poison, tuning.swamp_poison);
                for idx in self.state.living_enemy_indices() {
                    self.apply_enemy_status(idx, StatusKind::Poison, tuning.swamp_poison);
                }
            }
            TerrainPulse::DamageEveryone => {
                self.state.log("The volcano erupts!");
                self.player_direct_loss(player, tuning.eruption_damage, source, true);
                for idx in self.state.living_enemy_indices() {
                    self.enemy_direct_loss(player, idx, tuning.eruption_damage, source);
                }
            }
            TerrainPulse::LightningStrikes => {
                self.state.log("Lightning strikes!");
                for _ in 0..tuning.lightning_strikes {
                    if player.is_dead() {
                        break;
                    }
                    let living = self.state.living_enemy_indices();
                    // The last slot is the player.
                    let Some(pick) = self.rng.pick_index(RngStream::Lightning, living.len() + 1)
                    else {
                        break;
                    };
                    let damage = self.rng.range_inclusive(
                        RngStream::Lightning,
                        tuning.lightning_min,
                        tuning.lightning_max,
                    );
                    match living.get(pick) {
                        Some(&idx) => {
                            self.strike_enemy(player, idx, damage, source);
                        }
                        None => {
                            self.hit_player(player, damage, source);
                        }
                    }
                }
            }
        }
    }

    /// Ancient library: one drawn card sparks a random living enemy.
    pub(super) fn library_spark(&mut self, player: &mut dyn PlayerResources) {
        let living = self.state.living_enemy_indices();
        let Some(pick) = self.rng.pick_index(RngStream::Targeting, living.len()) else {
            return;
        };
        let strength = self.state.player_statuses.stacks(StatusKind::Strength);
        let damage = self.config.terrain.library_base_damage + strength / 2;
        if let Some(&idx) = living.get(pick) {
            self.strike_enemy(player, idx, damage, DamageSource::Library);
        }
    }
}
