//! Relic trigger points.

use super::CombatSession;
use crate::env::PlayerResources;
use crate::events::DamageSource;
use crate::relic::{RelicContext, RelicRequests, RelicTrigger};
use crate::state::{CombatPhase, StatusKind};

impl CombatSession {
    /// Runs the owned relics' hooks for `trigger` and applies the summed requests.
    ///
    /// With `defer_draw`, requested draws are added to the next turn-start
    /// draw instead of happening now. Effects caused by relic requests never
    /// trigger relic hooks again.
    pub(super) fn fire_relics(
        &mut self,
        player: &mut dyn PlayerResources,
        trigger: RelicTrigger,
        amount: u32,
        defer_draw: bool,
    ) {
        if self.relics_suspended || self.relics.is_empty() || player.relics().is_empty() {
            return;
        }
        let turn = self.state.turn;
        let hp = player.current_hp();
        let max_hp = player.max_hp();
        let requests = self.relics.collect(player.relics(), || {
            RelicContext::new(trigger, turn, hp, max_hp, amount)
        });
        if requests.is_empty() {
            return;
        }
        tracing::debug!(target: "combat::relics", %trigger, ?requests, "applying relic requests");

        self.relics_suspended = true;
        self.apply_relic_requests(player, requests, defer_draw);
        self.relics_suspended = false;
    }

    fn apply_relic_requests(
        &mut self,
        player: &mut dyn PlayerResources,
        requests: RelicRequests,
        defer_draw: bool,
    ) {
        if requests.block > 0 {
            self.gain_player_block(requests.block, true);
        }
        if requests.energy > 0 {
            if self.state.phase == CombatPhase::Setup {
                self.state.pending_energy += requests.energy;
            } else {
                self.state.energy += requests.energy;
                self.emit_energy();
            }
        }
        self.apply_player_status(StatusKind::Strength, requests.strength);
        self.apply_player_status(StatusKind::Dexterity, requests.dexterity);
        if requests.draw > 0 {
            if defer_draw {
                self.state.pending_draw += requests.draw;
            } else {
                self.draw_cards(player, requests.draw);
            }
        }
        self.player_direct_loss(player, requests.damage_player, DamageSource::Relic, true);
        self.heal_player(player, requests.heal);

        for status in requests.enemy_statuses.iter() {
            for idx in self.state.living_enemy_indices() {
                self.apply_enemy_status(idx, status.kind, status.stacks);
            }
        }
        if requests.damage_all_enemies > 0 {
            for idx in self.state.living_enemy_indices() {
                self.strike_enemy(player, idx, requests.damage_all_enemies, DamageSource::Relic);
            }
        }
    }
}
