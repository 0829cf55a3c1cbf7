//! Player turn boundaries, drawing and combat end detection.

use super::CombatSession;
use crate::env::PlayerResources;
use crate::events::{CombatEvent, DamageSource};
use crate::relic::RelicTrigger;
use crate::state::{CombatOutcome, CombatPhase, DrawOutcome, StatusKind};
use crate::terrain::TerrainKind;

impl CombatSession {
    /// Turn start, in order:
    ///
    /// 1. block reset (kept under BLOCK_RETAIN, never on the first turn)
    /// 2. player WEAK / VULNERABLE decay
    /// 3. energy reset
    /// 4. escalation debuffs
    /// 5. enemy enrage
    /// 6. turn-start relics
    /// 7. METALLICIZE
    /// 8. POISON
    /// 9. UNDYING / INVULNERABLE decay (after turn 1)
    /// 10. draw
    pub(super) fn begin_player_turn(&mut self, player: &mut dyn PlayerResources, first: bool) {
        self.state.phase = CombatPhase::PlayerTurn;
        let turn = self.state.turn;
        tracing::info!(
            target: "combat::turns",
            turn,
            hp = player.current_hp(),
            "player turn started"
        );
        self.emit(CombatEvent::TurnStarted { turn });
        self.state.log(format!("--- Turn {turn} ---"));

        if !first {
            if self.state.player_statuses.has(StatusKind::BlockRetain) {
                if self.state.player_block > 0 {
                    let retained = self.state.player_block;
                    self.state.log(format!("Block retained ({retained})."));
                }
            } else {
                self.state.player_block = 0;
            }
        }

        self.state.player_statuses.decay(StatusKind::Weak);
        self.state.player_statuses.decay(StatusKind::Vulnerable);

        self.state.energy = self.state.max_energy + core::mem::take(&mut self.state.pending_energy);
        self.emit_energy();

        if self.config.is_escalated(turn) {
            self.apply_player_status(StatusKind::Vulnerable, self.config.escalation_vulnerable);
            self.apply_player_status(
                StatusKind::HealReduction,
                self.config.escalation_heal_reduction,
            );
            tracing::debug!(target: "combat::turns", turn, "escalation applied");
        }

        if self.config.is_enraged(turn) {
            for idx in self.state.living_enemy_indices() {
                self.apply_enemy_status(idx, StatusKind::Strength, self.config.enrage_strength);
            }
            tracing::debug!(target: "combat::turns", turn, "enemies enraged");
        }

        self.fire_relics(player, RelicTrigger::OnTurnStart, 0, true);

        let metallicize = self.state.player_statuses.stacks(StatusKind::Metallicize);
        if metallicize > 0 {
            self.gain_player_block(metallicize, true);
        }

        let poison = self.state.player_statuses.stacks(StatusKind::Poison);
        if poison > 0 {
            self.player_direct_loss(player, poison, DamageSource::Poison, true);
            self.state.player_statuses.decay(StatusKind::Poison);
            if player.is_dead() {
                self.detect_outcome(player);
                return;
            }
        }

        if turn > 1 {
            self.state.player_statuses.decay(StatusKind::Undying);
            self.state.player_statuses.decay(StatusKind::Invulnerable);
        }

        let count = self.config.hand_size + core::mem::take(&mut self.state.pending_draw);
        self.draw_cards(player, count);
        self.detect_outcome(player);
    }

    /// Turn end: discard, relics, terrain, then STRENGTH_DOWN and counter decay.
    /// Continues into an extra turn or the enemy phase.
    pub(super) fn finish_player_turn(&mut self, player: &mut dyn PlayerResources) {
        let turn = self.state.turn;

        let discarded = self.state.piles.discard_hand();
        self.emit_hand();
        if discarded > 0 {
            self.state.log(format!("Discarded {discarded} cards."));
        }

        self.fire_relics(player, RelicTrigger::OnTurnEnd, 0, true);
        self.terrain_end_of_turn(player);

        let strength_down = self.state.player_statuses.stacks(StatusKind::StrengthDown);
        if strength_down > 0 {
            self.state.player_statuses.reduce(StatusKind::Strength, strength_down);
            self.state.player_statuses.remove(StatusKind::StrengthDown);
            self.state.log(format!("You lose {strength_down} Strength."));
        }
        self.state.player_statuses.decay(StatusKind::BlockRetain);
        self.state.player_statuses.decay(StatusKind::HealReduction);
        self.state.player_statuses.decay(StatusKind::Undead);

        self.emit(CombatEvent::TurnEnded { turn });
        tracing::info!(target: "combat::turns", turn, "player turn ended");

        if self.detect_outcome(player) != CombatOutcome::Ongoing {
            return;
        }

        if self.state.extra_turn_pending {
            self.state.extra_turn_pending = false;
            self.state.turn += 1;
            self.state.log("Extra turn!");
            tracing::debug!(target: "combat::turns", turn = self.state.turn, "extra turn");
            self.begin_player_turn(player, false);
        } else {
            self.run_enemy_phase(player);
        }
    }

    /// Draws up to `count` cards, reshuffling the discard pile when needed.
    pub(super) fn draw_cards(&mut self, player: &mut dyn PlayerResources, count: u32) {
        if count == 0 {
            return;
        }
        let max_hand = self.config.max_hand_size as usize;
        let mut drawn = 0;
        let mut reshuffled = false;
        for _ in 0..count {
            if self.state.piles.hand.len() >= max_hand {
                self.state.log("Your hand is full.");
                break;
            }
            match self.state.piles.draw_one(&mut self.rng) {
                DrawOutcome::Drawn {
                    reshuffled: shuffled,
                    ..
                } => {
                    drawn += 1;
                    if shuffled {
                        reshuffled = true;
                        self.state.log("Shuffled the discard pile into the draw pile.");
                    }
                    if self.state.active_terrain == Some(TerrainKind::AncientLibrary) {
                        self.library_spark(player);
                    }
                }
                DrawOutcome::Exhausted => {
                    self.state.log("No cards left to draw.");
                    break;
                }
            }
        }
        if drawn > 0 {
            tracing::debug!(target: "combat::turns", drawn, reshuffled, "cards drawn");
            self.emit(CombatEvent::CardsDrawn {
                count: drawn,
                reshuffled,
            });
            self.emit_hand();
        }
    }

    /// Transitions into a terminal phase when the combat is decided.
    ///
    /// Victory wins when every enemy is at 0 HP; otherwise a player store at
    /// 0 HP means defeat.
    pub(super) fn detect_outcome(&mut self, player: &dyn PlayerResources) -> CombatOutcome {
        match self.state.phase {
            CombatPhase::Victory => return CombatOutcome::Victory,
            CombatPhase::Defeat => return CombatOutcome::Defeat,
            _ => {}
        }
        if self.state.all_enemies_defeated() {
            self.conclude(CombatOutcome::Victory);
            CombatOutcome::Victory
        } else if player.is_dead() {
            self.conclude(CombatOutcome::Defeat);
            CombatOutcome::Defeat
        } else {
            CombatOutcome::Ongoing
        }
    }

    fn conclude(&mut self, outcome: CombatOutcome) {
        match outcome {
            CombatOutcome::Victory => {
                self.state.phase = CombatPhase::Victory;
                self.state.player_statuses.clear();
                self.state.player_block = 0;
                self.state.log("Victory!");
            }
            CombatOutcome::Defeat => {
                self.state.phase = CombatPhase::Defeat;
                self.state.log("You have been defeated.");
            }
            CombatOutcome::Ongoing => return,
        }
        tracing::info!(target: "combat::engine", %outcome, turn = self.state.turn, "combat ended");
        self.emit(CombatEvent::CombatEnded { outcome });
    }
}
