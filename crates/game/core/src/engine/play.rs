use super::{ActionLock, CombatActionError, CombatSession, InvalidReference, Rejection};
use crate::card::{CardInstanceId, CardType};
use crate::enemy::EnemyId;
use crate::env::PlayerResources;
use crate::events::{Checkpoint, CombatEvent, Resolution};
use crate::state::{CombatPhase, StatusKind};

impl CombatSession {
    /// Plays a card from the hand.
    ///
    /// Validation order: phase and locks, card in hand, energy, attack
    /// disabled, target. A validated card always resolves to completion: its
    /// effects apply left to right, then it moves to exactly one of exhaust,
    /// hand (returning cards) or discard.
    pub fn play_card(
        &mut self,
        player: &mut dyn PlayerResources,
        instance_id: CardInstanceId,
        target: Option<EnemyId>,
    ) -> Result<Resolution, CombatActionError> {
        self.guard(ActionLock::CARD_PLAY, CombatPhase::PlayerTurn)?;

        let Some(card) = self.state.piles.hand_card(instance_id) else {
            tracing::error!(target: "combat::engine", card = %instance_id, "card not in hand");
            return Err(InvalidReference::CardNotInHand(instance_id).into());
        };
        let cost = card.cost;
        let requires_target = card.card.requires_target();
        let is_attack = card.card_type() == CardType::Attack;

        if cost > self.state.energy {
            return Err(self.reject(Rejection::InsufficientEnergy {
                have: self.state.energy,
                need: cost,
            }));
        }
        if is_attack && self.state.player_statuses.has(StatusKind::Entangled) {
            return Err(self.reject(Rejection::AttackDisabled));
        }
        let target_idx = match (requires_target, target) {
            (true, None) => return Err(self.reject(Rejection::MissingTarget)),
            (true, Some(id)) => {
                let Some(idx) = self.state.enemy_index(id) else {
                    tracing::error!(target: "combat::engine", enemy = %id, "target does not exist");
                    return Err(InvalidReference::EnemyNotFound(id).into());
                };
                if !self.state.enemies[idx].is_alive() {
                    return Err(self.reject(Rejection::TargetDefeated(id)));
                }
                Some(idx)
            }
            (false, Some(id)) => self.state.enemy_index(id),
            (false, None) => None,
        };

        let Some(mut played) = self.state.piles.take_from_hand(instance_id) else {
            return Err(InvalidReference::CardNotInHand(instance_id).into());
        };
        self.state.energy -= cost;
        self.state.used_card_ids.insert(played.card.id.clone());
        tracing::debug!(
            target: "combat::engine",
            card = %played.card.id,
            cost,
            energy = self.state.energy,
            "card played"
        );
        self.emit(CombatEvent::CardPlayed {
            instance_id,
            card_id: played.card.id.clone(),
            card_type: played.card_type(),
            cost,
        });
        self.emit_energy();
        self.state.log(format!("Played {}.", played.card.name));

        self.kills_this_card = 0;
        for effect in &played.card.effects {
            self.apply_effect(player, effect, target_idx);
        }
        self.kills_this_card = 0;

        if played.card.exhausts() {
            self.state.log(format!("{} is exhausted.", played.card.name));
            self.state.piles.exhaust.push(played);
        } else if played.card.return_to_hand {
            self.checkpoint(Checkpoint::ReturnToHand(instance_id));
            played.restore_cost();
            self.state.piles.hand.push(played);
        } else {
            played.restore_cost();
            self.state.piles.discard.push(played);
        }
        self.emit_hand();

        self.detect_outcome(player);
        Ok(self.finish())
    }
}
