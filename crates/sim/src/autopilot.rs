//! A greedy strategy for unattended encounters.
//!
//! Each call looks at the current hand and picks one affordable card:
//! block when the telegraphed attacks would get through, otherwise the card
//! that hits hardest, aimed at the weakest living enemy.

use combat_core::{
    CardInstance, CardInstanceId, CardType, CombatSession, Effect, EnemyId, EnemyIntent,
    StatusKind,
};

/// Plays allowed per turn. Bounds loops of zero-cost returning cards.
pub const MAX_PLAYS_PER_TURN: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Play {
    pub card: CardInstanceId,
    pub target: Option<EnemyId>,
}

#[derive(Debug, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn choose(&self, session: &CombatSession) -> Option<Play> {
        let target = weakest_enemy(session);
        let entangled = session.player_statuses().has(StatusKind::Entangled);
        let threatened = incoming_damage(session) > session.player_block();

        session
            .hand()
            .iter()
            .filter(|card| card.cost <= session.energy())
            .filter(|card| !(entangled && card.card_type() == CardType::Attack))
            .filter(|card| !card.card.requires_target() || target.is_some())
            .max_by_key(|card| (score(card, threatened), std::cmp::Reverse(card.cost)))
            .filter(|card| score(card, threatened) > 0)
            .map(|card| Play {
                card: card.instance_id,
                target: card.card.requires_target().then_some(target).flatten(),
            })
    }
}

fn weakest_enemy(session: &CombatSession) -> Option<EnemyId> {
    session
        .enemies()
        .iter()
        .filter(|enemy| enemy.is_alive())
        .min_by_key(|enemy| enemy.current_hp)
        .map(|enemy| enemy.id)
}

fn incoming_damage(session: &CombatSession) -> u32 {
    session
        .enemies()
        .iter()
        .filter(|enemy| enemy.is_alive())
        .map(|enemy| match enemy.intent {
            EnemyIntent::Attack { damage } => damage,
            _ => 0,
        })
        .sum()
}

fn score(card: &CardInstance, threatened: bool) -> u32 {
    card.card
        .effects
        .iter()
        .map(|effect| match *effect {
            Effect::Damage { amount, .. } => amount,
            Effect::DamagePerLostHp { base, .. } => base + 4,
            Effect::DamagePerPlayed { per_card, .. } => per_card * 2,
            Effect::DamageFromBlock { .. } | Effect::HalveEnemyHp { .. } => 8,
            Effect::Block { amount } if threatened => amount * 2,
            Effect::Block { amount } => amount / 2,
            Effect::DoubleBlock | Effect::BlockRetain { .. } => u32::from(threatened) * 6,
            Effect::LoseHp { .. } => 0,
            Effect::GainMaxHpOnKill { .. } | Effect::ExtraTurn => 1,
            _ => 3,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{Card, EnemyTemplate, PlayerStore};

    fn session(player: &mut PlayerStore, deck: Vec<Card>) -> CombatSession {
        let dummy = EnemyTemplate::fixed("dummy", "Dummy", 100).with_archetype("training_dummy");
        let mut session = CombatSession::builder()
            .seed(5)
            .init_combat(player, deck, &[dummy])
            .unwrap();
        session.start_player_turn(player).unwrap();
        session
    }

    #[test]
    fn aims_attacks_until_energy_runs_out() {
        let strike =
            Card::new("strike", "Strike", CardType::Attack, 1).with_effect(Effect::damage(6));
        let mut player = PlayerStore::new(50);
        let mut session = session(&mut player, vec![strike; 10]);
        let dummy = session.enemies()[0].id;

        for _ in 0..3 {
            let play = Autopilot.choose(&session).unwrap();
            assert_eq!(play.target, Some(dummy));
            session.play_card(&mut player, play.card, play.target).unwrap();
        }
        assert_eq!(Autopilot.choose(&session), None);
        assert_eq!(session.enemies()[0].current_hp, 82);
    }

    #[test]
    fn self_damage_alone_is_never_chosen() {
        let bleed = Card::new("bleed", "Bleed", CardType::Skill, 0)
            .with_effect(Effect::LoseHp { amount: 3 });
        let mut player = PlayerStore::new(50);
        let session = session(&mut player, vec![bleed; 6]);
        assert_eq!(Autopilot.choose(&session), None);
    }
}
