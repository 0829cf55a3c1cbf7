//! Shared builders for combat-core integration tests.
#![allow(dead_code)]

use combat_core::{
    Card, CardInstanceId, CardType, CombatConfig, CombatSession, Effect, EnemyTemplate,
    PlayerStore, StatusKind, TargetScope,
};

pub fn strike() -> Card {
    Card::new("strike", "Strike", CardType::Attack, 1).with_effect(Effect::Damage {
        amount: 6,
        scope: TargetScope::Single,
    })
}

pub fn defend() -> Card {
    Card::new("defend", "Defend", CardType::Shield, 1).with_effect(Effect::Block { amount: 5 })
}

pub fn bash() -> Card {
    Card::new("bash", "Bash", CardType::Attack, 2).with_effects(vec![
        Effect::Damage {
            amount: 8,
            scope: TargetScope::Single,
        },
        Effect::ApplyStatus {
            status: StatusKind::Vulnerable,
            stacks: 2,
            scope: TargetScope::Single,
        },
    ])
}

/// A zero-cost single-effect card.
pub fn free(id: &str, card_type: CardType, effect: Effect) -> Card {
    Card::new(id, id, card_type, 0).with_effect(effect)
}

pub fn starter_deck() -> Vec<Card> {
    let mut deck = Vec::new();
    deck.extend(std::iter::repeat_with(strike).take(5));
    deck.extend(std::iter::repeat_with(defend).take(4));
    deck.push(bash());
    deck
}

/// `count` copies of the same card.
pub fn deck_of(card: Card, count: usize) -> Vec<Card> {
    std::iter::repeat_n(card, count).collect()
}

/// An enemy that never attacks: it buffs strength every turn.
pub fn dummy(hp: u32) -> EnemyTemplate {
    EnemyTemplate::fixed("dummy", "Training Dummy", hp).with_archetype("training_dummy")
}

/// An enemy that only ever defends for 10.
pub fn chicken(hp: u32) -> EnemyTemplate {
    EnemyTemplate::fixed("chicken", "Golden Chicken", hp).with_archetype("golden_chicken")
}

pub fn goblin(hp: u32) -> EnemyTemplate {
    EnemyTemplate::fixed("goblin", "Goblin", hp)
}

/// Config with instant pacing, so step delays are all zero.
pub fn instant_config() -> CombatConfig {
    let mut config = CombatConfig::default();
    config.pacing = combat_core::PacingConfig::instant();
    config
}

/// Prepares a session and starts turn 1.
pub fn started(
    player: &mut PlayerStore,
    deck: Vec<Card>,
    enemies: &[EnemyTemplate],
    seed: u64,
) -> CombatSession {
    let mut session = CombatSession::builder()
        .seed(seed)
        .config(instant_config())
        .init_combat(player, deck, enemies)
        .unwrap();
    session.start_player_turn(player).unwrap();
    session
}

pub fn first_in_hand(session: &CombatSession, card_id: &str) -> CardInstanceId {
    session
        .find_in_hand(card_id)
        .unwrap_or_else(|| panic!("{card_id} not in hand"))
}
