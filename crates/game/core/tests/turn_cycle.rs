//! Turn machine: phases, validation, drawing and turn-boundary statuses.

mod common;

use combat_core::{
    Card, CardInstanceId, CardType, CombatActionError, CombatConfig, CombatEvent, CombatPhase,
    CombatSession, Effect, EnemyId, EnemyIntent, EnemyTemplate, InvalidReference,
    PlayerResources, PlayerStore, Rejection, SetupError, Status, StatusKind, TargetScope,
};
use common::*;

#[test]
fn setup_rejects_bad_encounters() {
    let mut player = PlayerStore::new(50);

    let err = CombatSession::init_combat(&mut player, Vec::new(), &[dummy(10)]).unwrap_err();
    assert_eq!(err, SetupError::EmptyDeck);

    let err = CombatSession::init_combat(&mut player, starter_deck(), &[]).unwrap_err();
    assert_eq!(err, SetupError::NoEnemies);

    let err = CombatSession::init_combat(
        &mut player,
        starter_deck(),
        &[EnemyTemplate::fixed("dragon", "Dragon", 100)],
    )
    .unwrap_err();
    assert_eq!(err, SetupError::UnknownArchetype("dragon".to_string()));

    let err = CombatSession::init_combat(
        &mut player,
        starter_deck(),
        &[EnemyTemplate::new("goblin", "Goblin", 12, 8)],
    )
    .unwrap_err();
    assert!(matches!(err, SetupError::InvalidHpRange { min: 12, max: 8, .. }));
}

#[test]
fn setup_rolls_hp_and_telegraphs_intents() {
    let mut player = PlayerStore::new(50);
    let mut session = CombatSession::builder()
        .seed(17)
        .init_combat(
            &mut player,
            starter_deck(),
            &[EnemyTemplate::new("goblin", "Goblin", 12, 16), chicken(30)],
        )
        .unwrap();

    assert_eq!(session.phase(), CombatPhase::Setup);
    assert_eq!(session.draw_pile().len(), 10);
    assert!(session.hand().is_empty());

    let goblin = session.enemy(EnemyId(1)).unwrap();
    assert!((12..=16).contains(&goblin.current_hp));
    assert_eq!(goblin.current_hp, goblin.max_hp);
    assert!(goblin.intent.is_attack());
    assert_eq!(
        session.enemy(EnemyId(2)).unwrap().intent,
        EnemyIntent::Defend { block: 10 }
    );

    let steps = session.drain_steps();
    assert!(matches!(
        steps.first().map(|s| &s.event),
        Some(CombatEvent::CombatStarted { deck_size: 10, .. })
    ));
    let telegraphed = steps
        .iter()
        .filter(|s| matches!(s.event, CombatEvent::IntentTelegraphed { .. }))
        .count();
    assert_eq!(telegraphed, 2);
}

#[test]
fn actions_are_rejected_in_the_wrong_phase() {
    let mut player = PlayerStore::new(50);
    let mut session =
        CombatSession::init_combat(&mut player, starter_deck(), &[dummy(10)]).unwrap();

    let err = session.end_player_turn(&mut player).unwrap_err();
    assert_eq!(
        err.rejection(),
        Some(&Rejection::WrongPhase(CombatPhase::Setup))
    );

    session.start_player_turn(&mut player).unwrap();
    let err = session.start_player_turn(&mut player).unwrap_err();
    assert_eq!(
        err.rejection(),
        Some(&Rejection::WrongPhase(CombatPhase::PlayerTurn))
    );
    assert!(session.log().contains("Cannot do that during player_turn."));
}

#[test]
fn insufficient_energy_is_logged_and_changes_nothing() {
    let mut player = PlayerStore::new(50);
    let deck = vec![Card::new("meteor", "Meteor", CardType::Attack, 4).with_effect(
        Effect::Damage {
            amount: 30,
            scope: TargetScope::Single,
        },
    )];
    let mut session = started(&mut player, deck, &[dummy(40)], 1);

    let meteor = first_in_hand(&session, "meteor");
    let err = session
        .play_card(&mut player, meteor, Some(EnemyId(1)))
        .unwrap_err();

    assert_eq!(
        err.rejection(),
        Some(&Rejection::InsufficientEnergy { have: 3, need: 4 })
    );
    assert!(session.log().contains("Not enough energy! (3/4)"));
    assert_eq!(session.energy(), 3);
    assert_eq!(session.hand().len(), 1);
    assert_eq!(session.enemy(EnemyId(1)).unwrap().current_hp, 40);
}

#[test]
fn entangled_disables_attack_cards_only() {
    let mut player = PlayerStore::new(50);
    let deck = vec![
        free(
            "snare",
            CardType::Skill,
            Effect::ApplyStatus {
                status: StatusKind::Entangled,
                stacks: 1,
                scope: TargetScope::Player,
            },
        ),
        strike(),
        defend(),
    ];
    let mut session = started(&mut player, deck, &[dummy(40)], 2);

    let snare = first_in_hand(&session, "snare");
    session.play_card(&mut player, snare, None).unwrap();

    let strike = first_in_hand(&session, "strike");
    let err = session
        .play_card(&mut player, strike, Some(EnemyId(1)))
        .unwrap_err();
    assert_eq!(err.rejection(), Some(&Rejection::AttackDisabled));

    let defend = first_in_hand(&session, "defend");
    session.play_card(&mut player, defend, None).unwrap();
    assert_eq!(session.player_block(), 5);
}

#[test]
fn targeting_is_validated() {
    let mut player = PlayerStore::new(50);
    let zap = free(
        "zap",
        CardType::Attack,
        Effect::Damage {
            amount: 10,
            scope: TargetScope::Single,
        },
    );
    let mut session = started(&mut player, deck_of(zap, 5), &[dummy(10), dummy(10)], 5);

    let card = first_in_hand(&session, "zap");
    let err = session.play_card(&mut player, card, None).unwrap_err();
    assert_eq!(err.rejection(), Some(&Rejection::MissingTarget));

    let err = session
        .play_card(&mut player, card, Some(EnemyId(9)))
        .unwrap_err();
    assert_eq!(
        err,
        CombatActionError::InvalidReference(InvalidReference::EnemyNotFound(EnemyId(9)))
    );

    session.play_card(&mut player, card, Some(EnemyId(1))).unwrap();
    let next = first_in_hand(&session, "zap");
    let err = session
        .play_card(&mut player, next, Some(EnemyId(1)))
        .unwrap_err();
    assert_eq!(err.rejection(), Some(&Rejection::TargetDefeated(EnemyId(1))));

    let err = session
        .play_card(&mut player, CardInstanceId(999), Some(EnemyId(2)))
        .unwrap_err();
    assert_eq!(
        err,
        CombatActionError::InvalidReference(InvalidReference::CardNotInHand(CardInstanceId(
            999
        )))
    );
    assert_eq!(session.hand().len(), 4);
}

#[test]
fn energy_and_block_reset_each_turn() {
    let mut player = PlayerStore::new(50);
    let mut session = started(&mut player, deck_of(defend(), 10), &[dummy(30)], 6);

    let card = first_in_hand(&session, "defend");
    session.play_card(&mut player, card, None).unwrap();
    assert_eq!(session.energy(), 2);
    assert_eq!(session.player_block(), 5);

    session.end_player_turn(&mut player).unwrap();
    assert_eq!(session.turn(), 2);
    assert_eq!(session.energy(), 3);
    assert_eq!(session.player_block(), 0);
    assert_eq!(session.hand().len(), 5);
}

#[test]
fn block_retain_keeps_block_across_the_boundary() {
    let mut player = PlayerStore::new(50);
    let deck = vec![
        free("barricade", CardType::Skill, Effect::BlockRetain { turns: 2 }),
        defend(),
    ];
    let mut session = started(&mut player, deck, &[dummy(30)], 6);

    let barricade = first_in_hand(&session, "barricade");
    session.play_card(&mut player, barricade, None).unwrap();
    let card = first_in_hand(&session, "defend");
    session.play_card(&mut player, card, None).unwrap();

    session.end_player_turn(&mut player).unwrap();
    assert_eq!(session.player_block(), 5);
    assert!(session.log().contains("Block retained (5)."));
}

#[test]
fn empty_draw_pile_reshuffles_discard() {
    let mut player = PlayerStore::new(50);
    let mut session = started(&mut player, deck_of(defend(), 7), &[dummy(30)], 8);
    assert_eq!(session.draw_pile().len(), 2);

    let resolution = session.end_player_turn(&mut player).unwrap();

    assert_eq!(session.hand().len(), 5);
    assert_eq!(
        session.hand().len() + session.draw_pile().len() + session.discard_pile().len(),
        7
    );
    assert!(resolution.events().any(|e| matches!(
        e,
        CombatEvent::CardsDrawn {
            count: 5,
            reshuffled: true
        }
    )));
    assert!(session.log().contains("Shuffled the discard pile"));
}

#[test]
fn drawing_stops_at_max_hand_size() {
    let mut player = PlayerStore::new(50);
    let config = CombatConfig::default().with_hand_size(12);
    let mut session = CombatSession::builder()
        .config(config)
        .init_combat(&mut player, deck_of(defend(), 15), &[dummy(30)])
        .unwrap();
    session.start_player_turn(&mut player).unwrap();

    assert_eq!(session.hand().len(), 10);
    assert!(session.log().contains("Your hand is full."));
}

#[test]
fn poison_ticks_at_turn_start() {
    let mut player = PlayerStore::new(50);
    let deck = vec![free(
        "toxin",
        CardType::Skill,
        Effect::ApplyStatus {
            status: StatusKind::Poison,
            stacks: 3,
            scope: TargetScope::Player,
        },
    )];
    let mut session = started(&mut player, deck, &[dummy(30)], 2);

    let toxin = first_in_hand(&session, "toxin");
    let resolution = session.play_card(&mut player, toxin, None).unwrap();
    assert!(resolution.events().any(|e| matches!(
        e,
        CombatEvent::DebuffVisual {
            status: StatusKind::Poison
        }
    )));

    session.end_player_turn(&mut player).unwrap();
    assert_eq!(player.current_hp(), 47);
    assert_eq!(session.player_statuses().stacks(StatusKind::Poison), 2);
}

#[test]
fn enemy_poison_ticks_before_it_acts() {
    let mut player = PlayerStore::new(50);
    let deck = vec![free(
        "venom",
        CardType::Skill,
        Effect::ApplyStatus {
            status: StatusKind::Poison,
            stacks: 4,
            scope: TargetScope::Single,
        },
    )];
    let mut session = started(&mut player, deck, &[dummy(20)], 2);

    let venom = first_in_hand(&session, "venom");
    session.play_card(&mut player, venom, Some(EnemyId(1))).unwrap();
    session.end_player_turn(&mut player).unwrap();

    let enemy = session.enemy(EnemyId(1)).unwrap();
    assert_eq!(enemy.current_hp, 16);
    assert_eq!(enemy.statuses.stacks(StatusKind::Poison), 3);
    assert_eq!(enemy.statuses.stacks(StatusKind::Strength), 3);
}

#[test]
fn invulnerable_nulls_turn_start_poison() {
    let mut player = PlayerStore::new(50);
    let deck = vec![free(
        "ward",
        CardType::Skill,
        Effect::ApplyStatus {
            status: StatusKind::Poison,
            stacks: 3,
            scope: TargetScope::Player,
        },
    )
    .with_effect(Effect::ApplyStatus {
        status: StatusKind::Invulnerable,
        stacks: 2,
        scope: TargetScope::Player,
    })];
    let mut session = started(&mut player, deck, &[dummy(30)], 2);

    let ward = first_in_hand(&session, "ward");
    session.play_card(&mut player, ward, None).unwrap();
    let resolution = session.end_player_turn(&mut player).unwrap();

    assert_eq!(player.current_hp(), 50);
    assert!(resolution.events().any(|e| matches!(
        e,
        CombatEvent::HitNullified {
            amount: 3,
            source: combat_core::DamageSource::Poison,
            ..
        }
    )));
    assert_eq!(session.player_statuses().stacks(StatusKind::Poison), 2);
    assert_eq!(session.player_statuses().stacks(StatusKind::Invulnerable), 1);
}

#[test]
fn flying_eye_weak_outlasts_the_turn_start_decay() {
    let mut player = PlayerStore::new(50);
    let eye = EnemyTemplate::fixed("eye", "Flying Eye", 40).with_archetype("flying_eye");
    let mut session = started(&mut player, deck_of(strike(), 10), &[eye], 4);
    let eye_id = session.enemies()[0].id;
    assert_eq!(
        session.enemies()[0].intent,
        EnemyIntent::Debuff(Status::new(StatusKind::Weak, 2))
    );

    session.end_player_turn(&mut player).unwrap();
    assert_eq!(session.player_statuses().stacks(StatusKind::Weak), 1);

    let strike = first_in_hand(&session, "strike");
    session.play_card(&mut player, strike, Some(eye_id)).unwrap();
    // 6 * 0.75, floored.
    assert_eq!(session.enemy(eye_id).unwrap().current_hp, 36);
}

#[test]
fn weak_and_vulnerable_decay_at_turn_start() {
    let mut player = PlayerStore::new(50);
    let deck = vec![free(
        "curse",
        CardType::Skill,
        Effect::ApplyStatus {
            status: StatusKind::Weak,
            stacks: 2,
            scope: TargetScope::Player,
        },
    )];
    let mut session = started(&mut player, deck, &[dummy(20)], 2);

    let curse = first_in_hand(&session, "curse");
    session.play_card(&mut player, curse, None).unwrap();
    session.end_player_turn(&mut player).unwrap();
    assert_eq!(session.player_statuses().stacks(StatusKind::Weak), 1);
    session.end_player_turn(&mut player).unwrap();
    assert!(!session.player_statuses().has(StatusKind::Weak));
}

#[test]
fn goblin_intents_follow_the_cycle() {
    let mut player = PlayerStore::new(200);
    let mut session = started(&mut player, deck_of(defend(), 10), &[goblin(50)], 13);

    assert!(session.enemy(EnemyId(1)).unwrap().intent.is_attack());
    session.end_player_turn(&mut player).unwrap();
    assert!(session.enemy(EnemyId(1)).unwrap().intent.is_attack());
    session.end_player_turn(&mut player).unwrap();
    assert_eq!(
        session.enemy(EnemyId(1)).unwrap().intent,
        EnemyIntent::Defend { block: 5 }
    );
    session.end_player_turn(&mut player).unwrap();
    assert_eq!(session.enemy(EnemyId(1)).unwrap().block, 5);
    assert!(player.current_hp() <= 200 - 10);
}

#[test]
fn extra_turn_skips_the_enemy_phase() {
    let mut player = PlayerStore::new(50);
    let deck = vec![free("time_warp", CardType::Gadget, Effect::ExtraTurn)];
    let mut session = CombatSession::builder()
        .config(instant_config())
        .init_combat(&mut player, deck, &[goblin(30)])
        .unwrap();
    session.start_player_turn(&mut player).unwrap();

    let card = first_in_hand(&session, "time_warp");
    session.play_card(&mut player, card, None).unwrap();
    let resolution = session.end_player_turn(&mut player).unwrap();

    assert_eq!(session.turn(), 2);
    assert_eq!(session.phase(), CombatPhase::PlayerTurn);
    assert_eq!(player.current_hp(), 50);
    assert!(
        !resolution
            .events()
            .any(|e| matches!(e, CombatEvent::PlayerDamaged { .. }))
    );

    // The following turn is a normal one.
    session.end_player_turn(&mut player).unwrap();
    assert!(player.current_hp() < 50);
}

#[test]
fn escalation_debuffs_the_player_and_halves_healing() {
    let mut player = PlayerStore::new(100).with_hp(50);
    let deck = deck_of(free("salve", CardType::Skill, Effect::Heal { amount: 10 }), 5);
    let mut session = started(&mut player, deck, &[chicken(30)], 3);

    while session.turn() < 15 {
        session.end_player_turn(&mut player).unwrap();
    }
    assert!(session.player_statuses().has(StatusKind::Vulnerable));
    assert!(session.player_statuses().has(StatusKind::HealReduction));

    let salve = first_in_hand(&session, "salve");
    session.play_card(&mut player, salve, None).unwrap();
    assert_eq!(player.current_hp(), 55);
}

#[test]
fn strength_down_is_removed_at_turn_end() {
    let mut player = PlayerStore::new(50);
    let deck = vec![Card::new("flex", "Flex", CardType::Skill, 0).with_effects(vec![
        Effect::ApplyStatus {
            status: StatusKind::Strength,
            stacks: 2,
            scope: TargetScope::Player,
        },
        Effect::ApplyStatus {
            status: StatusKind::StrengthDown,
            stacks: 2,
            scope: TargetScope::Player,
        },
    ])];
    let mut session = started(&mut player, deck, &[dummy(20)], 2);

    let flex = first_in_hand(&session, "flex");
    session.play_card(&mut player, flex, None).unwrap();
    assert_eq!(session.player_statuses().stacks(StatusKind::Strength), 2);

    session.end_player_turn(&mut player).unwrap();
    assert!(!session.player_statuses().has(StatusKind::Strength));
    assert!(!session.player_statuses().has(StatusKind::StrengthDown));
}

#[test]
fn metallicize_grants_block_every_turn() {
    let mut player = PlayerStore::new(50);
    let deck = vec![free(
        "plating",
        CardType::Effect,
        Effect::ApplyStatus {
            status: StatusKind::Metallicize,
            stacks: 4,
            scope: TargetScope::Player,
        },
    )];
    let mut session = started(&mut player, deck, &[dummy(20)], 2);

    let plating = first_in_hand(&session, "plating");
    session.play_card(&mut player, plating, None).unwrap();
    session.end_player_turn(&mut player).unwrap();
    assert_eq!(session.player_block(), 4);
}
