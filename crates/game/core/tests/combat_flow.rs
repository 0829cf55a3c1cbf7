//! End-to-end encounters driven through the public session API.

mod common;

use combat_core::{
    CardType, CombatEvent, CombatOutcome, CombatPhase, CombatSession, Effect, EnemyId,
    EnemyIntent, IntentScripts, PlayerResources, PlayerStore, Rejection, StatusKind,
    TargetScope,
};
use common::*;

#[test]
fn strike_from_starter_hand_deals_six() {
    // Any seed whose opening hand holds a strike will do.
    let (mut player, mut session) = (0..20)
        .find_map(|seed| {
            let mut player = PlayerStore::new(80);
            let session = started(&mut player, starter_deck(), &[dummy(10)], seed);
            session
                .find_in_hand("strike")
                .is_some()
                .then_some((player, session))
        })
        .expect("some seed deals a strike");

    assert_eq!(session.hand().len(), 5);
    assert_eq!(session.draw_pile().len(), 5);
    let energy = session.energy();

    let strike = first_in_hand(&session, "strike");
    session
        .play_card(&mut player, strike, Some(EnemyId(1)))
        .unwrap();

    assert_eq!(session.enemy(EnemyId(1)).unwrap().current_hp, 4);
    assert_eq!(session.energy(), energy - 1);
    assert_eq!(session.discard_pile().len(), 1);
}

#[test]
fn vulnerable_scales_damage_by_half() {
    let mut player = PlayerStore::new(80);
    let deck = vec![
        free(
            "expose",
            CardType::Skill,
            Effect::ApplyStatus {
                status: StatusKind::Vulnerable,
                stacks: 2,
                scope: TargetScope::Single,
            },
        ),
        free(
            "smash",
            CardType::Attack,
            Effect::Damage {
                amount: 10,
                scope: TargetScope::Single,
            },
        ),
    ];
    let mut session = started(&mut player, deck, &[dummy(50)], 3);

    let expose = first_in_hand(&session, "expose");
    session.play_card(&mut player, expose, Some(EnemyId(1))).unwrap();
    let smash = first_in_hand(&session, "smash");
    let resolution = session.play_card(&mut player, smash, Some(EnemyId(1))).unwrap();

    assert_eq!(session.enemy(EnemyId(1)).unwrap().current_hp, 35);
    assert!(resolution.events().any(|e| matches!(
        e,
        CombatEvent::DamageDealt { amount: 15, .. }
    )));
}

#[test]
fn gladiator_arena_denies_block_and_amplifies_damage() {
    let mut player = PlayerStore::new(80);
    let deck = vec![
        free(
            "arena",
            CardType::Terrain,
            Effect::SetTerrain {
                terrain: combat_core::TerrainKind::GladiatorArena,
            },
        ),
        free("guard", CardType::Shield, Effect::Block { amount: 5 }),
        free(
            "smash",
            CardType::Attack,
            Effect::Damage {
                amount: 10,
                scope: TargetScope::Single,
            },
        ),
    ];
    let mut session = started(&mut player, deck, &[dummy(50)], 9);

    let arena = first_in_hand(&session, "arena");
    session.play_card(&mut player, arena, None).unwrap();
    assert_eq!(
        session.active_terrain(),
        Some(combat_core::TerrainKind::GladiatorArena)
    );
    assert_eq!(session.exhaust_pile().len(), 1);

    let guard = first_in_hand(&session, "guard");
    let resolution = session.play_card(&mut player, guard, None).unwrap();
    assert_eq!(session.player_block(), 0);
    assert!(session.log().contains("block denied"));
    assert!(
        resolution
            .events()
            .any(|e| matches!(e, CombatEvent::BlockDenied { .. }))
    );

    let smash = first_in_hand(&session, "smash");
    session.play_card(&mut player, smash, Some(EnemyId(1))).unwrap();
    assert_eq!(session.enemy(EnemyId(1)).unwrap().current_hp, 35);
}

#[test]
fn enrage_adds_three_strength_once_per_turn() {
    let mut player = PlayerStore::new(80);
    let deck = deck_of(defend(), 10);
    let mut session = started(&mut player, deck, &[chicken(30), chicken(30)], 11);

    while session.turn() < 24 {
        session.end_player_turn(&mut player).unwrap();
    }
    for enemy in session.enemies() {
        assert_eq!(enemy.statuses.stacks(StatusKind::Strength), 0);
    }

    session.end_player_turn(&mut player).unwrap();
    assert_eq!(session.turn(), 25);
    for enemy in session.enemies() {
        assert_eq!(enemy.statuses.stacks(StatusKind::Strength), 3);
    }

    session.end_player_turn(&mut player).unwrap();
    for enemy in session.enemies() {
        assert_eq!(enemy.statuses.stacks(StatusKind::Strength), 6);
    }
    assert_eq!(session.phase(), CombatPhase::PlayerTurn);
}

#[test]
fn combat_continues_until_every_enemy_is_down() {
    let mut player = PlayerStore::new(80);
    let zap = free(
        "zap",
        CardType::Attack,
        Effect::Damage {
            amount: 6,
            scope: TargetScope::Single,
        },
    );
    let mut session = started(
        &mut player,
        deck_of(zap, 5),
        &[dummy(6), dummy(6), dummy(7)],
        4,
    );

    for target in [1, 2, 3] {
        let zap = first_in_hand(&session, "zap");
        session
            .play_card(&mut player, zap, Some(EnemyId(target)))
            .unwrap();
    }
    assert_eq!(session.enemy(EnemyId(3)).unwrap().current_hp, 1);
    assert_eq!(session.check_combat_end(&player), CombatOutcome::Ongoing);
    assert_eq!(session.phase(), CombatPhase::PlayerTurn);

    let zap = first_in_hand(&session, "zap");
    let resolution = session
        .play_card(&mut player, zap, Some(EnemyId(3)))
        .unwrap();
    assert_eq!(session.phase(), CombatPhase::Victory);
    assert_eq!(session.check_combat_end(&player), CombatOutcome::Victory);
    assert!(resolution.events().any(|e| matches!(
        e,
        CombatEvent::CombatEnded {
            outcome: CombatOutcome::Victory
        }
    )));
    assert!(session.log().contains("Victory!"));

    let zap = first_in_hand(&session, "zap");
    let err = session
        .play_card(&mut player, zap, Some(EnemyId(3)))
        .unwrap_err();
    assert_eq!(err.rejection(), Some(&Rejection::CombatOver));
}

fn brute_scripts() -> IntentScripts {
    let mut scripts = IntentScripts::builtin();
    scripts.register("brute", |_, _| EnemyIntent::Attack { damage: 20 });
    scripts
}

fn brute() -> combat_core::EnemyTemplate {
    combat_core::EnemyTemplate::fixed("brute", "Brute", 40)
}

fn brute_session(player: &mut PlayerStore, deck: Vec<combat_core::Card>) -> CombatSession {
    let mut session = CombatSession::builder()
        .seed(1)
        .config(instant_config())
        .scripts(brute_scripts())
        .init_combat(player, deck, &[brute()])
        .unwrap();
    session.start_player_turn(player).unwrap();
    session
}

#[test]
fn undying_leaves_the_player_at_one_hp() {
    let mut player = PlayerStore::new(50).with_hp(5);
    let deck = vec![free(
        "last_stand",
        CardType::Effect,
        Effect::ApplyStatus {
            status: StatusKind::Undying,
            stacks: 1,
            scope: TargetScope::Player,
        },
    )];
    let mut session = brute_session(&mut player, deck);

    let card = first_in_hand(&session, "last_stand");
    session.play_card(&mut player, card, None).unwrap();
    session.end_player_turn(&mut player).unwrap();

    assert_eq!(player.current_hp(), 1);
    assert_eq!(session.phase(), CombatPhase::PlayerTurn);
    assert_eq!(session.turn(), 2);
    // Decays at the start of turn 2.
    assert!(!session.player_statuses().has(StatusKind::Undying));
}

#[test]
fn invulnerable_nulls_enemy_attacks() {
    let mut player = PlayerStore::new(50);
    let deck = vec![free(
        "aegis",
        CardType::Effect,
        Effect::ApplyStatus {
            status: StatusKind::Invulnerable,
            stacks: 1,
            scope: TargetScope::Player,
        },
    )];
    let mut session = brute_session(&mut player, deck);

    let card = first_in_hand(&session, "aegis");
    session.play_card(&mut player, card, None).unwrap();
    let resolution = session.end_player_turn(&mut player).unwrap();

    assert_eq!(player.current_hp(), 50);
    assert!(resolution.events().any(|e| matches!(
        e,
        CombatEvent::HitNullified { amount: 20, .. }
    )));
    assert!(session.log().contains("Invulnerable!"));
}

#[test]
fn lethal_enemy_attack_defeats_the_player() {
    let mut player = PlayerStore::new(50).with_hp(5);
    let mut session = brute_session(&mut player, deck_of(defend(), 5));

    let resolution = session.end_player_turn(&mut player).unwrap();

    assert!(player.is_dead());
    assert_eq!(session.phase(), CombatPhase::Defeat);
    assert_eq!(session.check_combat_end(&player), CombatOutcome::Defeat);
    assert!(resolution.events().any(|e| matches!(
        e,
        CombatEvent::CombatEnded {
            outcome: CombatOutcome::Defeat
        }
    )));
    let err = session.end_player_turn(&mut player).unwrap_err();
    assert_eq!(err.rejection(), Some(&Rejection::CombatOver));
}

#[test]
fn same_seed_replays_identically() {
    let run = |seed| {
        let mut player = PlayerStore::new(80);
        let mut session = started(
            &mut player,
            starter_deck(),
            &[goblin(20), combat_core::EnemyTemplate::new("skeleton", "Skeleton", 18, 24)],
            seed,
        );
        let mut events: Vec<CombatEvent> = Vec::new();
        for _ in 0..3 {
            events.extend(session.end_player_turn(&mut player).unwrap().events().cloned());
        }
        (events, player.current_hp())
    };

    assert_eq!(run(42), run(42));
}
