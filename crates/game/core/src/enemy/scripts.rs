//! Per-archetype intent cycles.
//!
//! Every archetype is a function of the turn number that walks a fixed cycle
//! (`(turn - 1) % len`) and adds a small random spread to attack damage. The
//! table is built once per session and only consulted, never altered, while
//! combat runs.

use std::collections::HashMap;

use super::EnemyIntent;
use crate::env::{CombatRng, RngStream};
use crate::state::{Status, StatusKind};

/// Intent for `turn` (1-based).
pub type IntentScript = fn(turn: u32, rng: &mut CombatRng) -> EnemyIntent;

/// Lookup table from archetype id to its intent script.
#[derive(Clone, Debug)]
pub struct IntentScripts {
    table: HashMap<String, IntentScript>,
}

impl IntentScripts {
    /// An empty table, for callers that register every archetype themselves.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// The shipped archetypes.
    pub fn builtin() -> Self {
        let mut scripts = Self::empty();
        scripts.register("goblin", goblin);
        scripts.register("skeleton", skeleton);
        scripts.register("flying_eye", flying_eye);
        scripts.register("green_flying_eye", green_flying_eye);
        scripts.register("acid_mushroom", acid_mushroom);
        scripts.register("mushroom", mushroom);
        scripts.register("gremlin_nob", gremlin_nob);
        scripts.register("elite", gremlin_nob);
        scripts.register("slime_boss", slime_boss);
        scripts.register("boss", slime_boss);
        scripts.register("golden_chicken", golden_chicken);
        scripts.register("training_dummy", training_dummy);
        scripts
    }

    /// Registers or replaces the script for `archetype`.
    pub fn register(&mut self, archetype: &str, script: IntentScript) {
        self.table.insert(archetype.to_string(), script);
    }

    pub fn get(&self, archetype: &str) -> Option<IntentScript> {
        self.table.get(archetype).copied()
    }

    pub fn contains(&self, archetype: &str) -> bool {
        self.table.contains_key(archetype)
    }

    /// Registered archetype ids, sorted.
    pub fn archetypes(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.table.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for IntentScripts {
    fn default() -> Self {
        Self::builtin()
    }
}

fn step(turn: u32, len: u32) -> u32 {
    turn.saturating_sub(1) % len
}

fn attack(base: u32, spread: u32, rng: &mut CombatRng) -> EnemyIntent {
    EnemyIntent::Attack {
        damage: base + rng.below(RngStream::Intent, spread),
    }
}

const fn buff(kind: StatusKind, stacks: u32) -> EnemyIntent {
    EnemyIntent::Buff(Some(Status::new(kind, stacks)))
}

const fn debuff(kind: StatusKind, stacks: u32) -> EnemyIntent {
    EnemyIntent::Debuff(Status::new(kind, stacks))
}

fn goblin(turn: u32, rng: &mut CombatRng) -> EnemyIntent {
    match step(turn, 3) {
        0 | 1 => attack(5, 3, rng),
        _ => EnemyIntent::Defend { block: 5 },
    }
}

fn skeleton(turn: u32, rng: &mut CombatRng) -> EnemyIntent {
    match step(turn, 3) {
        0 => EnemyIntent::Defend { block: 6 },
        1 => attack(8, 3, rng),
        _ => buff(StatusKind::Strength, 2),
    }
}

fn flying_eye(turn: u32, rng: &mut CombatRng) -> EnemyIntent {
    match step(turn, 2) {
        0 => debuff(StatusKind::Weak, 2),
        _ => attack(6, 2, rng),
    }
}

fn green_flying_eye(turn: u32, rng: &mut CombatRng) -> EnemyIntent {
    match step(turn, 3) {
        0 => debuff(StatusKind::Poison, 3),
        _ => attack(5, 3, rng),
    }
}

fn acid_mushroom(turn: u32, rng: &mut CombatRng) -> EnemyIntent {
    match step(turn, 3) {
        0 => debuff(StatusKind::Vulnerable, 2),
        1 => attack(7, 3, rng),
        _ => EnemyIntent::Defend { block: 6 },
    }
}

fn mushroom(turn: u32, rng: &mut CombatRng) -> EnemyIntent {
    match step(turn, 2) {
        0 => attack(4, 2, rng),
        _ => debuff(StatusKind::Poison, 2),
    }
}

fn gremlin_nob(turn: u32, rng: &mut CombatRng) -> EnemyIntent {
    match step(turn, 3) {
        0 => buff(StatusKind::Strength, 3),
        _ => attack(14, 4, rng),
    }
}

fn slime_boss(turn: u32, rng: &mut CombatRng) -> EnemyIntent {
    match step(turn, 4) {
        0 => debuff(StatusKind::Weak, 2),
        1 => attack(20, 5, rng),
        2 => EnemyIntent::Defend { block: 15 },
        _ => buff(StatusKind::Strength, 3),
    }
}

fn golden_chicken(_turn: u32, _rng: &mut CombatRng) -> EnemyIntent {
    EnemyIntent::Defend { block: 10 }
}

fn training_dummy(_turn: u32, _rng: &mut CombatRng) -> EnemyIntent {
    EnemyIntent::Buff(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goblin_cycles_every_three_turns() {
        let mut rng = CombatRng::new(5);
        let script = IntentScripts::builtin().get("goblin").unwrap();
        for turn in [1, 2, 4, 5] {
            match script(turn, &mut rng) {
                EnemyIntent::Attack { damage } => assert!((5..=7).contains(&damage)),
                other => panic!("turn {turn}: expected attack, got {other:?}"),
            }
        }
        assert_eq!(script(3, &mut rng), EnemyIntent::Defend { block: 5 });
        assert_eq!(script(6, &mut rng), EnemyIntent::Defend { block: 5 });
    }

    #[test]
    fn aliases_share_scripts() {
        let scripts = IntentScripts::builtin();
        let mut rng = CombatRng::new(1);
        assert_eq!(
            scripts.get("elite").unwrap()(1, &mut rng),
            buff(StatusKind::Strength, 3)
        );
        assert_eq!(
            scripts.get("boss").unwrap()(3, &mut rng),
            EnemyIntent::Defend { block: 15 }
        );
    }

    #[test]
    fn boss_attack_range() {
        let mut rng = CombatRng::new(77);
        for _ in 0..50 {
            match slime_boss(2, &mut rng) {
                EnemyIntent::Attack { damage } => assert!((20..=24).contains(&damage)),
                other => panic!("expected attack, got {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_archetype_is_absent() {
        let scripts = IntentScripts::builtin();
        assert!(scripts.get("dragon").is_none());
        assert!(scripts.archetypes().contains(&"golden_chicken"));
    }

    #[test]
    fn custom_scripts_can_be_registered() {
        let mut scripts = IntentScripts::empty();
        scripts.register("wall", |_, _| EnemyIntent::Defend { block: 99 });
        let mut rng = CombatRng::new(0);
        assert_eq!(
            scripts.get("wall").unwrap()(1, &mut rng),
            EnemyIntent::Defend { block: 99 }
        );
    }
}
