//! Encounter preparation.

use super::{CombatBuilder, CombatSession, SetupError};
use crate::card::{Card, CardInstance, CardInstanceId};
use crate::enemy::{EnemyId, EnemyInstance, EnemyIntent, EnemyTemplate};
use crate::env::{PlayerResources, RngStream};
use crate::events::CombatEvent;
use crate::relic::RelicTrigger;
use crate::state::{Piles, StatusSet};

impl CombatBuilder {
    /// Validates the inputs and prepares the encounter.
    ///
    /// The deck is shuffled into the draw pile, enemy HP is rolled, first
    /// intents are telegraphed and combat-start relics fire. The session is
    /// left in the `Setup` phase; call `start_player_turn` to begin turn 1.
    pub fn init_combat(
        self,
        player: &mut dyn PlayerResources,
        deck: Vec<Card>,
        enemies: &[EnemyTemplate],
    ) -> Result<CombatSession, SetupError> {
        if deck.is_empty() {
            return Err(SetupError::EmptyDeck);
        }
        if enemies.is_empty() {
            return Err(SetupError::NoEnemies);
        }
        for template in enemies {
            if template.min_hp == 0 || template.min_hp > template.max_hp {
                return Err(SetupError::InvalidHpRange {
                    template: template.id.clone(),
                    min: template.min_hp,
                    max: template.max_hp,
                });
            }
            if !self.scripts.contains(&template.archetype) {
                return Err(SetupError::UnknownArchetype(template.archetype.clone()));
            }
        }

        let mut session = CombatSession::from_builder(self);
        session.prepare(player, deck, enemies);
        Ok(session)
    }
}

impl CombatSession {
    /// Prepares an encounter with default settings.
    pub fn init_combat(
        player: &mut dyn PlayerResources,
        deck: Vec<Card>,
        enemies: &[EnemyTemplate],
    ) -> Result<Self, SetupError> {
        Self::builder().init_combat(player, deck, enemies)
    }

    fn prepare(
        &mut self,
        player: &mut dyn PlayerResources,
        deck: Vec<Card>,
        templates: &[EnemyTemplate],
    ) {
        let instances: Vec<CardInstance> = deck
            .into_iter()
            .zip(1u32..)
            .map(|(card, id)| CardInstance::new(CardInstanceId(id), card))
            .collect();
        let deck_size = instances.len();
        self.state.piles = Piles::shuffled(instances, &mut self.rng);

        for (template, id) in templates.iter().zip(1u32..) {
            let hp = self
                .rng
                .range_inclusive(RngStream::EnemyHp, template.min_hp, template.max_hp);
            let intent = match self.scripts.get(&template.archetype) {
                Some(script) => script(1, &mut self.rng),
                None => EnemyIntent::Buff(None),
            };
            self.state.enemies.push(EnemyInstance {
                id: EnemyId(id),
                template_id: template.id.clone(),
                archetype: template.archetype.clone(),
                name: template.name.clone(),
                max_hp: hp,
                current_hp: hp,
                block: 0,
                statuses: StatusSet::new(),
                intent,
            });
        }

        let enemy_ids = self.state.enemies.iter().map(|e| e.id).collect();
        self.emit(CombatEvent::CombatStarted {
            deck_size,
            enemies: enemy_ids,
        });
        let names: Vec<_> = self.state.enemies.iter().map(|e| e.name.clone()).collect();
        self.state.log(format!("Combat begins against {}.", names.join(", ")));
        tracing::info!(
            target: "combat::engine",
            seed = self.rng.seed(),
            deck_size,
            enemies = names.len(),
            "combat initialized"
        );

        let intents: Vec<_> = self.state.enemies.iter().map(|e| (e.id, e.intent)).collect();
        for (enemy, intent) in intents {
            self.emit(CombatEvent::IntentTelegraphed { enemy, intent });
        }

        self.fire_relics(player, RelicTrigger::OnCombatStart, 0, true);
        self.stash();
    }
}
