//! Lookup over loaded cards and enemy templates.

use std::collections::HashMap;

use combat_core::{Card, EnemyTemplate};

/// Card ids of the starting deck: 5 Strike, 4 Defend, 1 Bash.
pub const STARTER_DECK: &[(&str, usize)] = &[("strike", 5), ("defend", 4), ("bash", 1)];

/// A deck or encounter referenced content that is not in the library.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnknownContent {
    #[error("unknown card '{0}'")]
    Card(String),
    #[error("unknown enemy '{0}'")]
    Enemy(String),
}

/// Cards and enemy templates indexed by id.
#[derive(Clone, Debug, Default)]
pub struct ContentLibrary {
    cards: HashMap<String, Card>,
    enemies: HashMap<String, EnemyTemplate>,
}

impl ContentLibrary {
    /// Later entries replace earlier ones with the same id.
    pub fn new(cards: Vec<Card>, enemies: Vec<EnemyTemplate>) -> Self {
        Self {
            cards: cards.into_iter().map(|c| (c.id.clone(), c)).collect(),
            enemies: enemies.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn enemy(&self, id: &str) -> Option<&EnemyTemplate> {
        self.enemies.get(id)
    }

    /// Card ids, sorted.
    pub fn card_ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.cards.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Enemy ids, sorted.
    pub fn enemy_ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.enemies.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Builds a deck from `(card id, copies)` pairs, in order.
    pub fn deck(&self, entries: &[(&str, usize)]) -> Result<Vec<Card>, UnknownContent> {
        let mut deck = Vec::new();
        for &(id, copies) in entries {
            let card = self
                .card(id)
                .ok_or_else(|| UnknownContent::Card(id.to_string()))?;
            deck.extend(std::iter::repeat_n(card, copies).cloned());
        }
        Ok(deck)
    }

    pub fn starter_deck(&self) -> Result<Vec<Card>, UnknownContent> {
        self.deck(STARTER_DECK)
    }

    /// Templates for an encounter, one per id. Ids may repeat.
    pub fn encounter<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Vec<EnemyTemplate>, UnknownContent> {
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                self.enemy(id)
                    .cloned()
                    .ok_or_else(|| UnknownContent::Enemy(id.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{CardType, Effect};

    fn library() -> ContentLibrary {
        ContentLibrary::new(
            vec![
                Card::new("strike", "Strike", CardType::Attack, 1).with_effect(Effect::damage(6)),
                Card::new("defend", "Defend", CardType::Shield, 1).with_effect(Effect::block(5)),
            ],
            vec![EnemyTemplate::fixed("goblin", "Goblin", 20)],
        )
    }

    #[test]
    fn deck_repeats_copies_in_order() {
        let deck = library().deck(&[("strike", 2), ("defend", 1)]).unwrap();
        let ids: Vec<_> = deck.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["strike", "strike", "defend"]);
    }

    #[test]
    fn unknown_ids_are_reported() {
        let library = library();
        assert_eq!(
            library.starter_deck().unwrap_err(),
            UnknownContent::Card("bash".to_string())
        );
        assert_eq!(
            library.encounter(&["goblin", "orc"]).unwrap_err(),
            UnknownContent::Enemy("orc".to_string())
        );
        assert_eq!(library.encounter(&["goblin", "goblin"]).unwrap().len(), 2);
    }
}
