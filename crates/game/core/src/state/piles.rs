//! Draw, hand, discard and exhaust piles.
//!
//! Cards only ever move between piles; nothing here creates or destroys a
//! [`CardInstance`]. The sum of all four pile sizes therefore equals the
//! encounter's deck size for the whole encounter.

use crate::card::{CardInstance, CardInstanceId};
use crate::env::{CombatRng, RngStream};

/// Result of a single draw attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn {
        instance_id: CardInstanceId,
        reshuffled: bool,
    },
    /// Both the draw pile and the discard pile are empty.
    Exhausted,
}

/// The four card piles of an encounter. The top of the draw pile is the last element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piles {
    pub draw: Vec<CardInstance>,
    pub hand: Vec<CardInstance>,
    pub discard: Vec<CardInstance>,
    pub exhaust: Vec<CardInstance>,
}

impl Piles {
    /// Builds piles with the whole deck shuffled into the draw pile.
    pub fn shuffled(mut deck: Vec<CardInstance>, rng: &mut CombatRng) -> Self {
        rng.shuffle(RngStream::Shuffle, &mut deck);
        Self {
            draw: deck,
            ..Self::default()
        }
    }

    /// Moves the top card of the draw pile into the hand.
    ///
    /// An empty draw pile is refilled by shuffling the discard pile first.
    pub fn draw_one(&mut self, rng: &mut CombatRng) -> DrawOutcome {
        let mut reshuffled = false;
        if self.draw.is_empty() {
            if self.discard.is_empty() {
                return DrawOutcome::Exhausted;
            }
            self.draw.append(&mut self.discard);
            rng.shuffle(RngStream::Shuffle, &mut self.draw);
            reshuffled = true;
        }
        match self.draw.pop() {
            Some(card) => {
                let instance_id = card.instance_id;
                self.hand.push(card);
                DrawOutcome::Drawn {
                    instance_id,
                    reshuffled,
                }
            }
            None => DrawOutcome::Exhausted,
        }
    }

    pub fn hand_card(&self, id: CardInstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.instance_id == id)
    }

    /// Removes a card from the hand, keeping the order of the rest.
    pub fn take_from_hand(&mut self, id: CardInstanceId) -> Option<CardInstance> {
        let idx = self.hand.iter().position(|c| c.instance_id == id)?;
        Some(self.hand.remove(idx))
    }

    /// Discards the entire hand with costs restored. Returns how many cards moved.
    pub fn discard_hand(&mut self) -> usize {
        let count = self.hand.len();
        for mut card in self.hand.drain(..) {
            card.restore_cost();
            self.discard.push(card);
        }
        count
    }

    pub fn restore_hand_costs(&mut self) {
        for card in &mut self.hand {
            card.restore_cost();
        }
    }

    /// Cards still cycling through draw, hand and discard.
    pub fn in_cycle(&self) -> usize {
        self.draw.len() + self.hand.len() + self.discard.len()
    }

    pub fn total(&self) -> usize {
        self.in_cycle() + self.exhaust.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, CardType};

    fn deck(n: u32) -> Vec<CardInstance> {
        (0..n)
            .map(|i| {
                CardInstance::new(
                    CardInstanceId(i),
                    Card::new("strike", "Strike", CardType::Attack, 1),
                )
            })
            .collect()
    }

    #[test]
    fn draw_reshuffles_discard_when_empty() {
        let mut rng = CombatRng::new(7);
        let mut piles = Piles::shuffled(deck(2), &mut rng);
        assert!(matches!(
            piles.draw_one(&mut rng),
            DrawOutcome::Drawn {
                reshuffled: false,
                ..
            }
        ));
        assert!(matches!(piles.draw_one(&mut rng), DrawOutcome::Drawn { .. }));
        assert_eq!(piles.discard_hand(), 2);
        assert!(matches!(
            piles.draw_one(&mut rng),
            DrawOutcome::Drawn {
                reshuffled: true,
                ..
            }
        ));
        assert_eq!(piles.total(), 2);
    }

    #[test]
    fn draw_stops_when_both_piles_empty() {
        let mut rng = CombatRng::new(1);
        let mut piles = Piles::shuffled(deck(1), &mut rng);
        piles.draw_one(&mut rng);
        assert_eq!(piles.draw_one(&mut rng), DrawOutcome::Exhausted);
        assert_eq!(piles.hand.len(), 1);
    }

    #[test]
    fn discard_restores_cost() {
        let mut rng = CombatRng::new(3);
        let mut piles = Piles::shuffled(deck(1), &mut rng);
        piles.draw_one(&mut rng);
        piles.hand[0].cost = 0;
        piles.discard_hand();
        assert_eq!(piles.discard[0].cost, 1);
    }
}
