//! Card templates and the per-encounter instances built from them.
//!
//! A [`Card`] is an immutable template. A [`CardInstance`] wraps a template
//! with a unique id and a mutable cost, and exists only for the duration of
//! one encounter.

mod effect;

pub use effect::{Effect, TargetScope};

/// Card categories.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum CardType {
    Attack,
    Shield,
    Skill,
    Effect,
    Gadget,
    /// Always exhausts after play.
    Terrain,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Replacement applied when a card is upgraded.
///
/// Upgrading replaces name, description and effects entirely; the cost is
/// replaced only when `cost` is set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardUpgrade {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: Option<u32>,
    pub effects: Vec<Effect>,
}

/// Immutable card template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub card_type: CardType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rarity: Rarity,
    pub cost: u32,
    pub effects: Vec<Effect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub upgraded: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub upgrade: Option<Box<CardUpgrade>>,
    /// Removed from the encounter's cycle after play.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exhaust: bool,
    /// Returns to hand shortly after play instead of being discarded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub return_to_hand: bool,
}

impl Card {
    pub fn new(id: &str, name: &str, card_type: CardType, cost: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            card_type,
            rarity: Rarity::Common,
            cost,
            effects: Vec::new(),
            upgraded: false,
            upgrade: None,
            exhaust: false,
            return_to_hand: false,
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: Vec<Effect>) -> Self {
        self.effects = effects;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_upgrade(mut self, upgrade: CardUpgrade) -> Self {
        self.upgrade = Some(Box::new(upgrade));
        self
    }

    pub fn exhausting(mut self) -> Self {
        self.exhaust = true;
        self
    }

    pub fn returning(mut self) -> Self {
        self.return_to_hand = true;
        self
    }

    /// True when at least one effect needs a caller-chosen enemy.
    pub fn requires_target(&self) -> bool {
        self.effects.iter().any(Effect::requires_target)
    }

    /// Whether playing this card removes it from the encounter.
    pub fn exhausts(&self) -> bool {
        self.exhaust || self.card_type == CardType::Terrain
    }

    /// Returns the upgraded variant, or `None` if there is nothing to upgrade.
    pub fn upgraded(&self) -> Option<Card> {
        if self.upgraded {
            return None;
        }
        let upgrade = self.upgrade.as_deref()?;
        Some(Card {
            id: self.id.clone(),
            name: upgrade.name.clone(),
            description: upgrade.description.clone(),
            card_type: self.card_type,
            rarity: self.rarity,
            cost: upgrade.cost.unwrap_or(self.cost),
            effects: upgrade.effects.clone(),
            upgraded: true,
            upgrade: None,
            exhaust: self.exhaust,
            return_to_hand: self.return_to_hand,
        })
    }
}

/// Unique identifier of a card instance within one encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInstanceId(pub u32);

impl core::fmt::Display for CardInstanceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

/// A card in one of the encounter's piles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInstance {
    pub instance_id: CardInstanceId,
    pub card: Card,
    /// Current cost. Diverges from `original_cost` under zero gravity.
    pub cost: u32,
    pub original_cost: u32,
}

impl CardInstance {
    pub fn new(instance_id: CardInstanceId, card: Card) -> Self {
        let cost = card.cost;
        Self {
            instance_id,
            card,
            cost,
            original_cost: cost,
        }
    }

    pub fn restore_cost(&mut self) {
        self.cost = self.original_cost;
    }

    /// Replaces the template with its upgraded variant, if any.
    ///
    /// Returns true if the card changed.
    pub fn upgrade(&mut self) -> bool {
        let Some(upgraded) = self.card.upgraded() else {
            return false;
        };
        let cost_override = upgraded.cost != self.card.cost;
        self.original_cost = upgraded.cost;
        if cost_override || self.cost == self.card.cost {
            self.cost = upgraded.cost;
        }
        self.card = upgraded;
        true
    }

    pub fn card_type(&self) -> CardType {
        self.card.card_type
    }
}
