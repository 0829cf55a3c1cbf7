//! Enemy templates, instances and intent scripting.
mod intent;
mod scripts;

pub use intent::EnemyIntent;
pub use scripts::{IntentScript, IntentScripts};

use crate::state::StatusSet;

/// Stable identifier of an enemy instance within one encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyId(pub u32);

impl core::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "enemy#{}", self.0)
    }
}

/// Static enemy definition. HP is rolled within `[min_hp, max_hp]` per instance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    pub min_hp: u32,
    pub max_hp: u32,
    /// Key into [`IntentScripts`].
    pub archetype: String,
}

impl EnemyTemplate {
    pub fn new(id: &str, name: &str, min_hp: u32, max_hp: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            min_hp,
            max_hp,
            archetype: id.to_string(),
        }
    }

    pub fn with_archetype(mut self, archetype: &str) -> Self {
        self.archetype = archetype.to_string();
        self
    }

    /// Fixed-HP template, mostly useful in tests.
    pub fn fixed(id: &str, name: &str, hp: u32) -> Self {
        Self::new(id, name, hp, hp)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyInstance {
    pub id: EnemyId,
    pub template_id: String,
    pub archetype: String,
    pub name: String,
    pub max_hp: u32,
    pub current_hp: u32,
    /// Reset to zero at the start of this enemy's own turn.
    pub block: u32,
    pub statuses: StatusSet,
    pub intent: EnemyIntent,
}

impl EnemyInstance {
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Removes HP, saturating at zero. Returns true if this loss killed the enemy.
    pub fn lose_hp(&mut self, amount: u32) -> bool {
        let was_alive = self.is_alive();
        self.current_hp = self.current_hp.saturating_sub(amount);
        was_alive && !self.is_alive()
    }
}
