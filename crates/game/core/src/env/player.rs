//! External player resource store.
//!
//! HP and max HP persist across encounters, so the engine never owns them.
//! It requests deltas through [`PlayerResources`] and reads the results back.

/// Contract the engine uses to read and mutate the player's persistent resources.
pub trait PlayerResources {
    fn current_hp(&self) -> u32;

    fn max_hp(&self) -> u32;

    /// Applies a signed HP delta. Implementations clamp to `[0, max_hp]`.
    fn modify_hp(&mut self, delta: i32);

    fn modify_max_hp(&mut self, delta: i32);

    /// Ids of the relics the player owns, in acquisition order.
    fn relics(&self) -> &[String];

    fn heal_player(&mut self, amount: u32) {
        self.modify_hp(i32::try_from(amount).unwrap_or(i32::MAX));
    }

    fn take_damage(&mut self, amount: u32) {
        self.modify_hp(-i32::try_from(amount).unwrap_or(i32::MAX));
    }

    fn is_dead(&self) -> bool {
        self.current_hp() == 0
    }
}

/// Plain in-memory player store.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStore {
    current_hp: u32,
    max_hp: u32,
    relics: Vec<String>,
}

impl PlayerStore {
    pub fn new(max_hp: u32) -> Self {
        Self {
            current_hp: max_hp,
            max_hp,
            relics: Vec::new(),
        }
    }

    pub fn with_hp(mut self, current_hp: u32) -> Self {
        self.current_hp = current_hp.min(self.max_hp);
        self
    }

    pub fn with_relic(mut self, id: &str) -> Self {
        self.relics.push(id.to_string());
        self
    }

    pub fn add_relic(&mut self, id: &str) {
        self.relics.push(id.to_string());
    }
}

fn apply_delta(value: u32, delta: i32) -> u32 {
    if delta >= 0 {
        value.saturating_add(delta.unsigned_abs())
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}

impl PlayerResources for PlayerStore {
    fn current_hp(&self) -> u32 {
        self.current_hp
    }

    fn max_hp(&self) -> u32 {
        self.max_hp
    }

    fn modify_hp(&mut self, delta: i32) {
        self.current_hp = apply_delta(self.current_hp, delta).min(self.max_hp);
    }

    fn modify_max_hp(&mut self, delta: i32) {
        self.max_hp = apply_delta(self.max_hp, delta).max(1);
        self.current_hp = self.current_hp.min(self.max_hp);
    }

    fn relics(&self) -> &[String] {
        &self.relics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hp_is_clamped() {
        let mut store = PlayerStore::new(50).with_hp(10);
        store.take_damage(25);
        assert_eq!(store.current_hp(), 0);
        assert!(store.is_dead());
        store.heal_player(80);
        assert_eq!(store.current_hp(), 50);
    }

    #[test]
    fn shrinking_max_hp_clamps_current() {
        let mut store = PlayerStore::new(50);
        store.modify_max_hp(-20);
        assert_eq!(store.max_hp(), 30);
        assert_eq!(store.current_hp(), 30);
    }
}
