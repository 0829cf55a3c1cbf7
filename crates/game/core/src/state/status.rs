//! Status effect system for combatants.
//!
//! A status is a `(kind, stacks)` pair. Applying a kind that is already
//! present adds to its stacks. An entry whose stacks reach zero is removed
//! immediately, so every entry returned by [`StatusSet::iter`] has
//! `stacks > 0`.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;

/// Types of status effects.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum StatusKind {
    // ========================================================================
    // Buffs
    // ========================================================================
    /// Adds its stacks to outgoing damage before multipliers.
    Strength,
    /// Adds its stacks to block gained.
    Dexterity,
    /// Grants `stacks + dexterity` block at every turn start.
    Metallicize,
    /// Block is kept across the turn boundary while active.
    BlockRetain,
    /// Losses cannot reduce HP below 1.
    Undying,
    /// All incoming damage, poison included, is nulled.
    Invulnerable,

    // ========================================================================
    // Debuffs
    // ========================================================================
    /// Outgoing damage multiplier reduced by 0.25.
    Weak,
    /// Incoming damage multiplier increased by 0.5.
    Vulnerable,
    /// Loses HP equal to stacks at turn start, then decays by one.
    Poison,
    /// Healing is halved.
    HealReduction,
    /// Healing is converted into damage.
    Undead,
    /// Removes its stacks from STRENGTH at the end of the player turn.
    StrengthDown,
    /// ATTACK cards cannot be played.
    Entangled,
}

impl StatusKind {
    /// Static buff/debuff classification.
    pub const fn is_debuff(&self) -> bool {
        matches!(
            self,
            Self::Weak
                | Self::Vulnerable
                | Self::Poison
                | Self::HealReduction
                | Self::Undead
                | Self::StrengthDown
                | Self::Entangled
        )
    }

    pub const fn is_buff(&self) -> bool {
        !self.is_debuff()
    }

    /// Debuffs that raise the player-facing "debuff visual" notification.
    pub const fn shows_debuff_visual(&self) -> bool {
        matches!(self, Self::Weak | Self::Vulnerable | Self::Poison)
    }
}

/// A single active status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status {
    pub kind: StatusKind,
    pub stacks: u32,
}

impl Status {
    pub const fn new(kind: StatusKind, stacks: u32) -> Self {
        Self { kind, stacks }
    }
}

/// Active statuses on a combatant, one entry per kind, in application order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusSet {
    entries: ArrayVec<Status, { CombatConfig::MAX_STATUS_KINDS }>,
}

impl StatusSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stacks of `kind`, zero when absent.
    pub fn stacks(&self, kind: StatusKind) -> u32 {
        self.entries
            .iter()
            .find(|s| s.kind == kind)
            .map_or(0, |s| s.stacks)
    }

    pub fn has(&self, kind: StatusKind) -> bool {
        self.stacks(kind) > 0
    }

    /// Adds stacks of a status, appending a new entry when absent.
    ///
    /// Applying zero stacks is a no-op.
    pub fn apply(&mut self, kind: StatusKind, stacks: u32) {
        if stacks == 0 {
            return;
        }
        if let Some(existing) = self.entries.iter_mut().find(|s| s.kind == kind) {
            existing.stacks = existing.stacks.saturating_add(stacks);
            return;
        }
        // One slot per kind; the capacity covers every kind.
        if !self.entries.is_full() {
            self.entries.push(Status::new(kind, stacks));
        }
    }

    /// Overwrites the stacks of `kind`. Setting zero removes the entry.
    pub fn set(&mut self, kind: StatusKind, stacks: u32) {
        if stacks == 0 {
            self.remove(kind);
            return;
        }
        match self.entries.iter_mut().find(|s| s.kind == kind) {
            Some(existing) => existing.stacks = stacks,
            None => self.apply(kind, stacks),
        }
    }

    /// Removes up to `amount` stacks and returns how many were removed.
    pub fn reduce(&mut self, kind: StatusKind, amount: u32) -> u32 {
        let Some(existing) = self.entries.iter_mut().find(|s| s.kind == kind) else {
            return 0;
        };
        let removed = existing.stacks.min(amount);
        existing.stacks -= removed;
        self.prune();
        removed
    }

    /// Decrements `kind` by one stack.
    pub fn decay(&mut self, kind: StatusKind) {
        self.reduce(kind, 1);
    }

    pub fn remove(&mut self, kind: StatusKind) {
        self.entries.retain(|s| s.kind != kind);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Status> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn prune(&mut self) {
        self.entries.retain(|s| s.stacks > 0);
    }
}

impl FromIterator<Status> for StatusSet {
    fn from_iter<I: IntoIterator<Item = Status>>(iter: I) -> Self {
        let mut set = Self::new();
        for status in iter {
            set.apply(status.kind, status.stacks);
        }
        set
    }
}
