//! Damage multiplier composition.
//!
//! # Formula
//!
//! ```text
//! multiplier = 1.0
//!            - 0.25 if the attacker is WEAK
//!            + 0.5  if the defender is VULNERABLE
//!            + 0.5  under the gladiator arena
//! final      = floor((base + strength) * multiplier)
//! ```
//!
//! The multiplier is kept in quarters so the floor is exact integer division.
//! Strength is added before multiplying, never inside the multiplier.

use crate::state::{StatusKind, StatusSet};
use crate::terrain::TerrainKind;

/// Composed damage multiplier, stored in quarters (`4` is `1.0x`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DamageMultiplier {
    quarters: u32,
}

impl DamageMultiplier {
    pub const NEUTRAL: Self = Self { quarters: 4 };

    const WEAK_PENALTY: u32 = 1;
    const VULNERABLE_BONUS: u32 = 2;
    const ARENA_BONUS: u32 = 2;

    /// Composes the modifiers additively into one multiplier.
    pub fn compose(
        attacker: &StatusSet,
        defender: &StatusSet,
        terrain: Option<TerrainKind>,
    ) -> Self {
        let mut quarters = Self::NEUTRAL.quarters;
        if attacker.has(StatusKind::Weak) {
            quarters -= Self::WEAK_PENALTY;
        }
        if defender.has(StatusKind::Vulnerable) {
            quarters += Self::VULNERABLE_BONUS;
        }
        if terrain.is_some_and(|t| t.amplifies_damage()) {
            quarters += Self::ARENA_BONUS;
        }
        Self { quarters }
    }

    pub const fn quarters(&self) -> u32 {
        self.quarters
    }

    /// `floor(amount * multiplier)`.
    pub fn apply(&self, amount: u32) -> u32 {
        let scaled = u64::from(amount) * u64::from(self.quarters) / 4;
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }
}

impl Default for DamageMultiplier {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Final outgoing damage for a hit of `base` from `attacker` onto `defender`.
pub fn calculate_damage(
    base: u32,
    attacker: &StatusSet,
    defender: &StatusSet,
    terrain: Option<TerrainKind>,
) -> u32 {
    let boosted = base.saturating_add(attacker.stacks(StatusKind::Strength));
    DamageMultiplier::compose(attacker, defender, terrain).apply(boosted)
}
