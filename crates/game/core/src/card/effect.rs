//! Card effect definitions.
//!
//! A card is an ordered list of [`Effect`]s resolved left to right. The set
//! of kinds is closed: the engine dispatches them in one exhaustive match
//! (`engine::effects`), which is where balance changes are reviewed.

use crate::state::StatusKind;
use crate::terrain::TerrainKind;

/// Who an effect lands on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetScope {
    /// The enemy chosen by the caller. Requires a target.
    #[default]
    Single,
    /// Every living enemy.
    All,
    /// The player.
    Player,
    /// One living enemy chosen at resolution time.
    Random,
}

/// A single atomic card effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    // ========================================================================
    // Damage
    // ========================================================================
    /// Deal `amount + strength`, scaled by the composed multiplier.
    Damage {
        amount: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        scope: TargetScope,
    },
    /// Damage computed from HP the player is missing at resolution time:
    /// `base + (max_hp - current_hp) * ratio_percent / 100`.
    DamagePerLostHp {
        #[cfg_attr(feature = "serde", serde(default))]
        base: u32,
        ratio_percent: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        scope: TargetScope,
    },
    /// `per_card` damage for every distinct card played this encounter.
    DamagePerPlayed {
        per_card: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        scope: TargetScope,
    },
    /// Damage equal to the player's current block.
    DamageFromBlock {
        #[cfg_attr(feature = "serde", serde(default))]
        scope: TargetScope,
    },
    /// Set the target's HP to half (floor, minimum 1), bypassing block.
    HalveEnemyHp {
        #[cfg_attr(feature = "serde", serde(default))]
        scope: TargetScope,
    },

    // ========================================================================
    // Defense
    // ========================================================================
    /// Gain `amount + dexterity` block, subject to terrain.
    Block { amount: u32 },
    DoubleBlock,
    /// Keep block across the next turn boundaries.
    BlockRetain { turns: u32 },

    // ========================================================================
    // Statuses
    // ========================================================================
    ApplyStatus {
        status: StatusKind,
        stacks: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        scope: TargetScope,
    },
    /// Multiply the player's STRENGTH stacks.
    MultiplyStrength { factor: u32 },

    // ========================================================================
    // Resources
    // ========================================================================
    Draw { count: u32 },
    GainEnergy { amount: u32 },
    Heal { amount: u32 },
    /// Self-inflicted HP loss. Bypasses block and INVULNERABLE.
    LoseHp { amount: u32 },
    /// Gain max HP if an enemy died earlier in this card's resolution.
    GainMaxHpOnKill { amount: u32 },

    // ========================================================================
    // Cards and turn flow
    // ========================================================================
    /// Upgrade every card in hand that has an upgrade variant.
    UpgradeHand,
    /// Take another player turn instead of the next enemy turn.
    ExtraTurn,
    /// Activate a terrain, replacing the current one.
    SetTerrain { terrain: TerrainKind },
}

impl Effect {
    /// The target scope, for effects that land on enemies or the player.
    pub const fn scope(&self) -> Option<TargetScope> {
        match self {
            Self::Damage { scope, .. }
            | Self::DamagePerLostHp { scope, .. }
            | Self::DamagePerPlayed { scope, .. }
            | Self::DamageFromBlock { scope }
            | Self::HalveEnemyHp { scope }
            | Self::ApplyStatus { scope, .. } => Some(*scope),
            _ => None,
        }
    }

    /// True when the effect needs an enemy chosen by the caller.
    pub const fn requires_target(&self) -> bool {
        matches!(self.scope(), Some(TargetScope::Single))
    }

    // Builders for the common shapes.

    pub const fn damage(amount: u32) -> Self {
        Self::Damage {
            amount,
            scope: TargetScope::Single,
        }
    }

    pub const fn damage_all(amount: u32) -> Self {
        Self::Damage {
            amount,
            scope: TargetScope::All,
        }
    }

    pub const fn block(amount: u32) -> Self {
        Self::Block { amount }
    }

    pub const fn apply(status: StatusKind, stacks: u32, scope: TargetScope) -> Self {
        Self::ApplyStatus {
            status,
            stacks,
            scope,
        }
    }
}
