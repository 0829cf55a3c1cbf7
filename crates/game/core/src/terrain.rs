//! Terrain: the single, combat-wide modifier slot.
//!
//! At most one terrain is active at a time. Playing a TERRAIN card replaces
//! whatever was active before (last write wins).

/// Terrain kinds and the rule each one changes.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TerrainKind {
    /// +0.5 damage multiplier in both directions; block gain is denied.
    GladiatorArena,
    /// Block gained is doubled.
    SacredGround,
    /// Every card drawn sparks a random living enemy.
    AncientLibrary,
    /// Rerolls the cost of every card in hand once, on activation.
    ZeroGravity,
    /// End of turn: poison every living combatant.
    ToxicSwamp,
    /// End of turn: direct HP loss for every living combatant.
    Volcano,
    /// End of turn: lightning strikes random living combatants.
    Thunderstorm,
}

/// How a terrain alters a block gain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockRule {
    Normal,
    Doubled,
    Denied,
}

/// End-of-turn effect of the active terrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerrainPulse {
    PoisonEveryone,
    DamageEveryone,
    LightningStrikes,
}

impl TerrainKind {
    /// Human readable name used in combat log entries.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::GladiatorArena => "Gladiator Arena",
            Self::SacredGround => "Sacred Ground",
            Self::AncientLibrary => "Ancient Library",
            Self::ZeroGravity => "Zero Gravity",
            Self::ToxicSwamp => "Toxic Swamp",
            Self::Volcano => "Volcano",
            Self::Thunderstorm => "Thunderstorm",
        }
    }

    pub const fn block_rule(&self) -> BlockRule {
        match self {
            Self::GladiatorArena => BlockRule::Denied,
            Self::SacredGround => BlockRule::Doubled,
            _ => BlockRule::Normal,
        }
    }

    /// Whether this terrain adds the symmetric +0.5 damage multiplier.
    pub const fn amplifies_damage(&self) -> bool {
        matches!(self, Self::GladiatorArena)
    }

    pub const fn end_of_turn_pulse(&self) -> Option<TerrainPulse> {
        match self {
            Self::ToxicSwamp => Some(TerrainPulse::PoisonEveryone),
            Self::Volcano => Some(TerrainPulse::DamageEveryone),
            Self::Thunderstorm => Some(TerrainPulse::LightningStrikes),
            _ => None,
        }
    }
}

/// Block rule for an optional terrain slot.
pub fn block_rule(terrain: Option<TerrainKind>) -> BlockRule {
    terrain.map_or(BlockRule::Normal, |t| t.block_rule())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_rules() {
        assert_eq!(block_rule(None), BlockRule::Normal);
        assert_eq!(
            block_rule(Some(TerrainKind::GladiatorArena)),
            BlockRule::Denied
        );
        assert_eq!(
            block_rule(Some(TerrainKind::SacredGround)),
            BlockRule::Doubled
        );
        assert_eq!(block_rule(Some(TerrainKind::Volcano)), BlockRule::Normal);
    }

    #[test]
    fn only_batch_terrains_pulse() {
        assert_eq!(TerrainKind::ZeroGravity.end_of_turn_pulse(), None);
        assert_eq!(
            TerrainKind::Thunderstorm.end_of_turn_pulse(),
            Some(TerrainPulse::LightningStrikes)
        );
    }

    #[test]
    fn snake_case_ids() {
        assert_eq!(TerrainKind::GladiatorArena.to_string(), "gladiator_arena");
        assert_eq!(
            "zero_gravity".parse::<TerrainKind>().unwrap(),
            TerrainKind::ZeroGravity
        );
    }
}
