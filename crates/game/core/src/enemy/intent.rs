use crate::state::Status;

/// An enemy's telegraphed next action.
///
/// The values are the script's base values. Statuses change the realized
/// effect (strength and weak scale an attack) but never the intent itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyIntent {
    Attack { damage: u32 },
    Defend { block: u32 },
    /// `None` falls back to the configured STRENGTH buff.
    Buff(Option<Status>),
    Debuff(Status),
}

impl EnemyIntent {
    pub const fn is_attack(&self) -> bool {
        matches!(self, Self::Attack { .. })
    }
}

impl core::fmt::Display for EnemyIntent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Attack { damage } => write!(f, "attack for {damage}"),
            Self::Defend { block } => write!(f, "defend for {block}"),
            Self::Buff(Some(status)) => write!(f, "buff {} {}", status.kind, status.stacks),
            Self::Buff(None) => write!(f, "buff"),
            Self::Debuff(status) => write!(f, "debuff {} {}", status.kind, status.stacks),
        }
    }
}
