//! Relic hook interface.
//!
//! Relics are injected, read-only configuration. The engine invokes the hooks
//! of the player's owned relics at five trigger points and applies what they
//! request after all hooks for that trigger have run.
mod context;
mod registry;

pub use context::{RelicContext, RelicRequests};
pub use registry::{RelicHook, RelicRegistry};

use crate::error::{CombatError, ErrorSeverity};

/// Points in the turn flow where relic hooks run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RelicTrigger {
    OnCombatStart,
    OnTurnStart,
    OnTurnEnd,
    /// The player dealt HP damage to an enemy.
    OnDamageDealt,
    /// The player lost HP.
    OnDamageTaken,
}

/// Error a relic hook may return.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RelicError {
    #[error("relic hook failed: {0}")]
    Failed(String),
}

impl CombatError for RelicError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "RELIC_FAILED"
    }
}
