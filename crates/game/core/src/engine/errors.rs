//! Error types surfaced by the combat session.

use crate::card::CardInstanceId;
use crate::enemy::EnemyId;
use crate::error::{CombatError, ErrorSeverity};
use crate::state::CombatPhase;

/// A player action the rules refuse. State is unchanged and a log entry explains why.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    #[error("not enough energy ({have}/{need})")]
    InsufficientEnergy { have: u32, need: u32 },

    #[error("attack cards are disabled")]
    AttackDisabled,

    #[error("card requires a target")]
    MissingTarget,

    #[error("{0} is already defeated")]
    TargetDefeated(EnemyId),

    #[error("not allowed during {0}")]
    WrongPhase(CombatPhase),

    #[error("previous action is still resolving")]
    ActionInFlight,

    #[error("combat is over")]
    CombatOver,
}

impl Rejection {
    /// Player-facing combat log wording.
    pub fn log_message(&self) -> String {
        match self {
            Self::InsufficientEnergy { have, need } => {
                format!("Not enough energy! ({have}/{need})")
            }
            Self::AttackDisabled => "Entangled! Attack cards cannot be played.".to_string(),
            Self::MissingTarget => "Choose a target first.".to_string(),
            Self::TargetDefeated(_) => "That enemy is already defeated.".to_string(),
            Self::WrongPhase(phase) => format!("Cannot do that during {phase}."),
            Self::ActionInFlight => "Wait for the current action to finish.".to_string(),
            Self::CombatOver => "The combat is over.".to_string(),
        }
    }
}

impl CombatError for Rejection {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientEnergy { .. } | Self::ActionInFlight | Self::AttackDisabled => {
                ErrorSeverity::Recoverable
            }
            Self::MissingTarget | Self::TargetDefeated(_) | Self::WrongPhase(_) => {
                ErrorSeverity::Validation
            }
            Self::CombatOver => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientEnergy { .. } => "INSUFFICIENT_ENERGY",
            Self::AttackDisabled => "ATTACK_DISABLED",
            Self::MissingTarget => "MISSING_TARGET",
            Self::TargetDefeated(_) => "TARGET_DEFEATED",
            Self::WrongPhase(_) => "WRONG_PHASE",
            Self::ActionInFlight => "ACTION_IN_FLIGHT",
            Self::CombatOver => "COMBAT_OVER",
        }
    }
}

/// The caller referenced something the engine never handed out.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidReference {
    #[error("{0} is not in hand")]
    CardNotInHand(CardInstanceId),

    #[error("{0} does not exist")]
    EnemyNotFound(EnemyId),
}

impl CombatError for InvalidReference {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CardNotInHand(_) => "CARD_NOT_IN_HAND",
            Self::EnemyNotFound(_) => "ENEMY_NOT_FOUND",
        }
    }
}

/// Errors surfaced by player actions on a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatActionError {
    #[error("action rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("invalid reference: {0}")]
    InvalidReference(#[from] InvalidReference),
}

impl CombatActionError {
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::InvalidReference(_) => None,
        }
    }
}

impl CombatError for CombatActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Rejected(e) => e.severity(),
            Self::InvalidReference(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Rejected(e) => e.error_code(),
            Self::InvalidReference(e) => e.error_code(),
        }
    }
}

/// Errors surfaced while preparing an encounter.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupError {
    #[error("deck is empty")]
    EmptyDeck,

    #[error("encounter has no enemies")]
    NoEnemies,

    #[error("no intent script for archetype `{0}`")]
    UnknownArchetype(String),

    #[error("enemy template `{template}` has invalid HP range {min}..={max}")]
    InvalidHpRange { template: String, min: u32, max: u32 },
}

impl CombatError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDeck => "EMPTY_DECK",
            Self::NoEnemies => "NO_ENEMIES",
            Self::UnknownArchetype(_) => "UNKNOWN_ARCHETYPE",
            Self::InvalidHpRange { .. } => "INVALID_HP_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities() {
        let rejected: CombatActionError = Rejection::InsufficientEnergy { have: 0, need: 1 }.into();
        assert!(rejected.severity().is_recoverable());
        assert_eq!(rejected.error_code(), "INSUFFICIENT_ENERGY");

        let invalid: CombatActionError = InvalidReference::CardNotInHand(CardInstanceId(3)).into();
        assert!(invalid.severity().is_internal());
        assert!(invalid.rejection().is_none());
    }

    #[test]
    fn log_messages_are_player_facing() {
        assert_eq!(
            Rejection::InsufficientEnergy { have: 1, need: 2 }.log_message(),
            "Not enough energy! (1/2)"
        );
        assert!(SetupError::NoEnemies.to_string().contains("no enemies"));
    }
}
