//! Common error infrastructure for combat-core.
//!
//! Domain-specific errors (`Rejection`, `InvalidReference`, `SetupError`,
//! `RelicError`) live next to the operations that produce them. This module
//! only provides the shared classification used by callers to decide how to
//! react to a failure.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the action may succeed later (more energy, next turn)
/// - **Validation**: the input was wrong and should not be retried unchanged
/// - **Internal**: a caller referenced something the engine never handed out
/// - **Fatal**: the session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: not enough energy, another action still resolving.
    Recoverable,

    /// Examples: missing target, targeting a defeated enemy.
    Validation,

    /// Examples: card instance not in hand, unknown enemy instance.
    /// These indicate bugs in the caller and should be investigated.
    Internal,

    /// Examples: encounter set up with no enemies.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug in the caller or engine.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all combat-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable, upper snake case strings
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
