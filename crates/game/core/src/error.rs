//! Common error infrastructure for game-core.
//!
//! Domain errors such as [`CommandError`](crate::engine::CommandError) live next
//! to the operations that produce them. This module only provides the shared
//! classification used by the runtime when reporting rejections.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same command may succeed after the situation changes
/// - **Validation**: the command is invalid for the current state
/// - **Internal**: state inconsistency that indicates a bug
/// - **Fatal**: data errors that make the session unusable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: target moved out of range, not enough energy this turn.
    Recoverable,

    /// Examples: wrong phase, card not in hand.
    Validation,

    /// Examples: selection refers to a card that vanished from the hand.
    Internal,

    /// Examples: catalog has no definition for a floor that must exist.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// Implementors should derive `thiserror::Error` for `Display` and classify
/// severity by recoverability, not by impact.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, useful for metrics and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
