//! Catalog access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised when the catalog cannot supply data the engine requires.
///
/// These point at broken content rather than bad player input, so they are
/// classified as fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("no roster defined for floor {0}")]
    FloorNotDefined(u32),

    #[error("floor {0} roster has no enemies")]
    EmptyRoster(u32),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::FloorNotDefined(_) => "ORACLE_FLOOR_NOT_DEFINED",
            OracleError::EmptyRoster(_) => "ORACLE_EMPTY_ROSTER",
        }
    }
}
