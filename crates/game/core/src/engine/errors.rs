//! Rejections produced by engine operations.

use crate::card::{CardId, CardKind};
use crate::enemy::EnemyId;
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::hex::HexPosition;
use crate::state::GamePhase;

/// Why a command was not applied.
///
/// A command that fails leaves the state exactly as it was, so callers may
/// treat any `Err` as a silent no-op.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("{command} is not allowed during {phase}")]
    WrongPhase {
        command: &'static str,
        phase: GamePhase,
    },

    #[error("not enough energy: card costs {required}, player has {available}")]
    InsufficientEnergy { required: u32, available: u32 },

    #[error("card {0} is not in hand")]
    CardNotInHand(CardId),

    #[error("card {card} is a {kind} card and cannot be used this way")]
    WrongCardKind { card: CardId, kind: CardKind },

    #[error("no enemy is in range of card {0}")]
    NoTargetsInRange(CardId),

    #[error("enemy {0} cannot be targeted")]
    InvalidTarget(EnemyId),

    #[error("hex {0} cannot be added to the movement path")]
    InvalidMovementStep(HexPosition),

    #[error("no movement points left")]
    NoMovementLeft,

    #[error("movement path has no steps")]
    EmptyMovementPath,

    #[error("movement path has no step to undo")]
    NothingToUndo,

    #[error("no card is selected")]
    NoSelection,

    #[error("card {selected} is selected; finish or cancel it before playing {requested}")]
    SelectionMismatch { selected: CardId, requested: CardId },

    #[error("card {0} is not part of the reward offer")]
    UnknownRewardCard(CardId),

    #[error("no character has been selected")]
    NoCharacterSelected,

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl CommandError {
    pub(crate) fn wrong_phase(command: &'static str, phase: GamePhase) -> Self {
        Self::WrongPhase { command, phase }
    }
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        use CommandError::*;
        match self {
            InsufficientEnergy { .. } | NoTargetsInRange(_) | InvalidTarget(_) => {
                ErrorSeverity::Recoverable
            }
            // Selecting phases always carry a card.
            NoSelection => ErrorSeverity::Internal,
            Oracle(error) => error.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use CommandError::*;
        match self {
            WrongPhase { .. } => "COMMAND_WRONG_PHASE",
            InsufficientEnergy { .. } => "COMMAND_INSUFFICIENT_ENERGY",
            CardNotInHand(_) => "COMMAND_CARD_NOT_IN_HAND",
            WrongCardKind { .. } => "COMMAND_WRONG_CARD_KIND",
            NoTargetsInRange(_) => "COMMAND_NO_TARGETS_IN_RANGE",
            InvalidTarget(_) => "COMMAND_INVALID_TARGET",
            InvalidMovementStep(_) => "COMMAND_INVALID_MOVEMENT_STEP",
            NoMovementLeft => "COMMAND_NO_MOVEMENT_LEFT",
            EmptyMovementPath => "COMMAND_EMPTY_MOVEMENT_PATH",
            NothingToUndo => "COMMAND_NOTHING_TO_UNDO",
            NoSelection => "COMMAND_NO_SELECTION",
            SelectionMismatch { .. } => "COMMAND_SELECTION_MISMATCH",
            UnknownRewardCard(_) => "COMMAND_UNKNOWN_REWARD_CARD",
            NoCharacterSelected => "COMMAND_NO_CHARACTER_SELECTED",
            Oracle(error) => error.error_code(),
        }
    }
}
