//! Event payloads for each topic.

use game_core::{Command, CommandOutcome, EnemyStep, ErrorSeverity, GamePhase, HexPosition};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CommandEvent {
    Applied {
        command: Command,
        outcome: CommandOutcome,
    },
    /// The engine refused the command; the state is unchanged.
    Rejected {
        command: Command,
        reason: String,
        /// Stable identifier such as `COMMAND_CARD_NOT_IN_HAND`.
        code: String,
        severity: ErrorSeverity,
    },
}

/// Steps meant to be replayed one by one. The state is already committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnimationEvent {
    PlayerMoved { path: Vec<HexPosition> },
    EnemyStep(EnemyStep),
    EnemyTurnFinished { player_defeated: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseEvent {
    pub from: GamePhase,
    pub to: GamePhase,
    pub turn: u32,
    pub floor: u32,
}
