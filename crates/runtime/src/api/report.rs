use game_core::{Command, CommandError, CommandOutcome, GamePhase};

/// What happened to one submitted command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandReport {
    pub command: Command,
    pub result: std::result::Result<CommandOutcome, CommandError>,
    /// Phase after the command was processed.
    pub phase: GamePhase,
}

impl CommandReport {
    pub fn is_applied(&self) -> bool {
        self.result.is_ok()
    }

    pub fn outcome(&self) -> Option<&CommandOutcome> {
        self.result.as_ref().ok()
    }

    pub fn rejection(&self) -> Option<&CommandError> {
        self.result.as_ref().err()
    }
}
