//! Combat engine: the only writer of [`GameState`].
//!
//! Each operation validates first and mutates only once every check has
//! passed, so a rejected command never leaves partial changes behind. The
//! enemy turn resolves synchronously inside [`CombatEngine::end_turn`] and
//! reports the individual steps for presentation layers to replay at their
//! own pace.

mod cards;
mod enemy_turn;
mod errors;
mod floor;
mod movement;
mod setup;

#[cfg(test)]
pub(crate) mod fixtures;

pub use enemy_turn::{EnemyStep, EnemyStepKind, EnemyTurnReport, plan_enemy_path};
pub use errors::CommandError;

use crate::card::CardId;
use crate::combat::DamageOutcome;
use crate::command::Command;
use crate::enemy::EnemyId;
use crate::env::{GameEnv, GameRng};
use crate::hex::HexPosition;
use crate::state::{GamePhase, GameState, Player};

/// Result of a card resolving against the state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardPlay {
    pub card: CardId,
    pub target: Option<EnemyId>,
    pub damage: Option<DamageOutcome>,
    pub target_defeated: bool,
    pub block_gained: u32,
}

/// What an applied command produced, beyond the state change itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandOutcome {
    Applied,
    CardPlayed(CardPlay),
    /// Committed movement path, starting at the previous position.
    Moved { path: Vec<HexPosition> },
    EnemyTurn(EnemyTurnReport),
}

pub struct CombatEngine<'a> {
    state: &'a mut GameState,
    env: GameEnv<'a>,
    rng: &'a mut GameRng,
}

impl<'a> CombatEngine<'a> {
    pub fn new(state: &'a mut GameState, env: GameEnv<'a>, rng: &'a mut GameRng) -> Self {
        Self { state, env, rng }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Routes a command to its operation.
    pub fn execute(&mut self, command: &Command) -> Result<CommandOutcome, CommandError> {
        let result = match command {
            Command::SelectCharacter(class) => self.select_character(*class),
            Command::StartCombat => self.start_combat(),
            Command::SelectCard(card) => self.select_card(card),
            Command::CancelSelection => self.cancel_selection(),
            Command::AddMovementStep(position) => self.add_hex_to_movement_path(*position),
            Command::UndoMovementStep => self.undo_movement_step(),
            Command::CompleteMovement => self.complete_movement(),
            Command::SelectTarget(enemy) => self.select_target(*enemy),
            Command::ConfirmSkill => self.confirm_skill(),
            Command::PlayCard { card, target } => self.play_card(card, *target),
            Command::EndTurn => self.end_turn(),
            Command::AdvanceFloor => self.advance_floor(),
            Command::SelectRewardCard(card) => self.select_reward_card(card),
            Command::SkipReward => self.skip_reward(),
            Command::ResetGame => self.reset_game(),
        };

        if let Err(error) = &result {
            tracing::debug!(
                command = command.name(),
                phase = %self.state.phase,
                %error,
                "command rejected"
            );
        }
        result
    }

    fn require_phase(
        &self,
        command: &'static str,
        allowed: &[GamePhase],
    ) -> Result<(), CommandError> {
        if allowed.contains(&self.state.phase) {
            Ok(())
        } else {
            Err(CommandError::wrong_phase(command, self.state.phase))
        }
    }

    fn player(&self) -> Result<&Player, CommandError> {
        self.state
            .player
            .as_ref()
            .ok_or(CommandError::NoCharacterSelected)
    }
}
