//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers one async method per
//! engine operation. Calls are queued by the worker and applied strictly in
//! order; each resolves once its command, including any enemy-turn replay,
//! has been fully processed.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{CardId, CharacterClass, Command, EnemyId, GameState, HexPosition};

use super::errors::{Result, RuntimeError};
use super::report::CommandReport;
use crate::events::{Event, EventBus, Topic};
use crate::workers::SessionCommand;

#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<SessionCommand>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<SessionCommand>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Submits any command and waits for its report.
    pub async fn execute(&self, command: Command) -> Result<CommandReport> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(SessionCommand::Execute {
                command,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    pub async fn select_character(&self, class: CharacterClass) -> Result<CommandReport> {
        self.execute(Command::SelectCharacter(class)).await
    }

    pub async fn start_combat(&self) -> Result<CommandReport> {
        self.execute(Command::StartCombat).await
    }

    pub async fn select_card(&self, card: CardId) -> Result<CommandReport> {
        self.execute(Command::SelectCard(card)).await
    }

    pub async fn cancel_selection(&self) -> Result<CommandReport> {
        self.execute(Command::CancelSelection).await
    }

    pub async fn add_movement_step(&self, position: HexPosition) -> Result<CommandReport> {
        self.execute(Command::AddMovementStep(position)).await
    }

    pub async fn undo_movement_step(&self) -> Result<CommandReport> {
        self.execute(Command::UndoMovementStep).await
    }

    pub async fn complete_movement(&self) -> Result<CommandReport> {
        self.execute(Command::CompleteMovement).await
    }

    pub async fn select_target(&self, enemy: EnemyId) -> Result<CommandReport> {
        self.execute(Command::SelectTarget(enemy)).await
    }

    pub async fn confirm_skill(&self) -> Result<CommandReport> {
        self.execute(Command::ConfirmSkill).await
    }

    pub async fn play_card(&self, card: CardId, target: Option<EnemyId>) -> Result<CommandReport> {
        self.execute(Command::PlayCard { card, target }).await
    }

    /// Ends the player turn. Resolves after the enemy-turn replay finished.
    pub async fn end_turn(&self) -> Result<CommandReport> {
        self.execute(Command::EndTurn).await
    }

    pub async fn advance_floor(&self) -> Result<CommandReport> {
        self.execute(Command::AdvanceFloor).await
    }

    pub async fn select_reward_card(&self, card: CardId) -> Result<CommandReport> {
        self.execute(Command::SelectRewardCard(card)).await
    }

    pub async fn skip_reward(&self) -> Result<CommandReport> {
        self.execute(Command::SkipReward).await
    }

    pub async fn reset_game(&self) -> Result<CommandReport> {
        self.execute(Command::ResetGame).await
    }

    /// Read-only copy of the current state.
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(SessionCommand::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Current state as a JSON document for presentation layers.
    pub async fn snapshot_json(&self) -> Result<String> {
        let state = self.query_state().await?;
        Ok(serde_json::to_string(&state)?)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Command` - applied and rejected commands
    /// - `Topic::Log` - new combat log entries
    /// - `Topic::Animation` - enemy-turn steps and player movement, paced by the step delay
    /// - `Topic::Phase` - phase transitions
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
