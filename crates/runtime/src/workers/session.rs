//! Session worker that owns the authoritative [`GameState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), runs them
//! through [`CombatEngine`], and publishes the results to the [`EventBus`].
//! A command is fully processed, including the paced replay of an enemy turn,
//! before the next one is read from the channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use game_core::{
    CatalogOracle, CombatEngine, Command, CommandOutcome, GameConfig, GameEnv, GameError, GameRng,
    GameState,
};

use crate::api::CommandReport;
use crate::events::{AnimationEvent, CommandEvent, Event, EventBus, PhaseEvent};

/// Requests accepted by the session worker.
pub enum SessionCommand {
    Execute {
        command: Command,
        reply: oneshot::Sender<CommandReport>,
    },
    QueryState {
        reply: oneshot::Sender<GameState>,
    },
}

pub struct SessionWorker {
    state: GameState,
    catalog: Arc<dyn CatalogOracle>,
    config: GameConfig,
    rng: GameRng,
    command_rx: mpsc::Receiver<SessionCommand>,
    event_bus: EventBus,
    step_delay: Duration,
}

impl SessionWorker {
    pub fn new(
        state: GameState,
        catalog: Arc<dyn CatalogOracle>,
        config: GameConfig,
        rng: GameRng,
        command_rx: mpsc::Receiver<SessionCommand>,
        event_bus: EventBus,
        step_delay: Duration,
    ) -> Self {
        Self {
            state,
            catalog,
            config,
            rng,
            command_rx,
            event_bus,
            step_delay,
        }
    }

    /// Main worker loop. Ends once every handle has been dropped.
    pub async fn run(mut self) {
        info!(phase = %self.state.phase, "session worker started");
        while let Some(command) = self.command_rx.recv().await {
            self.handle_command(command).await;
        }
        info!("session worker stopped");
    }

    async fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Execute { command, reply } => {
                let report = self.execute(command).await;
                if reply.send(report).is_err() {
                    debug!("Execute reply channel closed (caller dropped)");
                }
            }
            SessionCommand::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    async fn execute(&mut self, command: Command) -> CommandReport {
        let phase_before = self.state.phase;
        let log_cursor = self.state.log.next_id();

        let env = GameEnv::new(self.catalog.as_ref(), &self.config);
        let result = CombatEngine::new(&mut self.state, env, &mut self.rng).execute(&command);

        match &result {
            Ok(outcome) => {
                self.event_bus.publish(Event::Command(CommandEvent::Applied {
                    command: command.clone(),
                    outcome: outcome.clone(),
                }));
                for entry in self.state.log.since(log_cursor) {
                    self.event_bus.publish(Event::Log(entry.clone()));
                }
                self.replay(outcome).await;
            }
            Err(error) => {
                debug!(command = command.name(), %error, "command rejected");
                self.event_bus.publish(Event::Command(CommandEvent::Rejected {
                    command: command.clone(),
                    reason: error.to_string(),
                    code: error.error_code().to_string(),
                    severity: error.severity(),
                }));
            }
        }

        if self.state.phase != phase_before {
            self.event_bus.publish(Event::Phase(PhaseEvent {
                from: phase_before,
                to: self.state.phase,
                turn: self.state.turn,
                floor: self.state.floor,
            }));
        }

        CommandReport {
            command,
            result,
            phase: self.state.phase,
        }
    }

    /// Publishes movement and enemy steps one at a time, pausing between them.
    async fn replay(&self, outcome: &CommandOutcome) {
        match outcome {
            CommandOutcome::Moved { path } => {
                self.event_bus
                    .publish(Event::Animation(AnimationEvent::PlayerMoved { path: path.clone() }));
            }
            CommandOutcome::EnemyTurn(report) => {
                for step in &report.steps {
                    self.event_bus
                        .publish(Event::Animation(AnimationEvent::EnemyStep(step.clone())));
                    self.pause().await;
                }
                self.event_bus
                    .publish(Event::Animation(AnimationEvent::EnemyTurnFinished {
                        player_defeated: report.player_defeated,
                    }));
            }
            CommandOutcome::Applied | CommandOutcome::CardPlayed(_) => {}
        }
    }

    async fn pause(&self) {
        if !self.step_delay.is_zero() {
            tokio::time::sleep(self.step_delay).await;
        }
    }
}
