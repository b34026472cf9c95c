//! Asynchronous abstraction for sourcing player intent.
//!
//! Runtime users plug in [`CommandProvider`] implementations so a session can
//! be driven by human input, scripted fixtures, or an autopilot.
use async_trait::async_trait;
use game_core::{Command, GameState};

use super::errors::Result;
use super::report::CommandReport;

#[async_trait]
pub trait CommandProvider: Send + Sync {
    /// Picks the next command from a read-only snapshot.
    async fn next_command(&self, state: &GameState) -> Result<Command>;

    /// Called after every submitted command. Defaults to a no-op.
    async fn observe(&self, _report: &CommandReport) {}
}
