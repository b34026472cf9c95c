//! Replays a fixed list of commands.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use game_core::{Command, GameState};

use crate::api::{CommandProvider, Result, RuntimeError};

/// Feeds commands in order and fails once the script runs out.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    commands: Mutex<VecDeque<Command>>,
}

impl ScriptedProvider {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: Mutex::new(commands.into_iter().collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.commands.lock().map(|queue| queue.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CommandProvider for ScriptedProvider {
    async fn next_command(&self, _state: &GameState) -> Result<Command> {
        let mut queue = self
            .commands
            .lock()
            .map_err(|_| RuntimeError::Provider("script lock poisoned".into()))?;
        queue
            .pop_front()
            .ok_or_else(|| RuntimeError::Provider("script exhausted".into()))
    }
}
