//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up the command channel and the
//! event bus, and exposes a builder-based API for clients to drive a run.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use game_content::{ConfigLoader, StaticCatalog};
use game_core::{CatalogOracle, GameConfig, GameRng, GameState};

use crate::api::{CommandProvider, Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::workers::{SessionCommand, SessionWorker};

/// Runtime configuration shared across the orchestrator and the worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Pause between replayed animation steps.
    pub step_delay: Duration,
    /// Fixed seed for reproducible runs; entropy when `None`.
    pub rng_seed: Option<u64>,
    /// Commands [`Runtime::run`] submits before giving up on a run.
    pub max_provider_steps: usize,
}

impl RuntimeConfig {
    pub const ENV_STEP_DELAY_MS: &'static str = "HEXCRAWL_STEP_DELAY_MS";
    pub const ENV_SEED: &'static str = "HEXCRAWL_SEED";
    pub const ENV_EVENT_BUFFER: &'static str = "HEXCRAWL_EVENT_BUFFER";
    pub const ENV_COMMAND_BUFFER: &'static str = "HEXCRAWL_COMMAND_BUFFER";
    pub const ENV_CONFIG: &'static str = "HEXCRAWL_CONFIG";

    /// Defaults overridden by `HEXCRAWL_*` environment variables.
    ///
    /// `HEXCRAWL_CONFIG` points at a TOML file holding the [`GameConfig`].
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`RuntimeConfig::from_env`] with variables read through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(ms) = parse_var::<u64>(&lookup, Self::ENV_STEP_DELAY_MS)? {
            config.step_delay = Duration::from_millis(ms);
        }
        if let Some(seed) = parse_var::<u64>(&lookup, Self::ENV_SEED)? {
            config.rng_seed = Some(seed);
        }
        if let Some(size) = parse_var::<usize>(&lookup, Self::ENV_EVENT_BUFFER)? {
            config.event_buffer_size = size;
        }
        if let Some(size) = parse_var::<usize>(&lookup, Self::ENV_COMMAND_BUFFER)? {
            config.command_buffer_size = size;
        }
        if let Some(path) = parse_var::<PathBuf>(&lookup, Self::ENV_CONFIG)? {
            config.game_config = ConfigLoader::load(&path)
                .map_err(|e| RuntimeError::Config(format!("{e:#}")))?;
        }

        Ok(config)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| RuntimeError::Config(format!("{name}={raw}: {e}"))),
        None => Ok(None),
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: EventBus::DEFAULT_CAPACITY,
            command_buffer_size: 32,
            step_delay: Duration::from_millis(300),
            rng_seed: None,
            max_provider_steps: 10_000,
        }
    }
}

/// Main runtime that hosts one combat session
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    config: RuntimeConfig,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Lets `provider` drive the session until victory, defeat or the step
    /// limit, and returns the final state.
    pub async fn run(&self, provider: &dyn CommandProvider) -> Result<GameState> {
        for step in 0..self.config.max_provider_steps {
            let state = self.handle.query_state().await?;
            if state.is_terminal() {
                tracing::info!(
                    phase = %state.phase,
                    floor = state.floor,
                    turn = state.turn,
                    steps = step,
                    "run finished"
                );
                return Ok(state);
            }

            let command = provider.next_command(&state).await?;
            let report = self.handle.execute(command).await?;
            if let Some(error) = report.rejection() {
                tracing::debug!(command = report.command.name(), %error, "provider command rejected");
            }
            provider.observe(&report).await;
        }

        tracing::warn!(
            steps = self.config.max_provider_steps,
            "run stopped at the step limit"
        );
        self.handle.query_state().await
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for the worker to drain; clones of the handle held elsewhere keep
    /// it alive until they are dropped too.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)?;
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    catalog: Option<Arc<dyn CatalogOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            catalog: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Resume from an existing state instead of character selection.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Content source; the built-in [`StaticCatalog`] when not set.
    pub fn catalog(mut self, catalog: impl CatalogOracle + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Spawns the session worker. Must be called inside a tokio runtime.
    pub fn build(self) -> Runtime {
        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(StaticCatalog::new()));
        let rng = match self.config.rng_seed {
            Some(seed) => GameRng::from_seed(seed),
            None => GameRng::from_entropy(),
        };

        let (command_tx, command_rx) =
            mpsc::channel::<SessionCommand>(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let worker = SessionWorker::new(
            self.state.unwrap_or_default(),
            catalog,
            self.config.game_config.clone(),
            rng,
            command_rx,
            event_bus,
            self.config.step_delay,
        );
        let worker_handle = tokio::spawn(worker.run());

        Runtime {
            handle,
            config: self.config,
            worker_handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        let config = RuntimeConfig::from_vars(|_| None).unwrap();
        assert_eq!(config.event_buffer_size, EventBus::DEFAULT_CAPACITY);
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.game_config, GameConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_floor = 2\nhand_size = 6").unwrap();
        let path = file.path().display().to_string();

        let config = RuntimeConfig::from_vars(|name| match name {
            RuntimeConfig::ENV_SEED => Some("42".into()),
            RuntimeConfig::ENV_STEP_DELAY_MS => Some(" 5 ".into()),
            RuntimeConfig::ENV_EVENT_BUFFER => Some(String::new()),
            RuntimeConfig::ENV_CONFIG => Some(path.clone()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.step_delay, Duration::from_millis(5));
        assert_eq!(config.event_buffer_size, EventBus::DEFAULT_CAPACITY);
        assert_eq!(config.game_config.max_floor, 2);
        assert_eq!(config.game_config.hand_size, 6);
        assert_eq!(config.game_config.map_radius, GameConfig::DEFAULT_MAP_RADIUS);
    }

    #[test]
    fn malformed_variables_are_config_errors() {
        let error = RuntimeConfig::from_vars(|name| {
            (name == RuntimeConfig::ENV_SEED).then(|| "soon".to_string())
        })
        .unwrap_err();
        assert!(matches!(error, RuntimeError::Config(message) if message.contains("HEXCRAWL_SEED")));

        let missing = RuntimeConfig::from_vars(|name| {
            (name == RuntimeConfig::ENV_CONFIG).then(|| "/nonexistent/hexcrawl.toml".to_string())
        });
        assert!(matches!(missing, Err(RuntimeError::Config(_))));
    }

    #[tokio::test]
    async fn resumes_from_an_initial_state() {
        let first = Runtime::builder()
            .config(RuntimeConfig {
                rng_seed: Some(4),
                step_delay: Duration::ZERO,
                ..RuntimeConfig::default()
            })
            .build();
        let handle = first.handle();
        handle
            .select_character(game_core::CharacterClass::Mage)
            .await
            .unwrap();
        handle.start_combat().await.unwrap();
        let saved = handle.query_state().await.unwrap();
        drop(handle);
        first.shutdown().await.unwrap();

        let resumed = Runtime::builder()
            .config(RuntimeConfig {
                rng_seed: Some(4),
                ..RuntimeConfig::default()
            })
            .initial_state(saved.clone())
            .build();
        let state = resumed.handle().query_state().await.unwrap();
        assert_eq!(state, saved);
        assert_eq!(state.phase, game_core::GamePhase::PlayerTurn);
        resumed.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_joins_the_worker() {
        let runtime = Runtime::builder()
            .config(RuntimeConfig {
                rng_seed: Some(1),
                ..RuntimeConfig::default()
            })
            .build();
        let state = runtime.handle().query_state().await.unwrap();
        assert_eq!(state.phase, game_core::GamePhase::CharacterSelect);
        runtime.shutdown().await.unwrap();
    }
}
