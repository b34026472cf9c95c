//! Async host for a single combat session.
//!
//! The runtime wraps the synchronous [`game_core::CombatEngine`] in a worker
//! task that owns the authoritative [`game_core::GameState`]. Clients talk to
//! it through a cloneable [`RuntimeHandle`] and observe it through the
//! topic-based [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`providers`] holds ready-made [`CommandProvider`] implementations
//! - `workers` keeps the session task internal to the crate
pub mod api;
pub mod events;
pub mod providers;
pub mod runtime;

mod workers;

pub use api::{CommandProvider, CommandReport, Result, RuntimeError, RuntimeHandle};
pub use events::{AnimationEvent, CommandEvent, Event, EventBus, PhaseEvent, Topic};
pub use providers::{AutopilotProvider, ScriptedProvider};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
