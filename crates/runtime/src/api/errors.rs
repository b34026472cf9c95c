//! Errors surfaced by the runtime API.
//!
//! A command the engine rejects is not a runtime error: it comes back inside
//! [`CommandReport`](super::CommandReport) and as a
//! [`CommandEvent::Rejected`](crate::events::CommandEvent::Rejected).
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("command provider failed: {0}")]
    Provider(String),

    #[error("invalid runtime configuration: {0}")]
    Config(String),

    #[error("failed to serialize state snapshot")]
    Snapshot(#[from] serde_json::Error),
}
