//! Worker tasks that back the runtime orchestration.
//!
//! A single session worker owns the game state and applies commands one at a
//! time.

mod session;

pub use session::{SessionCommand, SessionWorker};
