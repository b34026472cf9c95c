//! Ready-made [`crate::CommandProvider`] implementations.

pub mod autopilot;
pub mod scripted;

pub use autopilot::AutopilotProvider;
pub use scripted::ScriptedProvider;
