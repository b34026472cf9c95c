//! Combat resolution.
//!
//! Pure functions over plain numbers; the engine decides who hits whom and
//! applies the returned outcome to the participants.

pub mod damage;

pub use damage::{DamageOutcome, absorb};
