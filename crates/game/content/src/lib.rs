//! Static game content and data-file loaders.
//!
//! This crate owns the class definitions, starter decks, reward pools, enemy
//! archetypes and floor rosters. [`StaticCatalog`] bundles them behind the
//! [`game_core::CatalogOracle`] trait so the engine never depends on where
//! content comes from.
//!
//! With the `loaders` feature, game configuration can be read from TOML and
//! floor rosters from RON.

pub mod cards;
pub mod catalog;
pub mod classes;
pub mod enemies;
pub mod floors;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::StaticCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, RosterLoader};
