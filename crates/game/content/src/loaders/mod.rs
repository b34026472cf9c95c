//! Loaders that read game data from files.
//!
//! Configuration is TOML, floor rosters are RON. Every failure is an
//! [`anyhow::Error`] carrying the offending path; a bad data file is fatal to
//! the load.

pub mod config;
pub mod factory;
pub mod roster;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use roster::{FloorEntry, RosterLoader, SpawnEntry, validate_spawns};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
