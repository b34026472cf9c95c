//! Read-only content and configuration the engine consults.
//!
//! The [`GameEnv`] bundle keeps the engine decoupled from the concrete
//! catalog; the `game-content` crate provides the shipped implementation.
mod catalog;
mod error;
mod rng;

pub use catalog::{CatalogOracle, EnemySpawn, FloorSpec};
pub use error::OracleError;
pub use rng::GameRng;

use crate::config::GameConfig;

/// Aggregates the catalog oracle and game configuration.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    catalog: &'a dyn CatalogOracle,
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(catalog: &'a dyn CatalogOracle, config: &'a GameConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a dyn CatalogOracle {
        self.catalog
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    /// Roster for `floor`, failing when the catalog does not define it.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::FloorNotDefined` for floors outside the catalog and
    /// `OracleError::EmptyRoster` for floors without enemies.
    pub fn floor(&self, floor: u32) -> Result<FloorSpec, OracleError> {
        let spec = self
            .catalog
            .floor(floor)
            .ok_or(OracleError::FloorNotDefined(floor))?;
        if spec.spawns.is_empty() {
            return Err(OracleError::EmptyRoster(floor));
        }
        Ok(spec)
    }
}

impl std::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
