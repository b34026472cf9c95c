//! Builds configuration and catalogs from a data directory.

use std::path::{Path, PathBuf};

use game_core::{FloorSpec, GameConfig};

use crate::StaticCatalog;
use crate::loaders::{ConfigLoader, LoadResult, RosterLoader, validate_spawns};

/// Loads content from a data directory.
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── floors.ron
/// ```
///
/// Either file may be absent, in which case the built-in content is used.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Data directory bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    pub fn load_floors(&self) -> LoadResult<Vec<FloorSpec>> {
        let path = self.data_dir.join("floors.ron");
        if !path.exists() {
            return Ok(crate::floors::default_floors());
        }
        RosterLoader::load(&path)
    }

    /// Loads the rosters and checks every spawn against the loaded config.
    pub fn load_catalog(&self) -> LoadResult<StaticCatalog> {
        let config = self.load_config()?;
        let floors = self.load_floors()?;
        validate_spawns(&floors, &config)?;
        Ok(StaticCatalog::with_floors(floors))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::CatalogOracle;

    #[test]
    fn empty_directory_falls_back_to_builtin_content() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        let catalog = factory.load_catalog().unwrap();
        assert_eq!(catalog.floors().len(), 4);
    }

    #[test]
    fn reads_rosters_from_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("floors.ron"),
            r#"[(floor: 1, name: "Only", spawns: [(enemy: "ghost", q: 1, r: 1)])]"#,
        )
        .unwrap();

        let catalog = ContentFactory::new(dir.path()).load_catalog().unwrap();
        assert_eq!(catalog.floors().len(), 1);
        assert!(catalog.floor(2).is_none());
    }

    #[test]
    fn rosters_are_checked_against_the_directory_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("floors.ron"),
            r#"[(floor: 1, name: "Edge", spawns: [(enemy: "rat", q: 5, r: 0)])]"#,
        )
        .unwrap();

        let error = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        assert!(error.to_string().contains("outside map radius"));

        std::fs::write(dir.path().join("config.toml"), "map_radius = 6\n").unwrap();
        let catalog = ContentFactory::new(dir.path()).load_catalog().unwrap();
        assert_eq!(catalog.floors().len(), 1);
    }

    #[test]
    fn bundled_data_loads() {
        let factory = ContentFactory::bundled();
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert_eq!(factory.load_catalog().unwrap().floors().len(), 4);
    }
}
