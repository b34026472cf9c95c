//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Reads a [`GameConfig`] from TOML. Missing keys keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))?;
        tracing::debug!(path = %path.display(), "game config loaded");
        Ok(config)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)?;
        if !(0.0..=1.0).contains(&config.normal_reward_weight) {
            anyhow::bail!(
                "normal_reward_weight must lie in [0, 1], got {}",
                config.normal_reward_weight
            );
        }
        if config.max_floor == 0 {
            anyhow::bail!("max_floor must be at least 1");
        }
        Ok(config)
    }
}
