//! Client settings read from the environment.

use std::path::PathBuf;

use anyhow::{Context, Result};
use game_core::CharacterClass;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Class the autopilot plays (`HEXCRAWL_CLASS`).
    pub class: CharacterClass,
    /// Directory with `config.toml` and `floors.ron` (`HEXCRAWL_DATA_DIR`).
    pub data_dir: Option<PathBuf>,
    /// Enables the file log layer (`HEXCRAWL_LOG_DIR`).
    pub log_dir: Option<PathBuf>,
    /// Print every log entry instead of phase changes only (`HEXCRAWL_VERBOSE`).
    pub verbose: bool,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        let class = match std::env::var("HEXCRAWL_CLASS") {
            Ok(raw) => parse_class(&raw)?,
            Err(_) => CharacterClass::Warrior,
        };
        let verbose = std::env::var("HEXCRAWL_VERBOSE")
            .map(|raw| matches!(raw.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            class,
            data_dir: std::env::var_os("HEXCRAWL_DATA_DIR").map(PathBuf::from),
            log_dir: std::env::var_os("HEXCRAWL_LOG_DIR").map(PathBuf::from),
            verbose,
        })
    }
}

fn parse_class(raw: &str) -> Result<CharacterClass> {
    raw.trim()
        .parse()
        .with_context(|| format!("unknown class {raw:?}; expected warrior, archer or mage"))
}
