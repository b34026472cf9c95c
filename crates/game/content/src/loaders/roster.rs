//! Floor roster loader.

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use game_core::{EnemyKind, EnemySpawn, FloorSpec, GameConfig, HexPosition};

use crate::loaders::{LoadResult, read_file};

/// One enemy placement as written in a roster file.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct SpawnEntry {
    /// Archetype name in snake_case, e.g. `dark_mage`.
    pub enemy: String,
    pub q: i32,
    pub r: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct FloorEntry {
    pub floor: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub spawns: Vec<SpawnEntry>,
}

/// Reads floor rosters from RON.
///
/// ```ron
/// [
///     (
///         floor: 1,
///         name: "Dungeon Entrance",
///         spawns: [(enemy: "slime", q: 2, r: 0)],
///     ),
/// ]
/// ```
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<FloorSpec>> {
        let content = read_file(path)?;
        let floors = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load roster {}: {}", path.display(), e))?;
        tracing::debug!(path = %path.display(), floors = floors.len(), "floor rosters loaded");
        Ok(floors)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<FloorSpec>> {
        let entries: Vec<FloorEntry> = ron::from_str(content)?;
        entries.into_iter().map(Self::resolve).collect()
    }

    fn resolve(entry: FloorEntry) -> LoadResult<FloorSpec> {
        if entry.spawns.is_empty() {
            anyhow::bail!("floor {} has no enemies", entry.floor);
        }
        let spawns = entry
            .spawns
            .iter()
            .map(|spawn| {
                let kind = EnemyKind::from_str(&spawn.enemy).map_err(|_| {
                    anyhow::anyhow!(
                        "unknown enemy '{}' on floor {}",
                        spawn.enemy,
                        entry.floor
                    )
                })?;
                Ok(EnemySpawn {
                    kind,
                    position: HexPosition::new(spawn.q, spawn.r),
                })
            })
            .collect::<LoadResult<Vec<_>>>()?;

        let mut seen = HashSet::new();
        if let Some(spawn) = spawns.iter().find(|spawn| !seen.insert(spawn.position)) {
            anyhow::bail!(
                "floor {} places two enemies on {}",
                entry.floor,
                spawn.position
            );
        }

        Ok(FloorSpec {
            floor: entry.floor,
            name: entry.name,
            description: entry.description,
            spawns,
        })
    }
}

/// Rejects spawns outside the battlefield or on the player's entry hex.
pub fn validate_spawns(floors: &[FloorSpec], config: &GameConfig) -> LoadResult<()> {
    for floor in floors {
        for spawn in &floor.spawns {
            if spawn.position == config.player_entry {
                anyhow::bail!(
                    "floor {}: {} spawns on the player entry {}",
                    floor.floor,
                    spawn.kind,
                    spawn.position
                );
            }
            if spawn.position.distance(HexPosition::ORIGIN) > config.map_radius {
                anyhow::bail!(
                    "floor {}: {} spawns at {}, outside map radius {}",
                    floor.floor,
                    spawn.kind,
                    spawn.position,
                    config.map_radius
                );
            }
        }
    }
    Ok(())
}
