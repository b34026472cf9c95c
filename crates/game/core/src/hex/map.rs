use std::collections::BTreeMap;

use super::{HexPosition, hexes_in_range};

/// Terrain classes for map tiles.
///
/// Only [`TileKind::Floor`] can be entered. Generated maps are all floor;
/// the other kinds exist so layouts can carve obstacles later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TileKind {
    #[default]
    Floor,
    Wall,
    Obstacle,
    Pit,
}

impl TileKind {
    pub fn is_walkable(self) -> bool {
        matches!(self, TileKind::Floor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexTile {
    pub position: HexPosition,
    pub kind: TileKind,
}

/// Hexagon-shaped map fully enumerated at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexMap {
    radius: u32,
    #[cfg_attr(feature = "serde", serde(with = "tiles_as_list"))]
    tiles: BTreeMap<HexPosition, TileKind>,
}

impl HexMap {
    /// Creates a map containing every hex within `radius` of the origin, all floor.
    pub fn new(radius: u32) -> Self {
        let tiles = hexes_in_range(HexPosition::ORIGIN, radius)
            .into_iter()
            .map(|position| (position, TileKind::Floor))
            .collect();

        Self { radius, tiles }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, position: HexPosition) -> bool {
        self.tiles.contains_key(&position)
    }

    pub fn tile(&self, position: HexPosition) -> Option<HexTile> {
        self.tiles
            .get(&position)
            .map(|&kind| HexTile { position, kind })
    }

    /// True when the hex exists and its terrain can be entered.
    pub fn is_walkable(&self, position: HexPosition) -> bool {
        self.tiles
            .get(&position)
            .is_some_and(|kind| kind.is_walkable())
    }

    /// Changes the terrain of an existing hex. Returns false for hexes outside the map.
    pub fn set_tile(&mut self, position: HexPosition, kind: TileKind) -> bool {
        match self.tiles.get_mut(&position) {
            Some(slot) => {
                *slot = kind;
                true
            }
            None => false,
        }
    }

    pub fn tiles(&self) -> impl Iterator<Item = HexTile> + '_ {
        self.tiles
            .iter()
            .map(|(&position, &kind)| HexTile { position, kind })
    }
}

impl Default for HexMap {
    fn default() -> Self {
        Self::new(0)
    }
}

/// JSON object keys must be strings, so tiles travel as a flat list.
#[cfg(feature = "serde")]
mod tiles_as_list {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{HexPosition, HexTile, TileKind};

    pub fn serialize<S>(
        tiles: &BTreeMap<HexPosition, TileKind>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let list: Vec<HexTile> = tiles
            .iter()
            .map(|(&position, &kind)| HexTile { position, kind })
            .collect();
        list.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<HexPosition, TileKind>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list = Vec::<HexTile>::deserialize(deserializer)?;
        Ok(list
            .into_iter()
            .map(|tile| (tile.position, tile.kind))
            .collect())
    }
}
