//! Read-only game content consumed by the engine.
use crate::card::Card;
use crate::class::{CharacterClass, CharacterClassDefinition};
use crate::enemy::{EnemyDefinition, EnemyKind};
use crate::hex::HexPosition;
use crate::reward::RewardPool;

/// One enemy placement in a floor roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySpawn {
    pub kind: EnemyKind,
    pub position: HexPosition,
}

/// Fixed enemy roster and flavor text of one floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorSpec {
    pub floor: u32,
    pub name: String,
    pub description: String,
    pub spawns: Vec<EnemySpawn>,
}

/// Static catalog of classes, cards, enemy archetypes and floors.
///
/// Classes and archetypes are closed enums, so every lookup except floors is
/// total.
pub trait CatalogOracle: Send + Sync {
    fn class_definition(&self, class: CharacterClass) -> CharacterClassDefinition;

    /// Ordered starting deck of a class, before shuffling.
    fn starter_deck(&self, class: CharacterClass) -> Vec<Card>;

    fn reward_pool(&self, class: CharacterClass) -> RewardPool;

    fn enemy_definition(&self, kind: EnemyKind) -> EnemyDefinition;

    /// Roster of a 1-based floor number.
    fn floor(&self, floor: u32) -> Option<FloorSpec>;
}
