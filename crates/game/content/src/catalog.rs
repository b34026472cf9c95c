//! [`CatalogOracle`] over the built-in content.

use game_core::{
    Card, CatalogOracle, CharacterClass, CharacterClassDefinition, EnemyDefinition, EnemyKind,
    FloorSpec, RewardPool,
};

use crate::{cards, classes, enemies, floors};

/// Built-in classes, cards and archetypes with a replaceable floor list.
#[derive(Clone, Debug)]
pub struct StaticCatalog {
    floors: Vec<FloorSpec>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            floors: floors::default_floors(),
        }
    }

    /// Uses custom rosters, e.g. ones read by [`crate::RosterLoader`].
    pub fn with_floors(floors: Vec<FloorSpec>) -> Self {
        Self { floors }
    }

    pub fn floors(&self) -> &[FloorSpec] {
        &self.floors
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogOracle for StaticCatalog {
    fn class_definition(&self, class: CharacterClass) -> CharacterClassDefinition {
        classes::class_definition(class)
    }

    fn starter_deck(&self, class: CharacterClass) -> Vec<Card> {
        classes::starter_deck(class)
    }

    fn reward_pool(&self, class: CharacterClass) -> RewardPool {
        cards::reward_pool(class)
    }

    fn enemy_definition(&self, kind: EnemyKind) -> EnemyDefinition {
        enemies::enemy_definition(kind)
    }

    fn floor(&self, floor: u32) -> Option<FloorSpec> {
        self.floors.iter().find(|spec| spec.floor == floor).cloned()
    }
}
