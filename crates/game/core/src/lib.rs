//! Hex-grid card combat rules shared by the runtime and presentation layers.
//!
//! `game-core` defines the canonical rules (hex geometry, cards, enemies,
//! engine, combat state) and exposes pure synchronous APIs. All state
//! mutation flows through [`engine::CombatEngine`]; content is supplied
//! through the [`env::CatalogOracle`] trait.
pub mod card;
pub mod class;
pub mod combat;
pub mod command;
pub mod config;
pub mod deck;
pub mod enemy;
pub mod engine;
pub mod env;
pub mod error;
pub mod hex;
pub mod reward;
pub mod state;

pub use card::{Card, CardEffect, CardId, CardKind};
pub use class::{CharacterClass, CharacterClassDefinition, InnateAbility, InnateAbilityKind};
pub use combat::{DamageOutcome, absorb};
pub use command::Command;
pub use config::GameConfig;
pub use deck::CardPiles;
pub use enemy::{
    Enemy, EnemyAction, EnemyActionCard, EnemyActionKind, EnemyDefinition, EnemyId, EnemyKind,
};
pub use engine::{
    CardPlay, CombatEngine, CommandError, CommandOutcome, EnemyStep, EnemyStepKind,
    EnemyTurnReport, plan_enemy_path,
};
pub use env::{CatalogOracle, EnemySpawn, FloorSpec, GameEnv, GameRng, OracleError};
pub use error::{ErrorSeverity, GameError};
pub use hex::{
    HexDirection, HexMap, HexPosition, HexTile, TileKind, find_path_to_closest_target, hex_ring,
    hexes_in_range, reachable_hexes,
};
pub use reward::{RewardPool, pick_reward_cards};
pub use state::{
    GameLog, GameLogEntry, GamePhase, GameState, LogDetails, LogKind, Player, RunStats, Selection,
};
