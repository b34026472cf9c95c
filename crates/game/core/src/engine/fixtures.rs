//! Small deterministic catalog and harness for engine tests.

use crate::card::{Card, CardId};
use crate::class::{CharacterClass, CharacterClassDefinition, InnateAbility, InnateAbilityKind};
use crate::command::Command;
use crate::config::GameConfig;
use crate::enemy::{
    Enemy, EnemyAction, EnemyActionCard, EnemyDefinition, EnemyId, EnemyKind,
};
use crate::env::{CatalogOracle, EnemySpawn, FloorSpec, GameEnv, GameRng};
use crate::hex::HexPosition;
use crate::reward::RewardPool;
use crate::state::GameState;

use super::{CombatEngine, CommandError, CommandOutcome};

pub struct TestCatalog {
    pub floors: Vec<FloorSpec>,
    pub rewards: RewardPool,
}

impl TestCatalog {
    /// Four floors, each guarded by a single goblin two hexes east of the origin.
    pub fn new() -> Self {
        let floors = (1..=4)
            .map(|floor| FloorSpec {
                floor,
                name: format!("Floor {floor}"),
                description: "Test floor".into(),
                spawns: vec![EnemySpawn {
                    kind: EnemyKind::Goblin,
                    position: HexPosition::new(2, 0),
                }],
            })
            .collect();
        Self {
            floors,
            rewards: RewardPool {
                normal: vec![
                    Card::attack("sword_slash_strong_1", "Strong Slash", 1, 12, 1),
                    Card::skill("shield_block_1", "Shield Block", 1, 8),
                ],
                rare: vec![Card::power("power_surge_1", "Power Surge", 2, 15, 8)],
            },
        }
    }

    pub fn with_floor(mut self, floor: u32, spawns: Vec<EnemySpawn>) -> Self {
        if let Some(spec) = self.floors.iter_mut().find(|spec| spec.floor == floor) {
            spec.spawns = spawns;
        }
        self
    }
}

fn single_card(id: &str, actions: Vec<EnemyAction>) -> Vec<EnemyActionCard> {
    vec![EnemyActionCard::new(id, id, actions)]
}

impl CatalogOracle for TestCatalog {
    fn class_definition(&self, class: CharacterClass) -> CharacterClassDefinition {
        let (name, hp, abilities) = match class {
            CharacterClass::Warrior => (
                "Warrior",
                90,
                vec![
                    InnateAbility::new(InnateAbilityKind::PassiveBlock, 3, "Iron Skin", ""),
                    InnateAbility::new(InnateAbilityKind::RoomHealing, 8, "Second Wind", ""),
                ],
            ),
            CharacterClass::Archer => (
                "Archer",
                70,
                vec![InnateAbility::new(InnateAbilityKind::BonusDraw, 1, "Quick Hands", "")],
            ),
            CharacterClass::Mage => (
                "Mage",
                60,
                vec![InnateAbility::new(InnateAbilityKind::EnergyRegen, 1, "Mana Flow", "")],
            ),
        };
        CharacterClassDefinition {
            class,
            name: name.into(),
            description: String::new(),
            base_hp: hp,
            base_energy: 3,
            innate_abilities: abilities,
        }
    }

    fn starter_deck(&self, _class: CharacterClass) -> Vec<Card> {
        let mut deck = Vec::new();
        for index in 1..=5 {
            deck.push(Card::attack(format!("strike_{index}"), "Strike", 1, 6, 1));
        }
        for index in 1..=4 {
            deck.push(Card::skill(format!("defend_{index}"), "Defend", 1, 5));
        }
        for index in 1..=3 {
            deck.push(Card::movement(format!("walk_{index}"), "Walk", 1, 2));
        }
        deck
    }

    fn reward_pool(&self, _class: CharacterClass) -> RewardPool {
        self.rewards.clone()
    }

    fn enemy_definition(&self, kind: EnemyKind) -> EnemyDefinition {
        let (hp, range, cards) = match kind {
            EnemyKind::Goblin => (
                20,
                1,
                single_card(
                    "goblin_rush",
                    vec![EnemyAction::movement(2), EnemyAction::attack(5)],
                ),
            ),
            EnemyKind::Skeleton => (25, 2, single_card("arrow", vec![EnemyAction::attack(6)])),
            EnemyKind::Slime => (12, 1, single_card("harden", vec![EnemyAction::defend(4)])),
            EnemyKind::Rat => (8, 1, single_card("scurry", vec![EnemyAction::movement(3)])),
            EnemyKind::Orc => (
                35,
                1,
                single_card("rage", vec![EnemyAction::buff(3), EnemyAction::attack(8)]),
            ),
            EnemyKind::DarkMage => (28, 3, single_card("bolt", vec![EnemyAction::attack(10)])),
            EnemyKind::Ghost => (22, 2, single_card("phase", vec![EnemyAction::defend(15)])),
            EnemyKind::Dragon => (120, 3, single_card("claw", vec![EnemyAction::attack(95)])),
        };
        EnemyDefinition {
            kind,
            name: kind.to_string(),
            emoji: String::new(),
            min_hp: hp,
            max_hp: hp,
            attack_range: range,
            action_cards: cards,
        }
    }

    fn floor(&self, floor: u32) -> Option<FloorSpec> {
        self.floors.iter().find(|spec| spec.floor == floor).cloned()
    }
}

/// Owns everything a [`CombatEngine`] borrows.
pub struct Harness {
    pub state: GameState,
    pub rng: GameRng,
    pub catalog: TestCatalog,
    pub config: GameConfig,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_catalog(TestCatalog::new())
    }

    pub fn with_catalog(catalog: TestCatalog) -> Self {
        Self {
            state: GameState::new(),
            rng: GameRng::from_seed(17),
            catalog,
            config: GameConfig::default(),
        }
    }

    /// Selects a class and starts combat on floor 1.
    pub fn started(class: CharacterClass) -> Self {
        let mut harness = Self::new();
        harness.run(Command::SelectCharacter(class)).expect("select");
        harness.run(Command::StartCombat).expect("start");
        harness
    }

    pub fn run(&mut self, command: Command) -> Result<CommandOutcome, CommandError> {
        let env = GameEnv::new(&self.catalog, &self.config);
        CombatEngine::new(&mut self.state, env, &mut self.rng).execute(&command)
    }

    /// Replaces the enemy list with one enemy of `kind` at `position`.
    pub fn place_enemy(&mut self, kind: EnemyKind, position: HexPosition) -> EnemyId {
        let definition = self.catalog.enemy_definition(kind);
        let id = self.state.allocate_enemy_id();
        let enemy = Enemy::spawn(&definition, id, position, &mut self.rng);
        self.state.enemies = vec![enemy];
        id
    }

    pub fn add_enemy(&mut self, kind: EnemyKind, position: HexPosition) -> EnemyId {
        let definition = self.catalog.enemy_definition(kind);
        let id = self.state.allocate_enemy_id();
        let enemy = Enemy::spawn(&definition, id, position, &mut self.rng);
        self.state.enemies.push(enemy);
        id
    }

    /// Puts a specific card in hand, pulling it from wherever it currently is.
    pub fn hold(&mut self, id: &str) -> CardId {
        let id = CardId::new(id);
        let piles = &mut self.state.piles;
        if piles.hand.iter().any(|card| card.id == id) {
            return id;
        }
        for pile in [&mut piles.draw_pile, &mut piles.discard_pile] {
            if let Some(index) = pile.iter().position(|card| card.id == id) {
                let card = pile.remove(index);
                piles.hand.push(card);
                return id;
            }
        }
        panic!("card {id} is not owned");
    }

    pub fn player_position(&self) -> HexPosition {
        self.state.player.as_ref().expect("player").position
    }

    pub fn set_player_position(&mut self, position: HexPosition) {
        self.state.player.as_mut().expect("player").position = position;
    }
}
