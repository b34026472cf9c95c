//! Run setup and the start-of-turn routine.

use super::{CombatEngine, CommandError, CommandOutcome};
use crate::class::{CharacterClass, CharacterClassDefinition, InnateAbilityKind};
use crate::deck::CardPiles;
use crate::enemy::Enemy;
use crate::env::FloorSpec;
use crate::hex::HexMap;
use crate::state::{GamePhase, GameState, LogDetails, LogKind, Player, Selection};

impl CombatEngine<'_> {
    /// Chooses (or re-chooses) the character class before combat starts.
    pub fn select_character(
        &mut self,
        class: CharacterClass,
    ) -> Result<CommandOutcome, CommandError> {
        self.require_phase("select_character", &[GamePhase::CharacterSelect])?;

        let definition = self.env.catalog().class_definition(class);
        let entry = self.env.config().player_entry;
        self.state.player = Some(Player::from_definition(&definition, entry));
        tracing::debug!(%class, "character selected");
        Ok(CommandOutcome::Applied)
    }

    /// Builds the battlefield, shuffles the class deck, spawns floor 1 and
    /// opens the first player turn.
    pub fn start_combat(&mut self) -> Result<CommandOutcome, CommandError> {
        self.require_phase("start_combat", &[GamePhase::CharacterSelect])?;
        let class = self.player()?.class;
        let floor = self.env.floor(1)?;

        let catalog = self.env.catalog();
        let config = self.env.config();
        let definition = catalog.class_definition(class);

        self.state.player = Some(Player::from_definition(&definition, config.player_entry));
        self.state.map = HexMap::new(config.map_radius);
        self.state.piles = CardPiles::from_deck(catalog.starter_deck(class), self.rng);
        self.state.selection = Selection::default();
        self.state.reward_cards.clear();
        self.state.turn = 1;
        self.state.floor = 1;

        self.spawn_floor(&floor);
        self.start_player_turn(true);
        self.state.phase = GamePhase::PlayerTurn;

        tracing::info!(%class, deck = self.state.piles.deck.len(), "combat started");
        Ok(CommandOutcome::Applied)
    }

    /// Returns to character selection, discarding the whole run.
    pub fn reset_game(&mut self) -> Result<CommandOutcome, CommandError> {
        *self.state = GameState::new();
        tracing::info!("game reset");
        Ok(CommandOutcome::Applied)
    }

    /// Replaces the enemy list with the floor's roster and logs the floor start.
    pub(super) fn spawn_floor(&mut self, floor: &FloorSpec) {
        let catalog = self.env.catalog();
        let mut enemies = Vec::with_capacity(floor.spawns.len());
        for spawn in &floor.spawns {
            let definition = catalog.enemy_definition(spawn.kind);
            let id = self.state.allocate_enemy_id();
            enemies.push(Enemy::spawn(&definition, id, spawn.position, self.rng));
        }
        self.state.enemies = enemies;

        self.state.push_log(
            LogKind::FloorStart,
            format!("Floor {}: {}. {}", floor.floor, floor.name, floor.description),
            None,
        );
        tracing::info!(floor = floor.floor, enemies = floor.spawns.len(), "floor started");
    }

    /// Refreshes the player, applies innate abilities and draws a new hand.
    ///
    /// Energy regen only applies on the first turn of a floor.
    pub(super) fn start_player_turn(&mut self, first_of_floor: bool) {
        let Some(class) = self.state.player.as_ref().map(|player| player.class) else {
            return;
        };
        let definition = self.env.catalog().class_definition(class);
        let turn = self.state.turn;
        self.state
            .push_log(LogKind::TurnStart, format!("Turn {turn} begins"), None);

        if let Some(player) = self.state.player.as_mut() {
            player.refresh_for_turn();
        }

        if first_of_floor {
            let bonus = definition.ability_value(InnateAbilityKind::EnergyRegen);
            if bonus > 0 {
                if let Some(player) = self.state.player.as_mut() {
                    player.energy += bonus;
                }
                self.log_innate(
                    &definition,
                    InnateAbilityKind::EnergyRegen,
                    |ability| format!("{ability}: +{bonus} energy"),
                    LogDetails::default(),
                );
            }
        }

        let passive = definition.ability_value(InnateAbilityKind::PassiveBlock);
        if passive > 0 {
            if let Some(player) = self.state.player.as_mut() {
                player.block += passive;
            }
            self.log_innate(
                &definition,
                InnateAbilityKind::PassiveBlock,
                |ability| format!("{ability}: +{passive} block"),
                LogDetails::block(passive),
            );
        }

        let bonus_draw = definition.ability_value(InnateAbilityKind::BonusDraw) as usize;
        let drawn = self
            .state
            .piles
            .draw(self.env.config().hand_size + bonus_draw, self.rng);
        self.state.push_log(
            LogKind::PlayerDraw,
            format!("Drew {drawn} cards"),
            Some(LogDetails::cards(drawn as u32)),
        );
        tracing::debug!(turn, drawn, "player turn started");
    }

    pub(super) fn log_innate(
        &mut self,
        definition: &CharacterClassDefinition,
        kind: InnateAbilityKind,
        message: impl FnOnce(&str) -> String,
        details: LogDetails,
    ) {
        let name = definition
            .ability(kind)
            .map(|ability| ability.name.clone())
            .unwrap_or_else(|| kind.to_string());
        self.state
            .push_log(LogKind::InnateAbility, message(&name), Some(details));
    }
}

#[cfg(test)]
mod tests {
    use crate::class::CharacterClass;
    use crate::command::Command;
    use crate::engine::CommandError;
    use crate::engine::fixtures::{Harness, TestCatalog};
    use crate::state::{GamePhase, GameState, LogKind};

    #[test]
    fn combat_needs_a_character() {
        let mut harness = Harness::new();
        let error = harness.run(Command::StartCombat).unwrap_err();
        assert_eq!(error, CommandError::NoCharacterSelected);
        assert_eq!(harness.state, GameState::new());
    }

    #[test]
    fn character_can_be_changed_before_combat() {
        let mut harness = Harness::new();
        harness.run(Command::SelectCharacter(CharacterClass::Mage)).unwrap();
        harness
            .run(Command::SelectCharacter(CharacterClass::Archer))
            .unwrap();
        assert_eq!(
            harness.state.player.as_ref().unwrap().class,
            CharacterClass::Archer
        );

        harness.run(Command::StartCombat).unwrap();
        let error = harness
            .run(Command::SelectCharacter(CharacterClass::Mage))
            .unwrap_err();
        assert!(matches!(error, CommandError::WrongPhase { .. }));
    }

    #[test]
    fn start_combat_builds_the_first_floor() {
        let harness = Harness::started(CharacterClass::Warrior);
        let state = &harness.state;
        let player = state.player.as_ref().unwrap();

        assert_eq!(state.phase, GamePhase::PlayerTurn);
        assert_eq!((state.turn, state.floor), (1, 1));
        assert_eq!((player.hp, player.max_hp), (90, 90));
        assert_eq!(player.energy, 3);
        assert_eq!(player.block, 3);
        assert_eq!(state.piles.deck.len(), 12);
        assert_eq!(state.piles.hand.len(), 5);
        assert!(state.piles.is_conserved());
        assert_eq!(state.enemies.len(), 1);
        assert!(state.map.is_walkable(player.position));
        assert!(
            state
                .log
                .entries()
                .iter()
                .any(|entry| entry.kind == LogKind::FloorStart)
        );
    }

    #[test]
    fn archer_draws_an_extra_card() {
        let harness = Harness::started(CharacterClass::Archer);
        assert_eq!(harness.state.piles.hand.len(), 6);
        assert_eq!(harness.state.player.as_ref().unwrap().block, 0);
    }

    #[test]
    fn mage_energy_bonus_only_on_first_turn() {
        let mut harness = Harness::started(CharacterClass::Mage);
        assert_eq!(harness.state.player.as_ref().unwrap().energy, 4);

        harness.state.enemies.clear();
        harness.run(Command::EndTurn).unwrap();
        assert_eq!(harness.state.player.as_ref().unwrap().energy, 3);
    }

    #[test]
    fn missing_first_floor_is_fatal_and_atomic() {
        let mut catalog = TestCatalog::new();
        catalog.floors.clear();
        let mut harness = Harness::with_catalog(catalog);
        harness
            .run(Command::SelectCharacter(CharacterClass::Warrior))
            .unwrap();
        let before = harness.state.clone();

        let error = harness.run(Command::StartCombat).unwrap_err();
        assert!(matches!(error, CommandError::Oracle(_)));
        assert_eq!(harness.state, before);
    }

    #[test]
    fn reset_discards_the_run() {
        let mut harness = Harness::started(CharacterClass::Warrior);
        harness.run(Command::EndTurn).unwrap();

        harness.run(Command::ResetGame).unwrap();

        assert_eq!(harness.state, GameState::new());
        assert_eq!(harness.state.phase, GamePhase::CharacterSelect);
    }
}
