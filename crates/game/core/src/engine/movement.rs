//! Step-by-step movement with a movement card.

use super::{CombatEngine, CommandError, CommandOutcome};
use crate::hex::HexPosition;
use crate::state::{GamePhase, LogDetails, LogKind};

impl CombatEngine<'_> {
    /// Appends one adjacent, free, walkable hex to the movement path.
    pub fn add_hex_to_movement_path(
        &mut self,
        position: HexPosition,
    ) -> Result<CommandOutcome, CommandError> {
        self.require_phase("add_movement_step", &[GamePhase::SelectingMovement])?;
        if self.state.selection.remaining_movement == 0 {
            return Err(CommandError::NoMovementLeft);
        }
        if !self.state.selection.valid_move_positions.contains(&position) {
            return Err(CommandError::InvalidMovementStep(position));
        }

        let selection = &mut self.state.selection;
        selection.movement_path.push(position);
        selection.remaining_movement -= 1;
        self.refresh_movement_options();
        Ok(CommandOutcome::Applied)
    }

    /// Removes the last path hex and restores one movement point.
    pub fn undo_movement_step(&mut self) -> Result<CommandOutcome, CommandError> {
        self.require_phase("undo_movement_step", &[GamePhase::SelectingMovement])?;
        if self.state.selection.movement_path.len() <= 1 {
            return Err(CommandError::NothingToUndo);
        }

        let selection = &mut self.state.selection;
        selection.movement_path.pop();
        selection.remaining_movement += 1;
        self.refresh_movement_options();
        Ok(CommandOutcome::Applied)
    }

    /// Commits the path: moves the player, pays for and discards the card.
    pub fn complete_movement(&mut self) -> Result<CommandOutcome, CommandError> {
        self.require_phase("complete_movement", &[GamePhase::SelectingMovement])?;
        let card = self
            .state
            .selection
            .selected_card
            .clone()
            .ok_or(CommandError::NoSelection)?;
        let path = self.state.selection.movement_path.clone();
        let Some(&destination) = path.last().filter(|_| path.len() > 1) else {
            return Err(CommandError::EmptyMovementPath);
        };
        if self.state.piles.hand_card(&card.id).is_none() {
            return Err(CommandError::CardNotInHand(card.id));
        }
        let available = self.player()?.energy;
        if card.cost > available {
            return Err(CommandError::InsufficientEnergy {
                required: card.cost,
                available,
            });
        }

        if let Some(player) = self.state.player.as_mut() {
            player.position = destination;
            player.energy -= card.cost;
        }
        self.state.piles.discard_from_hand(&card.id);
        self.state.selection.clear();
        self.state.phase = GamePhase::PlayerTurn;

        let steps = path.len() - 1;
        self.state.push_log(
            LogKind::PlayerMove,
            format!("Player moved {steps} hexes to {destination}"),
            Some(LogDetails::position(destination)),
        );
        tracing::debug!(steps, %destination, "movement completed");
        Ok(CommandOutcome::Moved { path })
    }

    fn refresh_movement_options(&mut self) {
        let options = if self.state.selection.remaining_movement > 0 {
            self.next_movement_steps(&self.state.selection.movement_path)
        } else {
            Vec::new()
        };
        self.state.selection.valid_move_positions = options;
    }

    /// Neighbors of the path's last hex that are walkable, unoccupied and not
    /// already on the path.
    pub(super) fn next_movement_steps(&self, path: &[HexPosition]) -> Vec<HexPosition> {
        let Some(&last) = path.last() else {
            return Vec::new();
        };
        let occupied = self.state.occupied_positions();
        last.neighbors()
            .into_iter()
            .filter(|hex| {
                self.state.map.is_walkable(*hex) && !occupied.contains(hex) && !path.contains(hex)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::class::CharacterClass;
    use crate::command::Command;
    use crate::engine::fixtures::Harness;
    use crate::engine::{CommandError, CommandOutcome};
    use crate::enemy::EnemyKind;
    use crate::hex::HexPosition;
    use crate::state::GamePhase;

    fn walking() -> Harness {
        let mut harness = Harness::started(CharacterClass::Warrior);
        harness.place_enemy(EnemyKind::Goblin, HexPosition::new(3, 0));
        let walk = harness.hold("walk_1");
        harness.run(Command::SelectCard(walk)).unwrap();
        harness
    }

    #[test]
    fn selecting_movement_lists_first_steps() {
        let harness = walking();
        let selection = &harness.state.selection;
        assert_eq!(harness.state.phase, GamePhase::SelectingMovement);
        assert_eq!(selection.movement_path, vec![HexPosition::new(-2, 0)]);
        assert_eq!(selection.remaining_movement, 2);
        assert_eq!(selection.valid_move_positions.len(), 6);
    }

    #[test]
    fn occupied_hexes_are_not_offered() {
        let mut harness = Harness::started(CharacterClass::Warrior);
        harness.place_enemy(EnemyKind::Slime, HexPosition::new(-1, 0));
        let walk = harness.hold("walk_1");
        harness.run(Command::SelectCard(walk)).unwrap();

        let options = &harness.state.selection.valid_move_positions;
        assert_eq!(options.len(), 5);
        assert!(!options.contains(&HexPosition::new(-1, 0)));

        let error = harness
            .run(Command::AddMovementStep(HexPosition::new(-1, 0)))
            .unwrap_err();
        assert_eq!(error, CommandError::InvalidMovementStep(HexPosition::new(-1, 0)));
    }

    #[test]
    fn steps_consume_movement_points() {
        let mut harness = walking();
        harness
            .run(Command::AddMovementStep(HexPosition::new(-1, 0)))
            .unwrap();
        assert_eq!(harness.state.selection.remaining_movement, 1);

        let error = harness
            .run(Command::AddMovementStep(HexPosition::new(-2, 0)))
            .unwrap_err();
        assert!(matches!(error, CommandError::InvalidMovementStep(_)));

        let error = harness
            .run(Command::AddMovementStep(HexPosition::new(2, 0)))
            .unwrap_err();
        assert!(matches!(error, CommandError::InvalidMovementStep(_)));

        harness
            .run(Command::AddMovementStep(HexPosition::new(0, 0)))
            .unwrap();
        assert_eq!(harness.state.selection.remaining_movement, 0);
        assert!(harness.state.selection.valid_move_positions.is_empty());

        let error = harness
            .run(Command::AddMovementStep(HexPosition::new(1, 0)))
            .unwrap_err();
        assert_eq!(error, CommandError::NoMovementLeft);
    }

    #[test]
    fn undo_restores_a_point() {
        let mut harness = walking();
        assert_eq!(
            harness.run(Command::UndoMovementStep).unwrap_err(),
            CommandError::NothingToUndo
        );

        harness
            .run(Command::AddMovementStep(HexPosition::new(-2, 1)))
            .unwrap();
        harness.run(Command::UndoMovementStep).unwrap();

        let selection = &harness.state.selection;
        assert_eq!(selection.movement_path, vec![HexPosition::new(-2, 0)]);
        assert_eq!(selection.remaining_movement, 2);
        assert_eq!(selection.valid_move_positions.len(), 6);
    }

    #[test]
    fn completing_commits_position_and_pays() {
        let mut harness = walking();
        harness
            .run(Command::AddMovementStep(HexPosition::new(-1, 0)))
            .unwrap();
        harness
            .run(Command::AddMovementStep(HexPosition::new(0, 0)))
            .unwrap();

        let outcome = harness.run(Command::CompleteMovement).unwrap();
        let CommandOutcome::Moved { path } = outcome else {
            panic!("expected movement");
        };
        assert_eq!(path.len(), 3);
        assert_eq!(harness.player_position(), HexPosition::ORIGIN);
        assert_eq!(harness.state.player.as_ref().unwrap().energy, 2);
        assert_eq!(harness.state.phase, GamePhase::PlayerTurn);
        assert!(
            harness
                .state
                .piles
                .discard_pile
                .iter()
                .any(|card| card.id.as_str() == "walk_1")
        );
        assert!(harness.state.piles.is_conserved());
    }

    #[test]
    fn completing_without_steps_is_rejected() {
        let mut harness = walking();
        assert_eq!(
            harness.run(Command::CompleteMovement).unwrap_err(),
            CommandError::EmptyMovementPath
        );
        assert_eq!(harness.state.phase, GamePhase::SelectingMovement);
    }
}
