//! Card selection, targeting and resolution.

use super::{CardPlay, CombatEngine, CommandError, CommandOutcome};
use crate::card::{Card, CardEffect, CardId};
use crate::combat::{DamageOutcome, absorb};
use crate::enemy::EnemyId;
use crate::state::{GamePhase, LogDetails, LogKind, Selection};

impl CombatEngine<'_> {
    /// Selects a card from hand and enters the matching selection phase.
    ///
    /// Attack and power cards list every enemy in range and always wait for
    /// an explicit target, even when there is only one candidate.
    pub fn select_card(&mut self, card_id: &CardId) -> Result<CommandOutcome, CommandError> {
        self.require_phase("select_card", &[GamePhase::PlayerTurn])?;
        let card = self.affordable_card(card_id)?;

        let mut selection = Selection::default();
        let phase = match card.effect {
            CardEffect::Movement { distance } => {
                let origin = self.player()?.position;
                selection.movement_path = vec![origin];
                selection.remaining_movement = distance;
                selection.valid_move_positions = if distance > 0 {
                    self.next_movement_steps(&selection.movement_path)
                } else {
                    Vec::new()
                };
                GamePhase::SelectingMovement
            }
            CardEffect::Attack { .. } | CardEffect::Power { .. } => {
                let targets = self.targets_for(&card);
                if targets.is_empty() {
                    return Err(CommandError::NoTargetsInRange(card.id));
                }
                selection.targetable_enemy_ids = targets;
                GamePhase::SelectingTarget
            }
            CardEffect::Skill { .. } => GamePhase::ConfirmingSkill,
        };

        tracing::debug!(card = %card.id, %phase, "card selected");
        selection.selected_card = Some(card);
        self.state.selection = selection;
        self.state.phase = phase;
        Ok(CommandOutcome::Applied)
    }

    pub fn cancel_selection(&mut self) -> Result<CommandOutcome, CommandError> {
        if !self.state.phase.is_selecting() {
            return Err(CommandError::wrong_phase(
                "cancel_selection",
                self.state.phase,
            ));
        }
        self.state.selection.clear();
        self.state.phase = GamePhase::PlayerTurn;
        Ok(CommandOutcome::Applied)
    }

    /// Resolves the selected attack or power card against one listed enemy.
    pub fn select_target(&mut self, enemy: EnemyId) -> Result<CommandOutcome, CommandError> {
        self.require_phase("select_target", &[GamePhase::SelectingTarget])?;
        let card = self
            .state
            .selection
            .selected_card
            .as_ref()
            .map(|card| card.id.clone())
            .ok_or(CommandError::NoSelection)?;
        if !self.state.selection.targetable_enemy_ids.contains(&enemy) {
            return Err(CommandError::InvalidTarget(enemy));
        }
        self.play_card(&card, Some(enemy))
    }

    /// Resolves the selected skill card.
    pub fn confirm_skill(&mut self) -> Result<CommandOutcome, CommandError> {
        self.require_phase("confirm_skill", &[GamePhase::ConfirmingSkill])?;
        let card = self
            .state
            .selection
            .selected_card
            .as_ref()
            .map(|card| card.id.clone())
            .ok_or(CommandError::NoSelection)?;
        self.play_card(&card, None)
    }

    /// Plays a non-movement card: damages the chosen (or first in-range)
    /// target, grants block, discards the card and spends its energy.
    pub fn play_card(
        &mut self,
        card_id: &CardId,
        target: Option<EnemyId>,
    ) -> Result<CommandOutcome, CommandError> {
        self.require_phase(
            "play_card",
            &[
                GamePhase::PlayerTurn,
                GamePhase::SelectingTarget,
                GamePhase::ConfirmingSkill,
            ],
        )?;
        if self.state.phase.is_selecting() {
            let selected = self
                .state
                .selection
                .selected_card
                .as_ref()
                .map(|card| card.id.clone())
                .ok_or(CommandError::NoSelection)?;
            if &selected != card_id {
                return Err(CommandError::SelectionMismatch {
                    selected,
                    requested: card_id.clone(),
                });
            }
        }
        let card = self.affordable_card(card_id)?;
        if let CardEffect::Movement { .. } = card.effect {
            let kind = card.kind();
            return Err(CommandError::WrongCardKind {
                card: card.id,
                kind,
            });
        }

        let target = match card.effect.damage() {
            Some(_) => Some(self.resolve_target(&card, target)?),
            None => None,
        };

        let mut play = CardPlay {
            card: card.id.clone(),
            target,
            damage: None,
            target_defeated: false,
            block_gained: 0,
        };

        if let (Some(enemy_id), Some(damage)) = (target, card.effect.damage()) {
            let (outcome, defeated) = self.damage_enemy(enemy_id, damage);
            play.damage = outcome;
            play.target_defeated = defeated;
        }

        if let Some(block) = card.effect.block() {
            if let Some(player) = self.state.player.as_mut() {
                player.block += block;
            }
            play.block_gained = block;
            self.state.push_log(
                LogKind::PlayerBlock,
                format!("{} grants {block} block", card.name),
                Some(LogDetails::block(block)),
            );
        }

        self.state.piles.discard_from_hand(&card.id);
        if let Some(player) = self.state.player.as_mut() {
            player.energy -= card.cost;
        }
        self.state.selection.clear();
        self.state.phase = GamePhase::PlayerTurn;
        self.resolve_end_state();

        tracing::debug!(card = %card.id, target = ?target, "card played");
        Ok(CommandOutcome::CardPlayed(play))
    }

    /// Hand card that the player can currently pay for.
    fn affordable_card(&self, card_id: &CardId) -> Result<Card, CommandError> {
        let card = self
            .state
            .piles
            .hand_card(card_id)
            .cloned()
            .ok_or_else(|| CommandError::CardNotInHand(card_id.clone()))?;
        let available = self.player()?.energy;
        if card.cost > available {
            return Err(CommandError::InsufficientEnergy {
                required: card.cost,
                available,
            });
        }
        Ok(card)
    }

    fn targets_for(&self, card: &Card) -> Vec<EnemyId> {
        match card.effect.target_range() {
            Some((min, max)) => self.state.enemies_in_range(min, max),
            None => Vec::new(),
        }
    }

    fn resolve_target(
        &self,
        card: &Card,
        requested: Option<EnemyId>,
    ) -> Result<EnemyId, CommandError> {
        let in_range = self.targets_for(card);
        match requested {
            Some(enemy) if in_range.contains(&enemy) => Ok(enemy),
            Some(enemy) => Err(CommandError::InvalidTarget(enemy)),
            None => in_range
                .first()
                .copied()
                .ok_or_else(|| CommandError::NoTargetsInRange(card.id.clone())),
        }
    }

    /// Applies player damage to an enemy and removes it at zero HP.
    fn damage_enemy(
        &mut self,
        enemy_id: EnemyId,
        damage: u32,
    ) -> (Option<DamageOutcome>, bool) {
        let Some(index) = self
            .state
            .enemies
            .iter()
            .position(|enemy| enemy.id == enemy_id)
        else {
            return (None, false);
        };

        let enemy = &mut self.state.enemies[index];
        let outcome = absorb(enemy.block, enemy.hp, damage);
        enemy.block = outcome.remaining_block;
        enemy.hp = outcome.remaining_hp;
        let name = enemy.name.clone();

        self.state.push_log(
            LogKind::PlayerAttack,
            format!(
                "Player hits {name} for {damage} ({} blocked, {} damage)",
                outcome.blocked, outcome.hp_loss
            ),
            Some(LogDetails::attack(
                "Player",
                name.clone(),
                damage,
                outcome.blocked,
                outcome.hp_loss,
            )),
        );

        let defeated = outcome.is_lethal();
        if defeated {
            self.state.enemies.remove(index);
            self.state.push_log(
                LogKind::EnemyDefeated,
                format!("{name} was defeated"),
                Some(LogDetails {
                    target: Some(name),
                    ..LogDetails::default()
                }),
            );
            tracing::debug!(enemy = %enemy_id, "enemy defeated");
        }
        (Some(outcome), defeated)
    }
}

#[cfg(test)]
mod tests {
    use crate::card::{Card, CardId};
    use crate::class::CharacterClass;
    use crate::command::Command;
    use crate::engine::fixtures::Harness;
    use crate::engine::{CommandError, CommandOutcome};
    use crate::enemy::{EnemyId, EnemyKind};
    use crate::error::{ErrorSeverity, GameError};
    use crate::hex::HexPosition;
    use crate::state::GamePhase;

    fn adjacent_goblin() -> (Harness, EnemyId) {
        let mut harness = Harness::started(CharacterClass::Warrior);
        let goblin = harness.place_enemy(EnemyKind::Goblin, HexPosition::new(-1, 0));
        (harness, goblin)
    }

    #[test]
    fn strike_on_adjacent_goblin() {
        let (mut harness, goblin) = adjacent_goblin();
        let strike = harness.hold("strike_1");
        assert_eq!(harness.player_position(), HexPosition::new(-2, 0));

        harness.run(Command::SelectCard(strike.clone())).unwrap();
        assert_eq!(harness.state.phase, GamePhase::SelectingTarget);
        assert_eq!(harness.state.selection.targetable_enemy_ids, vec![goblin]);

        let outcome = harness.run(Command::SelectTarget(goblin)).unwrap();
        let CommandOutcome::CardPlayed(play) = outcome else {
            panic!("expected a card play");
        };
        assert_eq!(play.target, Some(goblin));
        assert!(!play.target_defeated);

        let state = &harness.state;
        assert_eq!(state.enemy(goblin).unwrap().hp, 14);
        assert_eq!(state.player.as_ref().unwrap().energy, 2);
        assert!(state.piles.hand_card(&strike).is_none());
        assert_eq!(state.piles.discard_pile.last().map(|c| &c.id), Some(&strike));
        assert_eq!(state.phase, GamePhase::PlayerTurn);
        assert!(state.piles.is_conserved());
    }

    #[test]
    fn attack_without_targets_is_rejected() {
        let mut harness = Harness::started(CharacterClass::Warrior);
        let strike = harness.hold("strike_1");
        let before = harness.state.clone();

        let error = harness.run(Command::SelectCard(strike.clone())).unwrap_err();
        assert_eq!(error, CommandError::NoTargetsInRange(strike));
        assert_eq!(harness.state, before);
    }

    #[test]
    fn unaffordable_card_is_rejected() {
        let (mut harness, _) = adjacent_goblin();
        let strike = harness.hold("strike_1");
        harness.state.player.as_mut().unwrap().energy = 0;

        let error = harness.run(Command::SelectCard(strike)).unwrap_err();
        assert!(matches!(
            error,
            CommandError::InsufficientEnergy {
                required: 1,
                available: 0
            }
        ));
        assert_eq!(harness.state.phase, GamePhase::PlayerTurn);
    }

    #[test]
    fn skill_requires_confirmation() {
        let mut harness = Harness::started(CharacterClass::Warrior);
        let defend = harness.hold("defend_1");
        let block_before = harness.state.player.as_ref().unwrap().block;

        harness.run(Command::SelectCard(defend)).unwrap();
        assert_eq!(harness.state.phase, GamePhase::ConfirmingSkill);
        harness.run(Command::ConfirmSkill).unwrap();

        let player = harness.state.player.as_ref().unwrap();
        assert_eq!(player.block, block_before + 5);
        assert_eq!(player.energy, 2);
        assert_eq!(harness.state.phase, GamePhase::PlayerTurn);
    }

    #[test]
    fn pending_selection_blocks_other_cards() {
        let (mut harness, goblin) = adjacent_goblin();
        let defend = harness.hold("defend_1");
        let strike = harness.hold("strike_1");
        harness.run(Command::SelectCard(defend.clone())).unwrap();
        let before = harness.state.clone();

        let error = harness
            .run(Command::PlayCard {
                card: strike.clone(),
                target: Some(goblin),
            })
            .unwrap_err();
        assert_eq!(
            error,
            CommandError::SelectionMismatch {
                selected: defend.clone(),
                requested: strike,
            }
        );
        assert_eq!(harness.state, before);

        harness
            .run(Command::PlayCard {
                card: defend,
                target: None,
            })
            .unwrap();
        assert_eq!(harness.state.phase, GamePhase::PlayerTurn);
    }

    #[test]
    fn selecting_phase_without_a_card_is_internal() {
        let mut harness = Harness::started(CharacterClass::Warrior);
        let defend = harness.hold("defend_1");
        harness.run(Command::SelectCard(defend)).unwrap();
        harness.state.selection.selected_card = None;

        let error = harness.run(Command::ConfirmSkill).unwrap_err();
        assert_eq!(error, CommandError::NoSelection);
        assert_eq!(error.severity(), ErrorSeverity::Internal);
    }

    #[test]
    fn power_card_damages_and_blocks() {
        let (mut harness, goblin) = adjacent_goblin();
        let surge = Card::power("power_surge_1_0", "Power Surge", 2, 15, 8);
        harness.state.piles.deck.push(surge.clone());
        harness.state.piles.hand.push(surge.clone());
        let block_before = harness.state.player.as_ref().unwrap().block;

        harness
            .run(Command::PlayCard {
                card: surge.id.clone(),
                target: Some(goblin),
            })
            .unwrap();

        assert_eq!(harness.state.enemy(goblin).unwrap().hp, 5);
        let player = harness.state.player.as_ref().unwrap();
        assert_eq!(player.block, block_before + 8);
        assert_eq!(player.energy, 1);
    }

    #[test]
    fn block_absorbs_player_damage() {
        let (mut harness, goblin) = adjacent_goblin();
        harness.state.enemy_mut(goblin).unwrap().block = 4;
        let strike = harness.hold("strike_1");

        harness
            .run(Command::PlayCard {
                card: strike,
                target: None,
            })
            .unwrap();

        let enemy = harness.state.enemy(goblin).unwrap();
        assert_eq!(enemy.block, 0);
        assert_eq!(enemy.hp, 18);
    }

    #[test]
    fn lethal_hit_removes_enemy_and_completes_floor() {
        let (mut harness, goblin) = adjacent_goblin();
        harness.state.enemy_mut(goblin).unwrap().hp = 6;
        let strike = harness.hold("strike_1");

        harness.run(Command::SelectCard(strike)).unwrap();
        let outcome = harness.run(Command::SelectTarget(goblin)).unwrap();

        assert!(matches!(outcome, CommandOutcome::CardPlayed(play) if play.target_defeated));
        assert!(harness.state.enemies.is_empty());
        assert_eq!(harness.state.phase, GamePhase::FloorComplete);
    }

    #[test]
    fn clearing_the_last_floor_is_victory() {
        let (mut harness, goblin) = adjacent_goblin();
        harness.state.floor = 4;
        harness.state.enemy_mut(goblin).unwrap().hp = 3;
        let strike = harness.hold("strike_1");

        harness
            .run(Command::PlayCard {
                card: strike,
                target: Some(goblin),
            })
            .unwrap();
        assert_eq!(harness.state.phase, GamePhase::Victory);
        assert!(harness.state.is_terminal());
    }

    #[test]
    fn only_killed_enemy_is_removed() {
        let (mut harness, goblin) = adjacent_goblin();
        let other = harness.add_enemy(EnemyKind::Slime, HexPosition::new(-2, 1));
        harness.state.enemy_mut(goblin).unwrap().hp = 6;
        let strike = harness.hold("strike_1");

        harness.run(Command::SelectCard(strike)).unwrap();
        assert_eq!(harness.state.selection.targetable_enemy_ids, vec![goblin, other]);
        harness.run(Command::SelectTarget(goblin)).unwrap();

        assert_eq!(harness.state.enemies.len(), 1);
        assert_eq!(harness.state.initiative_of(other), Some(1));
        assert_eq!(harness.state.phase, GamePhase::PlayerTurn);
    }

    #[test]
    fn unlisted_target_is_rejected() {
        let (mut harness, _) = adjacent_goblin();
        let strike = harness.hold("strike_1");
        harness.run(Command::SelectCard(strike)).unwrap();
        let before = harness.state.clone();

        let error = harness.run(Command::SelectTarget(EnemyId(99))).unwrap_err();
        assert_eq!(error, CommandError::InvalidTarget(EnemyId(99)));
        assert_eq!(harness.state, before);
    }

    #[test]
    fn out_of_range_direct_play_is_rejected() {
        let mut harness = Harness::started(CharacterClass::Warrior);
        let far = harness.place_enemy(EnemyKind::Goblin, HexPosition::new(2, 0));
        let strike = harness.hold("strike_1");
        let before = harness.state.clone();

        let error = harness
            .run(Command::PlayCard {
                card: strike,
                target: Some(far),
            })
            .unwrap_err();
        assert_eq!(error, CommandError::InvalidTarget(far));
        assert_eq!(harness.state, before);
    }

    #[test]
    fn movement_cards_cannot_be_played_directly() {
        let mut harness = Harness::started(CharacterClass::Warrior);
        let walk = harness.hold("walk_1");
        let error = harness
            .run(Command::PlayCard {
                card: walk,
                target: None,
            })
            .unwrap_err();
        assert!(matches!(error, CommandError::WrongCardKind { .. }));
    }

    #[test]
    fn cancel_returns_to_player_turn() {
        let (mut harness, _) = adjacent_goblin();
        let error = harness.run(Command::CancelSelection).unwrap_err();
        assert!(matches!(error, CommandError::WrongPhase { .. }));

        let strike = harness.hold("strike_1");
        harness.run(Command::SelectCard(strike)).unwrap();
        harness.run(Command::CancelSelection).unwrap();
        assert_eq!(harness.state.phase, GamePhase::PlayerTurn);
        assert!(harness.state.selection.selected_card.is_none());
        assert!(harness.state.selection.targetable_enemy_ids.is_empty());
    }

    #[test]
    fn card_outside_hand_is_rejected() {
        let mut harness = Harness::started(CharacterClass::Warrior);
        let ghost = CardId::new("missing_card");
        let error = harness.run(Command::SelectCard(ghost.clone())).unwrap_err();
        assert_eq!(error, CommandError::CardNotInHand(ghost));
    }
}
