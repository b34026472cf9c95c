//! Greedy autopilot that plays a whole run without input.
//!
//! Decisions are made from the snapshot alone, one command at a time:
//! attack whatever is in reach, otherwise close the distance, otherwise
//! block, otherwise end the turn.

use async_trait::async_trait;
use game_core::{CharacterClass, Command, Enemy, GamePhase, GameState, HexPosition};

use crate::api::{CommandProvider, Result, RuntimeError};

/// Deterministic greedy player for demos and soak tests.
#[derive(Clone, Copy, Debug)]
pub struct AutopilotProvider {
    class: CharacterClass,
}

impl AutopilotProvider {
    pub fn new(class: CharacterClass) -> Self {
        Self { class }
    }

    pub fn class(&self) -> CharacterClass {
        self.class
    }

    /// The command the autopilot would submit for `state`.
    pub fn decide(&self, state: &GameState) -> Result<Command> {
        let command = match state.phase {
            GamePhase::CharacterSelect => match &state.player {
                Some(player) if player.class == self.class => Command::StartCombat,
                _ => Command::SelectCharacter(self.class),
            },
            GamePhase::PlayerTurn => self.plan_turn(state),
            GamePhase::SelectingTarget => weakest_target(state)?,
            GamePhase::ConfirmingSkill => Command::ConfirmSkill,
            GamePhase::SelectingMovement => steer(state),
            GamePhase::FloorComplete => Command::AdvanceFloor,
            GamePhase::SelectingReward => match state.reward_cards.first() {
                Some(card) => Command::SelectRewardCard(card.id.clone()),
                None => Command::SkipReward,
            },
            GamePhase::Victory | GamePhase::Defeat => Command::ResetGame,
        };
        Ok(command)
    }

    fn plan_turn(&self, state: &GameState) -> Command {
        let Some(player) = &state.player else {
            return Command::SelectCharacter(self.class);
        };
        let playable = || {
            state
                .piles
                .hand
                .iter()
                .filter(move |card| card.cost <= player.energy)
        };

        let attack = playable()
            .filter(|card| {
                card.effect
                    .target_range()
                    .is_some_and(|(min, max)| !state.enemies_in_range(min, max).is_empty())
            })
            .max_by_key(|card| (card.effect.damage().unwrap_or(0), std::cmp::Reverse(card.cost)));
        if let Some(card) = attack {
            return Command::SelectCard(card.id.clone());
        }

        if best_step(state, &[player.position]).is_some() {
            let walk = playable().find(|card| card.effect.movement().is_some_and(|d| d > 0));
            if let Some(card) = walk {
                return Command::SelectCard(card.id.clone());
            }
        }

        let guard = playable()
            .filter(|card| card.effect.target_range().is_none() && card.effect.block().is_some())
            .max_by_key(|card| card.effect.block().unwrap_or(0));
        if let Some(card) = guard {
            return Command::SelectCard(card.id.clone());
        }

        Command::EndTurn
    }
}

fn weakest_target(state: &GameState) -> Result<Command> {
    state
        .selection
        .targetable_enemy_ids
        .iter()
        .filter_map(|id| state.enemy(*id))
        .min_by_key(|enemy| (enemy.hp + enemy.block, enemy.id))
        .map(|enemy| Command::SelectTarget(enemy.id))
        .ok_or_else(|| RuntimeError::Provider("no targetable enemy".into()))
}

fn steer(state: &GameState) -> Command {
    let selection = &state.selection;
    let step = if selection.remaining_movement > 0 {
        best_step(state, &selection.movement_path)
    } else {
        None
    };
    if let Some(step) = step {
        return Command::AddMovementStep(step);
    }
    if selection.movement_path.len() > 1 {
        Command::CompleteMovement
    } else {
        Command::CancelSelection
    }
}

/// Free neighbor of the path's end that is strictly closer to an enemy.
fn best_step(state: &GameState, path: &[HexPosition]) -> Option<HexPosition> {
    let &from = path.last()?;
    let current = nearest_enemy_distance(&state.enemies, from)?;
    let occupied = state.occupied_positions();
    from.neighbors()
        .into_iter()
        .filter(|hex| state.map.is_walkable(*hex) && !occupied.contains(hex) && !path.contains(hex))
        .filter_map(|hex| Some((nearest_enemy_distance(&state.enemies, hex)?, hex)))
        .filter(|(distance, _)| *distance < current)
        .min_by_key(|(distance, hex)| (*distance, hex.q, hex.r))
        .map(|(_, hex)| hex)
}

fn nearest_enemy_distance(enemies: &[Enemy], from: HexPosition) -> Option<u32> {
    enemies.iter().map(|enemy| from.distance(enemy.position)).min()
}

#[async_trait]
impl CommandProvider for AutopilotProvider {
    async fn next_command(&self, state: &GameState) -> Result<Command> {
        let command = self.decide(state)?;
        tracing::trace!(phase = %state.phase, command = command.name(), "autopilot decided");
        Ok(command)
    }
}
