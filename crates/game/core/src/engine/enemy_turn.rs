//! End of the player turn and enemy action-card execution.
//!
//! Enemies act in list order. Each resets its block, then runs every action
//! of its current card in sequence. The state is fully committed when
//! [`CombatEngine::end_turn`] returns; the [`EnemyTurnReport`] only describes
//! what happened so a presentation layer can replay it step by step.

use std::collections::HashSet;

use super::{CombatEngine, CommandError, CommandOutcome};
use crate::enemy::{EnemyActionKind, EnemyId};
use crate::hex::{HexPosition, find_path_to_closest_target, hex_ring, hexes_in_range};
use crate::state::{GamePhase, GameState, LogDetails, LogKind};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyStepKind {
    /// Block left over from the previous round was cleared.
    BlockReset { cleared: u32 },
    /// One hex of movement.
    Moved { from: HexPosition, to: HexPosition },
    Attacked {
        damage: u32,
        blocked: u32,
        hp_loss: u32,
        player_hp: u32,
    },
    OutOfRange { damage: u32, distance: u32 },
    Defended { block: u32 },
    /// Buff and debuff actions have no mechanical effect.
    Other { kind: EnemyActionKind, value: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyStep {
    pub enemy: EnemyId,
    pub kind: EnemyStepKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTurnReport {
    pub steps: Vec<EnemyStep>,
    /// Set when an attack brought the player to zero HP.
    pub player_defeated: bool,
}

impl CombatEngine<'_> {
    /// Discards the hand, runs every enemy's action card, then opens the next
    /// player turn unless the player was defeated.
    pub fn end_turn(&mut self) -> Result<CommandOutcome, CommandError> {
        self.require_phase("end_turn", &[GamePhase::PlayerTurn])?;
        self.player()?;

        let turn = self.state.turn;
        self.state
            .push_log(LogKind::TurnEnd, format!("Turn {turn} ends"), None);
        self.state.piles.discard_hand();

        let mut report = EnemyTurnReport::default();
        let order: Vec<EnemyId> = self.state.enemies.iter().map(|enemy| enemy.id).collect();
        for enemy_id in order {
            if self.run_enemy(enemy_id, &mut report.steps) {
                report.player_defeated = true;
                break;
            }
        }

        if report.player_defeated {
            self.state.phase = GamePhase::Defeat;
            self.state.selection.clear();
            tracing::info!(turn, floor = self.state.floor, "player defeated");
            return Ok(CommandOutcome::EnemyTurn(report));
        }

        for enemy in &mut self.state.enemies {
            enemy.cycle_action_card(self.rng);
        }
        self.state.turn += 1;
        self.state.selection.clear();
        self.start_player_turn(false);
        self.state.phase = GamePhase::PlayerTurn;

        tracing::info!(turn = self.state.turn, steps = report.steps.len(), "enemy turn resolved");
        Ok(CommandOutcome::EnemyTurn(report))
    }

    /// Executes one enemy's current card. Returns true if the player died.
    fn run_enemy(&mut self, enemy_id: EnemyId, steps: &mut Vec<EnemyStep>) -> bool {
        let Some(enemy) = self.state.enemy_mut(enemy_id) else {
            return false;
        };
        let cleared = std::mem::take(&mut enemy.block);
        let actions = enemy
            .current_action_card
            .as_ref()
            .map(|card| card.actions.clone())
            .unwrap_or_default();
        if cleared > 0 {
            steps.push(EnemyStep {
                enemy: enemy_id,
                kind: EnemyStepKind::BlockReset { cleared },
            });
        }

        for action in actions {
            match action.kind {
                EnemyActionKind::Attack => {
                    if self.enemy_attack(enemy_id, action.value, steps) {
                        return true;
                    }
                }
                EnemyActionKind::Defend => self.enemy_defend(enemy_id, action.value, steps),
                EnemyActionKind::Move => self.enemy_move(enemy_id, action.value, steps),
                EnemyActionKind::Buff | EnemyActionKind::Debuff => {
                    let name = self.enemy_name(enemy_id);
                    self.state.push_log(
                        LogKind::EnemyAction,
                        format!("{name} uses {} ({})", action.kind, action.value),
                        None,
                    );
                    steps.push(EnemyStep {
                        enemy: enemy_id,
                        kind: EnemyStepKind::Other {
                            kind: action.kind,
                            value: action.value,
                        },
                    });
                }
            }
        }
        false
    }

    fn enemy_attack(&mut self, enemy_id: EnemyId, damage: u32, steps: &mut Vec<EnemyStep>) -> bool {
        let (Some(enemy), Some(player)) = (self.state.enemy(enemy_id), self.state.player.as_ref())
        else {
            return false;
        };
        let distance = enemy.position.distance(player.position);
        let name = enemy.name.clone();

        if distance > enemy.attack_range {
            self.state.push_log(
                LogKind::EnemyAttack,
                format!("{name}'s attack is out of range ({distance} hexes away)"),
                None,
            );
            steps.push(EnemyStep {
                enemy: enemy_id,
                kind: EnemyStepKind::OutOfRange { damage, distance },
            });
            return false;
        }

        let Some(player) = self.state.player.as_mut() else {
            return false;
        };
        let outcome = player.take_damage(damage);
        let player_hp = player.hp;
        let defeated = player.is_defeated();

        self.state.push_log(
            LogKind::EnemyAttack,
            format!(
                "{name} attacks for {damage} ({} blocked, {} damage)",
                outcome.blocked, outcome.hp_loss
            ),
            Some(LogDetails::attack(
                name,
                "Player",
                damage,
                outcome.blocked,
                outcome.hp_loss,
            )),
        );
        steps.push(EnemyStep {
            enemy: enemy_id,
            kind: EnemyStepKind::Attacked {
                damage,
                blocked: outcome.blocked,
                hp_loss: outcome.hp_loss,
                player_hp,
            },
        });
        defeated
    }

    fn enemy_defend(&mut self, enemy_id: EnemyId, block: u32, steps: &mut Vec<EnemyStep>) {
        let Some(enemy) = self.state.enemy_mut(enemy_id) else {
            return;
        };
        enemy.block += block;
        let name = enemy.name.clone();
        self.state.push_log(
            LogKind::EnemyBlock,
            format!("{name} gains {block} block"),
            Some(LogDetails::block(block)),
        );
        steps.push(EnemyStep {
            enemy: enemy_id,
            kind: EnemyStepKind::Defended { block },
        });
    }

    fn enemy_move(&mut self, enemy_id: EnemyId, max_steps: u32, steps: &mut Vec<EnemyStep>) {
        let path = plan_enemy_path(self.state, enemy_id, max_steps);
        let Some(enemy) = self.state.enemy_mut(enemy_id) else {
            return;
        };
        if path.is_empty() {
            return;
        }

        let mut from = enemy.position;
        for &to in &path {
            enemy.position = to;
            steps.push(EnemyStep {
                enemy: enemy_id,
                kind: EnemyStepKind::Moved { from, to },
            });
            from = to;
        }

        let name = enemy.name.clone();
        self.state.push_log(
            LogKind::EnemyMove,
            format!("{name} moves {} hexes to {from}", path.len()),
            Some(LogDetails::position(from)),
        );
    }

    fn enemy_name(&self, enemy_id: EnemyId) -> String {
        self.state
            .enemy(enemy_id)
            .map(|enemy| enemy.name.clone())
            .unwrap_or_default()
    }
}

/// Hexes an enemy walks through for a move action, excluding its start.
///
/// The enemy heads for the nearest reachable hex at exactly its attack range
/// from the player, falling back to any hex within range, and finally to a
/// greedy walk that only takes strictly closer neighbors. The result never
/// exceeds `max_steps` and never enters occupied or unwalkable hexes.
pub fn plan_enemy_path(state: &GameState, enemy_id: EnemyId, max_steps: u32) -> Vec<HexPosition> {
    let (Some(enemy), Some(player)) = (state.enemy(enemy_id), state.player.as_ref()) else {
        return Vec::new();
    };
    if max_steps == 0 {
        return Vec::new();
    }

    let target = player.position;
    let start = enemy.position;
    let blocked = state.occupied_except(enemy_id);
    let walkable = |hex: &HexPosition| state.map.is_walkable(*hex) && !blocked.contains(hex);

    let preferred: HashSet<HexPosition> = hex_ring(target, enemy.attack_range)
        .into_iter()
        .filter(walkable)
        .collect();
    let in_range: HashSet<HexPosition> = hexes_in_range(target, enemy.attack_range)
        .into_iter()
        .filter(walkable)
        .collect();

    let path = find_path_to_closest_target(start, &preferred, &state.map, &blocked)
        .or_else(|| find_path_to_closest_target(start, &in_range, &state.map, &blocked));

    match path {
        Some(path) => path
            .into_iter()
            .skip(1)
            .take(max_steps as usize)
            .collect(),
        None => greedy_approach(state, start, target, &blocked, max_steps),
    }
}

fn greedy_approach(
    state: &GameState,
    start: HexPosition,
    target: HexPosition,
    blocked: &HashSet<HexPosition>,
    max_steps: u32,
) -> Vec<HexPosition> {
    let mut path = Vec::new();
    let mut current = start;

    for _ in 0..max_steps {
        let best = current
            .neighbors()
            .into_iter()
            .filter(|hex| state.map.is_walkable(*hex) && !blocked.contains(hex))
            .filter(|hex| hex.distance(target) < current.distance(target))
            .min_by_key(|hex| hex.distance(target));
        match best {
            Some(next) => {
                path.push(next);
                current = next;
            }
            None => break,
        }
    }
    path
}
