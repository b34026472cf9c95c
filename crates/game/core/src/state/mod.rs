//! Authoritative combat state.
//!
//! [`GameState`] is the aggregate root: player, card piles, enemies, map, log
//! and the transient selection. Runtime layers clone or query it but mutate
//! it exclusively through [`CombatEngine`](crate::engine::CombatEngine).
mod log;
mod phase;
mod player;

use std::collections::HashSet;

pub use log::{GameLog, GameLogEntry, LogDetails, LogKind};
pub use phase::{GamePhase, Selection};
pub use player::Player;

use crate::card::Card;
use crate::deck::CardPiles;
use crate::enemy::{Enemy, EnemyId};
use crate::hex::{HexMap, HexPosition};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// `None` until a character class is chosen.
    pub player: Option<Player>,
    pub piles: CardPiles,
    /// Active enemies in initiative order. Defeated enemies are removed at once.
    pub enemies: Vec<Enemy>,
    pub map: HexMap,
    pub log: GameLog,
    pub phase: GamePhase,
    pub turn: u32,
    pub floor: u32,
    pub selection: Selection,
    /// Current reward offer, non-empty only while selecting a reward.
    pub reward_cards: Vec<Card>,

    /// Sequential enemy id allocator; ids are never reused within a session.
    next_enemy_id: u32,
    /// Suffix counter for reward card ids.
    next_card_serial: u32,
}

/// Counters shown alongside the state snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    pub turn: u32,
    pub floor: u32,
    pub deck_size: usize,
    pub hand_size: usize,
    pub draw_pile_size: usize,
    pub discard_pile_size: usize,
    pub enemies_remaining: usize,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player: None,
            piles: CardPiles::default(),
            enemies: Vec::new(),
            map: HexMap::default(),
            log: GameLog::default(),
            phase: GamePhase::CharacterSelect,
            turn: 1,
            floor: 1,
            selection: Selection::default(),
            reward_cards: Vec::new(),
            next_enemy_id: 0,
            next_card_serial: 0,
        }
    }

    pub fn allocate_enemy_id(&mut self) -> EnemyId {
        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id = self.next_enemy_id.wrapping_add(1);
        id
    }

    pub fn allocate_card_serial(&mut self) -> u32 {
        let serial = self.next_card_serial;
        self.next_card_serial = self.next_card_serial.wrapping_add(1);
        serial
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    pub fn enemy_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|enemy| enemy.id == id)
    }

    /// 1-based position of an enemy in the acting order.
    pub fn initiative_of(&self, id: EnemyId) -> Option<usize> {
        self.enemies
            .iter()
            .position(|enemy| enemy.id == id)
            .map(|index| index + 1)
    }

    /// Hexes held by the player and every enemy.
    pub fn occupied_positions(&self) -> HashSet<HexPosition> {
        self.player
            .iter()
            .map(|player| player.position)
            .chain(self.enemies.iter().map(|enemy| enemy.position))
            .collect()
    }

    /// Occupied hexes ignoring the given enemy (so it does not block itself).
    pub fn occupied_except(&self, id: EnemyId) -> HashSet<HexPosition> {
        self.player
            .iter()
            .map(|player| player.position)
            .chain(
                self.enemies
                    .iter()
                    .filter(|enemy| enemy.id != id)
                    .map(|enemy| enemy.position),
            )
            .collect()
    }

    /// Enemies whose distance to the player lies in `min..=max`, in list order.
    pub fn enemies_in_range(&self, min: u32, max: u32) -> Vec<EnemyId> {
        let Some(player) = &self.player else {
            return Vec::new();
        };
        self.enemies
            .iter()
            .filter(|enemy| {
                let distance = player.position.distance(enemy.position);
                distance >= min && distance <= max
            })
            .map(|enemy| enemy.id)
            .collect()
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn stats(&self) -> RunStats {
        RunStats {
            turn: self.turn,
            floor: self.floor,
            deck_size: self.piles.deck.len(),
            hand_size: self.piles.hand.len(),
            draw_pile_size: self.piles.draw_pile.len(),
            discard_pile_size: self.piles.discard_pile.len(),
            enemies_remaining: self.enemies.len(),
        }
    }

    /// Appends a log entry stamped with the current turn and floor.
    pub fn push_log(
        &mut self,
        kind: LogKind,
        message: impl Into<String>,
        details: Option<LogDetails>,
    ) -> u64 {
        self.log.push(self.turn, self.floor, kind, message, details)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
