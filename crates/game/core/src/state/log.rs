//! In-game combat log.
//!
//! Entries are append-only and never mutated after creation.
use chrono::{DateTime, Utc};

use crate::hex::HexPosition;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum LogKind {
    PlayerAttack,
    PlayerBlock,
    PlayerMove,
    PlayerDraw,
    EnemyAttack,
    EnemyBlock,
    EnemyMove,
    EnemyAction,
    EnemyDefeated,
    TurnStart,
    TurnEnd,
    FloorStart,
    InnateAbility,
    Reward,
}

/// Structured payload attached to a log entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogDetails {
    pub attacker: Option<String>,
    pub target: Option<String>,
    pub damage: Option<u32>,
    pub blocked: Option<u32>,
    pub final_damage: Option<u32>,
    pub healing: Option<u32>,
    pub block: Option<u32>,
    pub cards: Option<u32>,
    pub position: Option<HexPosition>,
}

impl LogDetails {
    pub fn attack(
        attacker: impl Into<String>,
        target: impl Into<String>,
        damage: u32,
        blocked: u32,
        final_damage: u32,
    ) -> Self {
        Self {
            attacker: Some(attacker.into()),
            target: Some(target.into()),
            damage: Some(damage),
            blocked: Some(blocked),
            final_damage: Some(final_damage),
            ..Self::default()
        }
    }

    pub fn block(amount: u32) -> Self {
        Self {
            block: Some(amount),
            ..Self::default()
        }
    }

    pub fn healing(amount: u32) -> Self {
        Self {
            healing: Some(amount),
            ..Self::default()
        }
    }

    pub fn cards(count: u32) -> Self {
        Self {
            cards: Some(count),
            ..Self::default()
        }
    }

    pub fn position(position: HexPosition) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameLogEntry {
    pub id: u64,
    pub turn: u32,
    pub floor: u32,
    pub kind: LogKind,
    pub message: String,
    pub details: Option<LogDetails>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameLog {
    entries: Vec<GameLogEntry>,
    next_id: u64,
}

impl GameLog {
    pub fn push(
        &mut self,
        turn: u32,
        floor: u32,
        kind: LogKind,
        message: impl Into<String>,
        details: Option<LogDetails>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(GameLogEntry {
            id,
            turn,
            floor,
            kind,
            message: message.into(),
            details,
            timestamp: Utc::now(),
        });
        id
    }

    pub fn entries(&self) -> &[GameLogEntry] {
        &self.entries
    }

    /// Entries with an id greater than or equal to `id`.
    pub fn since(&self, id: u64) -> &[GameLogEntry] {
        let start = self.entries.partition_point(|entry| entry.id < id);
        &self.entries[start..]
    }

    /// Id the next pushed entry will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&GameLogEntry> {
        self.entries.last()
    }
}
