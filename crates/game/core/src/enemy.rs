//! Enemy archetypes, action cards and live enemy instances.
//!
//! Archetypes form the closed [`EnemyKind`] enum; their stats come from the
//! catalog as [`EnemyDefinition`]s. An [`Enemy`] cycles through its own
//! shuffled deck of [`EnemyActionCard`]s and executes every action on the
//! current card during its turn.
use std::fmt;

use crate::env::GameRng;
use crate::hex::HexPosition;

/// Closed set of enemy archetypes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EnemyKind {
    Slime,
    Rat,
    Goblin,
    Skeleton,
    Orc,
    DarkMage,
    Ghost,
    Dragon,
}

/// Per-session enemy handle, allocated sequentially as enemies spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyId(pub u32);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enemy#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EnemyActionKind {
    Attack,
    Defend,
    Move,
    Buff,
    Debuff,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyAction {
    pub kind: EnemyActionKind,
    pub value: u32,
}

impl EnemyAction {
    pub const fn attack(value: u32) -> Self {
        Self {
            kind: EnemyActionKind::Attack,
            value,
        }
    }

    pub const fn defend(value: u32) -> Self {
        Self {
            kind: EnemyActionKind::Defend,
            value,
        }
    }

    pub const fn movement(value: u32) -> Self {
        Self {
            kind: EnemyActionKind::Move,
            value,
        }
    }

    pub const fn buff(value: u32) -> Self {
        Self {
            kind: EnemyActionKind::Buff,
            value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyActionCard {
    pub id: String,
    pub name: String,
    pub actions: Vec<EnemyAction>,
}

impl EnemyActionCard {
    pub fn new(id: impl Into<String>, name: impl Into<String>, actions: Vec<EnemyAction>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            actions,
        }
    }
}

/// Static stats of one archetype.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyDefinition {
    pub kind: EnemyKind,
    pub name: String,
    pub emoji: String,
    pub min_hp: u32,
    pub max_hp: u32,
    pub attack_range: u32,
    pub action_cards: Vec<EnemyActionCard>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub name: String,
    pub emoji: String,
    pub hp: u32,
    pub max_hp: u32,
    pub block: u32,
    pub attack_range: u32,
    pub current_action_card: Option<EnemyActionCard>,
    pub action_draw_pile: Vec<EnemyActionCard>,
    pub action_discard_pile: Vec<EnemyActionCard>,
    pub position: HexPosition,
}

impl Enemy {
    /// Instantiates an archetype with HP rolled uniformly in `[min_hp, max_hp]`
    /// and a freshly shuffled action deck whose first card is already drawn.
    pub fn spawn(
        definition: &EnemyDefinition,
        id: EnemyId,
        position: HexPosition,
        rng: &mut GameRng,
    ) -> Self {
        let hp = rng.range_inclusive(definition.min_hp, definition.max_hp);
        let mut draw_pile = definition.action_cards.clone();
        rng.shuffle(&mut draw_pile);
        let current = draw_pile.pop();

        Self {
            id,
            kind: definition.kind,
            name: definition.name.clone(),
            emoji: definition.emoji.clone(),
            hp,
            max_hp: hp,
            block: 0,
            attack_range: definition.attack_range,
            current_action_card: current,
            action_draw_pile: draw_pile,
            action_discard_pile: Vec::new(),
            position,
        }
    }

    /// The action card the enemy will execute on its next turn.
    pub fn intent(&self) -> Option<&EnemyActionCard> {
        self.current_action_card.as_ref()
    }

    /// Discards the current card and draws the next one, reshuffling the
    /// discard pile into a new draw pile when the draw pile is empty.
    pub fn cycle_action_card(&mut self, rng: &mut GameRng) {
        if let Some(card) = self.current_action_card.take() {
            self.action_discard_pile.push(card);
        }
        if self.action_draw_pile.is_empty() {
            self.action_draw_pile = std::mem::take(&mut self.action_discard_pile);
            rng.shuffle(&mut self.action_draw_pile);
        }
        self.current_action_card = self.action_draw_pile.pop();
    }

    /// Total number of action cards this enemy owns across all piles.
    pub fn action_card_count(&self) -> usize {
        self.action_draw_pile.len()
            + self.action_discard_pile.len()
            + usize::from(self.current_action_card.is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::*;

    fn slime() -> EnemyDefinition {
        EnemyDefinition {
            kind: EnemyKind::Slime,
            name: "Slime".into(),
            emoji: "🟢".into(),
            min_hp: 12,
            max_hp: 16,
            attack_range: 1,
            action_cards: vec![
                EnemyActionCard::new("slime_attack", "Sticky Slam", vec![EnemyAction::attack(5)]),
                EnemyActionCard::new(
                    "slime_move_attack",
                    "Oozing Advance",
                    vec![EnemyAction::movement(2), EnemyAction::attack(3)],
                ),
                EnemyActionCard::new("slime_defend", "Harden", vec![EnemyAction::defend(4)]),
            ],
        }
    }

    #[test]
    fn archetype_names_round_trip_through_strum() {
        assert_eq!(EnemyKind::from_str("dark_mage"), Ok(EnemyKind::DarkMage));
        assert_eq!(EnemyKind::Dragon.to_string(), "dragon");
        assert!(EnemyKind::from_str("lich").is_err());
    }

    #[test]
    fn spawn_rolls_hp_and_draws_first_card() {
        let definition = slime();
        let mut rng = GameRng::from_seed(5);
        for serial in 0..50 {
            let enemy = Enemy::spawn(&definition, EnemyId(serial), HexPosition::new(2, 0), &mut rng);
            assert!((12..=16).contains(&enemy.hp));
            assert_eq!(enemy.hp, enemy.max_hp);
            assert_eq!(enemy.block, 0);
            assert!(enemy.intent().is_some());
            assert_eq!(enemy.action_draw_pile.len(), 2);
            assert!(enemy.action_discard_pile.is_empty());
        }
    }

    #[test]
    fn cycling_visits_every_card_before_repeating() {
        let definition = slime();
        let mut rng = GameRng::from_seed(9);
        let mut enemy = Enemy::spawn(&definition, EnemyId(0), HexPosition::ORIGIN, &mut rng);

        let mut seen = HashSet::new();
        for _ in 0..3 {
            let current = enemy.intent().map(|card| card.id.clone());
            seen.insert(current);
            enemy.cycle_action_card(&mut rng);
        }
        assert_eq!(seen.len(), 3);

        for _ in 0..20 {
            enemy.cycle_action_card(&mut rng);
            assert_eq!(enemy.action_card_count(), 3);
            assert!(enemy.intent().is_some());
        }
    }
}
