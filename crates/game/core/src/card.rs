//! Player card templates.
//!
//! A [`Card`] is a value object: piles hold independent clones, and only
//! reward cards receive a fresh id when they join the deck.
use std::fmt;

/// Stable identifier of one physical card in the player's deck.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardId(pub String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Card categories as shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CardKind {
    Attack,
    Skill,
    Power,
    Movement,
}

/// What a card does when played. Each variant carries only its own fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardEffect {
    /// Damages one enemy whose distance lies in `min_range..=range`.
    Attack {
        damage: u32,
        range: u32,
        min_range: u32,
    },
    /// Grants block to the player.
    Skill { block: u32 },
    /// Damages one enemy in range and grants block.
    Power { damage: u32, block: u32, range: u32 },
    /// Lets the player walk up to `distance` hexes.
    Movement { distance: u32 },
}

impl CardEffect {
    pub const fn kind(&self) -> CardKind {
        match self {
            CardEffect::Attack { .. } => CardKind::Attack,
            CardEffect::Skill { .. } => CardKind::Skill,
            CardEffect::Power { .. } => CardKind::Power,
            CardEffect::Movement { .. } => CardKind::Movement,
        }
    }

    /// Damage dealt to the chosen target, if this card targets an enemy.
    pub const fn damage(&self) -> Option<u32> {
        match *self {
            CardEffect::Attack { damage, .. } | CardEffect::Power { damage, .. } => Some(damage),
            _ => None,
        }
    }

    /// Block granted to the player on resolution.
    pub const fn block(&self) -> Option<u32> {
        match *self {
            CardEffect::Skill { block } | CardEffect::Power { block, .. } => Some(block),
            _ => None,
        }
    }

    /// Inclusive `(min, max)` targeting distance for enemy-targeting cards.
    pub const fn target_range(&self) -> Option<(u32, u32)> {
        match *self {
            CardEffect::Attack {
                range, min_range, ..
            } => Some((min_range, range)),
            CardEffect::Power { range, .. } => Some((1, range)),
            _ => None,
        }
    }

    pub const fn movement(&self) -> Option<u32> {
        match *self {
            CardEffect::Movement { distance } => Some(distance),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub cost: u32,
    pub effect: CardEffect,
    pub description: String,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: u32,
        effect: CardEffect,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            cost,
            effect,
            description: description.into(),
        }
    }

    /// Melee or ranged attack; `min_range` defaults to adjacent.
    pub fn attack(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: u32,
        damage: u32,
        range: u32,
    ) -> Self {
        Self::new(
            id,
            name,
            cost,
            CardEffect::Attack {
                damage,
                range,
                min_range: 1,
            },
            format!("Deal {damage} damage. Range: {range}"),
        )
    }

    pub fn skill(id: impl Into<String>, name: impl Into<String>, cost: u32, block: u32) -> Self {
        Self::new(
            id,
            name,
            cost,
            CardEffect::Skill { block },
            format!("Gain {block} block."),
        )
    }

    pub fn movement(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: u32,
        distance: u32,
    ) -> Self {
        Self::new(
            id,
            name,
            cost,
            CardEffect::Movement { distance },
            format!("Move up to {distance} hexes."),
        )
    }

    pub fn power(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: u32,
        damage: u32,
        block: u32,
    ) -> Self {
        Self::new(
            id,
            name,
            cost,
            CardEffect::Power {
                damage,
                block,
                range: 1,
            },
            format!("Deal {damage} damage and gain {block} block."),
        )
    }

    /// Overrides the minimum targeting distance of an attack card.
    pub fn with_min_range(mut self, min: u32) -> Self {
        if let CardEffect::Attack { min_range, .. } = &mut self.effect {
            *min_range = min;
        }
        self
    }

    pub const fn kind(&self) -> CardKind {
        self.effect.kind()
    }

    /// Copy of this card carrying a new unique id (`<id>_<serial>`).
    pub fn with_unique_id(&self, serial: u32) -> Self {
        Self {
            id: CardId(format!("{}_{serial}", self.id)),
            ..self.clone()
        }
    }
}
