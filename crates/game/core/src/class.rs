//! Character classes and their innate abilities.

/// Playable character classes.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CharacterClass {
    Warrior,
    Archer,
    Mage,
}

/// Passive effects granted by a class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum InnateAbilityKind {
    /// Block granted at the start of every player turn.
    PassiveBlock,
    /// Extra cards drawn at the start of every player turn.
    BonusDraw,
    /// Extra energy on the first turn of each floor.
    EnergyRegen,
    /// Healing applied when a floor is cleared.
    RoomHealing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InnateAbility {
    pub kind: InnateAbilityKind,
    pub value: u32,
    pub name: String,
    pub description: String,
}

impl InnateAbility {
    pub fn new(
        kind: InnateAbilityKind,
        value: u32,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            value,
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterClassDefinition {
    pub class: CharacterClass,
    pub name: String,
    pub description: String,
    pub base_hp: u32,
    pub base_energy: u32,
    pub innate_abilities: Vec<InnateAbility>,
}

impl CharacterClassDefinition {
    /// Sum of all innate abilities of the given kind (0 when absent).
    pub fn ability_value(&self, kind: InnateAbilityKind) -> u32 {
        self.innate_abilities
            .iter()
            .filter(|ability| ability.kind == kind)
            .map(|ability| ability.value)
            .sum()
    }

    pub fn ability(&self, kind: InnateAbilityKind) -> Option<&InnateAbility> {
        self.innate_abilities
            .iter()
            .find(|ability| ability.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn class_names_parse_case_insensitively() {
        assert_eq!(CharacterClass::from_str("warrior"), Ok(CharacterClass::Warrior));
        assert_eq!(CharacterClass::from_str("MAGE"), Ok(CharacterClass::Mage));
        assert!(CharacterClass::from_str("bard").is_err());
        assert_eq!(CharacterClass::Archer.to_string(), "archer");
    }

    #[test]
    fn ability_value_sums_matching_kinds() {
        let definition = CharacterClassDefinition {
            class: CharacterClass::Warrior,
            name: "Warrior".into(),
            description: String::new(),
            base_hp: 90,
            base_energy: 3,
            innate_abilities: vec![
                InnateAbility::new(InnateAbilityKind::PassiveBlock, 2, "Iron Skin", ""),
                InnateAbility::new(InnateAbilityKind::PassiveBlock, 1, "Plate", ""),
            ],
        };

        assert_eq!(definition.ability_value(InnateAbilityKind::PassiveBlock), 3);
        assert_eq!(definition.ability_value(InnateAbilityKind::BonusDraw), 0);
        assert!(definition.ability(InnateAbilityKind::RoomHealing).is_none());
    }
}
