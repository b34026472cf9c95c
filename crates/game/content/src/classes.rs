//! Character classes and their starting decks.

use game_core::{Card, CharacterClass, CharacterClassDefinition, InnateAbility, InnateAbilityKind};

use crate::cards::numbered;

pub fn class_definition(class: CharacterClass) -> CharacterClassDefinition {
    match class {
        CharacterClass::Warrior => CharacterClassDefinition {
            class,
            name: "Warrior".into(),
            description: "Heavy armor and a steady blade. Built to stand in the front line.".into(),
            base_hp: 90,
            base_energy: 3,
            innate_abilities: vec![
                InnateAbility::new(
                    InnateAbilityKind::PassiveBlock,
                    3,
                    "Iron Skin",
                    "Gain 3 block at the start of every turn.",
                ),
                InnateAbility::new(
                    InnateAbilityKind::RoomHealing,
                    8,
                    "Second Wind",
                    "Heal 8 HP after clearing a floor.",
                ),
            ],
        },
        CharacterClass::Archer => CharacterClassDefinition {
            class,
            name: "Archer".into(),
            description: "Strikes from afar and keeps options open.".into(),
            base_hp: 70,
            base_energy: 3,
            innate_abilities: vec![InnateAbility::new(
                InnateAbilityKind::BonusDraw,
                1,
                "Quick Hands",
                "Draw 1 extra card every turn.",
            )],
        },
        CharacterClass::Mage => CharacterClassDefinition {
            class,
            name: "Mage".into(),
            description: "Fragile, but opens every floor with surplus power.".into(),
            base_hp: 60,
            base_energy: 3,
            innate_abilities: vec![InnateAbility::new(
                InnateAbilityKind::EnergyRegen,
                1,
                "Mana Flow",
                "Gain 1 extra energy on the first turn of each floor.",
            )],
        },
    }
}

/// Ordered starting deck; the engine shuffles it when combat starts.
pub fn starter_deck(class: CharacterClass) -> Vec<Card> {
    let mut deck = Vec::with_capacity(12);
    match class {
        CharacterClass::Warrior => {
            deck.extend(numbered(4, |id| Card::attack(format!("strike_{id}"), "Strike", 1, 6, 1)));
            deck.extend(numbered(3, |id| Card::skill(format!("defend_{id}"), "Defend", 1, 5)));
            deck.extend(numbered(3, |id| Card::movement(format!("move_{id}"), "Walk", 1, 2)));
            deck.push(Card::movement("dash_1", "Dash", 1, 4));
            deck.push(Card::attack("throw_1", "Throw", 2, 8, 3));
        }
        CharacterClass::Archer => {
            deck.extend(numbered(2, |id| Card::attack(format!("strike_{id}"), "Strike", 1, 6, 1)));
            deck.extend(numbered(2, |id| {
                Card::attack(format!("quick_shot_{id}"), "Quick Shot", 1, 5, 2)
            }));
            deck.extend(numbered(3, |id| Card::skill(format!("defend_{id}"), "Defend", 1, 5)));
            deck.extend(numbered(3, |id| Card::movement(format!("move_{id}"), "Walk", 1, 2)));
            deck.push(Card::movement("dash_1", "Dash", 1, 4));
            deck.push(Card::attack("throw_1", "Throw", 2, 8, 3));
        }
        CharacterClass::Mage => {
            deck.extend(numbered(2, |id| Card::attack(format!("strike_{id}"), "Strike", 1, 6, 1)));
            deck.extend(numbered(2, |id| {
                Card::attack(format!("spark_{id}"), "Spark", 1, 5, 3).with_min_range(2)
            }));
            deck.extend(numbered(3, |id| Card::skill(format!("defend_{id}"), "Defend", 1, 5)));
            deck.extend(numbered(3, |id| Card::movement(format!("move_{id}"), "Walk", 1, 2)));
            deck.push(Card::movement("blink_1", "Blink", 1, 3));
            deck.push(Card::attack("throw_1", "Throw", 2, 8, 3));
        }
    }
    deck
}
