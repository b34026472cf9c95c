//! Reward card pools.
//!
//! Each class draws rewards from its own normal and rare pool. Power Surge is
//! shared by every rare pool.

use game_core::{Card, CharacterClass, RewardPool};

/// Builds `count` copies of a card, numbering ids from 1.
pub(crate) fn numbered(count: u32, build: impl FnMut(u32) -> Card) -> Vec<Card> {
    (1..=count).map(build).collect()
}

pub fn reward_pool(class: CharacterClass) -> RewardPool {
    let mut rare = rare_cards(class);
    rare.push(Card::power("power_surge_1", "Power Surge", 2, 15, 8));
    RewardPool {
        normal: normal_cards(class),
        rare,
    }
}

fn normal_cards(class: CharacterClass) -> Vec<Card> {
    match class {
        CharacterClass::Warrior => {
            let mut cards = vec![
                Card::attack("sword_slash_strong_1", "Strong Slash", 1, 12, 1),
                Card::attack("riposte_1", "Riposte", 2, 10, 1),
            ];
            cards.extend(numbered(2, |n| {
                Card::skill(format!("shield_block_{n}"), "Shield Block", 1, 8)
            }));
            cards.push(Card::movement("dash_2", "Dash", 1, 3));
            cards.push(Card::movement("dash_3", "Quick Dash", 1, 4));
            cards
        }
        CharacterClass::Archer => {
            let mut cards = numbered(2, |n| {
                Card::attack(format!("arrow_shot_{n}"), "Arrow Shot", 1, 10, 2)
            });
            cards.push(Card::attack("piercing_shot_1", "Piercing Shot", 2, 15, 3));
            cards.extend(numbered(2, |n| {
                Card::skill(format!("evasion_{n}"), "Evasion", 1, 6)
            }));
            cards.push(Card::movement("sprint_1", "Sprint", 1, 5));
            cards
        }
        CharacterClass::Mage => {
            let mut cards = numbered(2, |n| {
                Card::attack(format!("fireball_{n}"), "Fireball", 2, 12, 3)
            });
            cards.push(Card::attack("frostbolt_1", "Frostbolt", 2, 10, 4));
            cards.extend(numbered(2, |n| {
                Card::skill(format!("mana_shield_{n}"), "Mana Shield", 1, 7)
            }));
            cards.push(Card::movement("teleport_1", "Teleport", 1, 6));
            cards
        }
    }
}

fn rare_cards(class: CharacterClass) -> Vec<Card> {
    match class {
        CharacterClass::Warrior => vec![
            Card::attack("whirlwind_1", "Whirlwind", 3, 20, 1),
            Card::skill("shield_mastery_1", "Shield Mastery", 1, 12),
            Card::movement("full_dash_1", "Full Dash", 1, 5),
        ],
        CharacterClass::Archer => vec![
            Card::attack("multi_shot_1", "Multi Shot", 2, 18, 3),
            Card::skill("eagle_eye_1", "Eagle Eye", 1, 10),
            Card::movement("swift_step_1", "Swift Step", 1, 6),
        ],
        CharacterClass::Mage => vec![
            Card::attack("meteor_shower_1", "Meteor Shower", 3, 25, 4),
            Card::skill("arcane_reflection_1", "Arcane Reflection", 1, 10),
            Card::movement("arcane_jump_1", "Arcane Jump", 1, 7),
        ],
    }
}
