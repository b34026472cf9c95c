//! Enemy archetypes and their action cards.

use game_core::{EnemyAction, EnemyAction as A, EnemyActionCard, EnemyDefinition, EnemyKind};

fn card(id: &str, name: &str, actions: Vec<EnemyAction>) -> EnemyActionCard {
    EnemyActionCard::new(id, name, actions)
}

pub fn enemy_definition(kind: EnemyKind) -> EnemyDefinition {
    let (name, emoji, min_hp, max_hp, attack_range, action_cards) = match kind {
        EnemyKind::Slime => (
            "Slime",
            "🟢",
            12,
            16,
            1,
            vec![
                card("slime_attack", "Viscous Strike", vec![A::attack(5)]),
                card(
                    "slime_move_attack",
                    "Sticky Advance",
                    vec![A::movement(2), A::attack(3)],
                ),
                card("slime_defend", "Harden", vec![A::defend(4)]),
            ],
        ),
        EnemyKind::Rat => (
            "Giant Rat",
            "🐀",
            8,
            12,
            1,
            vec![
                card("rat_bite", "Bite", vec![A::attack(4)]),
                card("rat_scratch", "Quick Scratch", vec![A::attack(2), A::attack(2)]),
                card("rat_scurry", "Scurry", vec![A::movement(3)]),
            ],
        ),
        EnemyKind::Goblin => (
            "Goblin",
            "👺",
            20,
            26,
            1,
            vec![
                card("goblin_stab", "Stab", vec![A::attack(8)]),
                card("goblin_rush", "Cowardly Rush", vec![A::movement(3), A::attack(4)]),
                card("goblin_combo", "Treacherous Combo", vec![A::attack(4), A::attack(4)]),
                card(
                    "goblin_defensive",
                    "Defensive Stance",
                    vec![A::defend(5), A::attack(3)],
                ),
            ],
        ),
        EnemyKind::Skeleton => (
            "Skeleton",
            "💀",
            25,
            32,
            2,
            vec![
                card("skeleton_arrow", "Bone Arrow", vec![A::attack(6)]),
                card("skeleton_volley", "Arrow Volley", vec![A::attack(4), A::attack(4)]),
                card(
                    "skeleton_reposition",
                    "Reposition",
                    vec![A::movement(2), A::defend(3)],
                ),
                card("skeleton_power_shot", "Power Shot", vec![A::attack(12)]),
                card("skeleton_fortify", "Fortify", vec![A::defend(6), A::defend(4)]),
            ],
        ),
        EnemyKind::Orc => (
            "Orc",
            "👹",
            35,
            45,
            1,
            vec![
                card("orc_smash", "Smash", vec![A::attack(12)]),
                card("orc_rage", "Rage", vec![A::buff(3), A::attack(8)]),
                card("orc_charge", "Brutal Charge", vec![A::movement(2), A::attack(10)]),
                card("orc_brace", "Battle Stance", vec![A::defend(8), A::attack(6)]),
            ],
        ),
        EnemyKind::DarkMage => (
            "Dark Mage",
            "🧙‍♂️",
            28,
            35,
            3,
            vec![
                card("dark_bolt", "Shadow Bolt", vec![A::attack(10)]),
                card(
                    "dark_barrage",
                    "Arcane Barrage",
                    vec![A::attack(5), A::attack(5), A::attack(5)],
                ),
                card("dark_shield", "Magic Shield", vec![A::defend(12)]),
                card("dark_teleport", "Teleport", vec![A::movement(4), A::defend(5)]),
            ],
        ),
        EnemyKind::Ghost => (
            "Ghost",
            "👻",
            22,
            28,
            2,
            vec![
                card("ghost_drain", "Life Drain", vec![A::attack(8)]),
                card("ghost_haunt", "Haunt", vec![A::movement(3), A::attack(6)]),
                card("ghost_phase", "Ethereal Phase", vec![A::defend(15)]),
            ],
        ),
        EnemyKind::Dragon => (
            "Ancient Dragon",
            "🐉",
            120,
            150,
            3,
            vec![
                card("dragon_breath", "Fire Breath", vec![A::attack(15), A::attack(10)]),
                card("dragon_claw", "Devastating Claws", vec![A::attack(20)]),
                card(
                    "dragon_tail",
                    "Tail Whip",
                    vec![A::attack(8), A::attack(8), A::attack(8)],
                ),
                card("dragon_roar", "Terrifying Roar", vec![A::defend(20), A::buff(5)]),
                card("dragon_dive", "Aerial Dive", vec![A::movement(3), A::attack(18)]),
                card(
                    "dragon_inferno",
                    "Draconic Inferno",
                    vec![A::attack(12), A::attack(12), A::attack(12)],
                ),
            ],
        ),
    };

    EnemyDefinition {
        kind,
        name: name.into(),
        emoji: emoji.into(),
        min_hp,
        max_hp,
        attack_range,
        action_cards,
    }
}
