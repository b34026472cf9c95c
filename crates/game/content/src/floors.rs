//! The four fixed floor rosters.

use game_core::{EnemyKind, EnemySpawn, FloorSpec, HexPosition};

fn spawn(kind: EnemyKind, q: i32, r: i32) -> EnemySpawn {
    EnemySpawn {
        kind,
        position: HexPosition::new(q, r),
    }
}

fn floor(floor: u32, name: &str, description: &str, spawns: Vec<EnemySpawn>) -> FloorSpec {
    FloorSpec {
        floor,
        name: name.into(),
        description: description.into(),
        spawns,
    }
}

pub fn default_floors() -> Vec<FloorSpec> {
    vec![
        floor(
            1,
            "Dungeon Entrance",
            "The first dwellers of the dungeon are waiting for you...",
            vec![
                spawn(EnemyKind::Slime, 2, 0),
                spawn(EnemyKind::Rat, 1, 2),
                spawn(EnemyKind::Slime, -1, 2),
            ],
        ),
        floor(
            2,
            "Hall of Bones",
            "More dangerous creatures lurk in the shadows...",
            vec![
                spawn(EnemyKind::Goblin, 2, -1),
                spawn(EnemyKind::Skeleton, -2, 2),
                spawn(EnemyKind::Goblin, 0, 2),
            ],
        ),
        floor(
            3,
            "Dark Chamber",
            "The air is heavy with dark magic...",
            vec![
                spawn(EnemyKind::Orc, 2, 0),
                spawn(EnemyKind::DarkMage, -2, 1),
                spawn(EnemyKind::Ghost, 0, -2),
            ],
        ),
        floor(
            4,
            "Dragon's Lair",
            "The Ancient Dragon guards the final treasure!",
            vec![spawn(EnemyKind::Dragon, 0, -2)],
        ),
    ]
}
