//! Breadth-first search over walkable hexes.
//!
//! Neighbors are expanded in [`HexDirection::ALL`](super::HexDirection::ALL)
//! order, so among equally distant candidates the first one discovered in
//! that order wins. Callers should treat that tie-break as arbitrary.

use std::collections::{HashMap, HashSet, VecDeque};

use super::{HexMap, HexPosition};

/// Every hex reachable from `start` in at most `max_distance` steps.
///
/// Only walkable tiles outside `blocked` are entered. The start hex itself is
/// never part of the result.
pub fn reachable_hexes(
    start: HexPosition,
    max_distance: u32,
    map: &HexMap,
    blocked: &HashSet<HexPosition>,
) -> Vec<HexPosition> {
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0u32)]);
    let mut results = Vec::new();

    while let Some((position, distance)) = queue.pop_front() {
        if distance > 0 {
            results.push(position);
        }
        if distance >= max_distance {
            continue;
        }

        for neighbor in position.neighbors() {
            if visited.contains(&neighbor)
                || blocked.contains(&neighbor)
                || !map.is_walkable(neighbor)
            {
                continue;
            }
            visited.insert(neighbor);
            queue.push_back((neighbor, distance + 1));
        }
    }

    results
}

/// Shortest hex-by-hex path from `start` to the nearest hex in `targets`.
///
/// The returned path begins with `start` and ends on a target. Targets that
/// are blocked or not walkable can never be reached. Returns `None` when no
/// target is reachable.
pub fn find_path_to_closest_target(
    start: HexPosition,
    targets: &HashSet<HexPosition>,
    map: &HexMap,
    blocked: &HashSet<HexPosition>,
) -> Option<Vec<HexPosition>> {
    if targets.contains(&start) {
        return Some(vec![start]);
    }

    let mut came_from: HashMap<HexPosition, HexPosition> = HashMap::new();
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(position) = queue.pop_front() {
        for neighbor in position.neighbors() {
            if visited.contains(&neighbor)
                || blocked.contains(&neighbor)
                || !map.is_walkable(neighbor)
            {
                continue;
            }
            visited.insert(neighbor);
            came_from.insert(neighbor, position);

            if targets.contains(&neighbor) {
                return Some(rebuild_path(&came_from, start, neighbor));
            }
            queue.push_back(neighbor);
        }
    }

    None
}

fn rebuild_path(
    came_from: &HashMap<HexPosition, HexPosition>,
    start: HexPosition,
    end: HexPosition,
) -> Vec<HexPosition> {
    let mut path = vec![end];
    let mut cursor = end;
    while cursor != start {
        match came_from.get(&cursor) {
            Some(&previous) => {
                path.push(previous);
                cursor = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
