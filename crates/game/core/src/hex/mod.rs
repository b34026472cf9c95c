//! Axial hex-grid geometry.
//!
//! Positions use the axial `(q, r)` scheme with the cube coordinate
//! `s = -q - r` left implicit. Everything here is pure math over
//! [`HexPosition`]; map layout lives in [`map`] and breadth-first search
//! helpers in [`path`].
pub mod map;
pub mod path;

use std::fmt;

pub use map::{HexMap, HexTile, TileKind};
pub use path::{find_path_to_closest_target, reachable_hexes};

/// Axial hex coordinate (`q` = column, `r` = row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexPosition {
    pub q: i32,
    pub r: i32,
}

impl HexPosition {
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Implicit third cube coordinate.
    #[inline]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    #[inline]
    pub const fn add(self, other: Self) -> Self {
        Self::new(self.q + other.q, self.r + other.r)
    }

    #[inline]
    pub const fn sub(self, other: Self) -> Self {
        Self::new(self.q - other.q, self.r - other.r)
    }

    /// Number of hex steps between two positions.
    ///
    /// `max(|Δq|, |Δr|, |Δs|)` using the cube form of axial coordinates.
    pub fn distance(self, other: Self) -> u32 {
        let delta = self.sub(other);
        delta
            .q
            .unsigned_abs()
            .max(delta.r.unsigned_abs())
            .max(delta.s().unsigned_abs())
    }

    /// Adjacent hex in the given direction.
    #[inline]
    pub const fn neighbor(self, direction: HexDirection) -> Self {
        self.add(direction.offset())
    }

    /// The six adjacent hexes, in [`HexDirection::ALL`] order.
    pub fn neighbors(self) -> [Self; 6] {
        HexDirection::ALL.map(|direction| self.neighbor(direction))
    }

    /// True when `other` is exactly one step away.
    pub fn is_adjacent(self, other: Self) -> bool {
        self.distance(other) == 1
    }
}

impl fmt::Display for HexPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}

/// The six axial neighbor directions.
///
/// Declaration order is significant: neighbor iteration, ring traversal and
/// BFS tie-breaking all follow it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexDirection {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::East,
        HexDirection::NorthEast,
        HexDirection::NorthWest,
        HexDirection::West,
        HexDirection::SouthWest,
        HexDirection::SouthEast,
    ];

    pub const fn offset(self) -> HexPosition {
        match self {
            HexDirection::East => HexPosition::new(1, 0),
            HexDirection::NorthEast => HexPosition::new(1, -1),
            HexDirection::NorthWest => HexPosition::new(0, -1),
            HexDirection::West => HexPosition::new(-1, 0),
            HexDirection::SouthWest => HexPosition::new(-1, 1),
            HexDirection::SouthEast => HexPosition::new(0, 1),
        }
    }
}

/// All hexes within `range` steps of `center`, including the center itself.
pub fn hexes_in_range(center: HexPosition, range: u32) -> Vec<HexPosition> {
    let range = range as i32;
    let mut results = Vec::new();

    for dq in -range..=range {
        let r_min = (-range).max(-dq - range);
        let r_max = range.min(-dq + range);
        for dr in r_min..=r_max {
            results.push(center.add(HexPosition::new(dq, dr)));
        }
    }

    results
}

/// Hexes at exactly `radius` steps from `center`, as one contiguous loop.
///
/// The walk starts at the south-west corner and follows each of the six
/// directions for `radius` steps, so consecutive entries are adjacent.
pub fn hex_ring(center: HexPosition, radius: u32) -> Vec<HexPosition> {
    if radius == 0 {
        return vec![center];
    }

    let steps = radius as i32;
    let mut results = Vec::with_capacity(6 * radius as usize);
    let mut hex = center.add(HexPosition::new(-steps, steps));

    for direction in HexDirection::ALL {
        for _ in 0..radius {
            results.push(hex);
            hex = hex.neighbor(direction);
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distance_matches_cube_formula() {
        let a = HexPosition::new(-2, 0);
        assert_eq!(a.distance(HexPosition::new(-1, 0)), 1);
        assert_eq!(a.distance(HexPosition::new(2, 0)), 4);
        assert_eq!(HexPosition::new(1, 2).distance(HexPosition::new(-1, 2)), 2);
        assert_eq!(HexPosition::new(0, -2).distance(HexPosition::new(-2, 0)), 2);
        assert_eq!(HexPosition::new(2, -1).distance(HexPosition::new(-2, 2)), 4);
    }

    #[test]
    fn neighbors_follow_direction_order() {
        let neighbors = HexPosition::ORIGIN.neighbors();
        assert_eq!(neighbors[0], HexPosition::new(1, 0));
        assert_eq!(neighbors[1], HexPosition::new(1, -1));
        assert_eq!(neighbors[2], HexPosition::new(0, -1));
        assert_eq!(neighbors[3], HexPosition::new(-1, 0));
        assert_eq!(neighbors[4], HexPosition::new(-1, 1));
        assert_eq!(neighbors[5], HexPosition::new(0, 1));
        assert!(neighbors.iter().all(|n| n.distance(HexPosition::ORIGIN) == 1));
    }

    #[test]
    fn hexes_in_range_counts() {
        // 1 + 3r(r+1)
        assert_eq!(hexes_in_range(HexPosition::ORIGIN, 0).len(), 1);
        assert_eq!(hexes_in_range(HexPosition::ORIGIN, 1).len(), 7);
        assert_eq!(hexes_in_range(HexPosition::ORIGIN, 4).len(), 61);

        let center = HexPosition::new(3, -1);
        assert!(
            hexes_in_range(center, 2)
                .iter()
                .all(|hex| hex.distance(center) <= 2)
        );
    }

    #[test]
    fn ring_is_contiguous_and_exact() {
        let center = HexPosition::new(1, 1);
        let ring = hex_ring(center, 3);

        assert_eq!(ring.len(), 18);
        assert_eq!(ring[0], HexPosition::new(-2, 4));
        assert!(ring.iter().all(|hex| hex.distance(center) == 3));
        for pair in ring.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]));
        }
        assert!(ring[ring.len() - 1].is_adjacent(ring[0]));
    }

    #[test]
    fn ring_of_radius_zero_is_center() {
        assert_eq!(hex_ring(HexPosition::new(2, 2), 0), vec![HexPosition::new(2, 2)]);
    }

    fn position() -> impl Strategy<Value = HexPosition> {
        (-20i32..=20, -20i32..=20).prop_map(|(q, r)| HexPosition::new(q, r))
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in position(), b in position()) {
            prop_assert_eq!(a.distance(b), b.distance(a));
        }

        #[test]
        fn distance_obeys_triangle_inequality(a in position(), b in position(), c in position()) {
            prop_assert!(a.distance(c) <= a.distance(b) + b.distance(c));
        }

        #[test]
        fn distance_to_self_is_zero(a in position()) {
            prop_assert_eq!(a.distance(a), 0);
        }
    }
}
