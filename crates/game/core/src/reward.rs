//! Weighted reward offers drawn after a floor is cleared.
use crate::card::{Card, CardId};
use crate::env::GameRng;

/// Class-specific reward candidates split by rarity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardPool {
    pub normal: Vec<Card>,
    pub rare: Vec<Card>,
}

impl RewardPool {
    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.rare.is_empty()
    }
}

/// Picks up to `count` cards with distinct ids.
///
/// Each pick rolls the normal pool with probability `normal_weight` and the
/// rare pool otherwise, then chooses uniformly among the cards of that rarity
/// not already picked. An exhausted rarity falls back to the other one; when
/// both are exhausted the offer is shorter than `count`.
pub fn pick_reward_cards(
    pool: &RewardPool,
    count: usize,
    normal_weight: f64,
    rng: &mut GameRng,
) -> Vec<Card> {
    let mut picked: Vec<Card> = Vec::with_capacity(count);

    while picked.len() < count {
        let taken: Vec<&CardId> = picked.iter().map(|card| &card.id).collect();
        let normal = remaining(&pool.normal, &taken);
        let rare = remaining(&pool.rare, &taken);

        let prefer_normal = rng.chance(normal_weight);
        let candidates = match (prefer_normal, normal.is_empty(), rare.is_empty()) {
            (_, true, true) => break,
            (true, false, _) | (false, false, true) => normal,
            (false, _, false) | (true, true, false) => rare,
        };

        let choice = candidates[rng.index(candidates.len())].clone();
        picked.push(choice);
    }

    picked
}

fn remaining<'a>(cards: &'a [Card], taken: &[&CardId]) -> Vec<&'a Card> {
    cards
        .iter()
        .filter(|card| !taken.contains(&&card.id))
        .collect()
}
