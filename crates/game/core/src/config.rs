use crate::hex::HexPosition;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Radius of the hexagonal battlefield around the origin.
    pub map_radius: u32,
    /// Cards drawn at the start of every player turn, before bonus draw.
    pub hand_size: usize,
    /// Clearing this floor ends the run in victory.
    pub max_floor: u32,
    /// Where the player stands when a floor begins.
    pub player_entry: HexPosition,
    /// Probability that a reward pick rolls the normal pool instead of the rare one.
    pub normal_reward_weight: f64,
    /// Number of distinct cards in one reward offer.
    pub reward_choices: usize,
}

impl GameConfig {
    pub const DEFAULT_MAP_RADIUS: u32 = 4;
    pub const DEFAULT_HAND_SIZE: usize = 5;
    pub const DEFAULT_MAX_FLOOR: u32 = 4;
    pub const DEFAULT_PLAYER_ENTRY: HexPosition = HexPosition::new(-2, 0);
    pub const DEFAULT_NORMAL_REWARD_WEIGHT: f64 = 0.7;
    pub const DEFAULT_REWARD_CHOICES: usize = 2;

    pub fn new() -> Self {
        Self {
            map_radius: Self::DEFAULT_MAP_RADIUS,
            hand_size: Self::DEFAULT_HAND_SIZE,
            max_floor: Self::DEFAULT_MAX_FLOOR,
            player_entry: Self::DEFAULT_PLAYER_ENTRY,
            normal_reward_weight: Self::DEFAULT_NORMAL_REWARD_WEIGHT,
            reward_choices: Self::DEFAULT_REWARD_CHOICES,
        }
    }

    pub fn with_max_floor(mut self, max_floor: u32) -> Self {
        self.max_floor = max_floor;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
