use crate::card::Card;
use crate::enemy::EnemyId;
use crate::hex::HexPosition;

/// Turn/phase state machine position.
///
/// The enemy turn runs inside `end_turn` and is never observable as a phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GamePhase {
    #[default]
    CharacterSelect,
    PlayerTurn,
    SelectingMovement,
    SelectingTarget,
    ConfirmingSkill,
    FloorComplete,
    SelectingReward,
    Victory,
    Defeat,
}

impl GamePhase {
    /// Victory and defeat end the run until it is reset.
    pub const fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::Defeat)
    }

    /// Phases in which a selected card awaits completion or cancellation.
    pub const fn is_selecting(self) -> bool {
        matches!(
            self,
            GamePhase::SelectingMovement | GamePhase::SelectingTarget | GamePhase::ConfirmingSkill
        )
    }
}

/// Transient card-selection state shown to the presentation layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub selected_card: Option<Card>,
    /// Hexes that may be appended to the movement path next.
    pub valid_move_positions: Vec<HexPosition>,
    pub targetable_enemy_ids: Vec<EnemyId>,
    /// Accumulated step-by-step path, starting at the player's position.
    pub movement_path: Vec<HexPosition>,
    pub remaining_movement: u32,
}

impl Selection {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
