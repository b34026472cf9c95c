//! Player intents accepted by the combat engine.
use crate::card::CardId;
use crate::class::CharacterClass;
use crate::enemy::EnemyId;
use crate::hex::HexPosition;

/// One operation requested by the presentation layer.
///
/// Every variant maps to exactly one [`CombatEngine`](crate::engine::CombatEngine)
/// operation; commands are applied strictly one at a time.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    SelectCharacter(CharacterClass),
    StartCombat,
    SelectCard(CardId),
    CancelSelection,
    AddMovementStep(HexPosition),
    UndoMovementStep,
    CompleteMovement,
    SelectTarget(EnemyId),
    ConfirmSkill,
    /// Plays a card directly, bypassing the selection phases.
    PlayCard {
        card: CardId,
        target: Option<EnemyId>,
    },
    EndTurn,
    AdvanceFloor,
    SelectRewardCard(CardId),
    SkipReward,
    ResetGame,
}

impl Command {
    /// Stable snake_case name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_snake_case() {
        assert_eq!(Command::EndTurn.name(), "end_turn");
        assert_eq!(
            Command::AddMovementStep(HexPosition::ORIGIN).name(),
            "add_movement_step"
        );
        assert_eq!(
            Command::PlayCard {
                card: CardId::new("strike_1"),
                target: None
            }
            .name(),
            "play_card"
        );
    }
}
