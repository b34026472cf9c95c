use crate::class::{CharacterClass, CharacterClassDefinition};
use crate::combat::{DamageOutcome, absorb};
use crate::hex::HexPosition;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub class: CharacterClass,
    pub hp: u32,
    pub max_hp: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub block: u32,
    pub position: HexPosition,
}

impl Player {
    /// Fresh character at full HP and energy.
    pub fn from_definition(definition: &CharacterClassDefinition, position: HexPosition) -> Self {
        Self {
            class: definition.class,
            hp: definition.base_hp,
            max_hp: definition.base_hp,
            energy: definition.base_energy,
            max_energy: definition.base_energy,
            block: 0,
            position,
        }
    }

    /// Applies incoming damage through block first.
    pub fn take_damage(&mut self, damage: u32) -> DamageOutcome {
        let outcome = absorb(self.block, self.hp, damage);
        self.block = outcome.remaining_block;
        self.hp = outcome.remaining_hp;
        outcome
    }

    /// Heals up to `max_hp`, returning the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_hp.saturating_sub(self.hp));
        self.hp += healed;
        healed
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Start-of-turn reset: block drops to zero and energy refills.
    pub fn refresh_for_turn(&mut self) {
        self.block = 0;
        self.energy = self.max_energy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warrior() -> Player {
        Player {
            class: CharacterClass::Warrior,
            hp: 90,
            max_hp: 90,
            energy: 3,
            max_energy: 3,
            block: 0,
            position: HexPosition::new(-2, 0),
        }
    }

    #[test]
    fn damage_consumes_block_first() {
        let mut player = warrior();
        player.block = 5;
        let outcome = player.take_damage(8);
        assert_eq!(outcome.blocked, 5);
        assert_eq!(player.block, 0);
        assert_eq!(player.hp, 87);
    }

    #[test]
    fn heal_caps_at_max() {
        let mut player = warrior();
        player.hp = 85;
        assert_eq!(player.heal(8), 5);
        assert_eq!(player.hp, 90);
    }

    #[test]
    fn lethal_damage_defeats() {
        let mut player = warrior();
        player.take_damage(200);
        assert!(player.is_defeated());
    }
}
