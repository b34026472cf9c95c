//! Floor completion, advancement and card rewards.

use super::{CombatEngine, CommandError, CommandOutcome};
use crate::card::CardId;
use crate::class::InnateAbilityKind;
use crate::reward::pick_reward_cards;
use crate::state::{GamePhase, LogDetails, LogKind};

impl CombatEngine<'_> {
    /// Moves to `FloorComplete` or `Victory` once no enemies remain.
    pub(super) fn resolve_end_state(&mut self) {
        if !self.state.enemies.is_empty() {
            return;
        }
        let floor = self.state.floor;
        if floor >= self.env.config().max_floor {
            self.state.phase = GamePhase::Victory;
            tracing::info!(floor, turn = self.state.turn, "run won");
        } else {
            self.state.phase = GamePhase::FloorComplete;
            tracing::info!(floor, "floor cleared");
        }
    }

    /// Heals, moves to the next floor, spawns its roster, reshuffles every
    /// card into a fresh draw pile and offers a reward.
    pub fn advance_floor(&mut self) -> Result<CommandOutcome, CommandError> {
        self.require_phase("advance_floor", &[GamePhase::FloorComplete])?;
        let class = self.player()?.class;
        let next = self.state.floor + 1;
        let floor = self.env.floor(next)?;
        let config = self.env.config();
        let definition = self.env.catalog().class_definition(class);

        let heal = definition.ability_value(InnateAbilityKind::RoomHealing);
        if heal > 0 {
            let healed = self
                .state
                .player
                .as_mut()
                .map(|player| player.heal(heal))
                .unwrap_or_default();
            self.log_innate(
                &definition,
                InnateAbilityKind::RoomHealing,
                |ability| format!("{ability}: healed {healed} HP"),
                LogDetails::healing(healed),
            );
        }

        if let Some(player) = self.state.player.as_mut() {
            player.position = config.player_entry;
        }
        self.state.floor = next;
        self.state.turn = 1;
        self.state.selection.clear();
        self.spawn_floor(&floor);
        self.state.piles.gather_and_reshuffle(self.rng);
        self.start_player_turn(true);

        let pool = self.env.catalog().reward_pool(class);
        let offer = pick_reward_cards(
            &pool,
            config.reward_choices,
            config.normal_reward_weight,
            self.rng,
        );
        self.state.phase = if offer.is_empty() {
            GamePhase::PlayerTurn
        } else {
            GamePhase::SelectingReward
        };
        self.state.reward_cards = offer;

        Ok(CommandOutcome::Applied)
    }

    /// Adds a uniquely renamed copy of an offered card to the deck.
    pub fn select_reward_card(&mut self, card_id: &CardId) -> Result<CommandOutcome, CommandError> {
        self.require_phase("select_reward_card", &[GamePhase::SelectingReward])?;
        let template = self
            .state
            .reward_cards
            .iter()
            .find(|card| &card.id == card_id)
            .cloned()
            .ok_or_else(|| CommandError::UnknownRewardCard(card_id.clone()))?;

        let serial = self.state.allocate_card_serial();
        let card = template.with_unique_id(serial);
        self.state.push_log(
            LogKind::Reward,
            format!("{} added to the deck", card.name),
            None,
        );
        tracing::debug!(card = %card.id, "reward card taken");
        self.state.piles.add_reward(card, self.rng);
        self.state.reward_cards.clear();
        self.state.phase = GamePhase::PlayerTurn;
        Ok(CommandOutcome::Applied)
    }

    /// Declines the current reward offer.
    pub fn skip_reward(&mut self) -> Result<CommandOutcome, CommandError> {
        self.require_phase("skip_reward", &[GamePhase::SelectingReward])?;
        self.state.reward_cards.clear();
        self.state.phase = GamePhase::PlayerTurn;
        Ok(CommandOutcome::Applied)
    }
}
