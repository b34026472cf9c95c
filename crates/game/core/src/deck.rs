//! Player card piles and the draw/discard/reshuffle cycle.
//!
//! `deck` lists every card the player owns; `hand`, `draw_pile` and
//! `discard_pile` always partition it. No operation here creates or destroys
//! a card except [`CardPiles::add_reward`], which grows the deck and the draw
//! pile together.
use crate::card::{Card, CardId};
use crate::env::GameRng;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardPiles {
    pub deck: Vec<Card>,
    pub hand: Vec<Card>,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
}

impl CardPiles {
    /// Starts a combat: the whole deck, shuffled, becomes the draw pile.
    pub fn from_deck(deck: Vec<Card>, rng: &mut GameRng) -> Self {
        let mut draw_pile = deck.clone();
        rng.shuffle(&mut draw_pile);
        Self {
            deck,
            hand: Vec::new(),
            draw_pile,
            discard_pile: Vec::new(),
        }
    }

    /// Draws up to `amount` cards from the end of the draw pile.
    ///
    /// An empty draw pile is refilled by shuffling the discard pile. When both
    /// are empty the draw stops early. Returns the number of cards drawn.
    pub fn draw(&mut self, amount: usize, rng: &mut GameRng) -> usize {
        let mut drawn = 0;
        for _ in 0..amount {
            if self.draw_pile.is_empty() {
                if self.discard_pile.is_empty() {
                    break;
                }
                self.draw_pile = std::mem::take(&mut self.discard_pile);
                rng.shuffle(&mut self.draw_pile);
            }
            match self.draw_pile.pop() {
                Some(card) => {
                    self.hand.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    pub fn hand_card(&self, id: &CardId) -> Option<&Card> {
        self.hand.iter().find(|card| &card.id == id)
    }

    /// Moves one card from the hand to the discard pile.
    pub fn discard_from_hand(&mut self, id: &CardId) -> Option<Card> {
        let index = self.hand.iter().position(|card| &card.id == id)?;
        let card = self.hand.remove(index);
        self.discard_pile.push(card.clone());
        Some(card)
    }

    /// Moves the whole hand to the discard pile, preserving order.
    pub fn discard_hand(&mut self) -> usize {
        let count = self.hand.len();
        self.discard_pile.append(&mut self.hand);
        count
    }

    /// Gathers hand, draw and discard piles into one freshly shuffled draw pile.
    pub fn gather_and_reshuffle(&mut self, rng: &mut GameRng) {
        let mut all = std::mem::take(&mut self.draw_pile);
        all.append(&mut self.hand);
        all.append(&mut self.discard_pile);
        rng.shuffle(&mut all);
        self.draw_pile = all;
    }

    /// Adds a newly owned card to the deck and slots it into the draw pile at a
    /// random depth, so it is drawn later rather than played immediately.
    pub fn add_reward(&mut self, card: Card, rng: &mut GameRng) {
        let index = rng.index(self.draw_pile.len() + 1);
        self.draw_pile.insert(index, card.clone());
        self.deck.push(card);
    }

    /// Number of cards currently held across hand, draw and discard.
    pub fn in_play(&self) -> usize {
        self.hand.len() + self.draw_pile.len() + self.discard_pile.len()
    }

    /// True when hand, draw and discard exactly account for the deck.
    pub fn is_conserved(&self) -> bool {
        if self.in_play() != self.deck.len() {
            return false;
        }
        let mut owned: Vec<&CardId> = self.deck.iter().map(|card| &card.id).collect();
        let mut held: Vec<&CardId> = self
            .hand
            .iter()
            .chain(&self.draw_pile)
            .chain(&self.discard_pile)
            .map(|card| &card.id)
            .collect();
        owned.sort_unstable();
        held.sort_unstable();
        owned == held
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
