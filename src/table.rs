//! The face-up cards between the players.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::player::Player;

/// The cards currently face-up on the table.
///
/// Cards laid on non-capturing plays are appended; captured cards are
/// removed in place, so the remaining order is stable across a match.
#[derive(Debug, Clone, Default)]
pub struct Table {
    cards: Vec<Card>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the cards on the table.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the given card is on the table.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Replaces the table contents.
    pub fn set_cards(&mut self, cards: &[Card]) {
        self.cards.clear();
        self.cards.extend_from_slice(cards);
    }

    /// Appends a card to the table.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes every listed card that is present; cards not on the table
    /// are skipped rather than rejected.
    pub fn remove_all(&mut self, cards: &[Card]) {
        for &card in cards {
            if let Some(pos) = self.cards.iter().position(|&c| c == card) {
                self.cards.remove(pos);
            }
        }
    }

    /// Sum of the capture values of the table cards.
    #[must_use]
    pub fn value_sum(&self) -> u8 {
        self.cards.iter().map(|c| c.value()).sum()
    }

    /// Moves every card into the player's captured pile and empties the
    /// table.
    pub fn sweep_to(&mut self, player: &mut Player) {
        for card in self.cards.drain(..) {
            player.add_to_captured(card);
        }
    }
}
