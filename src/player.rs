//! Player state: hand, captured pile, brooms.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::PlayerError;

/// A participant in the match.
///
/// The hand holds the cards dealt and not yet played (at most 3 during
/// play); the captured pile accumulates everything the player sweeps from
/// the table, including the card played on a capturing move.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    captured: Vec<Card>,
    brooms: u8,
}

impl Player {
    /// Creates a player with an empty hand and captured pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, PlayerError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PlayerError::EmptyName);
        }
        Ok(Self {
            name,
            hand: Vec::new(),
            captured: Vec::new(),
            brooms: 0,
        })
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards currently held.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the cards captured so far.
    #[must_use]
    pub fn captured(&self) -> &[Card] {
        &self.captured
    }

    /// Returns the number of brooms made.
    #[must_use]
    pub const fn brooms(&self) -> u8 {
        self.brooms
    }

    /// Adds a card to the hand.
    pub fn add_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes a card from the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not currently held.
    pub fn remove_from_hand(&mut self, card: Card) -> Result<(), PlayerError> {
        let pos = self
            .hand
            .iter()
            .position(|&c| c == card)
            .ok_or(PlayerError::NotInHand)?;
        self.hand.remove(pos);
        Ok(())
    }

    /// Appends a card to the captured pile.
    pub fn add_to_captured(&mut self, card: Card) {
        self.captured.push(card);
    }

    /// Counts one more broom.
    pub const fn add_broom(&mut self) {
        self.brooms += 1;
    }

    /// Number of sevens in the captured pile.
    #[must_use]
    pub fn sevens_captured(&self) -> usize {
        self.captured.iter().filter(|c| c.rank() == 7).count()
    }

    /// Number of gold-suit cards in the captured pile.
    #[must_use]
    pub fn golds_captured(&self) -> usize {
        self.captured
            .iter()
            .filter(|c| c.suit() == Suit::Gold)
            .count()
    }

    /// Returns whether the seven of gold has been captured.
    #[must_use]
    pub fn has_guindis(&self) -> bool {
        self.captured
            .iter()
            .any(|c| c.suit() == Suit::Gold && c.rank() == 7)
    }

    /// Total number of cards captured.
    #[must_use]
    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }
}
