//! The pool of undealt cards.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};
use crate::error::DeckError;

/// The pool of cards not yet dealt.
///
/// A fresh deck holds exactly one card per (suit, rank) pair. Cards leave
/// the deck by identity through [`Deck::draw`] and never return, so the
/// size only decreases over a match, from 40 down to 0.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 40-card deck.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in SUITS {
            for rank in RANKS {
                cards.push(Card::new_unchecked(suit, rank));
            }
        }
        Self { cards }
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the undealt cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the given card is still undealt.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a specific card from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain, or
    /// [`DeckError::NotInDeck`] if the card has already been dealt.
    pub fn draw(&mut self, card: Card) -> Result<(), DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        let pos = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(DeckError::NotInDeck)?;
        self.cards.swap_remove(pos);
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
