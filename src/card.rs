//! Card types and deck constants.

use crate::error::CardError;

/// Card suit of the 40-card Spanish deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Oros.
    Gold,
    /// Copas.
    Cups,
    /// Espadas.
    Swords,
    /// Bastos.
    Clubs,
}

/// All four suits, in deck order.
pub const SUITS: [Suit; 4] = [Suit::Gold, Suit::Cups, Suit::Swords, Suit::Clubs];

/// The ten legal ranks. The Spanish deck has no 8 or 9.
pub const RANKS: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 10, 11, 12];

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 40;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns an error if the rank is outside `1..=7` and `10..=12`.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        match rank {
            1..=7 | 10..=12 => Ok(Self { suit, rank }),
            _ => Err(CardError::InvalidRank(rank)),
        }
    }

    /// Builds a card from parts already known to be legal.
    pub(crate) const fn new_unchecked(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Capture value of the card: the rank for 1-7, then 8, 9 and 10 for
    /// the 10, 11 and 12.
    ///
    /// Both capture arithmetic and the end-of-match table check use this
    /// mapping.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank {
            10 => 8,
            11 => 9,
            12 => 10,
            rank => rank,
        }
    }
}
