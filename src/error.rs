//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside the Spanish-deck set (1-7 and 10-12).
    #[error("invalid rank: {0}")]
    InvalidRank(u8),
}

/// Errors that can occur when constructing or mutating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Player name is empty.
    #[error("player name is empty")]
    EmptyName,
    /// Card is not in the player's hand.
    #[error("card is not in the player's hand")]
    NotInHand,
}

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left.
    #[error("the deck has no cards left")]
    Empty,
    /// The card has already been dealt.
    #[error("the card is not in the deck")]
    NotInDeck,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The match has already finished.
    #[error("the match has already finished")]
    MatchFinished,
    /// The initial deal is only legal on round 1.
    #[error("the initial deal is only legal on round 1")]
    NotFirstRound,
    /// The per-round deal is not legal on round 1.
    #[error("round 1 uses the initial deal")]
    FirstRound,
    /// A hand must receive exactly 3 cards.
    #[error("a hand must receive exactly 3 cards")]
    WrongHandSize,
    /// The initial table must receive exactly 4 cards.
    #[error("the initial table must receive exactly 4 cards")]
    WrongTableSize,
    /// A dealt card could not be drawn from the deck.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The match has already finished.
    #[error("the match has already finished")]
    MatchFinished,
    /// All turns of the round have been played.
    #[error("the round is already over")]
    RoundOver,
    /// The played card is not in the acting player's hand.
    #[error("card is not in the acting player's hand")]
    NotInHand,
    /// A capture target is not on the table.
    #[error("capture card is not on the table")]
    NotOnTable,
    /// The played card plus the capture must total exactly 15.
    #[error("capture does not sum to 15 (got {0})")]
    BadSum(u8),
}

/// Errors that can occur when settling a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FinishError {
    /// The match has already finished.
    #[error("the match has already finished")]
    MatchFinished,
    /// A player still holds cards.
    #[error("hands must be empty to finish the match")]
    HandNotEmpty,
    /// The leftover table sum is unreachable by legal play.
    #[error("invalid leftover table sum: {0}")]
    BadTableSum(u8),
}

/// Errors that can occur when advancing to the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceError {
    /// The match has already finished.
    #[error("the match has already finished")]
    MatchFinished,
    /// Advancing past the last round settles the match; that settlement
    /// failed.
    #[error(transparent)]
    Finish(#[from] FinishError),
}

/// Errors that can occur when building the match summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// The match has not finished yet.
    #[error("the match has not finished yet")]
    NotFinished,
}
