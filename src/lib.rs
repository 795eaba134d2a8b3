//! A match engine for the Spanish card game Escoba, with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that manages the full match flow:
//! dealing, turn-by-turn play, capture and broom detection, round
//! progression, end-of-deck settlement, and final scoring. Every concrete
//! card is supplied by the caller, so a recorded match replays
//! deterministically; the engine itself does no I/O, no parsing and no
//! persistence.
//!
//! # Example
//!
//! ```
//! use escoba::{Game, Player};
//!
//! # fn main() -> Result<(), escoba::PlayerError> {
//! let game = Game::new(Player::new("Ana")?, Player::new("Luis")?);
//! assert_eq!(game.round(), Some(1));
//! assert_eq!(game.cards_remaining(), escoba::DECK_SIZE);
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod summary;
pub mod table;
pub mod turn;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{
    AdvanceError, CardError, DealError, DeckError, FinishError, PlayError, PlayerError,
    SummaryError,
};
pub use game::{Game, MatchPhase, PlayOutcome};
pub use player::Player;
pub use summary::{MatchSummary, PlayerSummary};
pub use table::Table;
pub use turn::{Seat, TURNS_PER_ROUND, Turns};
