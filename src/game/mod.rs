//! Match engine and state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::player::Player;
use crate::table::Table;
use crate::turn::{Seat, Turns};

mod deal;
mod play;
mod score;
pub mod state;

pub use state::{MatchPhase, PlayOutcome};

/// An Escoba match between two players.
///
/// The engine owns the deck, the table, the turn order, and both players,
/// and is driven through deal, play, advance and finish operations. Every
/// concrete card is supplied by the caller, which makes replaying a
/// recorded match fully deterministic.
///
/// Accessors hand out read-only views; the engine is the only writer, so
/// its invariants cannot be corrupted from outside.
#[derive(Debug, Clone)]
pub struct Game {
    /// Undealt cards.
    deck: Deck,
    /// Face-up cards between the players.
    table: Table,
    /// Turn ownership and per-round turn count.
    turns: Turns,
    /// The two players, seat One first.
    players: [Player; 2],
    /// Current phase of the match.
    phase: MatchPhase,
    /// Seat of the most recent capture, receiver of the final sweep.
    last_capturer: Option<Seat>,
}

impl Game {
    /// Creates a match between the two players with a fresh 40-card deck.
    ///
    /// The match starts on round 1 with seat One to act.
    ///
    /// # Example
    ///
    /// ```
    /// use escoba::{Game, Player};
    ///
    /// # fn main() -> Result<(), escoba::PlayerError> {
    /// let game = Game::new(Player::new("Ana")?, Player::new("Luis")?);
    /// assert_eq!(game.round(), Some(1));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn new(player1: Player, player2: Player) -> Self {
        Self {
            deck: Deck::new(),
            table: Table::new(),
            turns: Turns::new(Seat::One),
            players: [player1, player2],
            phase: MatchPhase::Playing { round: 1 },
            last_capturer: None,
        }
    }

    /// Returns the current phase of the match.
    #[must_use]
    pub const fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Returns the current round number, `None` once the match finished.
    #[must_use]
    pub const fn round(&self) -> Option<u8> {
        self.phase.round()
    }

    /// Returns whether the match has finished.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Returns the seat that acts next.
    #[must_use]
    pub const fn current_seat(&self) -> Seat {
        self.turns.current()
    }

    /// Returns the player that acts next.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.turns.current())
    }

    /// Returns the player at the given seat.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// Returns the cards currently on the table.
    #[must_use]
    pub fn table_cards(&self) -> &[Card] {
        self.table.cards()
    }

    /// Returns the number of turns played in the current round.
    #[must_use]
    pub const fn turns_played(&self) -> u8 {
        self.turns.played()
    }

    /// Returns whether the current round has used up all its turns.
    #[must_use]
    pub const fn is_round_over(&self) -> bool {
        self.turns.is_round_over()
    }

    /// Returns the seat of the most recent capture, if any.
    #[must_use]
    pub const fn last_capturer(&self) -> Option<Seat> {
        self.last_capturer
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
