//! Turn ownership and per-round turn counting.

/// A player slot in the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The first player; acts first in every round.
    One,
    /// The second player.
    Two,
}

impl Seat {
    /// Returns the other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Index into a `[T; 2]` keyed by seat.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// Turns in a round: two players each playing out a 3-card hand.
pub const TURNS_PER_ROUND: u8 = 6;

/// Cycles turn ownership between the two seats and counts the turns played
/// in the current round.
#[derive(Debug, Clone, Copy)]
pub struct Turns {
    current: Seat,
    played: u8,
}

impl Turns {
    /// Creates a sequencer with the given seat to act and no turns played.
    #[must_use]
    pub const fn new(first: Seat) -> Self {
        Self {
            current: first,
            played: 0,
        }
    }

    /// Returns the seat that acts next.
    #[must_use]
    pub const fn current(&self) -> Seat {
        self.current
    }

    /// Returns the number of turns played this round.
    #[must_use]
    pub const fn played(&self) -> u8 {
        self.played
    }

    /// Restarts the round with the given seat to act.
    pub const fn start(&mut self, first: Seat) {
        self.current = first;
        self.played = 0;
    }

    /// Passes the turn to the other seat and counts the completed turn.
    pub const fn advance(&mut self) {
        self.current = self.current.other();
        self.played += 1;
    }

    /// Returns whether the round's turn budget is spent.
    #[must_use]
    pub const fn is_round_over(&self) -> bool {
        self.played >= TURNS_PER_ROUND
    }

    /// Zeroes the turn counter without changing whose turn it is.
    pub const fn reset(&mut self) {
        self.played = 0;
    }

    /// Forces the seat that acts next.
    pub const fn set_current(&mut self, seat: Seat) {
        self.current = seat;
    }
}
