//! Match phase and play outcome types.

/// Phase of the match.
///
/// Replaces a sentinel round number: a finished match is its own state,
/// not a special value threaded through round arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Rounds are still being dealt and played.
    Playing {
        /// Current round number, starting at 1.
        round: u8,
    },
    /// The match has been settled; no further operation is legal.
    Finished,
}

impl MatchPhase {
    /// Returns the current round number, `None` once finished.
    #[must_use]
    pub const fn round(self) -> Option<u8> {
        match self {
            Self::Playing { round } => Some(round),
            Self::Finished => None,
        }
    }

    /// Returns whether the match has finished.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// What a call to [`Game::play`](super::Game::play) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card was laid on the table; nothing was captured.
    Laid,
    /// The card captured cards from the table.
    Captured {
        /// Whether the capture cleared the entire table (a broom).
        broom: bool,
    },
}
