//! Final match summary types.

extern crate alloc;

use alloc::string::String;

use crate::turn::Seat;

/// Final tallies for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    /// The player's name.
    pub name: String,
    /// Final score.
    pub score: u8,
    /// Brooms made.
    pub brooms: u8,
    /// Total cards captured.
    pub captured: usize,
    /// Gold-suit cards captured.
    pub golds: usize,
    /// Sevens captured.
    pub sevens: usize,
    /// Whether the seven of gold was captured.
    pub guindis: bool,
}

/// Result of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    /// Per-seat player tallies, seat One first.
    pub players: [PlayerSummary; 2],
    /// Seat with the higher score, `None` on a tie.
    pub winner: Option<Seat>,
}
