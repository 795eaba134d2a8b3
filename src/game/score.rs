use core::cmp::Ordering;

use crate::error::{AdvanceError, FinishError, SummaryError};
use crate::summary::{MatchSummary, PlayerSummary};
use crate::turn::Seat;

use super::{Game, MatchPhase};

/// Rounds scheduled for a full 40-card match: 10 cards on the initial
/// deal, then 6 per round.
const SCHEDULED_ROUNDS: u8 = 6;

/// Table sums a legal sequence of un-captured leftover cards can reach.
/// Anything else at settlement means a corrupted replay.
const VALID_LEFTOVER_SUMS: [u8; 4] = [10, 25, 40, 55];

impl Game {
    /// Moves the match to the next round, or settles it when the deck is
    /// exhausted on or after the last scheduled round.
    ///
    /// On a plain advance the round number increments, the turn counter
    /// resets, and seat One is put on turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the match has already finished, or if the
    /// end-of-deck settlement itself fails.
    pub fn advance_round(&mut self) -> Result<(), AdvanceError> {
        let MatchPhase::Playing { round } = self.phase else {
            return Err(AdvanceError::MatchFinished);
        };
        if self.deck.is_empty() && round >= SCHEDULED_ROUNDS {
            self.finish()?;
            return Ok(());
        }
        self.phase = MatchPhase::Playing { round: round + 1 };
        self.turns.reset();
        self.turns.set_current(Seat::One);
        Ok(())
    }

    /// Settles the match.
    ///
    /// Any cards left on the table are swept into the captured pile of the
    /// last seat that captured, falling back to the seat currently on turn
    /// when no capture ever happened. The match becomes terminal: every
    /// subsequent deal, play, advance or finish is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the match has already finished, if either
    /// player still holds cards, or if a non-empty table sums to a value
    /// unreachable by legal play. Nothing is mutated on failure.
    pub fn finish(&mut self) -> Result<(), FinishError> {
        if self.phase.is_finished() {
            return Err(FinishError::MatchFinished);
        }
        if self.players.iter().any(|p| !p.hand().is_empty()) {
            return Err(FinishError::HandNotEmpty);
        }
        if !self.table.is_empty() {
            let sum = self.table.value_sum();
            if !VALID_LEFTOVER_SUMS.contains(&sum) {
                return Err(FinishError::BadTableSum(sum));
            }
            let receiver = self.last_capturer.unwrap_or(self.turns.current());
            self.table.sweep_to(&mut self.players[receiver.index()]);
        }
        self.phase = MatchPhase::Finished;
        Ok(())
    }

    /// Final score for the given seat.
    ///
    /// One point per broom; 3 points for all four sevens, else 1 for the
    /// seven of gold; 1 point for strictly more sevens than the rival; 2
    /// points for all ten golds, else 1 for strictly more golds; 1 point
    /// for strictly more captured cards. Pure over the captured piles and
    /// broom counters, so repeated calls agree.
    #[must_use]
    pub fn final_score(&self, seat: Seat) -> u8 {
        let player = self.player(seat);
        let rival = self.player(seat.other());

        let mut points = player.brooms();
        if player.sevens_captured() == 4 {
            points += 3;
        } else if player.has_guindis() {
            points += 1;
        }
        if player.sevens_captured() > rival.sevens_captured() {
            points += 1;
        }
        if player.golds_captured() == 10 {
            points += 2;
        } else if player.golds_captured() > rival.golds_captured() {
            points += 1;
        }
        if player.captured_count() > rival.captured_count() {
            points += 1;
        }
        points
    }

    /// Builds the final summary of a finished match.
    ///
    /// # Errors
    ///
    /// Returns an error while rounds are still being played.
    pub fn summary(&self) -> Result<MatchSummary, SummaryError> {
        if !self.phase.is_finished() {
            return Err(SummaryError::NotFinished);
        }
        let tally = |seat: Seat| {
            let player = self.player(seat);
            PlayerSummary {
                name: player.name().into(),
                score: self.final_score(seat),
                brooms: player.brooms(),
                captured: player.captured_count(),
                golds: player.golds_captured(),
                sevens: player.sevens_captured(),
                guindis: player.has_guindis(),
            }
        };
        let players = [tally(Seat::One), tally(Seat::Two)];
        let winner = match players[0].score.cmp(&players[1].score) {
            Ordering::Greater => Some(Seat::One),
            Ordering::Less => Some(Seat::Two),
            Ordering::Equal => None,
        };
        Ok(MatchSummary { players, winner })
    }
}
