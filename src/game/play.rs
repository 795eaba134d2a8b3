use crate::card::Card;
use crate::error::PlayError;
use crate::turn::Seat;

use super::state::PlayOutcome;
use super::Game;

/// A capture together with the played card must total exactly this value.
const CAPTURE_TARGET: u8 = 15;

impl Game {
    /// Plays a card for the seat currently on turn.
    ///
    /// With an empty `capture` the card is laid on the table. Otherwise the
    /// listed table cards are captured together with the played card; their
    /// capture values plus the played card's must total exactly 15. A
    /// capture that clears the whole table is a broom and earns the acting
    /// player a broom point.
    ///
    /// The turn passes to the other seat afterwards. When the round's last
    /// turn completes, seat One is put back on turn so the next round
    /// starts with it.
    ///
    /// # Errors
    ///
    /// Returns an error if the match has finished, the round's turns are
    /// exhausted, the card is not in the acting player's hand, a capture
    /// target is not on the table, or the capture does not sum to 15.
    /// Nothing is mutated on failure.
    pub fn play(&mut self, card: Card, capture: &[Card]) -> Result<PlayOutcome, PlayError> {
        if self.phase.is_finished() {
            return Err(PlayError::MatchFinished);
        }
        if self.turns.is_round_over() {
            return Err(PlayError::RoundOver);
        }

        let seat = self.turns.current();
        if !self.player(seat).hand().contains(&card) {
            return Err(PlayError::NotInHand);
        }

        let outcome = if capture.is_empty() {
            self.player_mut(seat)
                .remove_from_hand(card)
                .map_err(|_| PlayError::NotInHand)?;
            self.table.add(card);
            PlayOutcome::Laid
        } else {
            self.capture(seat, card, capture)?
        };

        self.turns.advance();
        if self.turns.is_round_over() {
            self.turns.set_current(Seat::One);
        }
        Ok(outcome)
    }

    fn capture(
        &mut self,
        seat: Seat,
        card: Card,
        capture: &[Card],
    ) -> Result<PlayOutcome, PlayError> {
        for &target in capture {
            if !self.table.contains(target) {
                return Err(PlayError::NotOnTable);
            }
        }
        let sum = card.value() + capture.iter().map(|c| c.value()).sum::<u8>();
        if sum != CAPTURE_TARGET {
            return Err(PlayError::BadSum(sum));
        }

        // Every capture target is on the table, so covering the whole
        // table reduces to a count comparison.
        let broom = capture.len() == self.table.len();

        self.player_mut(seat)
            .remove_from_hand(card)
            .map_err(|_| PlayError::NotInHand)?;
        self.table.remove_all(capture);

        let player = self.player_mut(seat);
        player.add_to_captured(card);
        for &target in capture {
            player.add_to_captured(target);
        }
        self.last_capturer = Some(seat);
        if broom {
            self.player_mut(seat).add_broom();
        }
        Ok(PlayOutcome::Captured { broom })
    }
}
