extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DealError, DeckError};
use crate::turn::Seat;

use super::{Game, MatchPhase};

impl Game {
    /// Deals the opening hands and the four-card table, drawing every card
    /// from the deck.
    ///
    /// Legal only on round 1, before the match has moved on.
    ///
    /// # Errors
    ///
    /// Returns an error if the match has finished, the round is not 1, a
    /// hand is not exactly 3 cards, the table is not exactly 4 cards, or a
    /// card is not available in the deck. Nothing is mutated on failure.
    pub fn deal_initial(
        &mut self,
        hand1: &[Card],
        hand2: &[Card],
        table: &[Card],
    ) -> Result<(), DealError> {
        match self.phase {
            MatchPhase::Finished => return Err(DealError::MatchFinished),
            MatchPhase::Playing { round } if round != 1 => {
                return Err(DealError::NotFirstRound);
            }
            MatchPhase::Playing { .. } => {}
        }
        if hand1.len() != 3 || hand2.len() != 3 {
            return Err(DealError::WrongHandSize);
        }
        if table.len() != 4 {
            return Err(DealError::WrongTableSize);
        }
        self.check_drawable(&[hand1, hand2, table])?;

        self.deal_to_hand(Seat::One, hand1)?;
        self.deal_to_hand(Seat::Two, hand2)?;
        for &card in table {
            self.deck.draw(card)?;
            self.table.add(card);
        }
        Ok(())
    }

    /// Deals three fresh cards to each hand for a round after the first.
    ///
    /// Puts seat One back on turn for the new round.
    ///
    /// # Errors
    ///
    /// Returns an error if the match has finished, the round is still 1, a
    /// hand is not exactly 3 cards, or a card is not available in the deck.
    /// Nothing is mutated on failure.
    pub fn deal_round(&mut self, hand1: &[Card], hand2: &[Card]) -> Result<(), DealError> {
        match self.phase {
            MatchPhase::Finished => return Err(DealError::MatchFinished),
            MatchPhase::Playing { round: 1 } => return Err(DealError::FirstRound),
            MatchPhase::Playing { .. } => {}
        }
        if hand1.len() != 3 || hand2.len() != 3 {
            return Err(DealError::WrongHandSize);
        }
        self.check_drawable(&[hand1, hand2])?;

        self.deal_to_hand(Seat::One, hand1)?;
        self.deal_to_hand(Seat::Two, hand2)?;
        self.turns.set_current(Seat::One);
        Ok(())
    }

    /// Checks that every listed card can be drawn: still in the deck and
    /// not repeated within the deal itself. Keeps failed deals free of
    /// partial mutation.
    fn check_drawable(&self, lists: &[&[Card]]) -> Result<(), DealError> {
        let mut seen: Vec<Card> = Vec::new();
        for &card in lists.iter().flat_map(|list| list.iter()) {
            if !self.deck.contains(card) || seen.contains(&card) {
                return Err(DealError::Deck(DeckError::NotInDeck));
            }
            seen.push(card);
        }
        Ok(())
    }

    fn deal_to_hand(&mut self, seat: Seat, cards: &[Card]) -> Result<(), DealError> {
        for &card in cards {
            self.deck.draw(card)?;
            self.player_mut(seat).add_to_hand(card);
        }
        Ok(())
    }
}
