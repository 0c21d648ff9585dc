use alloc::vec::Vec;

use tracing::{debug, info, warn};

use crate::card::{Card, PLAYERS, TRICKS_PER_HAND, team_of};
use crate::error::{PlayerError, RoundError};
use crate::player::Player;
use crate::ranking::try_less_than;
use crate::result::TrickRecord;
use crate::trick::{TrickOutcome, evaluate_trick, suit_led_of};

use super::{HandPhase, Round};

impl<P: Player> Round<P> {
    /// Asks one seat for a card and checks that it came out of its hand.
    fn request_card(&mut self, seat: usize, played: &[Card]) -> Result<Card, PlayerError> {
        let player = &mut self.players[seat];
        let held: Vec<Card> = player.hand().cards().to_vec();
        let card = player.play_card(played);

        if !held.contains(&card) {
            warn!(seat, card = %card, "played a card it does not hold");
            return Err(PlayerError::CardNotInHand { seat, card });
        }
        if player.hand().contains(card) {
            warn!(seat, card = %card, "played a card without giving it up");
            return Err(PlayerError::CardNotRemoved { seat, card });
        }

        debug!(seat, card = %card, "played");
        Ok(card)
    }

    /// Hands the cards of an abandoned trick back to the seats that played them.
    fn return_cards(&mut self, leader: usize, played: &[Card]) {
        for (offset, &card) in played.iter().enumerate() {
            self.players[(leader + offset) % PLAYERS].deal_card(card);
        }
    }

    /// Plays one trick.
    ///
    /// The bidder leads the first trick and each trick's winner leads the
    /// next. Every seat plays once in table order; the first card fixes the
    /// suit led. The winning team earns the trick points, and the winning
    /// card becomes the hand's high card if it outranks the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not ready for a trick or all five
    /// have been played, or if a seat plays a card it does not hold. In the
    /// latter case the cards already played go back to their owners and the
    /// trick can be retried.
    pub fn play_trick(&mut self) -> Result<TrickOutcome, RoundError> {
        let completed = match self.phase {
            HandPhase::Redealt => 0,
            HandPhase::Trick(n) if usize::from(n) < TRICKS_PER_HAND => n,
            other => return Err(RoundError::InvalidPhase(other)),
        };
        let trump = self.trump()?;
        let leader = match self.leader {
            Some(seat) => seat,
            None => self.contract.ok_or(RoundError::NoContract)?.bidder,
        };

        let lead = self.request_card(leader, &[])?;
        let suit_led = suit_led_of(lead);
        let previous_suit_led = self.suit_led.replace(suit_led);

        let mut cards = [lead; PLAYERS];
        for offset in 1..PLAYERS {
            let seat = (leader + offset) % PLAYERS;
            match self.request_card(seat, &cards[..offset]) {
                Ok(card) => cards[offset] = card,
                Err(err) => {
                    self.return_cards(leader, &cards[..offset]);
                    self.suit_led = previous_suit_led;
                    return Err(err.into());
                }
            }
        }

        let outcome = evaluate_trick(&cards, leader, suit_led, trump)?;
        let outranks = match self.high_card {
            Some((high, _)) => try_less_than(high, outcome.winning_card, self.suit_led, trump)?,
            None => true,
        };

        self.scoreboard
            .award(team_of(outcome.winner), self.options.trick_points);
        if outranks {
            self.high_card = Some((outcome.winning_card, outcome.winner));
        }

        self.leader = Some(outcome.winner);
        self.tricks.push(TrickRecord {
            leader,
            suit_led,
            cards,
            outcome,
        });
        self.phase = HandPhase::Trick(completed + 1);

        info!(
            trick = completed + 1,
            winner = outcome.winner,
            card = %outcome.winning_card,
            "trick won"
        );
        Ok(outcome)
    }
}
