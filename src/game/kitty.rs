use tracing::debug;

use crate::card::KITTY_SIZE;
use crate::error::{DeckError, RoundError};
use crate::player::Player;

use super::{HandPhase, Round};

impl<P: Player> Round<P> {
    /// Deals the kitty (three cards) to the seat that won the auction.
    ///
    /// # Errors
    ///
    /// Returns an error if the auction has not just finished, `seat` is
    /// out of range or is not the bidder, or the deck is short.
    pub fn deal_kiddie(&mut self, seat: usize) -> Result<(), RoundError> {
        if self.phase != HandPhase::Auctioned {
            return Err(RoundError::InvalidPhase(self.phase));
        }
        let seat = Self::check_seat(seat)?;
        let bidder = self.contract.ok_or(RoundError::NoContract)?.bidder;
        if seat != bidder {
            return Err(RoundError::NotBidder { seat, bidder });
        }
        if self.deck.len() < KITTY_SIZE {
            return Err(DeckError::NotEnoughCards {
                needed: KITTY_SIZE,
                remaining: self.deck.len(),
            }
            .into());
        }

        for _ in 0..KITTY_SIZE {
            let card = self.deck.draw().ok_or(DeckError::Empty)?;
            self.players[seat].deal_card(card);
        }
        debug!(seat, cards = self.players[seat].hand_size(), "dealt kitty");

        self.phase = HandPhase::KittyDealt;
        Ok(())
    }

    /// Asks every seat to discard before the redeal.
    ///
    /// How many cards to drop is the player's decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the kitty has not just been dealt.
    pub fn have_players_discard(&mut self) -> Result<(), RoundError> {
        if self.phase != HandPhase::KittyDealt {
            return Err(RoundError::InvalidPhase(self.phase));
        }

        for (seat, player) in self.players.iter_mut().enumerate() {
            let before = player.hand_size();
            player.discard();
            debug!(
                seat,
                discarded = before.saturating_sub(player.hand_size()),
                "discarded"
            );
        }

        self.phase = HandPhase::Discarded;
        Ok(())
    }
}
