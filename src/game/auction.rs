use tracing::{info, warn};

use crate::card::{PLAYERS, Suit, next_seat};
use crate::error::{PlayerError, RoundError};
use crate::player::{Bid, Player};
use crate::result::Contract;

use super::{HandPhase, Round};

impl<P: Player> Round<P> {
    /// Asks one seat for a bid and checks it against the bid ladder.
    fn request_bid(&mut self, seat: usize) -> Result<Option<(u8, Suit)>, PlayerError> {
        match self.players[seat].get_bid(&self.bid_history) {
            Bid::Pass => Ok(None),
            Bid::Call { amount, trump } if self.options.is_valid_bid(amount) => {
                Ok(Some((amount, trump)))
            }
            Bid::Call { amount, .. } => {
                warn!(seat, amount, "rejected bid off the ladder");
                Err(PlayerError::InvalidBid { seat, amount })
            }
        }
    }

    /// Runs the auction for the dealt hand.
    ///
    /// The three seats after the dealer bid in turn, then the dealer. A bid
    /// only takes the lead if it is strictly higher than the best so far. If
    /// nobody before the dealer bids, the dealer is bagged: it must name
    /// trump and takes the contract at the bagged amount.
    ///
    /// Trump and the contract are fixed for the hand, and the dealer moves
    /// one seat to the left.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand has not just been dealt, or if a seat
    /// bids an amount that is not on the ladder. After a rejected bid the
    /// phase is unchanged and the auction can be rerun from the start.
    pub fn bidding_phase(&mut self) -> Result<Contract, RoundError> {
        if self.phase != HandPhase::Dealt {
            return Err(RoundError::InvalidPhase(self.phase));
        }

        self.bid_history.clear();
        let mut best: Option<Contract> = None;

        for offset in 1..PLAYERS {
            let seat = (self.dealer + offset) % PLAYERS;
            if let Some((amount, trump)) = self.request_bid(seat)? {
                self.bid_history.push(amount);
                if best.is_none_or(|b| amount > b.amount) {
                    best = Some(Contract {
                        bidder: seat,
                        amount,
                        trump,
                        forced: false,
                    });
                }
            }
        }

        let dealer = self.dealer;
        let contract = match best {
            None => Contract {
                bidder: dealer,
                amount: self.options.bagged_bid,
                trump: self.players[dealer].bagged(),
                forced: true,
            },
            Some(best) => match self.request_bid(dealer)? {
                Some((amount, trump)) => {
                    self.bid_history.push(amount);
                    if amount > best.amount {
                        Contract {
                            bidder: dealer,
                            amount,
                            trump,
                            forced: false,
                        }
                    } else {
                        best
                    }
                }
                None => best,
            },
        };

        self.trump = Some(contract.trump);
        self.contract = Some(contract);
        self.dealer = next_seat(dealer);
        for player in &mut self.players {
            player.trump_declared(contract.trump, contract.bidder);
        }

        info!(
            bidder = contract.bidder,
            amount = contract.amount,
            trump = %contract.trump,
            forced = contract.forced,
            "auction won"
        );

        self.phase = HandPhase::Auctioned;
        Ok(contract)
    }
}
