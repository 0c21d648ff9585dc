//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;
use crate::game::HandPhase;

/// Errors that can occur when comparing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// Neither card is a trump and no suit has been led.
    #[error("suit led is not set")]
    SuitLedUnset,
}

/// Errors that can occur when drawing from or editing the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck is empty.
    #[error("the deck is empty")]
    Empty,
    /// Not enough cards remain for the requested deal.
    #[error("not enough cards in the deck: needed {needed}, {remaining} remaining")]
    NotEnoughCards {
        /// Cards the deal requires.
        needed: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
    /// The card is not in the deck.
    #[error("{0} is not in the deck")]
    CardNotFound(Card),
    /// The card is already in the deck.
    #[error("{0} is already in the deck")]
    DuplicateCard(Card),
}

/// A player broke the capability contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The bid amount is neither a pass nor on the bid ladder.
    #[error("seat {seat} bid {amount}, which is not a legal amount")]
    InvalidBid {
        /// The seat that bid.
        seat: usize,
        /// The amount it bid.
        amount: u8,
    },
    /// The played card was not in the player's hand.
    #[error("seat {seat} played {card}, which is not in its hand")]
    CardNotInHand {
        /// The seat that played.
        seat: usize,
        /// The card it returned.
        card: Card,
    },
    /// The played card was not removed from the player's hand.
    #[error("seat {seat} played {card} but kept it in its hand")]
    CardNotRemoved {
        /// The seat that played.
        seat: usize,
        /// The card it returned.
        card: Card,
    },
}

/// Errors raised by the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The operation is not allowed in the current phase.
    #[error("operation not allowed in phase {0:?}")]
    InvalidPhase(HandPhase),
    /// The seat index is not in `0..4`.
    #[error("invalid seat {0}; seats are 0 to 3")]
    InvalidSeat(usize),
    /// The kitty was offered to a seat that did not win the auction.
    #[error("seat {seat} did not win the bid; seat {bidder} did")]
    NotBidder {
        /// The seat the kitty was offered to.
        seat: usize,
        /// The seat that won the auction.
        bidder: usize,
    },
    /// Trump has not been declared for this hand.
    #[error("trump is not set")]
    TrumpUnset,
    /// No card has been led in this hand.
    #[error("suit led is not set")]
    SuitLedUnset,
    /// The auction has not produced a contract.
    #[error("no contract has been made")]
    NoContract,
    /// A deck operation failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A player broke the capability contract.
    #[error(transparent)]
    Player(#[from] PlayerError),
}

impl RoundError {
    /// Returns whether the error was caused by a player rather than by the
    /// caller driving the round.
    ///
    /// Contract violations can be retried, for example by prompting a human
    /// again. Everything else is a bug in the orchestration.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::Player(_))
    }
}

impl From<RankError> for RoundError {
    fn from(err: RankError) -> Self {
        match err {
            RankError::SuitLedUnset => Self::SuitLedUnset,
        }
    }
}

/// Errors that can occur when parsing a card from its short form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card")]
    Empty,
    /// The rank was not `A`, `2`-`10`, `J`, `Q` or `K`.
    #[error("invalid rank")]
    InvalidRank,
    /// The suit was not `H`, `D`, `C` or `S`.
    #[error("invalid suit")]
    InvalidSuit,
}
