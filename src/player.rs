//! The player capability invoked by a [`Round`](crate::Round).
//!
//! The round owns no decision-making. Every bid, discard and card play is a
//! synchronous call into a [`Player`], which may be a human prompt, a
//! scripted seat, or a computer heuristic.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::hand::Hand;

/// A bid made during the auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bid {
    /// No bid.
    Pass,
    /// A bid of `amount` naming `trump` as the trump suit.
    Call {
        /// The bid amount; must be on the bid ladder.
        amount: u8,
        /// The trump suit named with the bid.
        trump: Suit,
    },
}

impl Bid {
    /// Creates a bid of `amount` in `trump`.
    #[must_use]
    pub const fn call(amount: u8, trump: Suit) -> Self {
        Self::Call { amount, trump }
    }

    /// Returns the bid amount; a pass is worth 0.
    #[must_use]
    pub const fn amount(&self) -> u8 {
        match self {
            Self::Pass => 0,
            Self::Call { amount, .. } => *amount,
        }
    }
}

/// The amounts bid so far in the current auction, in order. Passes are not
/// recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BidHistory {
    amounts: Vec<u8>,
}

impl BidHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            amounts: Vec::new(),
        }
    }

    /// Appends a bid amount.
    pub fn push(&mut self, amount: u8) {
        self.amounts.push(amount);
    }

    /// Clears the history for a new auction.
    pub fn clear(&mut self) {
        self.amounts.clear();
    }

    /// Returns the recorded amounts.
    #[must_use]
    pub fn amounts(&self) -> &[u8] {
        &self.amounts
    }

    /// Returns the highest amount bid so far.
    #[must_use]
    pub fn highest(&self) -> Option<u8> {
        self.amounts.iter().copied().max()
    }

    /// Returns the number of recorded bids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Returns whether nobody has bid yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

/// A seat at the table.
///
/// Implementors own their hand. The round deals into it through
/// [`Player::deal_card`] and checks it around every play.
pub trait Player {
    /// Returns the cards currently held.
    fn hand(&self) -> &Hand;

    /// Returns the cards currently held, mutably.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Adds a dealt card to the hand.
    fn deal_card(&mut self, card: Card) {
        self.hand_mut().add_card(card);
    }

    /// Discards unwanted cards before the redeal, keeping at least one.
    fn discard(&mut self);

    /// Chooses a bid given the amounts bid so far.
    fn get_bid(&mut self, history: &BidHistory) -> Bid;

    /// Names trump after being forced to bid as dealer.
    fn bagged(&mut self) -> Suit;

    /// Plays a card given the cards already played to this trick.
    ///
    /// The returned card must be held and must be removed from the hand.
    fn play_card(&mut self, played: &[Card]) -> Card;

    /// Called once the auction has fixed trump and the winning seat.
    fn trump_declared(&mut self, _trump: Suit, _bidder: usize) {}

    /// Returns the number of cards held.
    fn hand_size(&self) -> usize {
        self.hand().len()
    }

    /// Empties the hand at the end of a hand.
    fn reset_hand(&mut self) {
        self.hand_mut().clear();
    }
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn hand(&self) -> &Hand {
        (**self).hand()
    }

    fn hand_mut(&mut self) -> &mut Hand {
        (**self).hand_mut()
    }

    fn deal_card(&mut self, card: Card) {
        (**self).deal_card(card);
    }

    fn discard(&mut self) {
        (**self).discard();
    }

    fn get_bid(&mut self, history: &BidHistory) -> Bid {
        (**self).get_bid(history)
    }

    fn bagged(&mut self) -> Suit {
        (**self).bagged()
    }

    fn play_card(&mut self, played: &[Card]) -> Card {
        (**self).play_card(played)
    }

    fn trump_declared(&mut self, trump: Suit, bidder: usize) {
        (**self).trump_declared(trump, bidder);
    }

    fn hand_size(&self) -> usize {
        (**self).hand_size()
    }

    fn reset_hand(&mut self) {
        (**self).reset_hand();
    }
}
