//! Auction and hand result types.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::trick::TrickOutcome;

/// The contract fixed by the auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contract {
    /// The seat that won the auction.
    pub bidder: usize,
    /// The winning bid amount.
    pub amount: u8,
    /// The trump suit for the hand.
    pub trump: Suit,
    /// Whether the dealer was bagged into the contract.
    pub forced: bool,
}

/// A completed trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickRecord {
    /// The seat that led.
    pub leader: usize,
    /// The suit of the first card.
    pub suit_led: Suit,
    /// The cards in play order, starting with the leader.
    pub cards: [Card; 4],
    /// The winning card and seat.
    pub outcome: TrickOutcome,
}

/// Result of a complete hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandResult {
    /// The contract that was played.
    pub contract: Contract,
    /// The five tricks in order.
    pub tricks: Vec<TrickRecord>,
    /// The highest card played in the hand and the seat that played it.
    pub high_card: (Card, usize),
    /// Points each team earned during the hand.
    pub points: [i32; 2],
    /// Whether the bidding team made its bid.
    pub made_bid: bool,
    /// Cumulative team totals after settlement.
    pub totals: [i32; 2],
}
