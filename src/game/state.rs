//! Hand phase types.

/// The phase of the hand in progress.
///
/// Phases only move forward within a hand; [`Round::reset`](crate::Round::reset)
/// returns to [`HandPhase::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandPhase {
    /// No hand in progress; the deck is full.
    Idle,
    /// Every seat holds five cards.
    Dealt,
    /// The auction has fixed trump and the bidder.
    Auctioned,
    /// The bidder has taken the kitty.
    KittyDealt,
    /// Every seat has discarded.
    Discarded,
    /// Every seat has been refilled to five cards.
    Redealt,
    /// The given number of tricks has been completed.
    Trick(u8),
    /// The hand has been settled.
    Scored,
}
