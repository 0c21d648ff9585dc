//! Trick evaluation.

use crate::card::{Card, PLAYERS, Suit};
use crate::error::RoundError;
use crate::ranking::less_than;

/// The winner of a completed trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickOutcome {
    /// The card that took the trick.
    pub winning_card: Card,
    /// The seat that played the winning card.
    pub winner: usize,
}

/// Returns the suit led by the first card of a trick.
///
/// The ace of hearts keeps its suit, so leading it leads hearts for the
/// purpose of following suit. It is still a trump when ranking the trick.
#[must_use]
pub const fn suit_led_of(lead: Card) -> Suit {
    lead.suit()
}

/// Determines which of four played cards takes the trick.
///
/// `cards` holds the plays in table order starting with `leader`, so
/// `cards[i]` was played by seat `(leader + i) % 4`.
///
/// # Errors
///
/// Returns [`RoundError::InvalidSeat`] if `leader` is not in `0..4`.
///
/// # Example
///
/// ```
/// use fortyfives::{Card, Suit, evaluate_trick, suit_led_of};
///
/// let cards = [
///     Card::new(Suit::Spades, 13),
///     Card::new(Suit::Spades, 2),
///     Card::new(Suit::Diamonds, 3),
///     Card::new(Suit::Spades, 10),
/// ];
/// let outcome = evaluate_trick(&cards, 1, suit_led_of(cards[0]), Suit::Diamonds)?;
/// assert_eq!(outcome.winner, 3);
/// assert_eq!(outcome.winning_card, Card::new(Suit::Diamonds, 3));
/// # Ok::<(), fortyfives::RoundError>(())
/// ```
pub fn evaluate_trick(
    cards: &[Card; PLAYERS],
    leader: usize,
    suit_led: Suit,
    trump: Suit,
) -> Result<TrickOutcome, RoundError> {
    if leader >= PLAYERS {
        return Err(RoundError::InvalidSeat(leader));
    }

    let winning_card = cards[1..].iter().fold(cards[0], |best, &card| {
        if less_than(best, card, suit_led, trump) {
            card
        } else {
            best
        }
    });

    // A pack never holds two equal cards, so identity locates the seat.
    let offset = cards
        .iter()
        .position(|&card| card == winning_card)
        .unwrap_or(0);

    Ok(TrickOutcome {
        winning_card,
        winner: (leader + offset) % PLAYERS,
    })
}
