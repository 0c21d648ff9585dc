//! The trump-aware, suit-led-aware ordering between two cards.
//!
//! Cards in 45s have no fixed order. A card is a trump if it belongs to the
//! declared trump suit or is the ace of hearts. Trumps beat everything else.
//! Among non-trumps only the suit led can win. Within each group the order
//! depends on the colour of the suit, which is captured by the tables below.

use crate::card::{ACE, Card, JACK, KING, QUEEN, Suit};
use crate::error::RankError;

/// A position in a trump ranking table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    AceOfHearts,
    Rank(u8),
}

use Slot::{AceOfHearts, Rank};

// Trump tables, highest first. The five and jack of trumps sit above the
// ace of hearts in every suit.
const HEARTS_TRUMP: [Slot; 13] = [
    Rank(5),
    Rank(JACK),
    AceOfHearts,
    Rank(KING),
    Rank(QUEEN),
    Rank(10),
    Rank(9),
    Rank(8),
    Rank(7),
    Rank(6),
    Rank(4),
    Rank(3),
    Rank(2),
];

const DIAMONDS_TRUMP: [Slot; 14] = [
    Rank(5),
    Rank(JACK),
    AceOfHearts,
    Rank(ACE),
    Rank(KING),
    Rank(QUEEN),
    Rank(10),
    Rank(9),
    Rank(8),
    Rank(7),
    Rank(6),
    Rank(4),
    Rank(3),
    Rank(2),
];

const BLACK_TRUMP: [Slot; 14] = [
    Rank(5),
    Rank(JACK),
    AceOfHearts,
    Rank(ACE),
    Rank(KING),
    Rank(QUEEN),
    Rank(2),
    Rank(3),
    Rank(4),
    Rank(6),
    Rank(7),
    Rank(8),
    Rank(9),
    Rank(10),
];

// Plain (non-trump) tables for the suit led, highest first.
const RED_PLAIN: [u8; 13] = [KING, QUEEN, JACK, 10, 9, 8, 7, 6, 5, 4, 3, 2, ACE];
const BLACK_PLAIN: [u8; 13] = [KING, QUEEN, JACK, ACE, 2, 3, 4, 5, 6, 7, 8, 9, 10];

const fn trump_table(trump: Suit) -> &'static [Slot] {
    match trump {
        Suit::Hearts => &HEARTS_TRUMP,
        Suit::Diamonds => &DIAMONDS_TRUMP,
        Suit::Clubs | Suit::Spades => &BLACK_TRUMP,
    }
}

const fn plain_table(suit_led: Suit) -> &'static [u8; 13] {
    if suit_led.is_red() {
        &RED_PLAIN
    } else {
        &BLACK_PLAIN
    }
}

const fn slot_of(card: Card) -> Slot {
    if card.is_ace_of_hearts() {
        AceOfHearts
    } else {
        Rank(card.rank())
    }
}

// Positions are only looked up for cards that belong to the table, so a miss
// cannot occur for a validly constructed card.
fn trump_position(card: Card, trump: Suit) -> usize {
    let table = trump_table(trump);
    let slot = slot_of(card);
    table.iter().position(|&s| s == slot).unwrap_or(table.len())
}

fn plain_position(card: Card, suit_led: Suit) -> usize {
    let table = plain_table(suit_led);
    table
        .iter()
        .position(|&r| r == card.rank())
        .unwrap_or(table.len())
}

/// Returns whether `card` is a trump when `trump` has been declared.
///
/// The ace of hearts is a trump in every hand.
#[must_use]
pub fn is_trump(card: Card, trump: Suit) -> bool {
    card.suit() == trump || card.is_ace_of_hearts()
}

/// Returns `true` if `a` loses to `b` given the suit led and the trump suit.
///
/// Two non-trump cards that are both off the suit led cannot be compared;
/// neither overtakes the other, so both directions return `false`. Equal
/// cards also return `false` in both directions.
///
/// # Example
///
/// ```
/// use fortyfives::{Card, Suit, less_than};
///
/// let five = Card::new(Suit::Clubs, 5);
/// let ace_of_hearts = Card::ACE_OF_HEARTS;
/// assert!(less_than(ace_of_hearts, five, Suit::Hearts, Suit::Clubs));
/// ```
#[must_use]
pub fn less_than(a: Card, b: Card, suit_led: Suit, trump: Suit) -> bool {
    match (is_trump(a, trump), is_trump(b, trump)) {
        (true, true) => trump_position(a, trump) > trump_position(b, trump),
        (false, true) => true,
        (true, false) => false,
        (false, false) => off_suit_less_than(a, b, suit_led),
    }
}

/// Like [`less_than`], but the suit led may still be unknown.
///
/// The suit led is only needed when neither card is a trump.
///
/// # Errors
///
/// Returns [`RankError::SuitLedUnset`] if neither card is a trump and
/// `suit_led` is `None`.
pub fn try_less_than(
    a: Card,
    b: Card,
    suit_led: Option<Suit>,
    trump: Suit,
) -> Result<bool, RankError> {
    if !is_trump(a, trump) && !is_trump(b, trump) {
        let suit_led = suit_led.ok_or(RankError::SuitLedUnset)?;
        return Ok(off_suit_less_than(a, b, suit_led));
    }
    // suit_led is irrelevant once a trump is involved
    Ok(less_than(a, b, Suit::Hearts, trump))
}

fn off_suit_less_than(a: Card, b: Card, suit_led: Suit) -> bool {
    match (a.suit() == suit_led, b.suit() == suit_led) {
        (true, true) => plain_position(a, suit_led) > plain_position(b, suit_led),
        (false, true) => true,
        (true, false) | (false, false) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trump_tables_cover_every_trump_card_once() {
        for trump in Suit::ALL {
            let mut trumps: alloc::vec::Vec<Card> = (ACE..=KING)
                .map(|rank| Card::new(trump, rank))
                .collect();
            if trump != Suit::Hearts {
                trumps.push(Card::ACE_OF_HEARTS);
            }
            let table = trump_table(trump);
            assert_eq!(table.len(), trumps.len());
            for card in trumps {
                assert!(trump_position(card, trump) < table.len(), "{card} missing");
            }
        }
    }

    #[test]
    fn plain_tables_are_permutations() {
        for table in [RED_PLAIN, BLACK_PLAIN] {
            let mut sorted = table;
            sorted.sort_unstable();
            assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13]);
        }
    }

    #[test]
    fn black_plain_ladder_reverses() {
        let two = Card::new(Suit::Spades, 2);
        let ten = Card::new(Suit::Spades, 10);
        let ace = Card::new(Suit::Spades, ACE);
        assert!(less_than(ten, two, Suit::Spades, Suit::Hearts));
        assert!(less_than(two, ace, Suit::Spades, Suit::Hearts));

        let red_two = Card::new(Suit::Diamonds, 2);
        let red_ten = Card::new(Suit::Diamonds, 10);
        assert!(less_than(red_two, red_ten, Suit::Diamonds, Suit::Clubs));
    }
}
