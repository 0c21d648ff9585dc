//! Card types, pack constants, and the text forms of cards.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in pack order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns whether the suit is red (hearts or diamonds).
    ///
    /// Red and black suits rank their plain cards in opposite directions.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }

    /// Returns the single-letter abbreviation used by the short card form.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;

/// A playing card.
///
/// Cards have no context-free ordering. Whether one card beats another
/// depends on the trump suit and the suit led; see [`crate::ranking`].
///
/// The ace of hearts carries a tag that makes it a trump in every hand,
/// while its suit stays [`Suit::Hearts`] for suit-led purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
    ace_of_hearts: bool,
}

impl Card {
    /// The ace of hearts, a trump regardless of the declared trump suit.
    pub const ACE_OF_HEARTS: Self = Self::new(Suit::Hearts, ACE);

    /// Creates a new card.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is outside `1..=13` (1 = Ace, 11 = Jack,
    /// 12 = Queen, 13 = King). Use [`Card::try_new`] for unchecked input.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        match Self::try_new(suit, rank) {
            Some(card) => card,
            None => panic!("card rank must be within 1..=13"),
        }
    }

    /// Creates a new card, returning `None` if `rank` is outside `1..=13`.
    #[must_use]
    pub const fn try_new(suit: Suit, rank: u8) -> Option<Self> {
        if rank < ACE || rank > KING {
            return None;
        }
        Some(Self {
            suit,
            rank,
            ace_of_hearts: rank == ACE && matches!(suit, Suit::Hearts),
        })
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns whether this is the ace of hearts.
    #[must_use]
    pub const fn is_ace_of_hearts(&self) -> bool {
        self.ace_of_hearts
    }

    const fn rank_name(&self) -> Option<&'static str> {
        match self.rank {
            ACE => Some("Ace"),
            JACK => Some("Jack"),
            QUEEN => Some("Queen"),
            KING => Some("King"),
            _ => None,
        }
    }

    const fn rank_letter(&self) -> Option<char> {
        match self.rank {
            ACE => Some('A'),
            JACK => Some('J'),
            QUEEN => Some('Q'),
            KING => Some('K'),
            _ => None,
        }
    }
}

/// Formats as "King of Hearts". The alternate form (`{:#}`) gives the short
/// form accepted by [`FromStr`], e.g. "KH" or "10C".
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            match self.rank_letter() {
                Some(letter) => write!(f, "{letter}")?,
                None => write!(f, "{}", self.rank)?,
            }
            return write!(f, "{}", self.suit.letter());
        }

        match self.rank_name() {
            Some(name) => write!(f, "{name} of {}", self.suit),
            None => write!(f, "{} of {}", self.rank, self.suit),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the short form: a rank (`A`, `2`-`10`, `J`, `Q`, `K`) followed
    /// by a suit letter (`H`, `D`, `C`, `S`). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_letter = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_text = chars.as_str();
        if rank_text.is_empty() {
            return Err(ParseCardError::InvalidRank);
        }

        let suit = Suit::from_letter(suit_letter).ok_or(ParseCardError::InvalidSuit)?;
        let rank = parse_rank(rank_text).ok_or(ParseCardError::InvalidRank)?;

        Self::try_new(suit, rank).ok_or(ParseCardError::InvalidRank)
    }
}

fn parse_rank(text: &str) -> Option<u8> {
    [("A", ACE), ("J", JACK), ("Q", QUEEN), ("K", KING)]
        .iter()
        .find(|(name, _)| text.eq_ignore_ascii_case(name))
        .map(|&(_, rank)| rank)
        .or_else(|| text.parse().ok())
}

/// Number of cards in the pack.
pub const DECK_SIZE: usize = 52;

/// Number of seats at the table.
pub const PLAYERS: usize = 4;

/// Number of cards each seat holds after a deal.
pub const HAND_SIZE: usize = 5;

/// Number of cards in the kitty given to the auction winner.
pub const KITTY_SIZE: usize = 3;

/// Number of tricks played in a hand.
pub const TRICKS_PER_HAND: usize = HAND_SIZE;

/// Returns the team (0 or 1) a seat belongs to. Partners sit opposite.
#[must_use]
pub const fn team_of(seat: usize) -> usize {
    seat % 2
}

/// Returns the seat to the left of `seat`.
#[must_use]
pub const fn next_seat(seat: usize) -> usize {
    (seat + 1) % PLAYERS
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn only_the_heart_ace_is_tagged() {
        assert!(Card::new(Suit::Hearts, ACE).is_ace_of_hearts());
        assert!(!Card::new(Suit::Diamonds, ACE).is_ace_of_hearts());
        assert!(!Card::new(Suit::Hearts, KING).is_ace_of_hearts());
        assert_eq!(Card::ACE_OF_HEARTS.suit(), Suit::Hearts);
    }

    #[test]
    fn rejects_out_of_range_ranks() {
        assert_eq!(Card::try_new(Suit::Clubs, 0), None);
        assert_eq!(Card::try_new(Suit::Clubs, 14), None);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(Card::new(Suit::Hearts, KING).to_string(), "King of Hearts");
        assert_eq!(Card::new(Suit::Clubs, 10).to_string(), "10 of Clubs");
        assert_eq!(Card::ACE_OF_HEARTS.to_string(), "Ace of Hearts");
        assert_eq!(alloc::format!("{:#}", Card::new(Suit::Spades, 5)), "5S");

        assert_eq!("10d".parse(), Ok(Card::new(Suit::Diamonds, 10)));
        assert_eq!("AH".parse(), Ok(Card::ACE_OF_HEARTS));
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("H".parse::<Card>(), Err(ParseCardError::InvalidRank));
        assert_eq!("1H".parse::<Card>(), Ok(Card::ACE_OF_HEARTS));
        assert_eq!("14H".parse::<Card>(), Err(ParseCardError::InvalidRank));
        assert_eq!("KX".parse::<Card>(), Err(ParseCardError::InvalidSuit));
    }

    #[test]
    fn seats_and_teams() {
        assert_eq!(team_of(0), team_of(2));
        assert_eq!(team_of(1), team_of(3));
        assert_eq!(next_seat(3), 0);
    }
}
