//! The 52-card pack.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{ACE, Card, DECK_SIZE, KING, Suit};
use crate::error::DeckError;

/// A pack of cards used as a stack; cards are drawn from the back.
///
/// A deck never holds two equal cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled pack.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.reset();
        deck
    }

    /// Creates a deck from the given cards, the last card being drawn first.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if a card appears twice.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, DeckError> {
        let mut deck = Self { cards: Vec::new() };
        for card in cards {
            deck.push(card)?;
        }
        Ok(deck)
    }

    /// Restores the 52 canonical cards in pack order.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in ACE..=KING {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the top card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Puts a card on top of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if the card is already present.
    pub fn push(&mut self, card: Card) -> Result<(), DeckError> {
        if self.contains(card) {
            return Err(DeckError::DuplicateCard(card));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Removes a specific card from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::CardNotFound`] if the card is not present.
    pub fn remove(&mut self, card: Card) -> Result<(), DeckError> {
        let index = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(DeckError::CardNotFound(card))?;
        self.cards.remove(index);
        Ok(())
    }

    /// Returns whether the deck holds the card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the cards in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
