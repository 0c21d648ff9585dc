//! A player's hand.

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// The ordered cards a seat currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes a card from the hand, returning whether it was held.
    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Removes and returns the card at `index`.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Keeps only the cards for which `keep` returns `true`, returning the
    /// discarded cards.
    pub fn discard_where(&mut self, mut keep: impl FnMut(&Card) -> bool) -> Vec<Card> {
        let mut discarded = Vec::new();
        self.cards.retain(|card| {
            if keep(card) {
                true
            } else {
                discarded.push(*card);
                false
            }
        });
        discarded
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns whether the hand holds a card of the given suit.
    ///
    /// The ace of hearts counts as a heart.
    #[must_use]
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|card| card.suit() == suit)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new deal.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
