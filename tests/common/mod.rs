//! Shared helpers for the integration tests.

use fortyfives::{
    Bid, BidHistory, Card, Deck, GameOptions, HAND_SIZE, Hand, Player, Round, Suit,
};
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber. Level comes from `TEST_LOG`, then `RUST_LOG`,
/// then defaults to `warn`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(|_| EnvFilter::new("warn"), EnvFilter::new);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// A seat that bids a fixed amount, keeps its first five cards when
/// discarding, and plays its cards front to back.
#[derive(Debug, Clone)]
pub struct Scripted {
    pub hand: Hand,
    pub bid: Bid,
    pub bagged_suit: Suit,
    /// Card returned instead of a real play, without touching the hand.
    pub bogus_play: Option<Card>,
    pub histories_seen: Vec<Vec<u8>>,
    pub bagged_calls: usize,
    pub declared: Option<(Suit, usize)>,
}

impl Scripted {
    pub fn passing() -> Self {
        Self::bidding(Bid::Pass)
    }

    pub fn bidding(bid: Bid) -> Self {
        Self {
            hand: Hand::new(),
            bid,
            bagged_suit: Suit::Spades,
            bogus_play: None,
            histories_seen: Vec::new(),
            bagged_calls: 0,
            declared: None,
        }
    }
}

impl Player for Scripted {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn discard(&mut self) {
        let mut kept = 0;
        self.hand.discard_where(|_| {
            kept += 1;
            kept <= HAND_SIZE
        });
    }

    fn get_bid(&mut self, history: &BidHistory) -> Bid {
        self.histories_seen.push(history.amounts().to_vec());
        self.bid
    }

    fn bagged(&mut self) -> Suit {
        self.bagged_calls += 1;
        self.bagged_suit
    }

    fn play_card(&mut self, _played: &[Card]) -> Card {
        if let Some(card) = self.bogus_play {
            return card;
        }
        self.hand
            .take(0)
            .expect("scripted seat ran out of cards")
    }

    fn trump_declared(&mut self, trump: Suit, bidder: usize) {
        self.declared = Some((trump, bidder));
    }
}

pub fn round_with(players: [Scripted; 4]) -> Round<Scripted> {
    init_logging();
    Round::new(players, GameOptions::default(), 42)
}

/// Replaces the deck so that cards are drawn in the given order.
pub fn set_deck_from_draws(round: &mut Round<Scripted>, draws: &[Card]) {
    round.deck = Deck::from_cards(draws.iter().rev().copied()).expect("rigged deck has duplicates");
}
