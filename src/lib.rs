//! A rules engine for 45s with optional `no_std` support.
//!
//! 45s is a four-player, two-team trick-taking game. Trump is chosen each
//! hand by auction, and card rank depends on both the trump suit and the
//! suit led. The crate provides the card ordering ([`less_than`]), trick
//! evaluation ([`evaluate_trick`]), and a [`Round`] type that runs the full
//! hand: deal, auction, kitty, discard, redeal, five tricks and scoring.
//!
//! Decisions are delegated to the [`Player`] trait, so seats may be humans,
//! scripts, or computer players.
//!
//! # Example
//!
//! ```
//! use fortyfives::{Card, Suit, less_than};
//!
//! // With clubs trump, the jack of clubs beats the ace of hearts.
//! let jack = Card::new(Suit::Clubs, 11);
//! assert!(less_than(Card::ACE_OF_HEARTS, jack, Suit::Hearts, Suit::Clubs));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod ranking;
pub mod result;
pub mod scoreboard;
pub mod trick;

// Re-export main types
pub use card::{
    ACE, Card, DECK_SIZE, HAND_SIZE, JACK, KING, KITTY_SIZE, PLAYERS, QUEEN, Suit,
    TRICKS_PER_HAND, next_seat, team_of,
};
pub use deck::Deck;
pub use error::{DeckError, ParseCardError, PlayerError, RankError, RoundError};
pub use game::{HandPhase, Round};
pub use hand::Hand;
pub use options::GameOptions;
pub use player::{Bid, BidHistory, Player};
pub use ranking::{is_trump, less_than, try_less_than};
pub use result::{Contract, HandResult, TrickRecord};
pub use scoreboard::Scoreboard;
pub use trick::{TrickOutcome, evaluate_trick, suit_led_of};
