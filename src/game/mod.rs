//! Round engine and hand state machine.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, HAND_SIZE, PLAYERS, Suit};
use crate::deck::Deck;
use crate::error::{DeckError, RoundError};
use crate::options::GameOptions;
use crate::player::{BidHistory, Player};
use crate::result::{Contract, TrickRecord};
use crate::scoreboard::Scoreboard;

mod auction;
mod kitty;
mod play;
mod scoring;
pub mod state;

pub use state::HandPhase;

/// A game of 45s between four seats.
///
/// The round owns the deck and drives each hand through its phases:
/// deal, auction, kitty, discard, redeal, five tricks, and scoring. Each
/// phase can be stepped individually, or [`Round::play_hand`] runs a whole
/// hand. Seats 0 and 2 play against seats 1 and 3; seat 0 deals first.
///
/// # Example
///
/// ```no_run
/// use fortyfives::{GameOptions, Player, Round, RoundError};
///
/// fn play<P: Player>(players: [P; 4]) -> Result<usize, RoundError> {
///     let mut round = Round::new(players, GameOptions::default(), 42);
///     let winner = round.play_until_won()?;
///     println!("team {winner} wins with {:?}", round.team_scores());
///     Ok(winner)
/// }
/// ```
pub struct Round<P: Player> {
    /// Cards not yet dealt.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    /// Team scores.
    pub scoreboard: Scoreboard,
    /// Seats in table order.
    players: [P; PLAYERS],
    /// Current phase of the hand.
    phase: HandPhase,
    /// Trump for the hand in progress.
    trump: Option<Suit>,
    /// Suit of the first card of the current or last trick.
    suit_led: Option<Suit>,
    /// Seat that deals the next hand.
    dealer: usize,
    /// Contract fixed by the auction.
    contract: Option<Contract>,
    /// Amounts bid in the current auction.
    bid_history: BidHistory,
    /// Seat that leads the next trick, once a trick has been won.
    leader: Option<usize>,
    /// Tricks completed this hand.
    tricks: Vec<TrickRecord>,
    /// Highest card played so far this hand, with its seat.
    high_card: Option<(Card, usize)>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl<P: Player> Round<P> {
    /// Creates a new round with the given seats and shuffle seed.
    #[must_use]
    pub fn new(players: [P; PLAYERS], options: GameOptions, seed: u64) -> Self {
        Self {
            deck: Deck::new(),
            options,
            scoreboard: Scoreboard::new(),
            players,
            phase: HandPhase::Idle,
            trump: None,
            suit_led: None,
            dealer: 0,
            contract: None,
            bid_history: BidHistory::new(),
            leader: None,
            tricks: Vec::new(),
            high_card: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    const fn check_seat(seat: usize) -> Result<usize, RoundError> {
        if seat < PLAYERS {
            Ok(seat)
        } else {
            Err(RoundError::InvalidSeat(seat))
        }
    }

    /// Returns the seats in table order.
    pub const fn players(&self) -> &[P; PLAYERS] {
        &self.players
    }

    /// Returns the player at `seat`.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidSeat`] if `seat` is not in `0..4`.
    pub fn player(&self, seat: usize) -> Result<&P, RoundError> {
        Ok(&self.players[Self::check_seat(seat)?])
    }

    /// Returns the player at `seat`, mutably.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidSeat`] if `seat` is not in `0..4`.
    pub fn player_mut(&mut self, seat: usize) -> Result<&mut P, RoundError> {
        Ok(&mut self.players[Self::check_seat(seat)?])
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> HandPhase {
        self.phase
    }

    /// Returns the trump suit of the hand in progress.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::TrumpUnset`] before the auction and after a reset.
    pub fn trump(&self) -> Result<Suit, RoundError> {
        self.trump.ok_or(RoundError::TrumpUnset)
    }

    /// Returns the suit led in the current or most recent trick.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::SuitLedUnset`] if no card has been led this hand.
    pub fn suit_led(&self) -> Result<Suit, RoundError> {
        self.suit_led.ok_or(RoundError::SuitLedUnset)
    }

    /// Returns the seat that deals the next hand.
    ///
    /// The dealer moves one seat to the left as soon as an auction finishes.
    pub const fn dealer_seat(&self) -> usize {
        self.dealer
    }

    /// Returns the contract fixed by the auction, if any.
    pub const fn contract(&self) -> Option<Contract> {
        self.contract
    }

    /// Returns the seat that won the auction, if any.
    pub fn bidder_seat(&self) -> Option<usize> {
        self.contract.map(|c| c.bidder)
    }

    /// Returns the winning bid amount, if any.
    pub fn bid_amount(&self) -> Option<u8> {
        self.contract.map(|c| c.amount)
    }

    /// Returns the amounts bid in the current auction.
    pub const fn bid_history(&self) -> &BidHistory {
        &self.bid_history
    }

    /// Returns the tricks completed this hand.
    pub fn tricks(&self) -> &[TrickRecord] {
        &self.tricks
    }

    /// Returns the highest card played so far this hand and its seat.
    pub const fn high_card(&self) -> Option<(Card, usize)> {
        self.high_card
    }

    /// Returns the cumulative team scores.
    pub const fn team_scores(&self) -> [i32; 2] {
        self.scoreboard.totals()
    }

    /// Returns the points each team has earned in the hand in progress.
    pub const fn team_scores_this_hand(&self) -> [i32; 2] {
        self.scoreboard.this_hand()
    }

    /// Returns whether a team has reached the winning score.
    pub const fn has_won(&self) -> bool {
        self.scoreboard.has_won(self.options.winning_score)
    }

    /// Returns the team that has won the game, if any.
    pub const fn winning_team(&self) -> Option<usize> {
        self.scoreboard.winner(self.options.winning_score)
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Shuffles the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is in progress.
    pub fn shuffle(&mut self) -> Result<(), RoundError> {
        if self.phase != HandPhase::Idle {
            return Err(RoundError::InvalidPhase(self.phase));
        }
        self.deck.shuffle(&mut self.rng);
        Ok(())
    }

    /// Deals from the deck until every seat holds five cards.
    ///
    /// Seats that already hold cards only receive the difference. This is
    /// the initial deal from [`HandPhase::Idle`] and the redeal after
    /// discarding.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is in neither of those phases, or if
    /// the deck cannot cover the deal. Nothing is dealt in that case.
    pub fn deal_players(&mut self) -> Result<(), RoundError> {
        let next = match self.phase {
            HandPhase::Idle => HandPhase::Dealt,
            HandPhase::Discarded => HandPhase::Redealt,
            other => return Err(RoundError::InvalidPhase(other)),
        };

        let needed: usize = self
            .players
            .iter()
            .map(|player| HAND_SIZE.saturating_sub(player.hand_size()))
            .sum();
        if needed > self.deck.len() {
            return Err(DeckError::NotEnoughCards {
                needed,
                remaining: self.deck.len(),
            }
            .into());
        }

        for (seat, player) in self.players.iter_mut().enumerate() {
            while player.hand_size() < HAND_SIZE {
                let card = self.deck.draw().ok_or(DeckError::Empty)?;
                player.deal_card(card);
            }
            debug!(seat, cards = player.hand_size(), "dealt hand");
        }

        self.phase = next;
        Ok(())
    }

    /// Ends the hand: clears every hand, restores the full deck, zeroes the
    /// hand points and unsets trump and suit led.
    ///
    /// Cumulative scores and the dealer are kept. Calling this mid-hand
    /// abandons the hand without scoring it.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.reset_hand();
        }
        self.deck.reset();
        self.scoreboard.clear_hand();
        self.trump = None;
        self.suit_led = None;
        self.contract = None;
        self.bid_history.clear();
        self.leader = None;
        self.tricks.clear();
        self.high_card = None;
        self.phase = HandPhase::Idle;
    }
}
