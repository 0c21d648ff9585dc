//! Auction tests.

mod common;

use common::{Scripted, round_with};
use fortyfives::{Bid, GameOptions, HandPhase, PlayerError, Round, RoundError, Suit};

fn dealt(players: [Scripted; 4]) -> Round<Scripted> {
    let mut round = round_with(players);
    round.shuffle().unwrap();
    round.deal_players().unwrap();
    round
}

#[test]
fn single_bid_wins_the_contract() {
    let mut round = dealt([
        Scripted::passing(),
        Scripted::passing(),
        Scripted::bidding(Bid::call(30, Suit::Clubs)),
        Scripted::passing(),
    ]);

    let contract = round.bidding_phase().unwrap();
    assert_eq!(contract.bidder, 2);
    assert_eq!(contract.amount, 30);
    assert_eq!(contract.trump, Suit::Clubs);
    assert!(!contract.forced);

    assert_eq!(round.phase(), HandPhase::Auctioned);
    assert_eq!(round.bidder_seat(), Some(2));
    assert_eq!(round.bid_amount(), Some(30));
    assert_eq!(round.trump(), Ok(Suit::Clubs));
    assert_eq!(round.dealer_seat(), 1);
    assert_eq!(round.bid_history().amounts(), &[30]);
}

#[test]
fn seats_bid_in_order_and_see_earlier_bids() {
    let mut round = dealt([
        Scripted::passing(),
        Scripted::bidding(Bid::call(15, Suit::Hearts)),
        Scripted::bidding(Bid::call(25, Suit::Diamonds)),
        Scripted::passing(),
    ]);
    round.bidding_phase().unwrap();

    let seen = |seat: usize| round.players()[seat].histories_seen.clone();
    assert_eq!(seen(1), vec![Vec::<u8>::new()]);
    assert_eq!(seen(2), vec![vec![15]]);
    assert_eq!(seen(3), vec![vec![15, 25]]);
    assert_eq!(seen(0), vec![vec![15, 25]]);
    assert_eq!(round.bidder_seat(), Some(2));
}

#[test]
fn ties_go_to_the_earlier_bidder() {
    let mut round = dealt([
        Scripted::bidding(Bid::call(20, Suit::Spades)),
        Scripted::bidding(Bid::call(20, Suit::Hearts)),
        Scripted::bidding(Bid::call(20, Suit::Diamonds)),
        Scripted::passing(),
    ]);

    let contract = round.bidding_phase().unwrap();
    assert_eq!(contract.bidder, 1);
    assert_eq!(contract.trump, Suit::Hearts);
    assert_eq!(round.bid_history().amounts(), &[20, 20, 20]);
}

#[test]
fn dealer_takes_the_bid_only_by_going_higher() {
    let mut round = dealt([
        Scripted::bidding(Bid::call(25, Suit::Spades)),
        Scripted::bidding(Bid::call(20, Suit::Hearts)),
        Scripted::passing(),
        Scripted::passing(),
    ]);

    let contract = round.bidding_phase().unwrap();
    assert_eq!(contract.bidder, 0);
    assert_eq!(contract.amount, 25);
    assert_eq!(contract.trump, Suit::Spades);
}

#[test]
fn dealer_is_bagged_when_everyone_passes() {
    let mut round = dealt(core::array::from_fn(|_| Scripted::passing()));

    let contract = round.bidding_phase().unwrap();
    assert_eq!(contract.bidder, 0);
    assert_eq!(contract.amount, GameOptions::default().bagged_bid);
    assert_eq!(contract.trump, Suit::Spades);
    assert!(contract.forced);

    let dealer = &round.players()[0];
    assert_eq!(dealer.bagged_calls, 1);
    assert!(dealer.histories_seen.is_empty());
    assert!(round.bid_history().is_empty());
    for seat in 1..4 {
        assert_eq!(round.players()[seat].bagged_calls, 0);
        assert_eq!(round.players()[seat].histories_seen.len(), 1);
    }
}

#[test]
fn every_seat_hears_the_declaration() {
    let mut round = dealt([
        Scripted::passing(),
        Scripted::passing(),
        Scripted::passing(),
        Scripted::bidding(Bid::call(20, Suit::Diamonds)),
    ]);
    round.bidding_phase().unwrap();

    for player in round.players() {
        assert_eq!(player.declared, Some((Suit::Diamonds, 3)));
    }
}

#[test]
fn off_ladder_bids_are_rejected() {
    for amount in [10, 17, 35] {
        let mut round = dealt([
            Scripted::passing(),
            Scripted::bidding(Bid::call(amount, Suit::Clubs)),
            Scripted::passing(),
            Scripted::passing(),
        ]);

        let err = round.bidding_phase().unwrap_err();
        assert_eq!(
            err,
            RoundError::Player(PlayerError::InvalidBid { seat: 1, amount })
        );
        assert!(err.is_contract_violation());
        assert_eq!(round.phase(), HandPhase::Dealt);
        assert_eq!(round.contract(), None);
        assert_eq!(round.dealer_seat(), 0);
    }
}

#[test]
fn custom_ladder_is_honoured() {
    let mut round = Round::new(
        [
            Scripted::passing(),
            Scripted::bidding(Bid::call(60, Suit::Clubs)),
            Scripted::passing(),
            Scripted::passing(),
        ],
        GameOptions::default().with_max_bid(60),
        1,
    );
    round.deal_players().unwrap();
    assert_eq!(round.bid_amount(), None);
    assert_eq!(round.bidding_phase().unwrap().amount, 60);
}

#[test]
fn auction_needs_a_fresh_deal() {
    let mut round = round_with(core::array::from_fn(|_| Scripted::passing()));
    assert_eq!(
        round.bidding_phase(),
        Err(RoundError::InvalidPhase(HandPhase::Idle))
    );

    round.deal_players().unwrap();
    round.bidding_phase().unwrap();
    assert_eq!(
        round.bidding_phase(),
        Err(RoundError::InvalidPhase(HandPhase::Auctioned))
    );
}

#[test]
fn deal_rotates_between_hands() {
    let mut round = round_with(core::array::from_fn(|_| Scripted::passing()));

    for expected_dealer in [0, 1, 2, 3, 0] {
        assert_eq!(round.dealer_seat(), expected_dealer);
        round.shuffle().unwrap();
        round.deal_players().unwrap();
        let contract = round.bidding_phase().unwrap();
        assert_eq!(contract.bidder, expected_dealer);
        round.reset();
    }
}
