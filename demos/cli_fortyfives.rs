//! CLI 45s example: you sit at seat 0 against three computer seats.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use fortyfives::{
    Bid, BidHistory, Card, GameOptions, Hand, Player, Round, Suit, is_trump, less_than,
    team_of,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .without_time()
        .with_target(false)
        .init();

    println!("45s CLI example (type 'q' at any prompt to quit)");
    println!("You are seat 0 and partner seat 2.\n");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let players: [Box<dyn Player>; 4] = [
        Box::new(Human::new(options)),
        Box::new(Computer::new(options)),
        Box::new(Computer::new(options)),
        Box::new(Computer::new(options)),
    ];
    let mut round = Round::new(players, options, seed);

    loop {
        let dealer = round.dealer_seat();
        println!("\n=== Seat {dealer} deals ===");

        match round.play_hand() {
            Ok(result) => {
                let contract = result.contract;
                println!(
                    "\nSeat {} bid {} in {}{}",
                    contract.bidder,
                    contract.amount,
                    contract.trump,
                    if contract.forced { " (bagged)" } else { "" }
                );
                for (index, trick) in result.tricks.iter().enumerate() {
                    let cards: Vec<String> = trick.cards.iter().map(format_card).collect();
                    println!(
                        "Trick {}: {} -> seat {}",
                        index + 1,
                        cards.join(" "),
                        trick.outcome.winner
                    );
                }
                println!(
                    "High card {} (seat {})",
                    format_card(&result.high_card.0),
                    result.high_card.1
                );
                println!(
                    "Hand points: us {} / them {}; bid {}",
                    result.points[0],
                    result.points[1],
                    if result.made_bid { "made" } else { "set" }
                );
                println!("Totals: us {} / them {}", result.totals[0], result.totals[1]);
            }
            Err(err) => {
                println!("Hand abandoned: {err}");
                round.reset();
            }
        }

        if let Some(team) = round.winning_team() {
            if team == team_of(0) {
                println!("\nYour team wins!");
            } else {
                println!("\nThe other team wins.");
            }
            break;
        }
    }
}

struct Human {
    hand: Hand,
    options: GameOptions,
    trump: Option<Suit>,
}

impl Human {
    const fn new(options: GameOptions) -> Self {
        Self {
            hand: Hand::new(),
            options,
            trump: None,
        }
    }

    fn show_hand(&self) {
        println!("Your hand: {}", format_hand(&self.hand));
    }
}

impl Player for Human {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn discard(&mut self) {
        self.show_hand();
        loop {
            let input = prompt_line("Cards to discard (e.g. '2c 7d', blank keeps all): ");
            let Some(cards) = parse_cards(&input) else {
                println!("Could not read those cards.");
                continue;
            };
            if cards.iter().any(|&c| !self.hand.contains(c)) {
                println!("You can only discard cards you hold.");
                continue;
            }
            if cards.len() >= self.hand.len() {
                println!("Keep at least one card.");
                continue;
            }
            self.hand.discard_where(|c| !cards.contains(c));
            return;
        }
    }

    fn get_bid(&mut self, history: &BidHistory) -> Bid {
        self.show_hand();
        match history.highest() {
            Some(high) => println!("Highest bid so far: {high}"),
            None => println!("No bids yet."),
        }
        loop {
            let input = prompt_line(&format!(
                "Bid {}-{} by {} with a suit (e.g. '20 h'), or 'p' to pass: ",
                self.options.min_bid, self.options.max_bid, self.options.bid_increment
            ));
            if input == "p" || input == "pass" {
                return Bid::Pass;
            }
            let mut parts = input.split_whitespace();
            let amount = parts.next().and_then(|a| a.parse::<u8>().ok());
            let suit = parts.next().and_then(parse_suit);
            match (amount, suit) {
                (Some(amount), Some(suit)) if self.options.is_valid_bid(amount) => {
                    return Bid::call(amount, suit);
                }
                _ => println!("That is not a valid bid."),
            }
        }
    }

    fn bagged(&mut self) -> Suit {
        self.show_hand();
        println!("Everyone passed: you are bagged at {}.", self.options.bagged_bid);
        loop {
            if let Some(suit) = parse_suit(&prompt_line("Name trump (h/d/c/s): ")) {
                return suit;
            }
        }
    }

    fn play_card(&mut self, played: &[Card]) -> Card {
        if let Some(trump) = self.trump {
            println!("\nTrump: {trump}");
        }
        if played.is_empty() {
            println!("You lead.");
        } else {
            let cards: Vec<String> = played.iter().map(format_card).collect();
            println!("Played so far: {}", cards.join(" "));
        }
        self.show_hand();
        loop {
            let input = prompt_line("Play a card: ");
            match input.parse::<Card>() {
                Ok(card) if self.hand.remove(card) => return card,
                Ok(_) => println!("You do not hold that card."),
                Err(err) => println!("{err}"),
            }
        }
    }

    fn trump_declared(&mut self, trump: Suit, bidder: usize) {
        self.trump = Some(trump);
        println!("Seat {bidder} names {trump} as trump.");
    }
}

/// A simple computer seat: bids on trump length, keeps trumps, and plays
/// the cheapest card that takes the trick.
struct Computer {
    hand: Hand,
    options: GameOptions,
    trump: Option<Suit>,
}

impl Computer {
    const fn new(options: GameOptions) -> Self {
        Self {
            hand: Hand::new(),
            options,
            trump: None,
        }
    }

    fn trump_count(&self, suit: Suit) -> usize {
        self.hand.cards().iter().filter(|&&c| is_trump(c, suit)).count()
    }

    fn longest_suit(&self) -> Suit {
        Suit::ALL
            .into_iter()
            .max_by_key(|&suit| self.trump_count(suit))
            .unwrap_or(Suit::Hearts)
    }
}

impl Player for Computer {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn discard(&mut self) {
        let Some(trump) = self.trump else {
            return;
        };
        let mut kept = 0;
        let first = self.hand.cards().first().copied();
        self.hand.discard_where(|&c| {
            let keep = kept < 5 && (is_trump(c, trump) || Some(c) == first);
            if keep {
                kept += 1;
            }
            keep
        });
    }

    fn get_bid(&mut self, history: &BidHistory) -> Bid {
        let suit = self.longest_suit();
        let amount = history
            .highest()
            .map_or(self.options.min_bid, |high| high + self.options.bid_increment);
        if self.trump_count(suit) >= 3 && self.options.is_valid_bid(amount) {
            Bid::call(amount, suit)
        } else {
            Bid::Pass
        }
    }

    fn bagged(&mut self) -> Suit {
        self.longest_suit()
    }

    fn play_card(&mut self, played: &[Card]) -> Card {
        let trump = self.trump.unwrap_or(Suit::Hearts);
        let cards = self.hand.cards().to_vec();

        let choice = match played.first() {
            None => cards
                .iter()
                .copied()
                .reduce(|best, c| if less_than(best, c, c.suit(), trump) { c } else { best }),
            Some(lead) => {
                let led = lead.suit();
                let best = played
                    .iter()
                    .copied()
                    .fold(*lead, |best, c| if less_than(best, c, led, trump) { c } else { best });
                cards
                    .iter()
                    .copied()
                    .filter(|&c| less_than(best, c, led, trump))
                    .reduce(|low, c| if less_than(c, low, led, trump) { c } else { low })
                    .or_else(|| cards.first().copied())
            }
        };

        match choice {
            Some(card) => {
                self.hand.remove(card);
                card
            }
            None => Card::ACE_OF_HEARTS,
        }
    }

    fn trump_declared(&mut self, trump: Suit, _bidder: usize) {
        self.trump = Some(trump);
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).unwrap_or(0) == 0 {
        std::process::exit(0);
    }
    let input = input.trim().to_lowercase();
    if input == "q" || input == "quit" {
        println!("Goodbye.");
        std::process::exit(0);
    }
    input
}

fn parse_suit(text: &str) -> Option<Suit> {
    match text {
        "h" | "hearts" => Some(Suit::Hearts),
        "d" | "diamonds" => Some(Suit::Diamonds),
        "c" | "clubs" => Some(Suit::Clubs),
        "s" | "spades" => Some(Suit::Spades),
        _ => None,
    }
}

fn parse_cards(text: &str) -> Option<Vec<Card>> {
    text.split_whitespace().map(|t| t.parse().ok()).collect()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&format!("{card:#}"), color_code)
}
