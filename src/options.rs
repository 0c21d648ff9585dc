//! Game configuration options.

/// Configuration options for a game of 45s.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use fortyfives::GameOptions;
///
/// let options = GameOptions::default()
///     .with_winning_score(150)
///     .with_max_bid(35);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Lowest legal bid.
    pub min_bid: u8,
    /// Highest legal bid.
    pub max_bid: u8,
    /// Step between legal bids.
    pub bid_increment: u8,
    /// Bid awarded to a dealer forced to bid when every other seat passes.
    pub bagged_bid: u8,
    /// Points earned per trick won.
    pub trick_points: i32,
    /// Bonus for holding the highest card played in the hand.
    pub high_card_bonus: i32,
    /// Cumulative score that wins the game.
    pub winning_score: i32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            min_bid: 15,
            max_bid: 30,
            bid_increment: 5,
            bagged_bid: 15,
            trick_points: 5,
            high_card_bonus: 5,
            winning_score: 120,
        }
    }
}

impl GameOptions {
    /// Returns whether `amount` is on the bid ladder.
    ///
    /// A pass (0) is not a bid amount; see [`Bid::Pass`](crate::Bid::Pass).
    ///
    /// # Example
    ///
    /// ```
    /// use fortyfives::GameOptions;
    ///
    /// let options = GameOptions::default();
    /// assert!(options.is_valid_bid(20));
    /// assert!(!options.is_valid_bid(0));
    /// assert!(!options.is_valid_bid(17));
    /// ```
    #[must_use]
    pub const fn is_valid_bid(&self, amount: u8) -> bool {
        if amount < self.min_bid || amount > self.max_bid {
            return false;
        }
        self.bid_increment == 0 || (amount - self.min_bid) % self.bid_increment == 0
    }

    /// Sets the lowest legal bid.
    ///
    /// # Example
    ///
    /// ```
    /// use fortyfives::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_bid(20);
    /// assert_eq!(options.min_bid, 20);
    /// ```
    #[must_use]
    pub const fn with_min_bid(mut self, amount: u8) -> Self {
        self.min_bid = amount;
        self
    }

    /// Sets the highest legal bid.
    #[must_use]
    pub const fn with_max_bid(mut self, amount: u8) -> Self {
        self.max_bid = amount;
        self
    }

    /// Sets the step between legal bids.
    #[must_use]
    pub const fn with_bid_increment(mut self, step: u8) -> Self {
        self.bid_increment = step;
        self
    }

    /// Sets the bid awarded to a bagged dealer.
    ///
    /// # Example
    ///
    /// ```
    /// use fortyfives::GameOptions;
    ///
    /// let options = GameOptions::default().with_bagged_bid(20);
    /// assert_eq!(options.bagged_bid, 20);
    /// ```
    #[must_use]
    pub const fn with_bagged_bid(mut self, amount: u8) -> Self {
        self.bagged_bid = amount;
        self
    }

    /// Sets the points earned per trick.
    #[must_use]
    pub const fn with_trick_points(mut self, points: i32) -> Self {
        self.trick_points = points;
        self
    }

    /// Sets the high card bonus.
    #[must_use]
    pub const fn with_high_card_bonus(mut self, points: i32) -> Self {
        self.high_card_bonus = points;
        self
    }

    /// Sets the cumulative score that wins the game.
    ///
    /// # Example
    ///
    /// ```
    /// use fortyfives::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(45);
    /// assert_eq!(options.winning_score, 45);
    /// ```
    #[must_use]
    pub const fn with_winning_score(mut self, score: i32) -> Self {
        self.winning_score = score;
        self
    }
}
