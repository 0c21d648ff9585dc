//! Team scores and the win condition.

/// Cumulative and per-hand scores for the two teams.
///
/// Team 0 is seats 0 and 2; team 1 is seats 1 and 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    totals: [i32; 2],
    this_hand: [i32; 2],
    last_bidding_team: Option<usize>,
}

impl Scoreboard {
    /// Creates a scoreboard with both teams at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            totals: [0, 0],
            this_hand: [0, 0],
            last_bidding_team: None,
        }
    }

    /// Creates a scoreboard with the given cumulative totals.
    #[must_use]
    pub const fn with_totals(totals: [i32; 2]) -> Self {
        Self {
            totals,
            this_hand: [0, 0],
            last_bidding_team: None,
        }
    }

    /// Returns the cumulative totals. These may be negative.
    #[must_use]
    pub const fn totals(&self) -> [i32; 2] {
        self.totals
    }

    /// Returns the points each team has earned in the current hand.
    #[must_use]
    pub const fn this_hand(&self) -> [i32; 2] {
        self.this_hand
    }

    /// Credits `points` to `team` for the current hand.
    pub const fn award(&mut self, team: usize, points: i32) {
        self.this_hand[team % 2] += points;
    }

    /// Applies the current hand to the totals and reports whether the
    /// bidding team made its bid.
    ///
    /// The defending team always banks its hand points. The bidding team
    /// banks its points if they reach `bid`; otherwise it loses `bid`.
    /// Hand points are zeroed afterwards.
    pub fn settle(&mut self, bidding_team: usize, bid: u8) -> bool {
        let bidders = bidding_team % 2;
        let defenders = 1 - bidders;
        let bid = i32::from(bid);

        self.totals[defenders] += self.this_hand[defenders];
        let made = self.this_hand[bidders] >= bid;
        if made {
            self.totals[bidders] += self.this_hand[bidders];
        } else {
            self.totals[bidders] -= bid;
        }

        self.this_hand = [0, 0];
        self.last_bidding_team = Some(bidders);
        made
    }

    /// Discards the current hand's points without applying them.
    pub const fn clear_hand(&mut self) {
        self.this_hand = [0, 0];
    }

    /// Returns whether either team has reached `target`.
    #[must_use]
    pub const fn has_won(&self, target: i32) -> bool {
        self.totals[0] >= target || self.totals[1] >= target
    }

    /// Returns the winning team, if any.
    ///
    /// When both teams are over the target the higher total wins; an exact
    /// tie goes to the team that bid the last settled hand.
    #[must_use]
    pub const fn winner(&self, target: i32) -> Option<usize> {
        match (self.totals[0] >= target, self.totals[1] >= target) {
            (false, false) => None,
            (true, false) => Some(0),
            (false, true) => Some(1),
            (true, true) => {
                if self.totals[0] > self.totals[1] {
                    Some(0)
                } else if self.totals[1] > self.totals[0] {
                    Some(1)
                } else {
                    match self.last_bidding_team {
                        Some(team) => Some(team),
                        None => Some(0),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defenders_always_bank_points() {
        let mut board = Scoreboard::new();
        board.award(0, 10);
        board.award(1, 20);
        assert!(board.settle(1, 20));
        assert_eq!(board.totals(), [10, 20]);
        assert_eq!(board.this_hand(), [0, 0]);
    }

    #[test]
    fn failed_bid_subtracts_the_bid() {
        let mut board = Scoreboard::new();
        board.award(0, 25);
        board.award(1, 5);
        assert!(!board.settle(1, 15));
        assert_eq!(board.totals(), [25, -15]);
    }

    #[test]
    fn tie_over_target_goes_to_last_bidder() {
        let mut board = Scoreboard::with_totals([110, 115]);
        board.award(0, 10);
        board.award(1, 5);
        board.settle(1, 5);
        assert_eq!(board.totals(), [120, 120]);
        assert_eq!(board.winner(120), Some(1));
    }
}
