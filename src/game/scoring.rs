use tracing::info;

use crate::card::{TRICKS_PER_HAND, team_of};
use crate::error::RoundError;
use crate::player::Player;
use crate::result::HandResult;

use super::{HandPhase, Round};

impl<P: Player> Round<P> {
    /// Settles the hand after the fifth trick.
    ///
    /// The team holding the hand's high card receives the bonus, then the
    /// bid is applied: the defenders always bank their points, and the
    /// bidders bank theirs only if they reached the bid, losing the bid
    /// amount otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if five tricks have not been played.
    pub fn score_hand(&mut self) -> Result<HandResult, RoundError> {
        let all_played = matches!(self.phase, HandPhase::Trick(n) if usize::from(n) == TRICKS_PER_HAND);
        if !all_played {
            return Err(RoundError::InvalidPhase(self.phase));
        }
        let contract = self.contract.ok_or(RoundError::NoContract)?;
        let Some(high_card) = self.high_card else {
            return Err(RoundError::InvalidPhase(self.phase));
        };

        self.scoreboard
            .award(team_of(high_card.1), self.options.high_card_bonus);
        let points = self.scoreboard.this_hand();
        let made_bid = self
            .scoreboard
            .settle(team_of(contract.bidder), contract.amount);
        let totals = self.scoreboard.totals();

        info!(
            bidder = contract.bidder,
            amount = contract.amount,
            made_bid,
            team0 = totals[0],
            team1 = totals[1],
            "hand settled"
        );
        if let Some(team) = self.winning_team() {
            info!(team, "game won");
        }

        self.phase = HandPhase::Scored;
        Ok(HandResult {
            contract,
            tricks: self.tricks.clone(),
            high_card,
            points,
            made_bid,
            totals,
        })
    }

    /// Plays a complete hand from [`HandPhase::Idle`] and resets the round
    /// for the next one.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is already in progress or any phase fails.
    /// The round is left in the failing phase; call [`Round::reset`] to
    /// abandon the hand.
    pub fn play_hand(&mut self) -> Result<HandResult, RoundError> {
        if self.phase != HandPhase::Idle {
            return Err(RoundError::InvalidPhase(self.phase));
        }

        self.shuffle()?;
        self.deal_players()?;
        let contract = self.bidding_phase()?;
        self.deal_kiddie(contract.bidder)?;
        self.have_players_discard()?;
        self.deal_players()?;
        for _ in 0..TRICKS_PER_HAND {
            self.play_trick()?;
        }
        let result = self.score_hand()?;
        self.reset();
        Ok(result)
    }

    /// Plays hands until a team reaches the winning score and returns that
    /// team.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Round::play_hand`].
    pub fn play_until_won(&mut self) -> Result<usize, RoundError> {
        loop {
            if let Some(team) = self.winning_team() {
                return Ok(team);
            }
            self.play_hand()?;
        }
    }
}
