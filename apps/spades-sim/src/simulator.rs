//! Multi-hand session runner.
//!
//! Each hand is dealt from a seed derived from the session seed, bid with the
//! configured bids, auto-played, and scored. Scores and bags carry forward.

use serde::Serialize;
use spades_engine::domain::derive_hand_seed;
use spades_engine::domain::scoring::{bags_after, team_bid, BAGS_PER_PENALTY};
use spades_engine::{
    finish_hand_auto, place_bid, score_hand, start_hand, HandResult, PerSeat, PerTeam,
    ScoreParams, Seat, Team, TeamHand, TeamScores,
};
use tracing::{debug, info};

use crate::config::SimConfig;
use crate::error::SimError;

/// Everything recorded about one simulated hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandRecord {
    pub hand_no: u32,
    pub seed: String,
    pub leader: Seat,
    pub bids: PerSeat<Option<u8>>,
    #[serde(flatten)]
    pub result: HandResult,
    /// Running scores after this hand.
    pub scores: TeamScores,
    /// Bags carried into the next hand.
    pub bags: PerTeam<u32>,
}

pub struct Simulator {
    config: SimConfig,
    scores: TeamScores,
    bags: PerTeam<u32>,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            scores: TeamScores::default(),
            bags: PerTeam::default(),
        }
    }

    pub fn scores(&self) -> TeamScores {
        self.scores
    }

    /// Play every configured hand in order.
    pub fn run(&mut self) -> Result<Vec<HandRecord>, SimError> {
        info!(
            seed = %self.config.seed,
            hands = self.config.hands,
            "starting session"
        );
        (1..=self.config.hands).map(|n| self.play_hand(n)).collect()
    }

    /// Play hand `hand_no` (1-based). The lead rotates one seat per hand.
    pub fn play_hand(&mut self, hand_no: u32) -> Result<HandRecord, SimError> {
        let seed = derive_hand_seed(&self.config.seed, hand_no);
        let leader = self.config.leader.nth_from((hand_no as usize).saturating_sub(1));

        let mut state = start_hand(&seed, Some(leader));
        for (seat, &bid) in Seat::ALL.iter().zip(self.config.bids.iter()) {
            place_bid(&mut state, *seat, bid)?;
        }
        let result = finish_hand_auto(&mut state)?;

        let params = ScoreParams::from_fn(|team| {
            let books = result.books_by_team[team];
            let bid = team_bid(state.bids(), team);
            TeamHand {
                books,
                bid,
                nil: declares_nil(state.bids(), team),
                bags: bags_after(self.bags[team], books, bid),
            }
        });
        self.scores = score_hand(self.scores, &params);
        // Penalised bags are spent; only the remainder carries forward.
        self.bags = PerTeam::from_fn(|team| params[team].bags % BAGS_PER_PENALTY);

        debug!(
            hand_no,
            ns = self.scores.ns,
            ew = self.scores.ew,
            "hand scored"
        );

        Ok(HandRecord {
            hand_no,
            seed,
            leader,
            bids: state.bids().clone(),
            result,
            scores: self.scores,
            bags: self.bags,
        })
    }
}

/// A team declares nil when either partner bid zero.
fn declares_nil(bids: &PerSeat<Option<u8>>, team: Team) -> bool {
    team.seats().iter().any(|&s| bids[s] == Some(0))
}
