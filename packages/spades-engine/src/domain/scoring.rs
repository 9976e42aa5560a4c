//! Hand scoring. Pure functions; callers own score and bag accumulation.

use serde::{Deserialize, Serialize};

use crate::domain::seats::{PerSeat, PerTeam, Team};

pub const POINTS_PER_BID_TRICK: i32 = 10;
pub const NIL_BONUS: i32 = 100;
pub const BAGS_PER_PENALTY: u32 = 10;
pub const BAG_PENALTY: i32 = 100;

/// Running team scores.
pub type TeamScores = PerTeam<i32>;

/// One partnership's figures for the hand being scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamHand {
    /// Books the team took this hand.
    pub books: u8,
    /// The team's contract.
    pub bid: u8,
    /// Whether the team declared nil.
    pub nil: bool,
    /// Cumulative bags, including any earned this hand.
    pub bags: u32,
}

/// Inputs for [`score_hand`], one entry per team.
pub type ScoreParams = PerTeam<TeamHand>;

/// Apply one hand's scoring to `prev`.
///
/// Per team: a made contract earns `bid*10` plus one point per overtrick, a set
/// loses `bid*10`. A nil declaration adds ±100 on top of that. Finally every
/// 10 cumulative bags cost 100.
pub fn score_hand(prev: TeamScores, params: &ScoreParams) -> TeamScores {
    TeamScores::from_fn(|team| prev[team].saturating_add(team_delta(&params[team])))
}

fn team_delta(hand: &TeamHand) -> i32 {
    let books = i32::from(hand.books);
    let bid = i32::from(hand.bid);

    let mut delta = if books >= bid {
        bid * POINTS_PER_BID_TRICK + (books - bid).max(0)
    } else {
        -bid * POINTS_PER_BID_TRICK
    };

    if hand.nil {
        delta += if books == 0 { NIL_BONUS } else { -NIL_BONUS };
    }

    delta.saturating_sub(bag_penalty(hand.bags))
}

/// Penalty for `bags` cumulative bags. Saturates at `i32::MAX`.
pub fn bag_penalty(bags: u32) -> i32 {
    i32::try_from(bags / BAGS_PER_PENALTY)
        .unwrap_or(i32::MAX)
        .saturating_mul(BAG_PENALTY)
}

/// Carry a bag count forward: add this hand's overtricks, if any.
pub fn bags_after(prev_bags: u32, books: u8, bid: u8) -> u32 {
    prev_bags.saturating_add(u32::from(books.saturating_sub(bid)))
}

/// A partnership's combined bid; unset bids count as zero.
pub fn team_bid(bids: &PerSeat<Option<u8>>, team: Team) -> u8 {
    team.seats()
        .iter()
        .map(|&s| bids[s].unwrap_or(0))
        .sum()
}
