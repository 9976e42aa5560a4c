//! Deterministic rules engine for four-player Spades.
//!
//! Deal from a seed, place bids, play cards (or let the naive auto-player
//! finish the hand), then score. Every operation is synchronous and works on a
//! caller-owned [`HandState`].

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;

// Re-exports for public API
pub use domain::{
    deal, finish_hand_auto, is_hand_complete, legal_plays, make_deck, place_bid, play_card,
    play_trick_auto, score_hand, shuffle, start_hand, start_hand_with, Card, HandConfig,
    HandResult, HandState, PerSeat, PerTeam, PlayOutcome, Rank, ScoreParams, Seat, Suit, Team,
    TeamHand, TeamScores,
};
pub use errors::{DomainError, ErrorCode};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::test_logging::init();
}
