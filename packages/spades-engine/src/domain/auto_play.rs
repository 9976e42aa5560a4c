//! Naive automated play: every seat plays its first legal card.
//!
//! The policy is not strategic; it exists to drive whole hands reproducibly
//! (simulations, tests).

use serde::Serialize;
use tracing::{debug, info_span};

use crate::domain::rules::TRICKS_PER_HAND;
use crate::domain::seats::{PerSeat, PerTeam, Seat};
use crate::domain::state::{team_books, HandState};
use crate::domain::tricks::{legal_plays, play_card};
use crate::errors::domain::DomainError;

/// Outcome of a fully played hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandResult {
    /// Winner of each trick, in play order.
    pub winner_by_trick: Vec<Seat>,
    pub books_by_seat: PerSeat<u8>,
    pub books_by_team: PerTeam<u8>,
}

/// Complete the current trick automatically and return its winner.
///
/// Starts from the seat to act, so a trick already in progress is finished
/// rather than restarted.
pub fn play_trick_auto(state: &mut HandState) -> Result<Seat, DomainError> {
    loop {
        let turn = state.to_act();
        let is_leader = state.plays.is_empty();
        let legal = legal_plays(
            &state.hands[turn],
            state.led_suit,
            state.spades_broken,
            is_leader,
        );
        let Some(&card) = legal.first() else {
            return Err(DomainError::invariant(format!(
                "no legal plays for {turn} (engine state broken)"
            )));
        };

        let outcome = play_card(state, turn, card)?;
        if let Some(winner) = outcome.trick_winner {
            return Ok(winner);
        }
    }
}

/// Play all 13 tricks automatically.
pub fn finish_hand_auto(state: &mut HandState) -> Result<HandResult, DomainError> {
    let _span = info_span!("finish_hand_auto", leader = %state.leader).entered();

    let mut winners = Vec::with_capacity(TRICKS_PER_HAND);
    for _ in 0..TRICKS_PER_HAND {
        winners.push(play_trick_auto(state)?);
    }

    let result = HandResult {
        winner_by_trick: winners,
        books_by_seat: state.books.clone(),
        books_by_team: team_books(&state.books),
    };
    debug!(
        ns = result.books_by_team.ns,
        ew = result.books_by_team.ew,
        "hand complete"
    );
    Ok(result)
}
