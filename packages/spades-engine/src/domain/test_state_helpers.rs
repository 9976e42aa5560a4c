//! Test-only hand state helpers for domain unit tests.

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::seats::{PerSeat, Seat};
use crate::domain::state::HandState;
use crate::domain::Card;

/// Parse hardcoded card tokens; panics on a typo in the test itself.
pub fn cards(tokens: &[&str]) -> Vec<Card> {
    #[allow(clippy::expect_used)]
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

pub fn card(token: &str) -> Card {
    #[allow(clippy::expect_used)]
    token.parse().expect("hardcoded valid card token")
}

/// Build a hand state from explicit holdings in N, E, S, W order.
pub fn minimal_state(hands: [&[&str]; 4], leader: Seat) -> HandState {
    HandState::from_hands(PerSeat::new(hands.map(cards)), leader)
}
