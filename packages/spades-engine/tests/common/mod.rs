#![allow(dead_code)]

use spades_engine::{Card, HandState, PerSeat, Seat};

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    engine_test_support::test_logging::init();
}

pub fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

/// Hand state with explicit holdings in N, E, S, W order.
pub fn hand_state(hands: [&[&str]; 4], leader: Seat) -> HandState {
    HandState::from_hands(
        PerSeat::new(hands.map(|h| h.iter().map(|t| card(t)).collect())),
        leader,
    )
}
