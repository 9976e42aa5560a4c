//! Domain layer: pure game logic types and helpers.

pub mod auto_play;
pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod seats;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use auto_play::{finish_hand_auto, play_trick_auto, HandResult};
pub use bidding::place_bid;
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal, make_deck, shuffle};
pub use rng::Xorshift32;
pub use scoring::{score_hand, ScoreParams, TeamHand, TeamScores};
pub use seats::{next_seat, PerSeat, PerTeam, Seat, Team};
pub use seed_derivation::derive_hand_seed;
pub use state::{is_hand_complete, start_hand, start_hand_with, team_books, HandConfig, HandState};
pub use tricks::{legal_plays, play_card, PlayOutcome};
