// Proptest generators for domain types.
// These generators ensure unique cards and valid hands for property-based testing.

use proptest::prelude::*;

use crate::domain::dealing::make_deck;
use crate::domain::{Card, Rank, Seat, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
    ]
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    proptest::sample::select(Rank::DESCENDING.to_vec())
}

/// Generate a random Seat
pub fn seat() -> impl Strategy<Value = Seat> {
    proptest::sample::select(Seat::ALL.to_vec())
}

/// Generate a single Card
pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// Generate `1..=max` distinct cards, in random order
pub fn hand_up_to(max: usize) -> impl Strategy<Value = Vec<Card>> {
    proptest::sample::subsequence(make_deck(), 1..=max).prop_shuffle()
}

/// Generate a hand of 1..=13 distinct cards
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    hand_up_to(13)
}

/// Generate a seed string for dealing
pub fn seed() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{0,16}"
}
