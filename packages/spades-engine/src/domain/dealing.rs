//! Deterministic deck construction, shuffling, and dealing.

use crate::domain::rng::Xorshift32;
use crate::domain::rules::{CARDS_PER_HAND, DECK_SIZE};
use crate::domain::seats::{PerSeat, Seat};
use crate::domain::{Card, Rank, Suit};

/// The 52 cards in canonical order: suits S, H, D, C; ranks A down to 2 within each.
pub fn make_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::DESCENDING {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Fisher-Yates permutation of `deck` driven by the seeded PRNG.
///
/// Returns a new vector; the input is left untouched.
pub fn shuffle(seed: &str, deck: &[Card]) -> Vec<Card> {
    let mut rng = Xorshift32::from_seed(seed);
    let mut out = deck.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.next_index(i + 1);
        out.swap(i, j);
    }
    out
}

/// Shuffle a fresh deck and hand out four contiguous 13-card slices N, E, S, W.
///
/// Cards keep their shuffled order within each hand.
pub fn deal(seed: &str) -> PerSeat<Vec<Card>> {
    let deck = shuffle(seed, &make_deck());
    PerSeat::from_fn(|seat: Seat| {
        let start = seat.index() * CARDS_PER_HAND;
        deck[start..start + CARDS_PER_HAND].to_vec()
    })
}
