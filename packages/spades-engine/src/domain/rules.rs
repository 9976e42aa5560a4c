//! Table constants and the pure rule predicates of the game.

use std::ops::RangeInclusive;

use crate::domain::cards_logic::{card_beats, hand_has_suit, hand_is_all_spades, TRUMP};
use crate::domain::seats::Seat;
use crate::domain::{Card, Suit};

pub const PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 52;
pub const CARDS_PER_HAND: usize = 13;
pub const TRICKS_PER_HAND: usize = 13;
pub const MAX_BID: u8 = 13;

pub fn valid_bid_range() -> RangeInclusive<u8> {
    0..=MAX_BID
}

/// Follow legality: a card matching the led suit is always legal; any other card
/// is legal only when the hand is void in the led suit.
///
/// With no led suit (nothing played yet) every card passes.
pub fn follows_suit(hand: &[Card], led: Option<Suit>, card: Card) -> bool {
    match led {
        Some(lead) => card.suit == lead || !hand_has_suit(hand, lead),
        None => true,
    }
}

/// A spade may be led once spades are broken, or when the hand holds nothing else.
pub fn spade_lead_allowed(hand: &[Card], spades_broken: bool) -> bool {
    spades_broken || hand_is_all_spades(hand)
}

/// Whether playing `card` into a trick led with `led` breaks spades.
pub fn breaks_spades(led: Suit, card: Card) -> bool {
    card.suit == TRUMP && led != TRUMP
}

/// Winner of a trick: the highest spade if any spade was played off a non-spade
/// lead, otherwise the highest card of the led suit.
///
/// Returns `None` for an empty trick.
pub fn trick_winner(led: Suit, plays: &[(Seat, Card)]) -> Option<Seat> {
    let (first, rest) = plays.split_first()?;
    let mut best = *first;
    for &(seat, card) in rest {
        if card_beats(card, best.1, led) {
            best = (seat, card);
        }
    }
    Some(best.0)
}
