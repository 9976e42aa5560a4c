//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

/// Spades always trump.
pub const TRUMP: Suit = Suit::Spades;

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

pub fn hand_is_all_spades(hand: &[Card]) -> bool {
    hand.iter().all(Card::is_spade)
}

/// Whether `a` beats `b` in a trick led with `lead`.
pub fn card_beats(a: Card, b: Card, lead: Suit) -> bool {
    let a_trump = a.suit == TRUMP;
    let b_trump = b.suit == TRUMP;
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    // Same trump status
    if a_trump && b_trump {
        return a.rank > b.rank;
    }
    // Neither trumps: only lead-suit cards can win
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.rank > b.rank;
    }
    false
}
