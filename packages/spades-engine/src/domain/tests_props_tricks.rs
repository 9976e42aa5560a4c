//! Property-based tests for trick resolution and whole-hand invariants
use proptest::prelude::*;

use crate::domain::auto_play::{finish_hand_auto, play_trick_auto};
use crate::domain::rules::trick_winner;
use crate::domain::state::{is_hand_complete, start_hand};
use crate::domain::tricks::play_card;
use crate::domain::{card_beats, make_deck, test_gens, test_prelude, Card, Seat};
use crate::errors::domain::DomainError;

fn four_plays() -> impl Strategy<Value = Vec<(Seat, Card)>> {
    (test_gens::seat(), proptest::sample::subsequence(make_deck(), 4).prop_shuffle())
        .prop_map(|(leader, cards)| {
            cards
                .into_iter()
                .enumerate()
                .map(|(i, c)| (leader.nth_from(i), c))
                .collect()
        })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The winner played in the trick, and their card beats every other card.
    #[test]
    fn prop_trick_winner_beats_all_others(plays in four_plays()) {
        let led = plays[0].1.suit;
        let winner = trick_winner(led, &plays)
            .ok_or_else(|| TestCaseError::fail("full trick has no winner"))?;

        let (_, winning_card) = plays
            .iter()
            .copied()
            .find(|(s, _)| *s == winner)
            .ok_or_else(|| TestCaseError::fail("winner did not play"))?;
        for &(seat, card) in &plays {
            if seat != winner {
                prop_assert!(card_beats(winning_card, card, led),
                    "{} should beat {} with {:?} led", winning_card, card, led);
            }
        }
    }

    /// Any seed: the auto-player completes the hand, books sum to 13, and the
    /// card count drops by exactly four per trick.
    #[test]
    fn prop_auto_hand_books_sum_to_13(seed in test_gens::seed(), leader in test_gens::seat()) {
        let mut state = start_hand(&seed, Some(leader));
        for trick in 1..=13usize {
            play_trick_auto(&mut state)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(state.cards_remaining(), 52 - 4 * trick);
            prop_assert!(state.current_trick().is_empty());
            prop_assert_eq!(state.led_suit(), None);
        }
        prop_assert!(is_hand_complete(&state));
        let total: u8 = state.books().values().iter().sum();
        prop_assert_eq!(total, 13);
    }

    /// Once broken, spades stay broken; a second run of the same seed agrees on books.
    #[test]
    fn prop_spades_broken_is_monotonic(seed in test_gens::seed()) {
        let mut state = start_hand(&seed, None);
        let mut was_broken = false;
        for _ in 0..13 {
            play_trick_auto(&mut state)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert!(!was_broken || state.spades_broken());
            was_broken = state.spades_broken();
        }
        let mut fresh = start_hand(&seed, None);
        let result = finish_hand_auto(&mut fresh)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(result.books_by_seat, state.books().clone());
    }

    /// Playing a card the seat does not hold fails and leaves the state untouched.
    #[test]
    fn prop_card_not_in_hand_is_rejected(
        seed in test_gens::seed(),
        seat in test_gens::seat(),
        card in test_gens::card(),
    ) {
        let mut state = start_hand(&seed, Some(seat));
        let held = state.hand(seat).contains(&card);
        let before = state.clone();
        let res = play_card(&mut state, seat, card);
        if held {
            prop_assert!(res.is_ok() || state == before);
        } else {
            prop_assert_eq!(res, Err(DomainError::CardNotInHand { seat, card }));
            prop_assert_eq!(state, before);
        }
    }
}
