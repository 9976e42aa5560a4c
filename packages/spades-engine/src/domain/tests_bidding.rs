use crate::domain::bidding::{all_bids_placed, place_bid};
use crate::domain::seats::Seat;
use crate::domain::state::start_hand;
use crate::domain::test_state_helpers::card;
use crate::domain::tricks::play_card;
use crate::errors::domain::DomainError;

#[test]
fn bids_in_range_are_recorded() {
    let mut state = start_hand("bids", None);
    place_bid(&mut state, Seat::North, 0).unwrap();
    place_bid(&mut state, Seat::East, 13).unwrap();
    assert_eq!(state.bid(Seat::North), Some(0));
    assert_eq!(state.bid(Seat::East), Some(13));
    assert_eq!(state.bid(Seat::South), None);
    assert!(!all_bids_placed(&state));

    place_bid(&mut state, Seat::South, 4).unwrap();
    place_bid(&mut state, Seat::West, 3).unwrap();
    assert!(all_bids_placed(&state));
}

#[test]
fn out_of_range_bids_are_rejected_without_change() {
    let mut state = start_hand("bids", None);
    place_bid(&mut state, Seat::West, 5).unwrap();
    let before = state.clone();

    assert_eq!(
        place_bid(&mut state, Seat::West, 14).unwrap_err(),
        DomainError::InvalidBid { bid: 14 }
    );
    assert_eq!(
        place_bid(&mut state, Seat::West, -1).unwrap_err(),
        DomainError::InvalidBid { bid: -1 }
    );
    assert_eq!(
        place_bid(&mut state, Seat::West, 300).unwrap_err(),
        DomainError::InvalidBid { bid: 300 }
    );
    assert_eq!(state, before);
}

#[test]
fn a_bid_can_be_replaced() {
    let mut state = start_hand("bids", None);
    place_bid(&mut state, Seat::South, 2).unwrap();
    place_bid(&mut state, Seat::South, 6).unwrap();
    assert_eq!(state.bid(Seat::South), Some(6));
}

#[test]
fn bidding_does_not_gate_play() {
    let mut state = crate::domain::test_state_helpers::minimal_state(
        [&["H_A"], &["H_2"], &["H_3"], &["H_4"]],
        Seat::North,
    );
    // No bids placed at all
    play_card(&mut state, Seat::North, card("H_A")).unwrap();
    // Bid mid-trick
    place_bid(&mut state, Seat::North, 1).unwrap();
    play_card(&mut state, Seat::East, card("H_2")).unwrap();
    assert_eq!(state.current_trick().len(), 2);
}
