use tracing::{debug, trace};

use crate::domain::cards_logic::hand_is_all_spades;
use crate::domain::rules::{breaks_spades, follows_suit, spade_lead_allowed, trick_winner, PLAYERS};
use crate::domain::seats::Seat;
use crate::domain::state::HandState;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// What a successful play changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Whether this play was the 4th card and resolved the trick.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
}

/// Cards `hand` may legally play.
///
/// Leading: spades are held back until broken unless the hand is nothing but
/// spades. Following: the led suit if held, otherwise anything. Hand order is
/// preserved.
pub fn legal_plays(
    hand: &[Card],
    led_suit: Option<Suit>,
    spades_broken: bool,
    is_leader: bool,
) -> Vec<Card> {
    if is_leader {
        if spades_broken || hand_is_all_spades(hand) {
            return hand.to_vec();
        }
        return hand.iter().copied().filter(|c| !c.is_spade()).collect();
    }

    let Some(lead) = led_suit else {
        return hand.to_vec();
    };
    let following: Vec<Card> = hand.iter().copied().filter(|c| c.suit == lead).collect();
    if following.is_empty() {
        hand.to_vec()
    } else {
        following
    }
}

/// Play `card` from `seat` into the current trick.
///
/// Either the whole play applies (card leaves the hand, joins the trick, and
/// on the 4th card the trick resolves) or nothing changes.
///
/// Turn order is not checked: any seat holding a legal card may play, even one
/// that already played to this trick. Callers must submit for
/// [`HandState::to_act`].
pub fn play_card(
    state: &mut HandState,
    seat: Seat,
    card: Card,
) -> Result<PlayOutcome, DomainError> {
    // Card in hand (immutable check first; nothing is mutated until all checks pass)
    let hand = &state.hands[seat];
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::CardNotInHand { seat, card });
    };

    let leading = state.plays.is_empty();
    let led = if leading {
        if card.is_spade() && !spade_lead_allowed(hand, state.spades_broken) {
            return Err(DomainError::IllegalSpadeLead { seat, card });
        }
        card.suit
    } else {
        let led = state
            .led_suit
            .ok_or_else(|| DomainError::invariant("trick in progress without a led suit"))?;
        if !follows_suit(hand, Some(led), card) {
            return Err(DomainError::MustFollowSuit { seat, card, led });
        }
        led
    };

    if leading {
        // On first play, set lead + leader (remember who led this trick)
        state.led_suit = Some(led);
        state.leader = seat;
    } else if breaks_spades(led, card) && !state.spades_broken {
        debug!(%seat, %card, "spades broken");
        state.spades_broken = true;
    }

    state.hands[seat].remove(pos);
    state.plays.push((seat, card));
    trace!(%seat, %card, trick_len = state.plays.len(), "card played");

    if state.plays.len() < PLAYERS {
        return Ok(PlayOutcome {
            trick_completed: false,
            trick_winner: None,
        });
    }

    let winner = resolve_current_trick(state)?;
    Ok(PlayOutcome {
        trick_completed: true,
        trick_winner: Some(winner),
    })
}

/// Resolve a full trick: credit the winner, hand them the lead, reset the trick.
fn resolve_current_trick(state: &mut HandState) -> Result<Seat, DomainError> {
    let led = state
        .led_suit
        .ok_or_else(|| DomainError::invariant("completed trick without a led suit"))?;
    let winner = trick_winner(led, &state.plays)
        .ok_or_else(|| DomainError::invariant("completed trick has no plays"))?;

    state.books[winner] += 1;
    state.leader = winner;
    state.led_suit = None;
    state.plays.clear();

    debug!(
        %winner,
        books = state.books[winner],
        remaining = state.cards_remaining(),
        "trick resolved"
    );
    Ok(winner)
}
