use crate::domain::dealing::deal;
use crate::domain::rules::PLAYERS;
use crate::domain::seats::{PerSeat, PerTeam, Seat, Team};
use crate::domain::{Card, Suit};

/// How a hand is started: which deal, and who leads the first trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandConfig {
    pub seed: String,
    pub leader: Seat,
}

impl HandConfig {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            leader: Seat::North,
        }
    }

    pub fn with_leader(mut self, leader: Seat) -> Self {
        self.leader = leader;
        self
    }
}

/// Mutable state of one dealt hand.
///
/// Owned by exactly one caller and changed only through `place_bid` and
/// `play_card`. Between operations:
/// - `led_suit` is `Some` iff `plays` is non-empty;
/// - `plays` holds at most 3 entries (the 4th resolves the trick at once);
/// - the four hands are disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandState {
    /// Remaining cards per seat, in dealt order.
    pub(crate) hands: PerSeat<Vec<Card>>,
    /// Bids per seat; `None` until placed.
    pub(crate) bids: PerSeat<Option<u8>>,
    /// Seat that leads (or led) the current trick.
    pub(crate) leader: Seat,
    /// Suit of the first card of the current trick.
    pub(crate) led_suit: Option<Suit>,
    /// Ordered plays of the current trick.
    pub(crate) plays: Vec<(Seat, Card)>,
    /// Set once a spade is played off-suit; never cleared within a hand.
    pub(crate) spades_broken: bool,
    /// Tricks won per seat this hand.
    pub(crate) books: PerSeat<u8>,
}

/// Deal from `seed` and start a hand. North leads unless `leader` says otherwise.
pub fn start_hand(seed: &str, leader: Option<Seat>) -> HandState {
    HandState::from_hands(deal(seed), leader.unwrap_or(Seat::North))
}

pub fn start_hand_with(config: &HandConfig) -> HandState {
    start_hand(&config.seed, Some(config.leader))
}

impl HandState {
    /// Start a hand from explicit holdings, e.g. a crafted end position.
    ///
    /// Holdings are taken as given: the caller must supply pairwise disjoint
    /// hands of at most 13 cards each, or trick and hand invariants do not hold.
    pub fn from_hands(hands: PerSeat<Vec<Card>>, leader: Seat) -> Self {
        Self {
            hands,
            bids: PerSeat::default(),
            leader,
            led_suit: None,
            plays: Vec::with_capacity(PLAYERS),
            spades_broken: false,
            books: PerSeat::default(),
        }
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat]
    }

    pub fn hands(&self) -> &PerSeat<Vec<Card>> {
        &self.hands
    }

    pub fn bid(&self, seat: Seat) -> Option<u8> {
        self.bids[seat]
    }

    pub fn bids(&self) -> &PerSeat<Option<u8>> {
        &self.bids
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn led_suit(&self) -> Option<Suit> {
        self.led_suit
    }

    /// Plays of the trick in progress, in play order.
    pub fn current_trick(&self) -> &[(Seat, Card)] {
        &self.plays
    }

    pub fn spades_broken(&self) -> bool {
        self.spades_broken
    }

    pub fn books(&self) -> &PerSeat<u8> {
        &self.books
    }

    /// Seat expected to play next: the leader advanced by the cards already down.
    pub fn to_act(&self) -> Seat {
        self.leader.nth_from(self.plays.len())
    }

    pub fn cards_remaining(&self) -> usize {
        self.hands.iter().map(|(_, h)| h.len()).sum()
    }

    pub fn team_books(&self) -> PerTeam<u8> {
        team_books(&self.books)
    }
}

/// All hands empty and no trick pending.
pub fn is_hand_complete(state: &HandState) -> bool {
    state.cards_remaining() == 0 && state.plays.is_empty()
}

/// Sum per-seat books into partnership totals.
pub fn team_books(books: &PerSeat<u8>) -> PerTeam<u8> {
    PerTeam::from_fn(|team: Team| team.seats().iter().map(|&s| books[s]).sum())
}
