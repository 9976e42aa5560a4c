//! Seats, partnerships, and fixed four-slot per-seat storage.
//!
//! Rotation math lives here so every layer (engine, auto-player, simulator)
//! shares a single source of truth for "who acts next".

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;

/// Table position. Play proceeds North → East → South → West → North.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Seat {
    North,
    East,
    South,
    West,
}

/// Partnership: North/South against East/West.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    #[serde(rename = "NS")]
    NorthSouth,
    #[serde(rename = "EW")]
    EastWest,
}

impl Seat {
    pub const ALL: [Seat; PLAYERS] = [Seat::North, Seat::East, Seat::South, Seat::West];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Seat {
        Seat::ALL[idx % PLAYERS]
    }

    /// The seat `n` steps clockwise from `self`.
    #[inline]
    pub fn nth_from(self, n: usize) -> Seat {
        Seat::from_index(self.index() + n)
    }

    /// The next seat clockwise.
    #[inline]
    pub fn next(self) -> Seat {
        self.nth_from(1)
    }

    pub fn team(self) -> Team {
        match self {
            Seat::North | Seat::South => Team::NorthSouth,
            Seat::East | Seat::West => Team::EastWest,
        }
    }

    pub fn partner(self) -> Seat {
        self.nth_from(2)
    }
}

impl Team {
    pub const ALL: [Team; 2] = [Team::NorthSouth, Team::EastWest];

    pub fn seats(self) -> [Seat; 2] {
        match self {
            Team::NorthSouth => [Seat::North, Seat::South],
            Team::EastWest => [Seat::East, Seat::West],
        }
    }
}

/// Returns the seat after `seat` in rotation order.
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat.next()
}

/// Exactly one `T` per seat, indexed by [`Seat`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerSeat<T>([T; PLAYERS]);

impl<T> PerSeat<T> {
    pub fn new(values: [T; PLAYERS]) -> Self {
        Self(values)
    }

    pub fn from_fn(mut f: impl FnMut(Seat) -> T) -> Self {
        Self(Seat::ALL.map(&mut f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> &[T; PLAYERS] {
        &self.0
    }

    pub fn into_inner(self) -> [T; PLAYERS] {
        self.0
    }
}

impl<T> Index<Seat> for PerSeat<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &T {
        &self.0[seat.index()]
    }
}

impl<T> IndexMut<Seat> for PerSeat<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.0[seat.index()]
    }
}

/// One `T` per partnership; serialized as `{"NS": .., "EW": ..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerTeam<T> {
    #[serde(rename = "NS")]
    pub ns: T,
    #[serde(rename = "EW")]
    pub ew: T,
}

impl<T> PerTeam<T> {
    pub fn new(ns: T, ew: T) -> Self {
        Self { ns, ew }
    }

    pub fn from_fn(mut f: impl FnMut(Team) -> T) -> Self {
        let ns = f(Team::NorthSouth);
        let ew = f(Team::EastWest);
        Self { ns, ew }
    }
}

impl<T> Index<Team> for PerTeam<T> {
    type Output = T;

    fn index(&self, team: Team) -> &T {
        match team {
            Team::NorthSouth => &self.ns,
            Team::EastWest => &self.ew,
        }
    }
}

impl<T> IndexMut<Team> for PerTeam<T> {
    fn index_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::NorthSouth => &mut self.ns,
            Team::EastWest => &mut self.ew,
        }
    }
}
