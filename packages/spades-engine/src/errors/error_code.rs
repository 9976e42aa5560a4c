//! Stable error codes for engine failures.
//!
//! Clients match on these instead of parsing messages. All codes are
//! SCREAMING_SNAKE_CASE and never change once published.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Bid outside 0..=13
    InvalidBid,
    /// Seat does not hold the card
    CardNotInHand,
    /// Spade led before spades were broken while another suit was available
    IllegalSpadeLead,
    /// Follower held the led suit but played another
    MustFollowSuit,
    /// Auto-player found no legal card
    EngineInvariantViolation,
    /// Malformed card token
    ParseCard,
    /// Malformed seat token
    ParseSeat,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBid => "INVALID_BID",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::IllegalSpadeLead => "ILLEGAL_SPADE_LEAD",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::EngineInvariantViolation => "ENGINE_INVARIANT_VIOLATION",
            Self::ParseCard => "PARSE_CARD",
            Self::ParseSeat => "PARSE_SEAT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
