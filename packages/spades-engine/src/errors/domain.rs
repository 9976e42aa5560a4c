//! Domain-level error type returned by every engine operation.
//!
//! A failed operation leaves the `HandState` exactly as it was. The engine
//! never logs or retries; callers decide how to surface the error.

use thiserror::Error;

use super::error_code::ErrorCode;
use crate::domain::{Card, Seat, Suit};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid bid {bid}: must be between 0 and 13")]
    InvalidBid { bid: i32 },

    #[error("{seat} does not hold {card}")]
    CardNotInHand { seat: Seat, card: Card },

    #[error("{seat} cannot lead {card}: spades are not broken")]
    IllegalSpadeLead { seat: Seat, card: Card },

    #[error("{seat} must follow {led:?} instead of playing {card}")]
    MustFollowSuit { seat: Seat, card: Card, led: Suit },

    #[error("engine invariant violated: {0}")]
    EngineInvariantViolation(String),

    #[error("parse card: {0:?}")]
    ParseCard(String),

    #[error("parse seat: {0:?}")]
    ParseSeat(String),
}

impl DomainError {
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::EngineInvariantViolation(detail.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidBid { .. } => ErrorCode::InvalidBid,
            DomainError::CardNotInHand { .. } => ErrorCode::CardNotInHand,
            DomainError::IllegalSpadeLead { .. } => ErrorCode::IllegalSpadeLead,
            DomainError::MustFollowSuit { .. } => ErrorCode::MustFollowSuit,
            DomainError::EngineInvariantViolation(_) => ErrorCode::EngineInvariantViolation,
            DomainError::ParseCard(_) => ErrorCode::ParseCard,
            DomainError::ParseSeat(_) => ErrorCode::ParseSeat,
        }
    }
}
