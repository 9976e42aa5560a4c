use crate::domain::rules::valid_bid_range;
use crate::domain::seats::Seat;
use crate::domain::state::HandState;
use crate::errors::domain::DomainError;

/// Record `seat`'s bid. Bids may be placed (or replaced) at any point in the
/// hand; they never gate play.
pub fn place_bid(state: &mut HandState, seat: Seat, bid: i32) -> Result<(), DomainError> {
    let bid = u8::try_from(bid)
        .ok()
        .filter(|b| valid_bid_range().contains(b))
        .ok_or(DomainError::InvalidBid { bid })?;
    state.bids[seat] = Some(bid);
    Ok(())
}

/// Whether every seat has bid.
pub fn all_bids_placed(state: &HandState) -> bool {
    state.bids.iter().all(|(_, b)| b.is_some())
}
