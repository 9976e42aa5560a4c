//! Seed derivation for multi-hand sessions.
//!
//! A session carries one base seed; every hand deals from a distinct but
//! reproducible seed derived from it.

/// Derive the dealing seed for the `hand_no`-th hand (1-based) of a session.
///
/// Same base + hand number = same deal.
pub fn derive_hand_seed(base_seed: &str, hand_no: u32) -> String {
    format!("{base_seed}#{hand_no}")
}
