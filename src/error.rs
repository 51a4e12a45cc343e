//! Error types.
//!
//! Play itself never fails: drawing from a finished game is a no-op. The
//! errors here cover card construction from external values and invalid
//! configuration.

use thiserror::Error;

/// Errors that can occur when building cards from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside 1..=13.
    #[error("invalid rank {0}, expected 1..=13")]
    InvalidRank(u8),
    /// Suit identifier outside 1..=4.
    #[error("unknown suit id {0}, expected 1..=4")]
    UnknownSuit(u8),
}

/// Errors that can occur when validating game options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Track length is zero.
    #[error("track length must be at least 1")]
    EmptyTrack,
    /// Track length exceeds the deck size.
    #[error("track length {0} exceeds the deck size")]
    TrackTooLong(usize),
    /// Pile target outside 1..=13.
    #[error("pile target {0} is out of range, expected 1..=13")]
    PileTargetOutOfRange(usize),
}
