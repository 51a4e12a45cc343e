//! Read-only views handed to the presentation layer.

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Suit};
use crate::game::Outcome;

/// A copy of the full game state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Cards in each pile, newest first.
    pub piles: HashMap<Suit, Vec<Card>>,
    /// Number of cards still on the track.
    pub track_remaining: usize,
    /// Number of successful draws this game.
    pub moves: usize,
    /// Current outcome.
    pub outcome: Outcome,
}

impl GameSnapshot {
    /// Returns the cards in the pile for `suit`, newest first.
    #[must_use]
    pub fn pile(&self, suit: Suit) -> &[Card] {
        self.piles.get(&suit).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Result of a draw request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    /// The card moved to its pile, or `None` if nothing was drawn.
    pub card: Option<Card>,
    /// The state after the draw.
    pub state: GameSnapshot,
}
