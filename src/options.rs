//! Game configuration options.

use crate::card::{DECK_SIZE, RANKS_PER_SUIT};
use crate::error::OptionsError;

/// Starting order of the deck before shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DeckLayout {
    /// Suit-major order, Ace to King within each suit.
    #[default]
    Standard,
    /// Rank-major order with red and black pairs interleaved by coin flip.
    Balanced,
}

/// Configuration options for a card race.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardrace::GameOptions;
///
/// let options = GameOptions::default()
///     .with_track_length(52)
///     .with_pile_target(13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cards that must reach a pile for its suit to win.
    pub pile_target: usize,
    /// Number of cards dealt from the shuffled deck onto the track.
    pub track_length: usize,
    /// Starting order of the deck.
    pub layout: DeckLayout,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            pile_target: RANKS_PER_SUIT as usize,
            track_length: 24,
            layout: DeckLayout::Standard,
        }
    }
}

impl GameOptions {
    /// Sets the winning pile size.
    ///
    /// # Example
    ///
    /// ```
    /// use cardrace::GameOptions;
    ///
    /// let options = GameOptions::default().with_pile_target(7);
    /// assert_eq!(options.pile_target, 7);
    /// ```
    #[must_use]
    pub const fn with_pile_target(mut self, target: usize) -> Self {
        self.pile_target = target;
        self
    }

    /// Sets the number of cards on the track.
    ///
    /// # Example
    ///
    /// ```
    /// use cardrace::GameOptions;
    ///
    /// let options = GameOptions::default().with_track_length(52);
    /// assert_eq!(options.track_length, 52);
    /// ```
    #[must_use]
    pub const fn with_track_length(mut self, length: usize) -> Self {
        self.track_length = length;
        self
    }

    /// Sets the starting deck layout.
    ///
    /// # Example
    ///
    /// ```
    /// use cardrace::{DeckLayout, GameOptions};
    ///
    /// let options = GameOptions::default().with_layout(DeckLayout::Balanced);
    /// assert_eq!(options.layout, DeckLayout::Balanced);
    /// ```
    #[must_use]
    pub const fn with_layout(mut self, layout: DeckLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if the track is empty or longer than a deck, or if
    /// the pile target is outside 1..=13.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.track_length == 0 {
            return Err(OptionsError::EmptyTrack);
        }
        if self.track_length > DECK_SIZE {
            return Err(OptionsError::TrackTooLong(self.track_length));
        }
        if self.pile_target == 0 || self.pile_target > RANKS_PER_SUIT as usize {
            return Err(OptionsError::PileTargetOutOfRange(self.pile_target));
        }
        Ok(())
    }
}
