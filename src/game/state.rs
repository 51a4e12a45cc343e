//! Game state types.

use crate::card::Suit;

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    /// Ready for the next draw.
    #[default]
    Idle,
    /// The suit's pile reached the target size.
    Won(Suit),
    /// The track ran out before any pile reached the target size.
    Drawn,
}

impl Outcome {
    /// Returns whether the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns the winning suit, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Suit> {
        match self {
            Self::Won(suit) => Some(suit),
            Self::Idle | Self::Drawn => None,
        }
    }
}
