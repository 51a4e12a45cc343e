//! End-of-game statistics.

use crate::card::Suit;
use crate::game::Outcome;
use crate::result::GameSnapshot;

/// Rating derived from the number of moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Performance {
    /// 15 moves or fewer.
    Excellent,
    /// 16 to 25 moves.
    Good,
    /// 26 to 35 moves.
    Fair,
    /// More than 35 moves.
    KeepPracticing,
}

impl Performance {
    /// Rates a move count.
    #[must_use]
    pub const fn from_moves(moves: usize) -> Self {
        match moves {
            0..=15 => Self::Excellent,
            16..=25 => Self::Good,
            26..=35 => Self::Fair,
            _ => Self::KeepPracticing,
        }
    }
}

/// Advice tier derived from the efficiency percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advice {
    /// Efficiency of 80% or more.
    KeepItUp,
    /// Efficiency of 60% to 79%.
    BeMoreSelective,
    /// Efficiency of 40% to 59%.
    WatchPatterns,
    /// Efficiency below 40%.
    PracticeMore,
}

impl Advice {
    /// Picks the advice for an efficiency percentage.
    #[must_use]
    pub const fn from_efficiency(efficiency: usize) -> Self {
        match efficiency {
            80.. => Self::KeepItUp,
            60..=79 => Self::BeMoreSelective,
            40..=59 => Self::WatchPatterns,
            _ => Self::PracticeMore,
        }
    }
}

/// Summary numbers for a game, typically shown once it is over.
///
/// Every draw consumes exactly one track card, so the number of cards played
/// equals the move count and the original track length is
/// `moves + track_remaining`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStats {
    /// Number of successful draws.
    pub moves: usize,
    /// Cards taken from the track.
    pub cards_played: usize,
    /// Cards still on the track.
    pub cards_remaining: usize,
    /// Share of the track played, in whole percent (0 for an empty track).
    pub completion: usize,
    /// `pile_target * 100 / moves`, in whole percent (0 before any move).
    pub efficiency: usize,
    /// Size a pile needs to win.
    pub pile_target: usize,
    /// Pile sizes in [`Suit::ALL`] order.
    pub pile_sizes: [usize; 4],
    /// Outcome at the time of the summary.
    pub outcome: Outcome,
}

impl GameStats {
    /// Computes statistics from a snapshot.
    #[must_use]
    pub fn from_snapshot(state: &GameSnapshot, pile_target: usize) -> Self {
        let cards_played = state.moves;
        let track_length = cards_played + state.track_remaining;

        let completion = if track_length == 0 {
            0
        } else {
            cards_played * 100 / track_length
        };
        let efficiency = if state.moves == 0 {
            0
        } else {
            pile_target * 100 / state.moves
        };

        Self {
            moves: state.moves,
            cards_played,
            cards_remaining: state.track_remaining,
            completion,
            efficiency,
            pile_target,
            pile_sizes: Suit::ALL.map(|suit| state.pile(suit).len()),
            outcome: state.outcome,
        }
    }

    /// Returns the pile size for `suit`.
    #[must_use]
    pub const fn pile_size(&self, suit: Suit) -> usize {
        self.pile_sizes[suit.index()]
    }

    /// Returns the rating for the move count.
    #[must_use]
    pub const fn performance(&self) -> Performance {
        Performance::from_moves(self.moves)
    }

    /// Returns the advice for the efficiency.
    #[must_use]
    pub const fn advice(&self) -> Advice {
        Advice::from_efficiency(self.efficiency)
    }
}
