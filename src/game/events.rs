//! Notifications for presentation side effects.

use crate::card::{Card, Suit};

/// Something that happened inside the engine.
///
/// Events are delivered after the engine has finished updating, so the
/// observer always sees the new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh game was dealt.
    Dealt {
        /// Number of cards on the new track.
        track_length: usize,
    },
    /// A card moved from the track to its pile.
    CardDrawn {
        /// The card, face up.
        card: Card,
        /// Size of the pile after the card was added.
        pile_len: usize,
    },
    /// A suit completed its pile.
    Won(Suit),
    /// The track ran out with no winner.
    Drawn,
}

/// Receives [`GameEvent`]s, for example to play sounds or start animations.
pub trait GameObserver {
    /// Called once per event.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> GameObserver for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event);
    }
}
