//! A card race solitaire engine with optional `no_std` support.
//!
//! A shuffled deck is dealt face down onto a track. Each draw moves the
//! front card of the track onto the pile of its suit; the first suit to
//! collect 13 cards wins, and running out of track is a draw.
//!
//! The crate provides the [`Game`] engine, the layered shuffle in [`deck`],
//! and plain snapshot types for a presentation layer to render.
//!
//! # Example
//!
//! ```
//! use cardrace::{Game, GameOptions};
//!
//! let mut game = Game::seeded(GameOptions::default(), 42).unwrap();
//! let result = game.draw();
//! assert!(result.card.is_some());
//! assert_eq!(result.state.track_remaining, 23);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod pile;
pub mod result;
mod shared;
pub mod stats;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, RANKS_PER_SUIT, Suit};
pub use deck::{DeckSource, Shuffler};
pub use error::{CardError, OptionsError};
pub use game::{Game, GameEvent, GameObserver, Outcome};
pub use options::{DeckLayout, GameOptions};
pub use pile::Pile;
pub use result::{DrawResult, GameSnapshot};
pub use shared::SharedGame;
pub use stats::{Advice, GameStats, Performance};
