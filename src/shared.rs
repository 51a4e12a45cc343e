//! A thread-safe handle around [`Game`].
//!
//! [`Game`] itself takes `&mut self` and does no locking. Hosts that call
//! into it from several threads wrap it in a [`SharedGame`], which
//! serializes every call behind one lock.

use crate::game::{Game, Outcome};
use crate::result::{DrawResult, GameSnapshot};

#[cfg(feature = "std")]
struct Lock<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Lock<T> {
    const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    // Every operation leaves the game consistent, so a poisoned lock is safe
    // to reuse.
    fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn into_inner(self) -> T {
        self.0
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
struct Lock<T>(spin::Mutex<T>);

#[cfg(all(not(feature = "std"), feature = "alloc"))]
impl<T> Lock<T> {
    const fn new(value: T) -> Self {
        Self(spin::Mutex::new(value))
    }

    fn lock(&self) -> spin::MutexGuard<'_, T> {
        self.0.lock()
    }

    fn into_inner(self) -> T {
        self.0.into_inner()
    }
}

/// A [`Game`] behind a mutex, usable through `&self` from any thread.
///
/// # Example
///
/// ```
/// use cardrace::{Game, GameOptions, SharedGame};
///
/// let shared = SharedGame::new(Game::seeded(GameOptions::default(), 3).unwrap());
/// let result = shared.draw();
/// assert_eq!(result.state.moves, 1);
/// ```
pub struct SharedGame {
    game: Lock<Game>,
}

impl SharedGame {
    /// Wraps `game`.
    #[must_use]
    pub const fn new(game: Game) -> Self {
        Self {
            game: Lock::new(game),
        }
    }

    /// Deals a fresh game and returns its state.
    pub fn new_game(&self) -> GameSnapshot {
        self.game.lock().new_game()
    }

    /// Draws the next card.
    pub fn draw(&self) -> DrawResult {
        self.game.lock().draw()
    }

    /// Returns a copy of the current state.
    pub fn current_state(&self) -> GameSnapshot {
        self.game.lock().current_state()
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.game.lock().outcome()
    }

    /// Runs `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut game = self.game.lock();
        f(&mut game)
    }

    /// Unwraps the game.
    #[must_use]
    pub fn into_inner(self) -> Game {
        self.game.into_inner()
    }
}
