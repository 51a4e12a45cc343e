//! Game engine and state management.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use log::{debug, info};

use crate::card::{Card, Suit};
use crate::deck::{self, DeckSource, Shuffler};
use crate::error::OptionsError;
use crate::options::GameOptions;
use crate::pile::Pile;
use crate::result::{DrawResult, GameSnapshot};
use crate::stats::GameStats;

mod events;
pub mod state;

pub use events::{GameEvent, GameObserver};
pub use state::Outcome;

/// A card race engine.
///
/// The game owns the four piles, the track and the deck source. Each draw
/// moves the front card of the track onto its suit's pile; the first pile
/// to reach [`GameOptions::pile_target`] wins, and an exhausted track is a
/// draw.
///
/// # Example
///
/// ```
/// use cardrace::{Game, GameOptions, Outcome};
///
/// let mut game = Game::seeded(GameOptions::default(), 42).unwrap();
/// while game.draw_next().is_some() {}
/// assert_ne!(game.outcome(), Outcome::Idle);
/// ```
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// One pile per suit, in [`Suit::ALL`] order.
    piles: [Pile; 4],
    /// Cards waiting to be drawn, front first.
    track: VecDeque<Card>,
    /// Deck cards that did not fit on the track.
    discarded: Vec<Card>,
    /// Successful draws this game.
    moves: usize,
    /// Current outcome.
    outcome: Outcome,
    /// Supplies a deck for every new game.
    source: Box<dyn DeckSource + Send>,
    /// Receives engine events.
    observer: Option<Box<dyn GameObserver + Send>>,
}

impl Game {
    /// Creates a game that takes its decks from `source` and deals the first
    /// game immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` fail [`GameOptions::validate`].
    pub fn new<S>(options: GameOptions, source: S) -> Result<Self, OptionsError>
    where
        S: DeckSource + Send + 'static,
    {
        options.validate()?;

        let mut game = Self {
            options,
            piles: Suit::ALL.map(Pile::new),
            track: VecDeque::new(),
            discarded: Vec::new(),
            moves: 0,
            outcome: Outcome::Idle,
            source: Box::new(source),
            observer: None,
        };
        game.deal();
        Ok(game)
    }

    /// Creates a game whose decks are reproducible from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` fail [`GameOptions::validate`].
    pub fn seeded(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        Self::new(options, Shuffler::seeded(seed))
    }

    /// Creates a game that seeds every deck from the clock.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` fail [`GameOptions::validate`].
    #[cfg(feature = "std")]
    pub fn from_entropy(options: GameOptions) -> Result<Self, OptionsError> {
        Self::new(options, Shuffler::from_entropy())
    }

    /// Registers an observer, replacing any previous one.
    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: GameObserver + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    fn notify(&mut self, event: GameEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
    }

    fn deal(&mut self) {
        let deck = self.source.next_deck(self.options.layout);
        let (track, remainder) = deck::build_track(deck, self.options.track_length);

        for pile in &mut self.piles {
            pile.clear();
        }
        self.track = track.into();
        self.discarded = remainder;
        self.moves = 0;
        self.outcome = Outcome::Idle;

        let track_length = self.track.len();
        info!("dealt a new game with {track_length} cards on the track");
        self.notify(GameEvent::Dealt { track_length });
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        match outcome {
            Outcome::Won(suit) => {
                info!("{suit} won after {} moves", self.moves);
                self.notify(GameEvent::Won(suit));
            }
            Outcome::Drawn => {
                info!("track exhausted after {} moves, no winner", self.moves);
                self.notify(GameEvent::Drawn);
            }
            Outcome::Idle => {}
        }
    }

    /// Discards the current game and deals a fresh one.
    ///
    /// This is the only way out of a finished game.
    pub fn reset(&mut self) -> GameSnapshot {
        self.deal();
        self.current_state()
    }

    /// Starts a new game. Same as [`Game::reset`].
    pub fn new_game(&mut self) -> GameSnapshot {
        self.reset()
    }

    /// Moves the front card of the track onto its suit's pile.
    ///
    /// Returns the drawn card, face up. Returns `None` without touching the
    /// game if it is already over. Returns `None` and ends the game as a draw
    /// if the track is empty.
    pub fn draw_next(&mut self) -> Option<Card> {
        if self.outcome.is_terminal() {
            return None;
        }

        let Some(mut card) = self.track.pop_front() else {
            self.finish(Outcome::Drawn);
            return None;
        };

        let pile = &mut self.piles[card.suit.index()];
        pile.push_top(card);
        let pile_len = pile.len();
        card.reveal();
        self.moves += 1;

        debug!(
            "move {}: {card} to {} (pile {pile_len}, track {})",
            self.moves,
            card.suit,
            self.track.len()
        );
        self.notify(GameEvent::CardDrawn { card, pile_len });

        // Only the pile that just grew can have reached the target.
        if pile_len == self.options.pile_target {
            self.finish(Outcome::Won(card.suit));
        } else if self.track.is_empty() {
            self.finish(Outcome::Drawn);
        }

        Some(card)
    }

    /// Draws the next card and returns it with the resulting state.
    pub fn draw(&mut self) -> DrawResult {
        let card = self.draw_next();
        DrawResult {
            card,
            state: self.current_state(),
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot {
            piles: self
                .piles
                .iter()
                .map(|pile| (pile.suit(), pile.cards().to_vec()))
                .collect(),
            track_remaining: self.track.len(),
            moves: self.moves,
            outcome: self.outcome,
        }
    }

    /// Returns statistics for the current game.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats::from_snapshot(&self.current_state(), self.options.pile_target)
    }

    /// Returns the current outcome.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the number of successful draws this game.
    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Returns the number of cards left on the track.
    #[must_use]
    pub fn track_remaining(&self) -> usize {
        self.track.len()
    }

    /// Returns the cards left on the track, front first.
    pub fn track(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.track.iter()
    }

    /// Returns the pile for `suit`.
    #[must_use]
    pub const fn pile(&self, suit: Suit) -> &Pile {
        &self.piles[suit.index()]
    }

    /// Returns the deck cards that were not placed on the track.
    #[must_use]
    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the suit with the longest pile.
    ///
    /// Ties go to the suit that comes first in [`Suit::ALL`]. Returns `None`
    /// while every pile is empty.
    #[must_use]
    pub fn leader(&self) -> Option<Suit> {
        self.piles
            .iter()
            .rev()
            .filter(|pile| !pile.is_empty())
            .max_by_key(|pile| pile.len())
            .map(Pile::suit)
    }
}
