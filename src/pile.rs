//! Per-suit pile representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// The cards a suit has collected so far.
///
/// New cards are inserted at the front, so index 0 is always the most
/// recent card. Only that card is face up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    /// The suit this pile collects.
    suit: Suit,
    /// Cards, newest first.
    cards: Vec<Card>,
}

impl Pile {
    /// Creates a new empty pile for `suit`.
    #[must_use]
    pub const fn new(suit: Suit) -> Self {
        Self {
            suit,
            cards: Vec::new(),
        }
    }

    /// Places a card on top of the pile.
    ///
    /// The new card is turned face up and every older card face down.
    pub fn push_top(&mut self, mut card: Card) {
        debug_assert_eq!(card.suit, self.suit, "card placed on the wrong pile");

        for older in &mut self.cards {
            older.conceal();
        }
        card.reveal();
        self.cards.insert(0, card);
    }

    /// Returns the suit of the pile.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the cards in the pile, newest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the pile for a new game.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
