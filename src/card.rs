//! Card types.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::CardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks in each suit (Ace through King).
pub const RANKS_PER_SUIT: u8 = 13;

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and Diamonds.
    Red,
    /// Clubs and Spades.
    Black,
}

/// Card suit.
///
/// Each suit owns one pile in the race. The declaration order is the
/// canonical order used for deck construction and tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Hearts, Self::Spades, Self::Diamonds];

    /// Returns the stable numeric identifier (1-4).
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Clubs => 1,
            Self::Hearts => 2,
            Self::Spades => 3,
            Self::Diamonds => 4,
        }
    }

    /// Looks up a suit by its numeric identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownSuit`] for identifiers outside 1..=4.
    pub const fn from_id(id: u8) -> Result<Self, CardError> {
        match id {
            1 => Ok(Self::Clubs),
            2 => Ok(Self::Hearts),
            3 => Ok(Self::Spades),
            4 => Ok(Self::Diamonds),
            _ => Err(CardError::UnknownSuit(id)),
        }
    }

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Clubs | Self::Spades => Color::Black,
        }
    }

    /// Zero-based position in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.id() as usize - 1
    }

    /// Returns the English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
        }
    }

    /// Returns the Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Hearts => '♥',
            Self::Spades => '♠',
            Self::Diamonds => '♦',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Two cards compare equal when rank and suit match; the face-up flag is a
/// display attribute and takes no part in equality or hashing.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// The suit of the card.
    pub suit: Suit,
    /// Whether the card is showing its face.
    pub face_up: bool,
}

impl Card {
    /// Creates a new face-down card.
    ///
    /// Note: This function does not validate the rank. Use [`Card::try_new`]
    /// when the rank comes from outside the crate.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Creates a new face-down card, rejecting ranks outside 1..=13.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] for rank 0 or ranks above 13.
    pub const fn try_new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank == 0 || rank > RANKS_PER_SUIT {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self::new(suit, rank))
    }

    /// Turns the card face up.
    pub const fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Turns the card face down.
    pub const fn conceal(&mut self) {
        self.face_up = false;
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Returns the short rank label ("A", "2".."10", "J", "Q", "K").
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }

    /// Returns the color of the card's suit.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns whether the card is red.
    #[must_use]
    pub const fn is_red(&self) -> bool {
        matches!(self.suit.color(), Color::Red)
    }

    /// Returns whether the card is black.
    #[must_use]
    pub const fn is_black(&self) -> bool {
        matches!(self.suit.color(), Color::Black)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}
