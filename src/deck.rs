//! Deck generation and shuffling.
//!
//! A deck is shuffled in four stages, all applied to the same slice:
//!
//! 1. A Fisher-Yates pass from the last index down to 1.
//! 2. The deck is cut into contiguous blocks of one size drawn from 3..=7,
//!    and each block is shuffled in place (the last block may be shorter).
//! 3. Between 20 and 39 random pairwise swaps.
//! 4. One more full shuffle.
//!
//! The first stage alone already yields a uniform permutation. The later
//! stages are kept so that a fixed seed always reproduces the same deal.

use core::ops::{Range, RangeInclusive};

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS_PER_SUIT, Suit};
use crate::options::DeckLayout;

/// Block sizes used by the second shuffle stage.
const BLOCK_SIZES: RangeInclusive<usize> = 3..=7;

/// Number of extra pairwise swaps performed by the third stage.
const EXTRA_SWAPS: Range<usize> = 20..40;

const RED_SUITS: [Suit; 2] = [Suit::Hearts, Suit::Diamonds];
const BLACK_SUITS: [Suit; 2] = [Suit::Clubs, Suit::Spades];

/// Builds the unshuffled 52-card deck, suit-major with ranks 1..=13.
///
/// Every card starts face down.
#[must_use]
pub fn ordered_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in 1..=RANKS_PER_SUIT {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// Shuffles `cards` in place with the four-stage layered shuffle.
///
/// Slices of any length are accepted; an empty slice is left untouched and
/// consumes no randomness.
pub fn layered_shuffle<R: Rng>(cards: &mut [Card], rng: &mut R) {
    let len = cards.len();
    if len == 0 {
        return;
    }

    for i in (1..len).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }

    let block = rng.random_range(BLOCK_SIZES);
    for chunk in cards.chunks_mut(block) {
        chunk.shuffle(rng);
    }

    let swaps = rng.random_range(EXTRA_SWAPS);
    for _ in 0..swaps {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        cards.swap(a, b);
    }

    cards.shuffle(rng);
}

/// Generates a shuffled deck from `seed`.
///
/// The same seed always yields the same order.
///
/// # Example
///
/// ```
/// use cardrace::deck;
///
/// assert_eq!(deck::generate(7), deck::generate(7));
/// assert_eq!(deck::generate(7).len(), cardrace::DECK_SIZE);
/// ```
#[must_use]
pub fn generate(seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cards = ordered_deck();
    layered_shuffle(&mut cards, &mut rng);
    cards
}

/// Generates a shuffled deck whose starting order alternates colors.
///
/// For each rank the two red and two black cards are appended as pairs,
/// with a coin flip deciding which color comes first. The layered shuffle
/// is then applied as in [`generate`].
#[must_use]
pub fn balanced_deck(seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for rank in 1..=RANKS_PER_SUIT {
        let (first, second) = if rng.random_bool(0.5) {
            (RED_SUITS, BLACK_SUITS)
        } else {
            (BLACK_SUITS, RED_SUITS)
        };
        for suit in first.into_iter().chain(second) {
            cards.push(Card::new(suit, rank));
        }
    }

    layered_shuffle(&mut cards, &mut rng);
    cards
}

/// Splits the front `count` cards of `deck` off into a track.
///
/// Returns `(track, remainder)`. At most `deck.len()` cards are taken. All
/// track cards are turned face down.
#[must_use]
pub fn build_track(mut deck: Vec<Card>, count: usize) -> (Vec<Card>, Vec<Card>) {
    let take = count.min(deck.len());
    let remainder = deck.split_off(take);
    for card in &mut deck {
        card.conceal();
    }
    (deck, remainder)
}

/// Derives a seed from the wall clock, a high-resolution timestamp, the
/// current thread and a process-wide call counter.
///
/// Successive calls never return the same value within a process, even when
/// the clock has not advanced.
#[cfg(feature = "std")]
#[must_use]
pub fn entropy_seed() -> u64 {
    use core::hash::{Hash, Hasher};
    use core::sync::atomic::{AtomicU64, Ordering};
    use std::hash::DefaultHasher;
    use std::time::{SystemTime, UNIX_EPOCH};

    static CALLS: AtomicU64 = AtomicU64::new(0);

    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let millis = since_epoch.as_millis() as u64;
    let nanos = since_epoch.as_nanos() as u64;

    let mut hasher = DefaultHasher::new();
    std::thread::current().id().hash(&mut hasher);
    let thread = hasher.finish();

    let call = CALLS.fetch_add(1, Ordering::Relaxed);

    millis ^ nanos.rotate_left(17) ^ thread ^ call.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// A supplier of fresh decks for the game engine.
///
/// The engine asks for one deck per game. Implement this to feed the engine
/// prepared decks, for example in tests.
pub trait DeckSource {
    /// Returns the next deck to deal from.
    fn next_deck(&mut self, layout: DeckLayout) -> Vec<Card>;
}

#[derive(Debug, Clone)]
enum SeedStream {
    #[cfg(feature = "std")]
    Entropy,
    Seeded(ChaCha8Rng),
}

/// The default [`DeckSource`]: a fresh layered shuffle for every game.
///
/// Each deck gets its own generator. With [`Shuffler::seeded`] the per-deck
/// seeds come from a ChaCha8 stream, so a whole session replays exactly.
#[derive(Debug, Clone)]
pub struct Shuffler {
    seeds: SeedStream,
}

impl Shuffler {
    /// Creates a shuffler that seeds every deck from [`entropy_seed`].
    #[cfg(feature = "std")]
    #[must_use]
    pub const fn from_entropy() -> Self {
        Self {
            seeds: SeedStream::Entropy,
        }
    }

    /// Creates a shuffler whose decks are reproducible from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeds: SeedStream::Seeded(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    fn next_seed(&mut self) -> u64 {
        match &mut self.seeds {
            #[cfg(feature = "std")]
            SeedStream::Entropy => entropy_seed(),
            SeedStream::Seeded(rng) => rng.next_u64(),
        }
    }
}

impl DeckSource for Shuffler {
    fn next_deck(&mut self, layout: DeckLayout) -> Vec<Card> {
        let seed = self.next_seed();
        match layout {
            DeckLayout::Standard => generate(seed),
            DeckLayout::Balanced => balanced_deck(seed),
        }
    }
}
