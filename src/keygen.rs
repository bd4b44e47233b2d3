//! Key generation: randomized initial decks.

use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::deck::{CARDS_PER_SUIT, Deck, JOKER_COUNT};
use crate::error::KeyError;

/// Default number of suits, yielding the classic 54-card deck.
pub const DEFAULT_SUITS: u8 = 4;

/// Generates a shuffled deck of `suits * 13 + 2` cards.
///
/// The randomness seam is the caller-supplied `rng`, so tests can pass a
/// seeded generator and get deterministic keys.
///
/// # Errors
///
/// Returns an error if `suits` is zero (such a deck is all jokers and can
/// never produce a keystream value) or large enough that card values no
/// longer fit in a `u8`.
pub fn generate_deck<R: Rng + ?Sized>(suits: u8, rng: &mut R) -> Result<Deck, KeyError> {
    if suits == 0 {
        return Err(KeyError::NoSuits);
    }

    let size = usize::from(suits) * CARDS_PER_SUIT + JOKER_COUNT;
    if size > usize::from(u8::MAX) {
        return Err(KeyError::TooManySuits);
    }

    let mut cards: Vec<u8> = (1..=size as u8).collect();
    cards.shuffle(rng);
    Ok(Deck::from_cards(cards))
}

/// Generates a shuffled deck from a seed.
///
/// Convenience wrapper around [`generate_deck`] using a seeded ChaCha RNG.
///
/// # Errors
///
/// Returns an error for the same suit counts as [`generate_deck`].
///
/// # Example
///
/// ```
/// use pontifex::{DEFAULT_SUITS, generate_deck_seeded};
///
/// let key = generate_deck_seeded(DEFAULT_SUITS, 42).unwrap();
/// assert_eq!(key.len(), 54);
/// ```
pub fn generate_deck_seeded(suits: u8, seed: u64) -> Result<Deck, KeyError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_deck(suits, &mut rng)
}
