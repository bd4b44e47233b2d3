//! Keystream generation by repeated deck advancement.

use crate::deck::Deck;

impl Deck {
    /// Applies one full advance step and returns the resulting deck.
    ///
    /// The four card-move operations run in fixed order: small joker, big
    /// joker, triple cut by jokers, count cut. The order never varies; it is
    /// what defines the cipher.
    #[must_use]
    pub fn advance(&self) -> Self {
        self.move_small_joker()
            .move_big_joker()
            .triple_cut_by_jokers()
            .count_cut()
    }

    /// Derives the output value for the current deck state.
    ///
    /// The top card, counted as position 1, selects the output card: a
    /// non-joker top card's value is the 0-based index of the output card,
    /// while a joker on top selects the bottom card instead. The returned
    /// value may itself be a joker, in which case the advance step produced
    /// no usable keystream value and must be repeated.
    #[must_use]
    pub fn keystream_value(&self) -> u8 {
        let top = self.cards()[0];
        let index = if self.is_joker(top) {
            self.len() - 1
        } else {
            usize::from(top)
        };
        self.cards()[index]
    }
}

/// An infinite iterator over usable keystream values.
///
/// The iterator works on its own copy of the key, so the caller's deck is
/// never advanced in place. Advance steps whose output value is a joker are
/// discarded and do not appear in the stream.
///
/// # Example
///
/// ```
/// use pontifex::{DEFAULT_SUITS, Keystream, generate_deck_seeded};
///
/// let key = generate_deck_seeded(DEFAULT_SUITS, 7).unwrap();
/// let values: Vec<u8> = Keystream::new(&key).take(5).collect();
/// assert_eq!(values.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Keystream {
    /// Working deck, advanced on every draw.
    deck: Deck,
}

impl Keystream {
    /// Creates a keystream starting from a copy of the given key.
    #[must_use]
    pub fn new(key: &Deck) -> Self {
        Self { deck: key.clone() }
    }
}

impl Iterator for Keystream {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            self.deck = self.deck.advance();
            let value = self.deck.keystream_value();
            if !self.deck.is_joker(value) {
                return Some(value);
            }
        }
    }
}
