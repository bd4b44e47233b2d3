//! Deck representation and the four card-move operations.

use alloc::vec::Vec;

/// Number of cards per suit.
pub const CARDS_PER_SUIT: usize = 13;

/// Number of jokers in every deck.
pub const JOKER_COUNT: usize = 2;

/// An ordered deck of cards used as cipher state.
///
/// A deck of size `N` holds the values `1..=N` in some order. The two highest
/// values (`N - 1` and `N`) are the jokers; a card's identity depends only on
/// its value, never on its position.
///
/// Note: Constructors do not validate the deck. Supplying duplicate,
/// out-of-range, or missing values is a contract violation and the card-move
/// operations may panic or produce meaningless output for such decks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    /// Card values, top of the deck first.
    cards: Vec<u8>,
}

impl Deck {
    /// Creates a deck from raw card values, top of the deck first.
    ///
    /// The values must form a permutation of `1..=N`; this is not checked.
    #[must_use]
    pub const fn from_cards(cards: Vec<u8>) -> Self {
        Self { cards }
    }

    /// Returns the card values, top of the deck first.
    #[must_use]
    pub fn cards(&self) -> &[u8] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the value of the small joker (`N - 1`).
    #[must_use]
    pub fn small_joker(&self) -> u8 {
        self.cards.len() as u8 - 1
    }

    /// Returns the value of the big joker (`N`).
    #[must_use]
    pub fn big_joker(&self) -> u8 {
        self.cards.len() as u8
    }

    /// Returns whether `value` is one of the two jokers.
    ///
    /// Jokers are always the two highest values a deck of this size can hold.
    #[must_use]
    pub fn is_joker(&self, value: u8) -> bool {
        usize::from(value) > self.cards.len() - JOKER_COUNT
    }

    /// Returns the current index of the card with the given value.
    ///
    /// Panics if the value is not present, which can only happen for a deck
    /// that violates the permutation precondition.
    fn position_of(&self, value: u8) -> usize {
        self.cards
            .iter()
            .position(|&card| card == value)
            .unwrap_or_else(|| panic!("card {value} missing from deck"))
    }

    /// Moves a joker down the deck and returns the resulting deck.
    ///
    /// The big joker jumps two slots, the small joker one. Movement is
    /// circular but never lands on index 0: a move past the bottom wraps to
    /// `(index + jump) % N + 1`, skipping the top slot. All other cards keep
    /// their relative order.
    #[must_use]
    pub fn move_joker(&self, joker: u8) -> Self {
        let len = self.cards.len();
        let jump = if usize::from(joker) == len { 2 } else { 1 };
        let index = self.position_of(joker);

        let target = if index + jump >= len {
            // Wrapping must skip index 0; the joker never lands on top.
            (index + jump) % len + 1
        } else {
            index + jump
        };

        let mut cards = self.cards.clone();
        cards.remove(index);
        cards.insert(target, joker);
        Self { cards }
    }

    /// Moves the small joker (`N - 1`) one slot down.
    #[must_use]
    pub fn move_small_joker(&self) -> Self {
        self.move_joker(self.small_joker())
    }

    /// Moves the big joker (`N`) two slots down.
    #[must_use]
    pub fn move_big_joker(&self) -> Self {
        self.move_joker(self.big_joker())
    }

    /// Performs a triple cut around the two given indices.
    ///
    /// The cards above the lower index and the cards below the upper index
    /// swap places; the middle segment, including both cut points, stays
    /// where it is. The indices may be passed in either order. Cutting at
    /// `(0, N - 1)` returns the deck unchanged.
    #[must_use]
    pub fn triple_cut(&self, cut_indices: (usize, usize)) -> Self {
        let (lower, upper) = if cut_indices.0 <= cut_indices.1 {
            (cut_indices.0, cut_indices.1)
        } else {
            (cut_indices.1, cut_indices.0)
        };

        let mut cards = Vec::with_capacity(self.cards.len());
        cards.extend_from_slice(&self.cards[upper + 1..]);
        cards.extend_from_slice(&self.cards[lower..=upper]);
        cards.extend_from_slice(&self.cards[..lower]);
        Self { cards }
    }

    /// Performs a triple cut around the current positions of the two jokers.
    #[must_use]
    pub fn triple_cut_by_jokers(&self) -> Self {
        let small = self.position_of(self.small_joker());
        let big = self.position_of(self.big_joker());
        self.triple_cut((small, big))
    }

    /// Performs a count cut driven by the bottom card.
    ///
    /// That many cards come off the top and slide in just above the bottom
    /// card, which stays fixed. When the bottom card is a joker the deck is
    /// returned unchanged.
    #[must_use]
    pub fn count_cut(&self) -> Self {
        let last = self.cards.len() - 1;
        let value = self.cards[last];
        if self.is_joker(value) {
            return self.clone();
        }

        let count = usize::from(value);
        let mut cards = Vec::with_capacity(self.cards.len());
        cards.extend_from_slice(&self.cards[count..last]);
        cards.extend_from_slice(&self.cards[..count]);
        cards.push(self.cards[last]);
        Self { cards }
    }
}
