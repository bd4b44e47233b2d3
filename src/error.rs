//! Error types for key generation.

use thiserror::Error;

/// Errors that can occur while generating a key deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Suit count is zero; a two-card deck holds only jokers.
    #[error("suit count is zero")]
    NoSuits,
    /// Suit count too large for card values to fit in a byte.
    #[error("suit count too large for card values to fit in a byte")]
    TooManySuits,
}
