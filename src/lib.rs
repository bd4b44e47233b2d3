//! A Solitaire (Pontifex) stream cipher engine with optional `no_std` support.
//!
//! The cipher's key material is an ordered deck of cards, represented by the
//! [`Deck`] type. Four deterministic shuffling rules advance the deck and
//! produce a keystream, which [`encrypt`] and [`decrypt`] combine with the
//! letters of a message.
//!
//! Only the letters `A`–`Z` carry meaning: every other character is dropped
//! before processing and will not reappear in the decrypted output.
//!
//! # Example
//!
//! ```
//! use pontifex::{DEFAULT_SUITS, decrypt, encrypt, generate_deck_seeded};
//!
//! let key = generate_deck_seeded(DEFAULT_SUITS, 42).unwrap();
//! let ciphertext = encrypt(&key, "Attack at dawn");
//! assert_eq!(decrypt(&key, &ciphertext), "ATTACKATDAWN");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod cipher;
pub mod deck;
pub mod error;
pub mod keygen;
pub mod keystream;

// Re-export main types
pub use cipher::{decrypt, encrypt, format_input, number_to_letter};
pub use deck::{CARDS_PER_SUIT, Deck, JOKER_COUNT};
pub use error::KeyError;
pub use keygen::{DEFAULT_SUITS, generate_deck, generate_deck_seeded};
pub use keystream::Keystream;
