//! Letter transforms: formatting, and the encrypt/decrypt combine step.

use alloc::string::String;
use alloc::vec::Vec;

use crate::deck::Deck;
use crate::keystream::Keystream;

/// Number of letters in the cipher alphabet.
const ALPHABET_SIZE: u8 = 26;

/// Whether a keystream value is added to or subtracted from a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Add the keystream value.
    Encrypt,
    /// Subtract the keystream value.
    Decrypt,
}

/// Combines a letter value with a keystream value, reduced into `[0, 26)`.
fn combine(mode: Mode, letter: u8, ks_value: u8) -> u8 {
    let shifted = match mode {
        Mode::Encrypt => i16::from(letter) + i16::from(ks_value),
        Mode::Decrypt => i16::from(letter) - i16::from(ks_value),
    };
    shifted.rem_euclid(i16::from(ALPHABET_SIZE)) as u8
}

/// Maps a character to its letter value `0..26`, ignoring case.
///
/// Returns `None` for anything outside `A`–`Z`.
fn letter_to_number(c: char) -> Option<u8> {
    let upper = c.to_ascii_uppercase();
    upper.is_ascii_uppercase().then(|| upper as u8 - b'A')
}

/// Maps a number to its letter, wrapping modulo the alphabet size.
///
/// # Example
///
/// ```
/// use pontifex::number_to_letter;
///
/// assert_eq!(number_to_letter(1), 'B');
/// assert_eq!(number_to_letter(26), 'A');
/// ```
#[must_use]
pub fn number_to_letter(n: u8) -> char {
    char::from(b'A' + n % ALPHABET_SIZE)
}

/// Normalizes a message into cipher input.
///
/// Letters are uppercased and every other character is dropped. This is
/// lossy: spacing, punctuation, and digits do not survive a round trip.
/// A message with no letters normalizes to the empty string.
#[must_use]
pub fn format_input(msg: &str) -> String {
    msg.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Runs the message through the keystream in the given mode.
fn transform(key: &Deck, msg: &str, mode: Mode) -> String {
    let letters: Vec<u8> = msg.chars().filter_map(letter_to_number).collect();

    let keystream = Keystream::new(key);
    let mut output = String::with_capacity(letters.len());
    for (letter, ks_value) in letters.into_iter().zip(keystream) {
        output.push(number_to_letter(combine(mode, letter, ks_value)));
    }
    output
}

/// Encrypts a message with the given key.
///
/// The message is normalized with [`format_input`] first, then each letter is
/// shifted forward by one keystream value. The key is read, never advanced;
/// repeated calls with the same key and message yield the same ciphertext.
///
/// The key must be a valid permutation of `1..=N`; see [`Deck::from_cards`].
#[must_use]
pub fn encrypt(key: &Deck, msg: &str) -> String {
    transform(key, msg, Mode::Encrypt)
}

/// Decrypts a message with the given key.
///
/// The inverse of [`encrypt`]: each letter is shifted back by one keystream
/// value, replayed from the same initial key. Only the normalized letters
/// come back; characters dropped during encryption are gone for good.
///
/// The key must be a valid permutation of `1..=N`; see [`Deck::from_cards`].
#[must_use]
pub fn decrypt(key: &Deck, msg: &str) -> String {
    transform(key, msg, Mode::Decrypt)
}
