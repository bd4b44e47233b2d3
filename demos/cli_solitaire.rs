//! CLI Solitaire cipher demo.
//!
//! Generates a fresh key, encrypts a sample message, and decrypts it again.

use std::time::{SystemTime, UNIX_EPOCH};

use pontifex::{DEFAULT_SUITS, decrypt, encrypt, generate_deck_seeded};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let key = match generate_deck_seeded(DEFAULT_SUITS, seed) {
        Ok(key) => key,
        Err(err) => {
            eprintln!("Key generation error: {err}");
            return;
        }
    };

    let message = "If you can read this good for you";
    let ciphertext = encrypt(&key, message);

    println!("key:        {:?}", key.cards());
    println!("message:    {message}");
    println!("ciphertext: {ciphertext}");
    println!("recovered:  {}", decrypt(&key, &ciphertext));
}
