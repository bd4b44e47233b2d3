//! Cipher and key generation tests.

use pontifex::{
    DEFAULT_SUITS, Deck, KeyError, Keystream, decrypt, encrypt, format_input, generate_deck,
    generate_deck_seeded, number_to_letter,
};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn number_to_letter_wraps_around_the_alphabet() {
    let letters: Vec<char> = [1, 5, 26, 41, 52].map(number_to_letter).to_vec();
    assert_eq!(letters, ['B', 'F', 'A', 'P', 'A']);
    assert_eq!(number_to_letter(27), 'B');
}

#[test]
fn format_input_uppercases_and_drops_nonletters() {
    assert_eq!(
        format_input("If you can read this, good for you"),
        "IFYOUCANREADTHISGOODFORYOU"
    );
    assert_eq!(format_input("12 34 !?"), "");
}

#[test]
fn keystream_skips_joker_outputs() {
    // The first advance of [1,2,3,4,5] outputs the joker 4, which must be
    // discarded; the first two usable values are both 1.
    let key = Deck::from_cards(vec![1, 2, 3, 4, 5]);
    let values: Vec<u8> = Keystream::new(&key).take(2).collect();
    assert_eq!(values, [1, 1]);
}

#[test]
fn encrypt_known_vector_on_small_deck() {
    let key = Deck::from_cards(vec![1, 2, 3, 4, 5]);
    assert_eq!(encrypt(&key, "AB"), "BC");
    assert_eq!(decrypt(&key, "BC"), "AB");
}

#[test]
fn empty_message_yields_empty_output() {
    let key = generate_deck_seeded(DEFAULT_SUITS, 1).unwrap();
    assert_eq!(encrypt(&key, ""), "");
    assert_eq!(encrypt(&key, "12 34 !?"), "");
    assert_eq!(decrypt(&key, ""), "");
}

#[test]
fn encrypt_decrypt_round_trip() {
    let key = generate_deck_seeded(DEFAULT_SUITS, 42).unwrap();
    let message = "IFYOUCANREADTHISGOODFORYOU";

    let encrypted = encrypt(&key, message);
    assert_ne!(encrypted, message);
    assert_eq!(decrypt(&key, &encrypted), message);
}

#[test]
fn round_trip_normalizes_case_and_punctuation() {
    let key = generate_deck_seeded(DEFAULT_SUITS, 7).unwrap();
    let message = "If you can read this, good for you";

    let encrypted = encrypt(&key, message);
    assert_eq!(decrypt(&key, &encrypted), format_input(message));
}

#[test]
fn round_trip_with_two_suit_deck() {
    let key = generate_deck_seeded(2, 3).unwrap();
    assert_eq!(key.len(), 28);

    let encrypted = encrypt(&key, "SHORTDECK");
    assert_eq!(decrypt(&key, &encrypted), "SHORTDECK");
}

#[test]
fn encryption_is_deterministic() {
    let key = generate_deck_seeded(DEFAULT_SUITS, 11).unwrap();
    let message = "ATTACKATDAWN";
    assert_eq!(encrypt(&key, message), encrypt(&key, message));
}

#[test]
fn encrypt_decrypt_random_sequences() {
    let key = generate_deck_seeded(DEFAULT_SUITS, 23).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(23);

    for _ in 0..100 {
        let message: String = (0..15)
            .map(|_| number_to_letter(rng.random_range(0..26)))
            .collect();
        let encrypted = encrypt(&key, &message);
        assert_eq!(decrypt(&key, &encrypted), message);
    }
}

#[test]
fn generated_deck_is_a_permutation() {
    let key = generate_deck_seeded(DEFAULT_SUITS, 5).unwrap();
    assert_eq!(key.len(), 54);

    let mut sorted: Vec<u8> = key.cards().to_vec();
    sorted.sort_unstable();
    let expected: Vec<u8> = (1..=54).collect();
    assert_eq!(sorted, expected);
}

#[test]
fn generate_deck_uses_the_injected_rng() {
    let mut rng_a = ChaCha8Rng::seed_from_u64(9);
    let mut rng_b = ChaCha8Rng::seed_from_u64(9);

    let key_a = generate_deck(DEFAULT_SUITS, &mut rng_a).unwrap();
    let key_b = generate_deck(DEFAULT_SUITS, &mut rng_b).unwrap();
    assert_eq!(key_a, key_b);
}

#[test]
fn generate_deck_rejects_bad_suit_counts() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(generate_deck(0, &mut rng).unwrap_err(), KeyError::NoSuits);
    assert_eq!(
        generate_deck(20, &mut rng).unwrap_err(),
        KeyError::TooManySuits
    );
    // 19 suits is the largest deck whose values still fit in a byte.
    assert_eq!(generate_deck(19, &mut rng).unwrap().len(), 249);
}
