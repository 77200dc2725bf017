//! Vigenère encryption and decryption over arbitrary text

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::Result;
use crate::key::Key;

/// Which way the keystream is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `(plaintext + key) mod 26`
    Encrypt,
    /// `(ciphertext - key + 26) mod 26`
    Decrypt,
}

/// Shifts every letter of `message` by the keystream in the given direction.
///
/// Letters keep their original case. Every other character is copied
/// unchanged and does not consume a keystream symbol.
pub fn transform(message: &str, key: &Key, direction: Direction) -> String {
    let mut result = String::with_capacity(message.len());
    let mut keystream = key.keystream();

    for c in message.chars() {
        let Some(rank) = alphabet::rank(c) else {
            result.push(c);
            continue;
        };

        // Key is non-empty, so the cycled stream never runs dry
        let shift = keystream.next().unwrap_or(0);
        let shifted = match direction {
            Direction::Encrypt => (rank + shift) % ALPHABET_LEN as u8,
            Direction::Decrypt => (rank + ALPHABET_LEN as u8 - shift) % ALPHABET_LEN as u8,
        };
        result.push(alphabet::letter(shifted, c.is_ascii_uppercase()));
    }

    result
}

/// Encrypts `message` with `key`.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::{cipher, Key};
///
/// let key = Key::new("key")?;
/// assert_eq!(cipher::encrypt("Hello, World!", &key), "Rijvs, Uyvjn!");
/// # Ok::<(), vigenere_analysis::VigenereError>(())
/// ```
pub fn encrypt(message: &str, key: &Key) -> String {
    transform(message, key, Direction::Encrypt)
}

/// Decrypts `message` with `key`.
pub fn decrypt(message: &str, key: &Key) -> String {
    transform(message, key, Direction::Decrypt)
}

/// Validates `key` and encrypts `message` with it.
pub fn encrypt_with(message: &str, key: &str) -> Result<String> {
    Ok(encrypt(message, &Key::new(key)?))
}

/// Validates `key` and decrypts `message` with it.
pub fn decrypt_with(message: &str, key: &str) -> Result<String> {
    Ok(decrypt(message, &Key::new(key)?))
}

/// A cipher instance bound to one key.
#[derive(Debug, Clone)]
pub struct Vigenere {
    key: Key,
}

impl Vigenere {
    pub fn new(key: Key) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn encrypt(&self, message: &str) -> String {
        encrypt(message, &self.key)
    }

    pub fn decrypt(&self, message: &str) -> String {
        decrypt(message, &self.key)
    }
}
