//! Validated cipher keys and the keystream derived from them

use std::fmt;
use std::str::FromStr;

use crate::alphabet;
use crate::error::{Result, VigenereError};

/// A non-empty sequence of alphabet ranks.
///
/// Keys are case-insensitive: `"key"`, `"KEY"` and `"kEy"` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    ranks: Vec<u8>,
}

impl Key {
    /// Parses a key string, rejecting empty keys and non-letter characters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vigenere_analysis::Key;
    ///
    /// let key = Key::new("lemon")?;
    /// assert_eq!(key.to_string(), "LEMON");
    /// assert!(Key::new("le mon").is_err());
    /// # Ok::<(), vigenere_analysis::VigenereError>(())
    /// ```
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(VigenereError::InvalidKey("key cannot be empty".to_string()));
        }

        let ranks = key
            .chars()
            .map(|c| {
                alphabet::rank(c).ok_or_else(|| {
                    VigenereError::InvalidKey(format!("'{}' is not a letter of the alphabet", c))
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self { ranks })
    }

    /// Builds a key directly from ranks (used by the key recoverer).
    pub fn from_ranks(ranks: Vec<u8>) -> Result<Self> {
        if ranks.is_empty() {
            return Err(VigenereError::InvalidKey("key cannot be empty".to_string()));
        }
        let ranks = ranks.into_iter().map(|r| r % alphabet::ALPHABET_LEN as u8).collect();
        Ok(Self { ranks })
    }

    pub fn ranks(&self) -> &[u8] {
        &self.ranks
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// A key is never empty.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Returns the key rotated left by `mid` positions.
    pub fn rotated(&self, mid: usize) -> Self {
        let mut ranks = self.ranks.clone();
        ranks.rotate_left(mid % self.ranks.len());
        Self { ranks }
    }

    /// Infinite keystream: the key's ranks repeated cyclically.
    ///
    /// The n-th letter of a message consumes the n-th item of this stream.
    pub fn keystream(&self) -> impl Iterator<Item = u8> + '_ {
        self.ranks.iter().copied().cycle()
    }
}

impl FromStr for Key {
    type Err = VigenereError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &r in &self.ranks {
            write!(f, "{}", alphabet::letter(r, true))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parsing() {
        let key = Key::new("Key").unwrap();
        assert_eq!(key.ranks(), &[10, 4, 24]);
        assert_eq!(key.to_string(), "KEY");
        assert_eq!(key, "kEY".parse::<Key>().unwrap());
    }

    #[test]
    fn test_invalid_keys() {
        assert!(matches!(Key::new(""), Err(VigenereError::InvalidKey(_))));
        assert!(matches!(Key::new("ab1"), Err(VigenereError::InvalidKey(_))));
        assert!(matches!(Key::new("ключ"), Err(VigenereError::InvalidKey(_))));
        assert!(matches!(Key::from_ranks(vec![]), Err(VigenereError::InvalidKey(_))));
    }

    #[test]
    fn test_keystream_cycles() {
        let key = Key::new("abc").unwrap();
        let stream: Vec<u8> = key.keystream().take(7).collect();
        assert_eq!(stream, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_rotated() {
        let key = Key::new("lemon").unwrap();
        assert_eq!(key.rotated(2).to_string(), "MONLE");
        assert_eq!(key.rotated(5), key);
    }
}
