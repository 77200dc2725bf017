//! # Vigenère Analysis Library
//!
//! The Vigenère polyalphabetic cipher together with a ciphertext-only attack
//! that recovers the key.
//!
//! ## Components
//!
//! - **alphabet** - the 26-letter, case-insensitive working alphabet
//! - **key** - validated keys and their cyclic keystream
//! - **cipher** - encryption and decryption preserving case and non-letters
//! - **language** - reference letter-frequency profiles (`en`, `pt`, `de`)
//! - **kasiski** - key-length estimation from repeated trigram spacing
//! - **frequency** - per-column shift recovery against a language profile
//! - **attack** - both analysis steps composed into one call
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{attack, cipher, AttackConfig, Key, Language};
//!
//! let key = Key::new("lemon")?;
//! let ciphertext = cipher::encrypt("Attack at dawn!", &key);
//! assert_eq!(cipher::decrypt(&ciphertext, &key), "Attack at dawn!");
//!
//! // Far too short for the attack to find a period
//! assert!(attack(&ciphertext, Language::English, &AttackConfig::default()).is_err());
//! # Ok::<(), vigenere_analysis::VigenereError>(())
//! ```
//!
//! Key recovery is statistical: results on short ciphertexts or keys whose
//! length has small divisors should be treated as advisory.

pub mod alphabet;
pub mod attack;
pub mod cipher;
pub mod config;
pub mod error;
pub mod frequency;
pub mod kasiski;
pub mod key;
pub mod language;

pub use attack::{attack, recover_with_length, AttackReport};
pub use cipher::{Direction, Vigenere};
pub use config::{AttackConfig, KasiskiConfig};
pub use error::{Result, VigenereError};
pub use key::Key;
pub use language::Language;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
