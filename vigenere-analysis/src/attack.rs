//! Ciphertext-only key recovery: Kasiski examination followed by frequency analysis

use tracing::info;

use crate::alphabet;
use crate::cipher;
use crate::config::AttackConfig;
use crate::error::{Result, VigenereError};
use crate::frequency;
use crate::kasiski;
use crate::key::Key;
use crate::language::Language;

/// Result of a successful attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    /// Key length the attack settled on.
    pub key_length: usize,
    /// Most probable key. Advisory only: the estimate can be wrong.
    pub key: Key,
}

impl AttackReport {
    /// Decrypts the original (formatted) ciphertext with the recovered key.
    pub fn decrypt(&self, ciphertext: &str) -> String {
        cipher::decrypt(ciphertext, &self.key)
    }
}

/// Recovers the most probable key of `ciphertext`.
///
/// The ciphertext may contain punctuation, spacing and mixed case; only its
/// letters are analysed. Fails with [`VigenereError::DegenerateInput`] when
/// `max_key_length` is below 2 or the text has no repeated trigrams to
/// estimate a period from.
///
/// Progress is reported as `info` events: first the estimated key length,
/// then the recovered key.
pub fn attack(ciphertext: &str, language: Language, config: &AttackConfig) -> Result<AttackReport> {
    if config.max_key_length() < 2 {
        return Err(VigenereError::DegenerateInput(format!(
            "max key length {} leaves no candidate periods (minimum is 2)",
            config.max_key_length()
        )));
    }
    let clean = alphabet::clean_text(ciphertext);

    let key_length = kasiski::estimate_key_length(
        &clean,
        config.max_key_length(),
        config.tolerance(),
    );
    if key_length == kasiski::NO_ESTIMATE {
        return Err(VigenereError::DegenerateInput(format!(
            "no repeated trigrams in {} letters of ciphertext",
            clean.len()
        )));
    }
    info!(key_length, "estimated key length");

    let key = frequency::recover_key(&clean, key_length, language)?;
    info!(%key, %language, "most probable key");

    Ok(AttackReport { key_length, key })
}

/// Recovers a key of a known length, skipping the period estimation.
pub fn recover_with_length(ciphertext: &str, language: Language, key_length: usize) -> Result<AttackReport> {
    let clean = alphabet::clean_text(ciphertext);
    let key = frequency::recover_key(&clean, key_length, language)?;
    info!(key_length, %key, %language, "recovered key for fixed length");

    Ok(AttackReport { key_length, key })
}
