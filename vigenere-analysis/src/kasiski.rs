//! Kasiski examination: key-length estimation from repeated trigrams
//!
//! A plaintext trigram that happens to be enciphered twice under the same
//! key offset produces the same ciphertext trigram, and the distance between
//! the two occurrences is then a multiple of the key length. Collecting these
//! distances and counting which small divisors explain most of them gives an
//! estimate of the period.

use std::fmt;

use tracing::debug;

use crate::config::KasiskiConfig;

/// Length of the substrings compared by the examination.
pub const TRIGRAM_LEN: usize = 3;

/// Key length returned when the text yields no repeat spacings at all.
pub const NO_ESTIMATE: usize = 0;

/// Outcome of one examination, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KasiskiReport {
    /// Distances between each trigram and its first later non-overlapping repeat.
    pub spacings: Vec<usize>,
    /// `(divisor, number of spacings it divides)` for every candidate tried.
    pub divisor_counts: Vec<(usize, usize)>,
    /// Estimated key length, or [`NO_ESTIMATE`].
    pub key_length: usize,
}

impl fmt::Display for KasiskiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Repeat spacings: {}", self.spacings.len())?;
        for (divisor, count) in &self.divisor_counts {
            writeln!(f, "  {:2} -> count {}", divisor, count)?;
        }
        writeln!(f, "Kasiski key length: {}", self.key_length)
    }
}

/// Collects repeat-spacing samples from cleaned ciphertext.
///
/// For each start position the search stops at the first later occurrence
/// of the same trigram, at least [`TRIGRAM_LEN`] positions away, so every
/// position contributes at most one sample.
pub fn repeat_spacings(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let n = bytes.len();
    let mut spacings = Vec::new();

    for i in 0..n.saturating_sub(TRIGRAM_LEN - 1) {
        let trigram = &bytes[i..i + TRIGRAM_LEN];
        let found = (TRIGRAM_LEN..n - (TRIGRAM_LEN - 1) - i)
            .find(|&j| &bytes[i + j..i + j + TRIGRAM_LEN] == trigram);

        if let Some(j) = found {
            spacings.push(j);
        }
    }

    spacings
}

/// Number of spacings evenly divisible by `divisor`.
pub fn divisor_count(spacings: &[usize], divisor: usize) -> usize {
    if divisor == 0 {
        return 0;
    }
    spacings.iter().filter(|&&s| s % divisor == 0).count()
}

/// Runs the examination and returns the full report.
pub fn examine(text: &str, config: &KasiskiConfig) -> KasiskiReport {
    let spacings = repeat_spacings(text);
    let max_key_length = config.max_key_length.min(text.len());

    debug!(
        spacings = spacings.len(),
        max_key_length, "collected repeat spacings"
    );

    if spacings.is_empty() {
        return KasiskiReport {
            spacings,
            divisor_counts: Vec::new(),
            key_length: NO_ESTIMATE,
        };
    }

    let mut divisor_counts = Vec::new();
    let mut best_count: usize = 0;
    let mut key_length = NO_ESTIMATE;

    for divisor in 2..=max_key_length {
        let count = divisor_count(&spacings, divisor);
        divisor_counts.push((divisor, count));

        // The tolerance is applied to the challenger only; the stored best is
        // the raw count. Strict comparison keeps the earlier divisor on ties.
        if count + config.tolerance > best_count {
            key_length = divisor;
            best_count = count;
        }
    }

    debug!(key_length, best_count, "kasiski estimate");

    KasiskiReport {
        spacings,
        divisor_counts,
        key_length,
    }
}

/// Estimates the key length of cleaned ciphertext.
///
/// `max_key_length` is clamped to the text length. Returns [`NO_ESTIMATE`]
/// when no trigram repeats, which includes every text shorter than three
/// letters.
pub fn estimate_key_length(text: &str, max_key_length: usize, tolerance: usize) -> usize {
    examine(
        text,
        &KasiskiConfig {
            max_key_length,
            tolerance,
        },
    )
    .key_length
}
