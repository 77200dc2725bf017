//! Frequency analysis: recovers each key letter once the key length is known
//!
//! Ciphertext letters are dealt round-robin into one column per key letter.
//! Every column is then a plain shift cipher, so trying all 26 shifts and
//! keeping the one whose letter histogram is closest to the reference
//! profile reveals that column's key letter.

use tracing::debug;

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::{Result, VigenereError};
use crate::key::Key;
use crate::language::{FrequencyProfile, Language};

/// Splits text into `key_length` columns; letter `i` goes to column `i % key_length`.
///
/// Returns no columns when `key_length` is zero.
pub fn split_columns(text: &str, key_length: usize) -> Vec<String> {
    let mut columns = vec![String::new(); key_length];
    if key_length == 0 {
        return columns;
    }

    for (i, c) in text.chars().enumerate() {
        columns[i % key_length].push(c);
    }

    columns
}

/// Reassembles columns produced by [`split_columns`] into the original order.
pub fn interleave_columns(columns: &[String]) -> String {
    let mut iters: Vec<_> = columns.iter().map(|c| c.chars()).collect();
    let mut text = String::with_capacity(columns.iter().map(String::len).sum());
    if columns.is_empty() {
        return text;
    }

    'outer: loop {
        for it in iters.iter_mut() {
            match it.next() {
                Some(c) => text.push(c),
                None => break 'outer,
            }
        }
    }

    text
}

/// Counts each letter `A..=Z` in `text`, ignoring case and non-letters.
pub fn count_frequencies(text: &str) -> [u32; ALPHABET_LEN] {
    let mut frequencies = [0u32; ALPHABET_LEN];

    for rank in text.chars().filter_map(alphabet::rank) {
        frequencies[rank as usize] += 1;
    }

    frequencies
}

/// Converts raw counts into percentages. All zeros for an empty histogram.
pub fn percentages(counts: &[u32; ALPHABET_LEN]) -> [f64; ALPHABET_LEN] {
    let total: u32 = counts.iter().sum();
    let mut result = [0.0; ALPHABET_LEN];
    if total == 0 {
        return result;
    }

    for (p, &count) in result.iter_mut().zip(counts) {
        *p = 100.0 * count as f64 / total as f64;
    }
    result
}

/// Sum of squared differences between two rank-aligned histograms.
pub fn squared_distance(observed: &[f64; ALPHABET_LEN], expected: &FrequencyProfile) -> f64 {
    observed
        .iter()
        .zip(expected)
        .map(|(o, e)| (o - e).powi(2))
        .sum()
}

/// Distance between the reference profile and the column histogram `counts`
/// rotated back by `shift`.
///
/// An all-zero histogram scores `f64::INFINITY`.
pub fn shift_distance(counts: &[u32; ALPHABET_LEN], shift: u8, profile: &FrequencyProfile) -> f64 {
    if counts.iter().all(|&c| c == 0) {
        return f64::INFINITY;
    }

    // Shifting every letter back by `shift` moves bucket k + shift to bucket k
    let mut shifted = [0u32; ALPHABET_LEN];
    for (k, slot) in shifted.iter_mut().enumerate() {
        *slot = counts[(k + shift as usize) % ALPHABET_LEN];
    }

    squared_distance(&percentages(&shifted), profile)
}

/// Finds the shift (0-25) that best explains one column.
///
/// Shifts are tried in ascending order and only a strictly smaller distance
/// replaces the current best, so the first minimum wins. An empty column
/// yields shift 0.
pub fn best_shift(column: &str, profile: &FrequencyProfile) -> u8 {
    let counts = count_frequencies(column);
    let mut best_shift: u8 = 0;
    let mut min_distance = f64::INFINITY;

    for shift in 0..ALPHABET_LEN as u8 {
        let distance = shift_distance(&counts, shift, profile);
        if distance < min_distance {
            min_distance = distance;
            best_shift = shift;
        }
    }

    best_shift
}

/// Recovers a key of `key_length` letters from cleaned ciphertext.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::{frequency, Language};
///
/// // "EEEE..." shifted by 'B' in every column
/// let key = frequency::recover_key("FFFFFFFF", 2, Language::English)?;
/// assert_eq!(key.to_string(), "BB");
/// # Ok::<(), vigenere_analysis::VigenereError>(())
/// ```
pub fn recover_key(text: &str, key_length: usize, language: Language) -> Result<Key> {
    if key_length == 0 {
        return Err(VigenereError::DegenerateInput(
            "key length must be at least 1".to_string(),
        ));
    }

    let letters = text.chars().count();
    if key_length > letters {
        return Err(VigenereError::DegenerateInput(format!(
            "key length {} exceeds the {} letters of ciphertext",
            key_length, letters
        )));
    }

    let profile = language.profile();
    let ranks: Vec<u8> = split_columns(text, key_length)
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let shift = best_shift(column, profile);
            debug!(column = index, letters = column.len(), shift, "column solved");
            shift
        })
        .collect();

    Key::from_ranks(ranks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_text() {
        let text = "ABCDEFGH";
        let columns = split_columns(text, 3);
        assert_eq!(columns[0], "ADG");
        assert_eq!(columns[1], "BEH");
        assert_eq!(columns[2], "CF");
    }

    #[test]
    fn test_split_is_order_preserving() {
        let text = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
        for key_length in 1..=text.len() + 2 {
            let columns = split_columns(text, key_length);
            assert_eq!(columns.len(), key_length);
            assert_eq!(interleave_columns(&columns), text);
        }
        assert!(split_columns(text, 0).is_empty());
    }

    #[test]
    fn test_count_frequencies() {
        let counts = count_frequencies("Aab, Z!");
        assert_eq!(counts[0], 2);
        assert_eq!(counts[1], 1);
        assert_eq!(counts[25], 1);
        assert_eq!(counts.iter().sum::<u32>(), 4);
    }

    #[test]
    fn test_percentages() {
        let p = percentages(&count_frequencies("AABB"));
        assert_eq!(p[0], 50.0);
        assert_eq!(p[1], 50.0);
        assert_eq!(percentages(&[0; ALPHABET_LEN]), [0.0; ALPHABET_LEN]);
    }

    #[test]
    fn test_squared_distance_to_self_is_zero() {
        let profile = Language::English.profile();
        assert_eq!(squared_distance(profile, profile), 0.0);
    }

    #[test]
    fn test_best_shift_single_letter() {
        // A column of only 'H' looks like 'E' shifted by 3 in English
        assert_eq!(best_shift("HHHHHHHH", Language::English.profile()), 3);
        // ... and like 'A' shifted by 7 in Portuguese
        assert_eq!(best_shift("HHHHHHHH", Language::Portuguese.profile()), 7);
    }

    #[test]
    fn test_empty_column_never_wins() {
        let counts = [0u32; ALPHABET_LEN];
        assert_eq!(shift_distance(&counts, 5, Language::English.profile()), f64::INFINITY);
        assert_eq!(best_shift("", Language::English.profile()), 0);
    }

    #[test]
    fn test_key_length_beyond_text() {
        assert!(matches!(
            recover_key("HH", 4, Language::English),
            Err(VigenereError::DegenerateInput(_))
        ));
        assert!(matches!(
            recover_key("LXFOPVEFRNHR", usize::MAX, Language::English),
            Err(VigenereError::DegenerateInput(_))
        ));
        // Exactly one letter per column is still accepted
        assert_eq!(recover_key("HH", 2, Language::English).unwrap().to_string(), "DD");
    }

    #[test]
    fn test_zero_key_length() {
        assert!(matches!(
            recover_key("ABC", 0, Language::English),
            Err(VigenereError::DegenerateInput(_))
        ));
    }
}
