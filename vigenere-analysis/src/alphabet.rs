//! The 26-letter working alphabet shared by the cipher and the analysis code

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Returns true for the letters the cipher operates on (ASCII `a-z`, `A-Z`).
///
/// Accented and other non-ASCII letters are treated like punctuation.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns the 0-based rank of a letter, ignoring case.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::alphabet::rank;
///
/// assert_eq!(rank('a'), Some(0));
/// assert_eq!(rank('Z'), Some(25));
/// assert_eq!(rank('!'), None);
/// ```
pub fn rank(c: char) -> Option<u8> {
    if is_letter(c) {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Maps a rank back to its letter in the requested case.
///
/// Ranks are reduced modulo 26, so callers can pass the raw result of a shift.
pub fn letter(rank: u8, uppercase: bool) -> char {
    let base: u8 = if uppercase { b'A' } else { b'a' };
    (base + rank % ALPHABET_LEN as u8) as char
}

/// Keeps only alphabet letters, in order, folded to upper case.
///
/// This is the "clean" stream consumed by the period estimator and the
/// frequency analysis.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|&c| is_letter(c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
