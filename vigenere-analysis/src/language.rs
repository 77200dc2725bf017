//! Reference letter-frequency profiles
//!
//! Each profile lists the expected percentage of every letter `A..=Z`,
//! indexed by alphabet rank. Adding a language means adding a variant,
//! its tag and its table.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::ALPHABET_LEN;
use crate::error::{Result, VigenereError};

/// A letter-frequency table in percent, indexed by alphabet rank.
pub type FrequencyProfile = [f64; ALPHABET_LEN];

static ENGLISH: FrequencyProfile = [
    8.2, 1.5, 2.8, 4.3, 12.7, 2.2, 2.0, 6.1, 7.0, 0.2, 0.8, 4.0, 2.4,
    6.8, 7.5, 1.9, 0.1, 6.0, 6.3, 9.1, 2.8, 1.0, 2.4, 0.2, 2.0, 0.1,
];

static PORTUGUESE: FrequencyProfile = [
    14.6, 1.0, 3.9, 4.9, 12.5, 1.0, 1.3, 1.2, 6.2, 0.4, 0.0, 2.8, 4.7,
    5.0, 10.7, 2.5, 1.2, 6.5, 7.8, 4.3, 4.6, 1.7, 0.0, 0.5, 0.0, 0.5,
];

static GERMAN: FrequencyProfile = [
    5.58, 1.96, 3.16, 4.98, 16.93, 1.49, 3.02, 4.98, 8.02, 0.24, 1.32, 3.60, 2.55,
    10.53, 2.24, 0.67, 0.02, 6.89, 6.42, 5.79, 3.83, 0.84, 1.78, 0.05, 0.05, 1.21,
];

/// Languages with a built-in reference profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Portuguese,
    German,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Portuguese, Language::German];

    /// Two-letter tag used on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Portuguese => "pt",
            Language::German => "de",
        }
    }

    pub fn profile(self) -> &'static FrequencyProfile {
        match self {
            Language::English => &ENGLISH,
            Language::Portuguese => &PORTUGUESE,
            Language::German => &GERMAN,
        }
    }

    /// Looks up a language by tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.tag().eq_ignore_ascii_case(tag.trim()))
            .ok_or_else(|| VigenereError::UnsupportedLanguage(tag.to_string()))
    }
}

impl FromStr for Language {
    type Err = VigenereError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
