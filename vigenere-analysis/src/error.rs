//! Error types for cipher and cryptanalysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VigenereError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Unsupported language '{0}' (expected one of: en, pt, de)")]
    UnsupportedLanguage(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

pub type Result<T> = std::result::Result<T, VigenereError>;
