//! Word-form dictionaries for the compound splitter.
//!
//! A [`Dictionary`] is an immutable, case-insensitive set of known word
//! forms. It is built once, typically wrapped in an `Arc`, and shared by every
//! splitter that needs it.
//!
//! # Sources
//!
//! - [`text`] -- plain UTF-8 word lists, one word per line
//! - [`format`] -- the compact `WSD1` binary format (header + offset table +
//!   UTF-8 payload)
//! - [`Dictionary::from_words`] -- any in-memory iterator of strings

pub mod dictionary;
pub mod format;
pub mod text;

pub use dictionary::Dictionary;

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),
    #[error("dictionary too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("invalid magic number in dictionary header")]
    InvalidMagic,
    #[error("unsupported dictionary format version {0}")]
    UnsupportedVersion(u16),
    #[error("dictionary offset table is corrupt")]
    InvalidOffsets,
    #[error("invalid UTF-8 in dictionary entry {index}")]
    InvalidUtf8 { index: usize },
    #[error("dictionary exceeds the 4 GiB limit of the binary format")]
    TooLarge,
}
