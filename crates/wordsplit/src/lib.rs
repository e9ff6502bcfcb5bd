//! Dictionary-driven compound word splitter.
//!
//! Splits a single compound word into the dictionary words it is made of,
//! e.g. `"Verhaltensstörung"` into `["Verhalten", "störung"]`. The search
//! is a recursive right-to-left scan over cut points, with three additions
//! on top of plain dictionary lookups:
//!
//! - [`ExceptionTable`] -- curated overrides that bypass the search
//! - [`Interfixes`] -- linking fragments such as the German "s" that glue
//!   compound parts together without belonging to either
//! - [`Disambiguator`] -- post-processing that decides which neighbour an
//!   ambiguous standalone "s" belongs to
//!
//! [`Splitter`] bundles a shared [`Dictionary`] with these pieces and is the
//! entry point for callers. [`AllSplitsEnumerator`] lists every possible
//! segmentation instead of the first one found.
//!
//! ```no_run
//! use std::sync::Arc;
//! use wordsplit::{Dictionary, Language, Splitter, SplitterOptions};
//!
//! let dict = Arc::new(Dictionary::from_words(["verhalten", "störung"]));
//! let splitter = Splitter::new(dict, Language::German, SplitterOptions::default());
//! assert_eq!(splitter.split_word("Verhaltensstörung"), ["Verhalten", "störung"]);
//! ```

pub mod all_splits;
pub mod disambiguator;
pub mod exceptions;
pub mod interfix;
pub mod language;
pub mod segmenter;
pub mod splitter;

pub use all_splits::{AllSplitsEnumerator, Cancel, NeverCancel};
pub use disambiguator::{Disambiguator, GermanInterfixDisambiguator};
pub use exceptions::{ExceptionError, ExceptionTable};
pub use interfix::Interfixes;
pub use language::Language;
pub use segmenter::Segmenter;
pub use splitter::{Splitter, SplitterOptions};

pub use wordsplit_core::{Segment, WordSlice};
pub use wordsplit_dict::{DictError, Dictionary};

/// Error type for splitter construction and configuration.
///
/// Failing to find a split is not an error: the word comes back as a
/// single part.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// The word list could not be loaded.
    #[error(transparent)]
    Dictionary(#[from] DictError),

    /// The exception list could not be loaded.
    #[error(transparent)]
    Exceptions(#[from] ExceptionError),

    /// An exception was registered with an empty key.
    #[error("invalid exception: {0}")]
    InvalidException(String),

    /// No language profile for the given code.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// An all-splits enumeration was interrupted by its cancel signal.
    #[error("enumeration cancelled")]
    Cancelled,
}
