// Interfixes (German "Fugenelemente"): linking fragments between compound
// parts that belong to neither neighbour, as the "s" in "Verhalten|s|störung".

use wordsplit_core::WordSlice;
use wordsplit_core::text::{char_len, ends_with_ignore_case, fold};

/// German linking fragments, most specific first.
pub const GERMAN_INTERFIXES: &[&str] = &["s-", "s", "-"];

/// Ordered list of interfixes.
///
/// Matching is case-insensitive and the first entry the word ends with
/// wins, so longer fragments must be listed before their suffixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interfixes {
    items: Vec<String>,
}

impl Interfixes {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = items
            .into_iter()
            .map(|s| fold(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();
        Self { items }
    }

    pub fn german() -> Self {
        Self::new(GERMAN_INTERFIXES)
    }

    /// No interfixes (e.g. English).
    pub fn none() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The first interfix `word` ends with.
    pub fn find(&self, word: &str) -> Option<&str> {
        self.items
            .iter()
            .map(String::as_str)
            .find(|interfix| ends_with_ignore_case(word, interfix))
    }

    pub fn ends_with_any(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    /// Split a trailing interfix off `word`: `(stem, interfix)`.
    ///
    /// Both halves are views of the input, so the interfix keeps the
    /// input's casing.
    pub fn split_off<'a>(&self, word: WordSlice<'a>) -> Option<(WordSlice<'a>, WordSlice<'a>)> {
        let interfix = self.find(word.as_str())?;
        let stem = strip(word, interfix);
        Some((stem, word.shrink_left(stem.char_len())))
    }
}

/// Remove a known trailing interfix from `word`.
pub fn strip<'a>(word: WordSlice<'a>, interfix: &str) -> WordSlice<'a> {
    word.shrink_right(char_len(interfix))
}
