// Dictionary: immutable, case-insensitive set of known word forms

use std::io::BufRead;
use std::path::Path;

use hashbrown::HashSet;
use wordsplit_core::text::{char_len, fold, has_uppercase};

use crate::{DictError, format, text};

/// A fixed set of known word forms.
///
/// Entries are stored lowercased and trimmed. Membership tests fold the
/// query, so `contains("Haus")` and `contains("HAUS")` agree. The set is
/// never mutated after construction; share it between splitters with
/// `Arc<Dictionary>`.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from in-memory word forms.
    ///
    /// Every entry is trimmed and lowercased; empty entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .filter_map(|w| {
                let w = w.as_ref().trim();
                (!w.is_empty()).then(|| fold(w))
            })
            .collect();
        Self { words }
    }

    /// Build a dictionary from a text word list (see [`text`]).
    pub fn from_text(source: &str) -> Self {
        Self::from_words(text::words(source))
    }

    /// Read a text word list from a buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictError> {
        Ok(Self::from_words(text::read_words(reader)?))
    }

    /// Load from raw file contents, either WSD1 binary or UTF-8 text.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if format::is_binary(data) {
            return Ok(Self::from_words(format::read_entries(data)?));
        }
        let source = std::str::from_utf8(data).map_err(|e| {
            DictError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;
        Ok(Self::from_text(source))
    }

    /// Load a dictionary file, detecting the format from its contents.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let dictionary = Self::from_bytes(&data)?;
        tracing::debug!(
            path = %path.display(),
            words = dictionary.len(),
            binary = format::is_binary(&data),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Encode as a WSD1 binary file, entries sorted.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        format::write_entries(&self.sorted_words())
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        if has_uppercase(word) {
            self.words.contains(word.to_lowercase().as_str())
        } else {
            self.words.contains(word)
        }
    }

    /// Membership test gated by a minimum length in characters.
    pub fn is_word(&self, word: &str, min_len: usize) -> bool {
        char_len(word) >= min_len && self.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All entries in lexicographic order.
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
