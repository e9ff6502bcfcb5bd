// Exception overrides: curated splits that bypass the dictionary search.
//
// File format (UTF-8, one entry per line):
//
//   # comment
//   Pilot|sendung
//   Sünder|ecke
//   Ab|fall/NS
//
// The key is the concatenation of the parts, lowercased. A trailing "/NS"
// marker also registers the key with "n" and "s" appended, adding the
// letter to the last part. Any other marker rejects the whole file.

use std::io::BufRead;
use std::path::Path;

use hashbrown::HashMap;
use wordsplit_core::text::{char_len, fold};
use wordsplit_core::{Segment, WordSlice};

/// Comment marker at the start of a line.
pub const COMMENT_CHAR: char = '#';

/// Separator between parts.
pub const DELIMITER: char = '|';

/// Suffix marker expanding an entry to its "-n" and "-s" forms.
pub const NO_SUFFIX_MARKER: &str = "/NS";

const NO_SUFFIX_ENDINGS: &[&str] = &["n", "s"];

/// Error type for exception list loading.
#[derive(Debug, thiserror::Error)]
pub enum ExceptionError {
    #[error("failed to read exception list: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown suffix marker on line {line_number}: {line}")]
    UnknownSuffix { line_number: usize, line: String },
}

/// Map from a lowercased complete word to its override parts.
///
/// Lookups are case-insensitive. When the stored parts spell the queried
/// word (ignoring case), the result is cut from the query itself so its
/// casing survives: an entry `sünder|ecke` turns `"SÜNDERECKE"` into
/// `["SÜNDER", "ECKE"]`. Entries that deliberately change the spelling come
/// back as stored.
#[derive(Debug, Clone, Default)]
pub struct ExceptionTable {
    entries: HashMap<String, Vec<String>>,
}

impl ExceptionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an exception list held in memory.
    pub fn parse(source: &str) -> Result<Self, ExceptionError> {
        let mut table = Self::new();
        for (index, line) in source.lines().enumerate() {
            table.parse_line(index + 1, line)?;
        }
        Ok(table)
    }

    /// Read an exception list from a buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ExceptionError> {
        let mut table = Self::new();
        for (index, line) in reader.lines().enumerate() {
            table.parse_line(index + 1, &line?)?;
        }
        Ok(table)
    }

    /// Load an exception list file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExceptionError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            entries = table.len(),
            "loaded exception list"
        );
        Ok(table)
    }

    /// Register (or replace) the override for `word`.
    ///
    /// An empty `parts` list is a valid override: the word then splits
    /// into nothing.
    pub fn insert(&mut self, word: &str, parts: Vec<String>) {
        self.entries.insert(fold(word), parts);
    }

    /// Drop the override for `word`, returning its parts if there was one.
    pub fn remove(&mut self, word: &str) -> Option<Vec<String>> {
        self.entries.remove(fold(word).as_str())
    }

    /// The stored parts for `word`, exactly as registered.
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(fold(word).as_str()).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(fold(word).as_str())
    }

    /// Look up `word`, cutting the result from `word` when the stored parts
    /// spell it.
    pub fn lookup<'a>(&self, word: WordSlice<'a>) -> Option<Vec<Segment<'a>>> {
        let parts = self.get(word.as_str())?;
        Some(reslice(parts, word))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn parse_line(&mut self, line_number: usize, line: &str) -> Result<(), ExceptionError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_CHAR) {
            return Ok(());
        }

        let (body, expand) = match line.find('/') {
            None => (line, false),
            Some(pos) if &line[pos..] == NO_SUFFIX_MARKER => (&line[..pos], true),
            Some(_) => {
                return Err(ExceptionError::UnknownSuffix {
                    line_number,
                    line: line.to_string(),
                });
            }
        };

        let parts: Vec<String> = body
            .split(DELIMITER)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        let word = parts.concat();
        if word.is_empty() {
            tracing::warn!(line_number, "skipping exception entry without parts");
            return Ok(());
        }

        if expand {
            for ending in NO_SUFFIX_ENDINGS {
                let mut inflected = parts.clone();
                if let Some(last) = inflected.last_mut() {
                    last.push_str(ending);
                }
                self.insert(&format!("{word}{ending}"), inflected);
            }
        }
        self.insert(&word, parts);
        Ok(())
    }
}

/// Cut `word` at the part lengths of `parts` when they spell it, otherwise
/// return the parts as literals.
fn reslice<'a>(parts: &[String], word: WordSlice<'a>) -> Vec<Segment<'a>> {
    let total: usize = parts.iter().map(|p| char_len(p)).sum();
    if total == word.char_len() && fold(&parts.concat()) == fold(word.as_str()) {
        let mut offset = 0;
        parts
            .iter()
            .map(|part| {
                let end = offset + char_len(part);
                let slice = word.slice(offset, end);
                offset = end;
                Segment::Slice(slice)
            })
            .collect()
    } else {
        parts.iter().map(|p| Segment::Literal(p.clone())).collect()
    }
}
