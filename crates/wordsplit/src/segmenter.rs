// Segmenter: recursive right-to-left search for a dictionary segmentation.
//
// split(word, allow_interfix_removal):
//   1. an exception for `word` wins
//   2. `word` is a dictionary word -> [word]
//   3. `word` minus a trailing interfix is a word (inner parts only)
//      -> [stem] or [stem, interfix]
//   4. scan cut points left to right, so the longest right side is tried
//      first; the first cut whose right side is a word and whose left side
//      splits recursively wins
//   5. nothing found and `word` ends with an interfix -> rerun step 4 on
//      the stem
//
// Outside strict mode, the leftmost cut where only one side is a word is
// remembered as a fallback and returned when the scan finds nothing better.
//
// The segmenter borrows everything it needs from its owner and is rebuilt
// for every call; constructing one costs nothing.

use wordsplit_core::{Segment, WordSlice};
use wordsplit_dict::Dictionary;

use crate::exceptions::ExceptionTable;
use crate::interfix::Interfixes;

/// One-shot view of a splitter's state that performs the search.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'s> {
    dictionary: &'s Dictionary,
    exceptions: &'s ExceptionTable,
    interfixes: &'s Interfixes,
    min_word_length: usize,
    strict: bool,
    hide_interfixes: bool,
}

impl<'s> Segmenter<'s> {
    /// A strict segmenter with hidden interfixes and a minimum part length
    /// of 3.
    pub fn new(
        dictionary: &'s Dictionary,
        exceptions: &'s ExceptionTable,
        interfixes: &'s Interfixes,
    ) -> Self {
        Self {
            dictionary,
            exceptions,
            interfixes,
            min_word_length: 3,
            strict: true,
            hide_interfixes: true,
        }
    }

    /// Minimum part length in characters; clamped to at least 1.
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length.max(1);
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_hidden_interfixes(mut self, hide: bool) -> Self {
        self.hide_interfixes = hide;
        self
    }

    /// Dictionary test used for every candidate part.
    pub fn is_word(&self, part: &str) -> bool {
        self.dictionary.is_word(part, self.min_word_length)
    }

    /// Find a segmentation of `word`, or `None` if there is none.
    ///
    /// With `collect` set, the search does not stop at the first
    /// decomposition: every distinct part seen in any successful cut is
    /// gathered, and `word` itself is included if it is a dictionary word.
    pub fn segment<'a>(&self, word: WordSlice<'a>, collect: bool) -> Option<Vec<Segment<'a>>> {
        self.split(word, false, collect)
    }

    fn split<'a>(
        &self,
        word: WordSlice<'a>,
        allow_interfix_removal: bool,
        collect: bool,
    ) -> Option<Vec<Segment<'a>>> {
        if let Some(parts) = self.exceptions.lookup(word) {
            return Some(parts);
        }

        let interfix = self.interfixes.split_off(word);
        let is_word = self.is_word(word.as_str());
        if is_word && !collect {
            return Some(vec![word.into()]);
        }

        if allow_interfix_removal {
            if let Some((stem, link)) = interfix {
                if self.is_word(stem.as_str()) {
                    return Some(self.with_interfix(vec![stem.into()], link));
                }
            }
        }

        let mut parts = self.split_from_right(word, collect);
        if is_word {
            let found = parts.get_or_insert_with(Vec::new);
            push_distinct(found, word.into());
        }
        if parts.is_none() {
            if let Some((stem, link)) = interfix {
                parts = self
                    .split_from_right(stem, collect)
                    .map(|found| self.with_interfix(found, link));
            }
        }
        parts
    }

    fn split_from_right<'a>(&self, word: WordSlice<'a>, collect: bool) -> Option<Vec<Segment<'a>>> {
        if let Some(parts) = self.exceptions.lookup(word) {
            return Some(parts);
        }

        let min = self.min_word_length;
        let last_cut = word.char_len().saturating_sub(min);
        let mut collected: Option<Vec<Segment<'a>>> = None;
        let mut fallback: Option<Vec<Segment<'a>>> = None;

        for i in min..=last_cut {
            let (left, right) = word.split_at(i);

            if !self.strict {
                if let Some(parts) = self.exception_cut(left, right) {
                    return Some(parts);
                }
            }

            if self.is_word(right.as_str()) {
                match self.split(left, true, collect) {
                    Some(left_parts) if collect => {
                        let found = collected.get_or_insert_with(Vec::new);
                        for part in left_parts {
                            push_distinct(found, part);
                        }
                        push_distinct(found, right.into());
                        for part in self.exceptions.lookup(right).into_iter().flatten() {
                            push_distinct(found, part);
                        }
                    }
                    Some(mut left_parts) => {
                        tracing::trace!(word = word.as_str(), cut = i, "split found");
                        left_parts.push(right.into());
                        return Some(left_parts);
                    }
                    None if !self.strict && fallback.is_none() => {
                        tracing::trace!(word = word.as_str(), cut = i, "fallback: right part only");
                        fallback = Some(vec![left.into(), right.into()]);
                    }
                    None => {}
                }
            } else if !self.strict && fallback.is_none() && self.is_word(left.as_str()) {
                tracing::trace!(word = word.as_str(), cut = i, "fallback: left part only");
                fallback = Some(vec![left.into(), right.into()]);
            }
        }

        collected.or(fallback)
    }

    /// Exceptions registered for either side of a cut.
    fn exception_cut<'a>(
        &self,
        left: WordSlice<'a>,
        right: WordSlice<'a>,
    ) -> Option<Vec<Segment<'a>>> {
        if let Some(mut parts) = self.exceptions.lookup(right) {
            parts.insert(0, left.into());
            return Some(parts);
        }
        let mut parts = self.exceptions.lookup(left)?;
        parts.push(right.into());
        Some(parts)
    }

    fn with_interfix<'a>(&self, mut parts: Vec<Segment<'a>>, link: WordSlice<'a>) -> Vec<Segment<'a>> {
        if !self.hide_interfixes {
            parts.push(link.into());
        }
        parts
    }
}

/// Append `part` unless a part with the same text is already present.
fn push_distinct<'a>(parts: &mut Vec<Segment<'a>>, part: Segment<'a>) {
    if !parts.iter().any(|p| p.as_str() == part.as_str()) {
        parts.push(part);
    }
}
