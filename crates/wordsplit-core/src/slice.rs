// WordSlice: offset view into the original input word
// Segment: one part of a segmentation result
//
// The splitter never copies substrings while it searches. Every candidate
// part is a `WordSlice` pointing into the caller's input, so the casing and
// formatting of the input survive recursive cutting, and two neighbouring
// parts can trade a character (an interfix "s") without re-deriving text.

use std::fmt;

use crate::text::{byte_offset, char_len};

/// A `[begin, end)` view into an original string.
///
/// Offsets are byte offsets that always sit on char boundaries. All
/// operations take and return *character* counts and produce a new view;
/// nothing is mutated in place.
///
/// Invariant: `begin <= end <= text.len()`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordSlice<'a> {
    text: &'a str,
    begin: usize,
    end: usize,
}

impl<'a> WordSlice<'a> {
    /// A view over all of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            begin: 0,
            end: text.len(),
        }
    }

    /// A view over `text[begin..end]` (byte offsets).
    ///
    /// Returns `None` if the bounds are out of order, out of range, or not
    /// on char boundaries.
    pub fn from_bounds(text: &'a str, begin: usize, end: usize) -> Option<Self> {
        if begin > end
            || end > text.len()
            || !text.is_char_boundary(begin)
            || !text.is_char_boundary(end)
        {
            return None;
        }
        Some(Self { text, begin, end })
    }

    /// The viewed substring.
    pub fn as_str(&self) -> &'a str {
        &self.text[self.begin..self.end]
    }

    /// The complete original string this slice points into.
    pub fn original(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the first viewed character in the original.
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Byte offset one past the last viewed character in the original.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        char_len(self.as_str())
    }

    /// Sub-slice by character offsets relative to this view.
    ///
    /// Offsets past the end clamp to the end, and `begin` clamps to `end`.
    pub fn slice(&self, begin: usize, end: usize) -> Self {
        let s = self.as_str();
        let e = byte_offset(s, end);
        let b = byte_offset(s, begin).min(e);
        Self {
            text: self.text,
            begin: self.begin + b,
            end: self.begin + e,
        }
    }

    /// Cut into `[0, at)` and `[at, len)` (character offset).
    pub fn split_at(&self, at: usize) -> (Self, Self) {
        let mid = self.begin + byte_offset(self.as_str(), at);
        (
            Self {
                text: self.text,
                begin: self.begin,
                end: mid,
            },
            Self {
                text: self.text,
                begin: mid,
                end: self.end,
            },
        )
    }

    /// Drop `n` characters from the front, stopping at the end.
    pub fn shrink_left(&self, n: usize) -> Self {
        let b = byte_offset(self.as_str(), n);
        Self {
            text: self.text,
            begin: self.begin + b,
            end: self.end,
        }
    }

    /// Drop `n` characters from the back, stopping at the beginning.
    pub fn shrink_right(&self, n: usize) -> Self {
        let keep = self.char_len().saturating_sub(n);
        let e = byte_offset(self.as_str(), keep);
        Self {
            text: self.text,
            begin: self.begin,
            end: self.begin + e,
        }
    }

    /// Extend the front by `n` characters of the original, clamped at its start.
    pub fn grow_left(&self, n: usize) -> Self {
        let before = &self.text[..self.begin];
        let available = char_len(before);
        let begin = byte_offset(before, available.saturating_sub(n));
        Self {
            text: self.text,
            begin,
            end: self.end,
        }
    }

    /// Extend the back by `n` characters of the original, clamped at its end.
    pub fn grow_right(&self, n: usize) -> Self {
        let after = &self.text[self.end..];
        let end = self.end + byte_offset(after, n);
        Self {
            text: self.text,
            begin: self.begin,
            end,
        }
    }

    /// Drop leading and trailing whitespace.
    pub fn trim(&self) -> Self {
        let s = self.as_str();
        let trimmed_start = s.trim_start();
        let begin = self.begin + (s.len() - trimmed_start.len());
        let end = begin + trimmed_start.trim_end().len();
        Self {
            text: self.text,
            begin,
            end,
        }
    }

    /// Whether `next` starts exactly where this slice ends, in the same original.
    pub fn is_adjacent_to(&self, next: &WordSlice<'_>) -> bool {
        self.same_original(next) && self.end == next.begin
    }

    fn same_original(&self, other: &WordSlice<'_>) -> bool {
        self.text.as_ptr() == other.text.as_ptr() && self.text.len() == other.text.len()
    }
}

impl fmt::Display for WordSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for WordSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{:?} ({}, {}): {:?}}}",
            self.text,
            self.begin,
            self.end,
            self.as_str()
        )
    }
}

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// One part of a segmentation.
///
/// Parts found by the splitter are slices of the input. Exception entries
/// that deliberately change the spelling of a word cannot be expressed as
/// slices and are carried as owned literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Slice(WordSlice<'a>),
    Literal(String),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Slice(s) => s.as_str(),
            Segment::Literal(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Segment::Slice(s) => s.as_str().to_string(),
            Segment::Literal(s) => s,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    pub fn char_len(&self) -> usize {
        char_len(self.as_str())
    }

    /// Join this segment with the one that follows it.
    ///
    /// Adjacent slices of the same original merge into one wider slice, so
    /// the result still carries the input's casing. Anything else falls back
    /// to string concatenation.
    pub fn concat(&self, next: &Segment<'a>) -> Segment<'a> {
        match (self, next) {
            (Segment::Slice(a), Segment::Slice(b)) if a.is_adjacent_to(b) => {
                Segment::Slice(a.grow_right(b.char_len()))
            }
            _ => {
                let mut joined = String::with_capacity(self.as_str().len() + next.as_str().len());
                joined.push_str(self.as_str());
                joined.push_str(next.as_str());
                Segment::Literal(joined)
            }
        }
    }

    /// Split off the first character: `("s", "amt")` for `"samt"`.
    ///
    /// Returns `None` for an empty segment.
    pub fn split_first_char(&self) -> Option<(Segment<'a>, Segment<'a>)> {
        if self.is_empty() {
            return None;
        }
        match self {
            Segment::Slice(s) => {
                let (head, tail) = s.split_at(1);
                Some((Segment::Slice(head), Segment::Slice(tail)))
            }
            Segment::Literal(s) => {
                let mid = byte_offset(s, 1);
                Some((
                    Segment::Literal(s[..mid].to_string()),
                    Segment::Literal(s[mid..].to_string()),
                ))
            }
        }
    }

    /// Remove one leading and one trailing `-`, if present.
    pub fn trim_hyphens(self) -> Segment<'a> {
        match self {
            Segment::Slice(mut s) => {
                if s.as_str().starts_with('-') {
                    s = s.shrink_left(1);
                }
                if s.as_str().ends_with('-') {
                    s = s.shrink_right(1);
                }
                Segment::Slice(s)
            }
            Segment::Literal(s) => {
                let t = s.strip_prefix('-').unwrap_or(&s);
                let t = t.strip_suffix('-').unwrap_or(t);
                Segment::Literal(t.to_string())
            }
        }
    }
}

impl<'a> From<WordSlice<'a>> for Segment<'a> {
    fn from(slice: WordSlice<'a>) -> Self {
        Segment::Slice(slice)
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
