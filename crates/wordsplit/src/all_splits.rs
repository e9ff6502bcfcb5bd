// Exhaustive enumeration of segmentations.
//
// Where the segmenter stops at the first decomposition, the enumerator
// lists every way to cut a word so that at least one side of each cut is a
// dictionary word. The other side may be anything, which makes this useful
// for words containing a typo in one part. Exceptions and interfixes are not
// consulted.
//
// The number of results grows exponentially with word length, so callers
// pass a cancel signal that is polled before every cut point.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use wordsplit_core::WordSlice;
use wordsplit_dict::Dictionary;

use crate::SplitError;

/// Cooperative cancellation signal.
pub trait Cancel {
    fn is_cancelled(&self) -> bool;
}

/// A signal that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl Cancel for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Cancelled once the flag is set, typically from another thread.
impl Cancel for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// A deadline: cancelled once it has passed.
impl Cancel for Instant {
    fn is_cancelled(&self) -> bool {
        Instant::now() >= *self
    }
}

impl<C: Cancel + ?Sized> Cancel for Arc<C> {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// Lists every segmentation of a word.
///
/// For each direction, every cut point is visited:
///
/// - left to right, cuts `i` with `min <= i < len - min`; a cut counts when
///   its left side is a word
/// - right to left, cuts `i` with `len - min >= i > min`; a cut counts when
///   its right side is a word
///
/// A counting cut yields the two-part split and, combined with the anchored
/// side, every enumeration of the other side. The result is the
/// left-to-right list followed by the right-to-left list, without
/// duplicates, in discovery order.
pub struct AllSplitsEnumerator<'s> {
    dictionary: &'s Dictionary,
    min_word_length: usize,
    cancel: &'s dyn Cancel,
}

impl<'s> AllSplitsEnumerator<'s> {
    pub fn new(dictionary: &'s Dictionary, min_word_length: usize, cancel: &'s dyn Cancel) -> Self {
        Self {
            dictionary,
            min_word_length: min_word_length.max(1),
            cancel,
        }
    }

    pub fn enumerate<'a>(&self, word: WordSlice<'a>) -> Result<Vec<Vec<WordSlice<'a>>>, SplitError> {
        let from_left = self.scan(word, true)?;
        let from_right = self.scan(word, false)?;

        let mut result: Vec<Vec<WordSlice<'a>>> = Vec::with_capacity(from_left.len() + from_right.len());
        for split in from_left.into_iter().chain(from_right) {
            if !result.iter().any(|seen| same_text(seen, &split)) {
                result.push(split);
            }
        }
        Ok(result)
    }

    fn scan<'a>(&self, word: WordSlice<'a>, from_left: bool) -> Result<Vec<Vec<WordSlice<'a>>>, SplitError> {
        let min = self.min_word_length;
        let last = word.char_len().saturating_sub(min);
        let cuts: Vec<usize> = if from_left {
            (min..last).collect()
        } else {
            (min + 1..=last).rev().collect()
        };

        let mut result = Vec::new();
        for i in cuts {
            if self.cancel.is_cancelled() {
                tracing::debug!(word = word.as_str(), "all-splits enumeration cancelled");
                return Err(SplitError::Cancelled);
            }

            let (left, right) = word.split_at(i);
            let (anchor, other) = if from_left { (left, right) } else { (right, left) };
            if !self.dictionary.is_word(anchor.as_str(), min) {
                continue;
            }

            result.push(vec![left, right]);
            for inner in self.enumerate(other)? {
                let mut combined = Vec::with_capacity(inner.len() + 1);
                if from_left {
                    combined.push(left);
                    combined.extend(inner);
                } else {
                    combined.extend(inner);
                    combined.push(right);
                }
                result.push(combined);
            }
        }
        Ok(result)
    }
}

fn same_text(a: &[WordSlice<'_>], b: &[WordSlice<'_>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.as_str() == y.as_str())
}
