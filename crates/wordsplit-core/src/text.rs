// Case folding and char-index helpers.
//
// All length arithmetic in the splitter counts Unicode scalar values, never
// bytes: a minimum word length of 4 means four characters, whether they are
// ASCII or umlauts. These helpers translate between the two.

/// Lowercase a word for dictionary and exception lookups.
///
/// Words without uppercase characters are returned as-is, which avoids a
/// second allocation pass on the (common) already-lowercase path.
pub fn fold(word: &str) -> String {
    if has_uppercase(word) {
        word.to_lowercase()
    } else {
        word.to_string()
    }
}

/// Returns `true` if any character of `word` is uppercase.
pub fn has_uppercase(word: &str) -> bool {
    word.chars().any(char::is_uppercase)
}

/// Number of characters (Unicode scalar values) in `word`.
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Byte offset of the character at `char_idx`.
///
/// Indices past the end clamp to `word.len()`.
pub fn byte_offset(word: &str, char_idx: usize) -> usize {
    word.char_indices()
        .nth(char_idx)
        .map_or(word.len(), |(i, _)| i)
}

/// Case-insensitive equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || fold(a) == fold(b)
}

/// Case-insensitive suffix test.
///
/// Only the trailing `char_len(suffix)` characters of `word` are folded, so
/// a suffix match always corresponds to a whole number of characters at the
/// end of the original (unfolded) word.
pub fn ends_with_ignore_case(word: &str, suffix: &str) -> bool {
    let k = char_len(suffix);
    let n = char_len(word);
    if k > n {
        return false;
    }
    let tail = &word[byte_offset(word, n - k)..];
    eq_ignore_case(tail, suffix)
}
