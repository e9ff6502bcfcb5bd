// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// wordsplit-ffi: C-compatible FFI layer for Splitter.
//
// Exposes a stable C ABI for any language with C FFI support
// (Python/ctypes, C#/P-Invoke, and so on).
//
// Memory management rules:
// - Opaque `Splitter` pointer: created by `wordsplit_new`, freed by `wordsplit_free`.
// - Returned strings: caller must free with `wordsplit_free_str`.
// - Returned string arrays: caller must free with `wordsplit_free_str_array`.
// - Returned split arrays: caller must free with `wordsplit_free_splits`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::slice;
use std::time::{Duration, Instant};

use wordsplit::{Language, SplitError, Splitter, SplitterOptions};

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new splitter from raw dictionary data.
///
/// - `words_data` + `words_len`: contents of a text or WSD1 dictionary (required)
/// - `exceptions`: exception list text (optional, NULL to skip)
/// - `language`: language code such as "de" (optional, NULL for German)
/// - `hide_interfixes`: nonzero drops linking "s" / "-" from results
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `wordsplit_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordsplit_new(
    words_data: *const u8,
    words_len: usize,
    exceptions: *const c_char,
    language: *const c_char,
    hide_interfixes: c_int,
    error_out: *mut *mut c_char,
) -> *mut Splitter {
    if words_data.is_null() || words_len == 0 {
        set_error(error_out, "words_data is null or empty");
        return ptr::null_mut();
    }
    let words = unsafe { slice::from_raw_parts(words_data, words_len) };

    let exceptions = if exceptions.is_null() {
        None
    } else {
        match cstr_to_str(exceptions) {
            Some(text) => Some(text),
            None => {
                set_error(error_out, "exceptions is not valid UTF-8");
                return ptr::null_mut();
            }
        }
    };

    let language = if language.is_null() {
        Language::German
    } else {
        let parsed = cstr_to_str(language)
            .ok_or_else(|| SplitError::UnsupportedLanguage("<invalid UTF-8>".to_string()))
            .and_then(str::parse::<Language>);
        match parsed {
            Ok(language) => language,
            Err(e) => {
                set_error(error_out, &e.to_string());
                return ptr::null_mut();
            }
        }
    };

    let options = SplitterOptions {
        hide_interfixes: hide_interfixes != 0,
        ..SplitterOptions::default()
    };
    match Splitter::from_bytes(words, exceptions, language, options) {
        Ok(splitter) => Box::into_raw(Box::new(splitter)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a Splitter created by `wordsplit_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordsplit_free(handle: *mut Splitter) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Splitting ───────────────────────────────────────────────────

/// Split a compound word.
///
/// Returns a NULL-terminated array of C strings, empty for a NULL or blank
/// `word`. Caller must free with `wordsplit_free_str_array`. Returns NULL
/// for a NULL handle or a `word` that is not valid UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordsplit_split(
    handle: *const Splitter,
    word: *const c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    if word.is_null() {
        return strings_to_c_array(&[]);
    }
    let Some(word) = cstr_to_str(word) else {
        return ptr::null_mut();
    };
    strings_to_c_array(&handle.split_word(word))
}

/// Every dictionary word found inside a compound.
///
/// Same ownership rules as `wordsplit_split`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordsplit_sub_words(
    handle: *const Splitter,
    word: *const c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    if word.is_null() {
        return strings_to_c_array(&[]);
    }
    let Some(word) = cstr_to_str(word) else {
        return ptr::null_mut();
    };
    strings_to_c_array(&handle.sub_words(word))
}

/// Result of `wordsplit_all_splits`.
#[repr(C)]
pub struct WordsplitSplitArray {
    /// `count` NULL-terminated arrays of C strings, one per segmentation.
    pub splits: *mut *mut *mut c_char,
    pub count: usize,
    /// 1 if the timeout expired before the enumeration finished, else 0.
    pub timed_out: c_int,
}

impl WordsplitSplitArray {
    fn empty(timed_out: bool) -> Self {
        Self {
            splits: ptr::null_mut(),
            count: 0,
            timed_out: c_int::from(timed_out),
        }
    }
}

/// Enumerate every segmentation of a word.
///
/// `timeout_ms` bounds the enumeration; 0 means no limit. A timed-out call
/// returns no splits and sets `timed_out`.
/// Caller must free the result with `wordsplit_free_splits`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordsplit_all_splits(
    handle: *const Splitter,
    word: *const c_char,
    timeout_ms: u64,
) -> WordsplitSplitArray {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return WordsplitSplitArray::empty(false);
    };
    let Some(word) = cstr_to_str(word) else {
        return WordsplitSplitArray::empty(false);
    };

    let splits = if timeout_ms == 0 {
        handle.all_splits(word)
    } else {
        let deadline = Instant::now() + Duration::from_millis(timeout_ms);
        match handle.all_splits_with_cancel(word, &deadline) {
            Ok(splits) => splits,
            Err(_) => return WordsplitSplitArray::empty(true),
        }
    };
    if splits.is_empty() {
        return WordsplitSplitArray::empty(false);
    }

    let arrays: Box<[*mut *mut c_char]> = splits.iter().map(|s| strings_to_c_array(s)).collect();
    let count = arrays.len();
    WordsplitSplitArray {
        splits: Box::into_raw(arrays).cast(),
        count,
        timed_out: 0,
    }
}

/// Free a split array returned by `wordsplit_all_splits`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordsplit_free_splits(arr: WordsplitSplitArray) {
    if arr.splits.is_null() || arr.count == 0 {
        return;
    }
    let arrays = unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr.splits, arr.count)) };
    for split in arrays.iter() {
        free_null_terminated_array(*split);
    }
}

// ── Options and exceptions ──────────────────────────────────────

/// Nonzero: only split into dictionary words. Zero: accept a known part
/// next to an unknown remainder.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordsplit_set_strict_mode(handle: *mut Splitter, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_strict_mode(value != 0);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordsplit_set_min_word_length(handle: *mut Splitter, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_minimum_word_length(value.max(0) as usize);
    }
}

/// Register an exception.
///
/// `parts` is a NULL-terminated array of C strings; an empty array makes the
/// word split into nothing. Returns 1 on success, 0 if the word is blank,
/// -1 on invalid arguments.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordsplit_add_exception(
    handle: *mut Splitter,
    word: *const c_char,
    parts: *const *const c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return -1;
    };
    let Some(word) = cstr_to_str(word) else {
        return -1;
    };
    if parts.is_null() {
        return -1;
    }

    let mut collected = Vec::new();
    let mut i = 0;
    loop {
        let p = unsafe { *parts.add(i) };
        if p.is_null() {
            break;
        }
        let Some(part) = cstr_to_str(p) else {
            return -1;
        };
        collected.push(part);
        i += 1;
    }

    match handle.add_exception(word, collected) {
        Ok(()) => 1,
        Err(_) => 0,
    }
}

/// Remove an exception. Returns 1 if one was registered, 0 if not, -1 on
/// invalid arguments.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordsplit_remove_exception(
    handle: *mut Splitter,
    word: *const c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return -1;
    };
    let Some(word) = cstr_to_str(word) else {
        return -1;
    };
    c_int::from(handle.remove_exception(word))
}

/// Replace all exceptions with the parsed contents of an exception list.
///
/// Returns 1 on success. On failure returns 0, leaves the current
/// exceptions untouched and, if `error_out` is non-NULL, stores an error
/// string to be freed with `wordsplit_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordsplit_load_exceptions(
    handle: *mut Splitter,
    text: *const c_char,
    error_out: *mut *mut c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        set_error(error_out, "handle is null");
        return 0;
    };
    let Some(text) = cstr_to_str(text) else {
        set_error(error_out, "text is null or not valid UTF-8");
        return 0;
    };
    match wordsplit::ExceptionTable::parse(text) {
        Ok(table) => {
            handle.set_exceptions(table);
            1
        }
        Err(e) => {
            set_error(error_out, &e.to_string());
            0
        }
    }
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is static. Do NOT free it.
#[unsafe(no_mangle)]
pub extern "C" fn wordsplit_version() -> *const c_char {
    static VERSION: std::sync::LazyLock<CString> =
        std::sync::LazyLock::new(|| CString::new(env!("CARGO_PKG_VERSION")).unwrap_or_default());
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by wordsplit functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordsplit_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordsplit_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let ptrs: Box<[*mut c_char]> = strings
        .iter()
        .map(|s| str_to_c(s))
        .chain(std::iter::once(ptr::null_mut()))
        .collect();
    Box::into_raw(ptrs).cast()
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    // allocated as a boxed slice of i + 1 pointers, terminator included
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}
