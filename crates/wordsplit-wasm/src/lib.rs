// WASM bindings for the wordsplit compound splitter.
//
// Provides a `WasmSplitter` class exported via wasm-bindgen that wraps a
// `Splitter`. Nested results (all-splits) are serialized to JavaScript
// values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const splitter = new WasmSplitter(wordsBytes, exceptionsText, true);
//   splitter.split("Verhaltensstörung");      // => ["Verhaltens", "störung"]
//   splitter.subWords("Abendhausstörung");     // => ["Abend", "haus", "störung"]
//   splitter.allSplits("Hausverhaltenflüxel", 50);
//                                            // => { splits: [["Haus", "verhaltenflüxel"], ...], timedOut: false }
//   splitter.addException("Wirtstier", ["Wirts", "tier"]);
//   splitter.setStrictMode(false);
//   splitter.terminate();                      // optional cleanup

use serde::Serialize;
use wasm_bindgen::prelude::*;

use wordsplit::{Cancel, ExceptionTable, Language, SplitError, Splitter, SplitterOptions};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable result of `allSplits`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsAllSplits {
    splits: Vec<Vec<String>>,
    timed_out: bool,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn split_error_to_js(e: SplitError) -> JsError {
    JsError::new(&e.to_string())
}

/// Wall-clock deadline read from `Date.now()`; `std::time::Instant` is not
/// available on wasm32-unknown-unknown.
struct JsDeadline(f64);

impl Cancel for JsDeadline {
    fn is_cancelled(&self) -> bool {
        js_sys::Date::now() >= self.0
    }
}

// ============================================================================
// WasmSplitter
// ============================================================================

/// Compound word splitter for WebAssembly.
#[wasm_bindgen]
pub struct WasmSplitter {
    splitter: Splitter,
}

#[wasm_bindgen]
impl WasmSplitter {
    /// Create a new splitter from raw dictionary data.
    ///
    /// - `words_data`: contents of a text word list or WSD1 dictionary (required)
    /// - `exceptions`: exception list text (optional)
    /// - `hide_interfixes`: drop linking "s" / "-" from results
    /// - `language`: language code (optional, default "de")
    #[wasm_bindgen(constructor)]
    pub fn new(
        words_data: &[u8],
        exceptions: Option<String>,
        hide_interfixes: bool,
        language: Option<String>,
    ) -> Result<WasmSplitter, JsError> {
        let language = match language.as_deref() {
            Some(code) => code.parse::<Language>().map_err(split_error_to_js)?,
            None => Language::German,
        };
        let options = SplitterOptions {
            hide_interfixes,
            ..SplitterOptions::default()
        };
        let splitter = Splitter::from_bytes(words_data, exceptions.as_deref(), language, options)
            .map_err(split_error_to_js)?;
        Ok(WasmSplitter { splitter })
    }

    /// Split a compound word into its parts.
    ///
    /// Returns `[]` for blank input and `[word]` when no split is found.
    pub fn split(&self, word: &str) -> Vec<String> {
        self.splitter.split_word(word)
    }

    /// Every dictionary word found inside a compound.
    #[wasm_bindgen(js_name = "subWords")]
    pub fn sub_words(&self, word: &str) -> Vec<String> {
        self.splitter.sub_words(word)
    }

    /// Enumerate every segmentation of a word.
    ///
    /// `timeout_ms` bounds the enumeration (omit for no limit). Returns an
    /// object `{ splits, timedOut }`; a timed-out call has no splits.
    #[wasm_bindgen(js_name = "allSplits")]
    pub fn all_splits(&self, word: &str, timeout_ms: Option<f64>) -> Result<JsValue, JsError> {
        let result = match timeout_ms {
            Some(ms) => {
                let deadline = JsDeadline(js_sys::Date::now() + ms);
                match self.splitter.all_splits_with_cancel(word, &deadline) {
                    Ok(splits) => JsAllSplits { splits, timed_out: false },
                    Err(SplitError::Cancelled) => JsAllSplits {
                        splits: Vec::new(),
                        timed_out: true,
                    },
                    Err(e) => return Err(split_error_to_js(e)),
                }
            }
            None => JsAllSplits {
                splits: self.splitter.all_splits(word),
                timed_out: false,
            },
        };
        serde_wasm_bindgen::to_value(&result).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Register (or replace) an exception. An empty `parts` array makes the
    /// word split into nothing.
    #[wasm_bindgen(js_name = "addException")]
    pub fn add_exception(&mut self, word: &str, parts: Vec<String>) -> Result<(), JsError> {
        self.splitter
            .add_exception(word, parts)
            .map_err(split_error_to_js)
    }

    /// Remove an exception; returns whether one was registered.
    #[wasm_bindgen(js_name = "removeException")]
    pub fn remove_exception(&mut self, word: &str) -> bool {
        self.splitter.remove_exception(word)
    }

    /// Replace all exceptions with the parsed contents of an exception list.
    #[wasm_bindgen(js_name = "loadExceptions")]
    pub fn load_exceptions(&mut self, text: &str) -> Result<(), JsError> {
        let table = ExceptionTable::parse(text).map_err(|e| JsError::new(&e.to_string()))?;
        self.splitter.set_exceptions(table);
        Ok(())
    }

    /// Number of entries in the dictionary.
    #[wasm_bindgen(js_name = "dictionarySize")]
    pub fn dictionary_size(&self) -> usize {
        self.splitter.dictionary().len()
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Release resources held by this instance.
    ///
    /// After calling this method, the instance should not be used.
    pub fn terminate(self) {}

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Only split into dictionary words (`true`, the default), or accept a
    /// known part next to an unknown remainder.
    #[wasm_bindgen(js_name = "setStrictMode")]
    pub fn set_strict_mode(&mut self, value: bool) {
        self.splitter.set_strict_mode(value);
    }

    /// Set the minimum part length in characters (at least 1).
    #[wasm_bindgen(js_name = "setMinWordLength")]
    pub fn set_min_word_length(&mut self, value: usize) {
        self.splitter.set_minimum_word_length(value);
    }
}
