// Splitter: public entry point bundling a shared dictionary with exceptions,
// language profile and options.
//
// The splitter owns its configuration and builds a borrowed `Segmenter` (or
// `AllSplitsEnumerator`) for every call. Configuration changes take
// `&mut self`, so a splitter shared between threads is read-only.

use std::path::Path;
use std::sync::Arc;

use wordsplit_core::{Segment, WordSlice};
use wordsplit_dict::Dictionary;

use crate::SplitError;
use crate::all_splits::{AllSplitsEnumerator, Cancel, NeverCancel};
use crate::disambiguator::Disambiguator;
use crate::exceptions::ExceptionTable;
use crate::interfix::Interfixes;
use crate::language::Language;
use crate::segmenter::Segmenter;

/// Construction-time options for [`Splitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitterOptions {
    /// Drop linking fragments ("s", "-") from the result instead of
    /// returning them as parts of their own.
    pub hide_interfixes: bool,

    /// Only split when every part is a dictionary word. When false, a cut
    /// where one side is a word and the other is unknown is accepted if
    /// nothing better is found.
    pub strict: bool,

    /// Minimum part length in characters. `None` uses the language default.
    pub min_word_length: Option<usize>,
}

impl Default for SplitterOptions {
    fn default() -> Self {
        Self {
            hide_interfixes: true,
            strict: true,
            min_word_length: None,
        }
    }
}

/// Compound word splitter.
///
/// Results keep the casing of the input. A word that cannot be split comes
/// back as a single part; `None` and blank input give no parts at all.
#[derive(Debug)]
pub struct Splitter {
    dictionary: Arc<Dictionary>,
    language: Language,
    exceptions: ExceptionTable,
    interfixes: Interfixes,
    disambiguator: Option<Box<dyn Disambiguator>>,
    hide_interfixes: bool,
    strict: bool,
    min_word_length: usize,
}

impl Splitter {
    pub fn new(dictionary: Arc<Dictionary>, language: Language, options: SplitterOptions) -> Self {
        Self {
            dictionary,
            language,
            exceptions: ExceptionTable::new(),
            interfixes: language.interfixes(),
            disambiguator: language.disambiguator(),
            hide_interfixes: options.hide_interfixes,
            strict: options.strict,
            min_word_length: options
                .min_word_length
                .unwrap_or_else(|| language.default_min_word_length())
                .max(1),
        }
    }

    /// Load the dictionary (text or binary) and, optionally, an exception
    /// list from disk.
    pub fn from_paths(
        dictionary: impl AsRef<Path>,
        exceptions: Option<&Path>,
        language: Language,
        options: SplitterOptions,
    ) -> Result<Self, SplitError> {
        let dictionary = Arc::new(Dictionary::from_path(dictionary)?);
        let mut splitter = Self::new(dictionary, language, options);
        if let Some(path) = exceptions {
            splitter.load_exception_file(path)?;
        }
        Ok(splitter)
    }

    /// Build from in-memory data: dictionary file contents (text or binary)
    /// and optional exception list text. Used by the FFI and WASM bindings.
    pub fn from_bytes(
        dictionary: &[u8],
        exceptions: Option<&str>,
        language: Language,
        options: SplitterOptions,
    ) -> Result<Self, SplitError> {
        let dictionary = Arc::new(Dictionary::from_bytes(dictionary)?);
        let mut splitter = Self::new(dictionary, language, options);
        if let Some(source) = exceptions {
            splitter.set_exceptions(ExceptionTable::parse(source)?);
        }
        Ok(splitter)
    }

    /// Replace the language's interfix list.
    pub fn with_interfixes(mut self, interfixes: Interfixes) -> Self {
        self.interfixes = interfixes;
        self
    }

    /// Replace the language's disambiguation pass (`None` disables it).
    pub fn with_disambiguator(mut self, disambiguator: Option<Box<dyn Disambiguator>>) -> Self {
        self.disambiguator = disambiguator;
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn exceptions(&self) -> &ExceptionTable {
        &self.exceptions
    }

    pub fn interfixes(&self) -> &Interfixes {
        &self.interfixes
    }

    pub fn hides_interfixes(&self) -> bool {
        self.hide_interfixes
    }

    // -- Options --

    pub fn strict_mode(&self) -> bool {
        self.strict
    }

    pub fn set_strict_mode(&mut self, strict: bool) {
        self.strict = strict;
    }

    pub fn minimum_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Set the minimum part length in characters; values below 1 are
    /// treated as 1.
    pub fn set_minimum_word_length(&mut self, min_word_length: usize) {
        self.min_word_length = min_word_length.max(1);
    }

    // -- Exceptions --

    /// Register (or replace) an override for `word`, matched
    /// case-insensitively.
    ///
    /// An empty `parts` list makes the word split into nothing; a single
    /// part equal to `word` keeps it from being split.
    pub fn add_exception<I, S>(&mut self, word: &str, parts: I) -> Result<(), SplitError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let word = word.trim();
        if word.is_empty() {
            return Err(SplitError::InvalidException(
                "exception word must not be empty".to_string(),
            ));
        }
        self.exceptions
            .insert(word, parts.into_iter().map(Into::into).collect());
        Ok(())
    }

    /// Drop the override for `word`. Returns whether there was one.
    pub fn remove_exception(&mut self, word: &str) -> bool {
        self.exceptions.remove(word.trim()).is_some()
    }

    pub fn set_exceptions(&mut self, exceptions: ExceptionTable) {
        self.exceptions = exceptions;
    }

    /// Replace all exceptions with the contents of an exception list file.
    pub fn load_exception_file(&mut self, path: impl AsRef<Path>) -> Result<(), SplitError> {
        self.exceptions = ExceptionTable::from_path(path)?;
        Ok(())
    }

    // -- Splitting --

    /// Split `word` into its compound parts.
    ///
    /// - `None`, empty or blank input: `[]`
    /// - a registered exception: its parts
    /// - no split found: `[word]` (trimmed)
    pub fn split_word<'w>(&self, word: impl Into<Option<&'w str>>) -> Vec<String> {
        match word.into() {
            Some(word) => render(self.split_word_segments(word)),
            None => Vec::new(),
        }
    }

    /// Like [`split_word`](Self::split_word), returning views into `word`
    /// where possible.
    pub fn split_word_segments<'a>(&self, word: &'a str) -> Vec<Segment<'a>> {
        self.split_trimmed(word, false)
    }

    /// Every distinct dictionary part found anywhere in `word`, plus `word`
    /// itself when it is a dictionary word.
    pub fn sub_words<'w>(&self, word: impl Into<Option<&'w str>>) -> Vec<String> {
        match word.into() {
            Some(word) => render(self.split_trimmed(word, true)),
            None => Vec::new(),
        }
    }

    /// Every segmentation of `word` in which each cut has a dictionary word
    /// on at least one side. See [`AllSplitsEnumerator`].
    pub fn all_splits(&self, word: &str) -> Vec<Vec<String>> {
        // NeverCancel cannot interrupt the enumeration
        self.all_splits_with_cancel(word, &NeverCancel)
            .unwrap_or_default()
    }

    /// [`all_splits`](Self::all_splits) with a cancel signal polled between
    /// cut points.
    pub fn all_splits_with_cancel(
        &self,
        word: &str,
        cancel: &dyn Cancel,
    ) -> Result<Vec<Vec<String>>, SplitError> {
        let word = WordSlice::new(word).trim();
        let splits = AllSplitsEnumerator::new(&self.dictionary, self.min_word_length, cancel)
            .enumerate(word)?;
        Ok(splits
            .into_iter()
            .map(|split| split.iter().map(|p| p.as_str().to_string()).collect())
            .collect())
    }

    fn segmenter(&self) -> Segmenter<'_> {
        Segmenter::new(&self.dictionary, &self.exceptions, &self.interfixes)
            .with_min_word_length(self.min_word_length)
            .with_strict(self.strict)
            .with_hidden_interfixes(self.hide_interfixes)
    }

    fn split_trimmed<'a>(&self, word: &'a str, collect: bool) -> Vec<Segment<'a>> {
        let word = WordSlice::new(word).trim();
        if word.is_empty() {
            return Vec::new();
        }
        if let Some(parts) = self.exceptions.lookup(word) {
            return parts;
        }
        if word.char_len() < 2 {
            return vec![word.into()];
        }

        let Some(parts) = self.segmenter().segment(word, collect) else {
            return vec![word.into()];
        };
        let parts = match &self.disambiguator {
            Some(disambiguator) => disambiguator.disambiguate(parts, &self.dictionary),
            None => parts,
        };
        parts
            .into_iter()
            .map(Segment::trim_hyphens)
            .filter(|part| !part.is_empty())
            .collect()
    }
}

fn render(parts: Vec<Segment<'_>>) -> Vec<String> {
    parts.into_iter().map(Segment::into_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &[&str] = &["verhalten", "störung", "haus", "abend", "sauerstoff", "flasche"];

    fn splitter(words: &[&str], options: SplitterOptions) -> Splitter {
        let options = SplitterOptions {
            min_word_length: options.min_word_length.or(Some(4)),
            ..options
        };
        Splitter::new(Arc::new(Dictionary::from_words(words)), Language::German, options)
    }

    fn german() -> Splitter {
        splitter(BASIC, SplitterOptions::default())
    }

    #[test]
    fn splitter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Splitter>();
    }

    #[test]
    fn basic_splits() {
        let s = german();
        assert_eq!(s.split_word("Verhaltensstörung"), ["Verhalten", "störung"]);
        assert_eq!(s.split_word("Abendhausstörung"), ["Abend", "haus", "störung"]);
        assert_eq!(s.split_word("Sauerstoff-Flasche"), ["Sauerstoff", "Flasche"]);
    }

    #[test]
    fn unsplittable_input_comes_back_whole() {
        let s = german();
        assert_eq!(s.split_word("xyz"), ["xyz"]);
        assert_eq!(s.split_word("  Katzenfutter "), ["Katzenfutter"]);
        assert_eq!(s.split_word("a"), ["a"]);
    }

    #[test]
    fn none_and_blank_input_give_nothing() {
        let s = german();
        assert!(s.split_word(None).is_empty());
        assert!(s.split_word("").is_empty());
        assert!(s.split_word(" \t").is_empty());
        assert!(s.sub_words(None).is_empty());
    }

    #[test]
    fn shown_interfix_hyphen_is_dropped() {
        let s = splitter(
            BASIC,
            SplitterOptions {
                hide_interfixes: false,
                ..SplitterOptions::default()
            },
        );
        assert_eq!(s.split_word("Sauerstoff-Flasche"), ["Sauerstoff", "Flasche"]);
        assert_eq!(s.split_word("Verhaltensstörung"), ["Verhaltens", "störung"]);
    }

    #[test]
    fn shown_interfix_joins_the_following_word() {
        let s = splitter(
            &["wein", "sorte", "orte"],
            SplitterOptions {
                hide_interfixes: false,
                min_word_length: Some(3),
                ..SplitterOptions::default()
            },
        );
        assert_eq!(s.split_word("Weinsorte"), ["Wein", "sorte"]);
    }

    #[test]
    fn hidden_interfix_prefers_the_longer_tail() {
        let s = splitter(
            &["wein", "sorte", "orte"],
            SplitterOptions {
                min_word_length: Some(3),
                ..SplitterOptions::default()
            },
        );
        assert_eq!(s.split_word("Weinsorte"), ["Wein", "sorte"]);

        let s = splitter(
            &["noten", "bank", "vorsitzen", "vorsitzenden", "den"],
            SplitterOptions {
                min_word_length: Some(3),
                ..SplitterOptions::default()
            },
        );
        assert_eq!(
            s.split_word("Notenbankvorsitzenden"),
            ["Noten", "bank", "vorsitzenden"]
        );
    }

    #[test]
    fn strict_mode_toggle() {
        let mut words = BASIC.to_vec();
        words.extend(["wirts", "tiers", "pezies"]);
        let mut s = splitter(&words, SplitterOptions::default());
        s.set_strict_mode(false);
        assert!(!s.strict_mode());
        assert_eq!(s.split_word("Wirtstierspezies"), ["Wirts", "tiers", "pezies"]);

        let strict = german();
        assert_eq!(strict.split_word("Wirtstierspezies"), ["Wirtstierspezies"]);
    }

    #[test]
    fn exception_takes_precedence() {
        let mut s = german();
        s.add_exception("Abendhausstörung", ["Abendhaus", "störung"]).unwrap();
        assert_eq!(s.split_word("ABENDHAUSSTÖRUNG"), ["ABENDHAUS", "STÖRUNG"]);

        assert!(s.remove_exception("abendhausstörung"));
        assert!(!s.remove_exception("abendhausstörung"));
        assert_eq!(s.split_word("Abendhausstörung"), ["Abend", "haus", "störung"]);
    }

    #[test]
    fn exception_can_block_or_empty_a_split() {
        let mut s = german();
        s.add_exception("Abendhaus", ["Abendhaus"]).unwrap();
        assert_eq!(s.split_word("Abendhaus"), ["Abendhaus"]);
        s.add_exception("Abendhaus", Vec::<String>::new()).unwrap();
        assert!(s.split_word("Abendhaus").is_empty());
    }

    #[test]
    fn empty_exception_key_is_rejected() {
        let mut s = german();
        let err = s.add_exception("  ", ["x"]).unwrap_err();
        assert!(matches!(err, SplitError::InvalidException(_)));
    }

    #[test]
    fn minimum_word_length_is_clamped() {
        let mut s = german();
        s.set_minimum_word_length(0);
        assert_eq!(s.minimum_word_length(), 1);
        s.set_minimum_word_length(5);
        assert_eq!(s.split_word("Abendhaus"), ["Abendhaus"]);
    }

    #[test]
    fn language_default_min_length() {
        let s = Splitter::new(
            Arc::new(Dictionary::from_words(["haus", "tür"])),
            Language::German,
            SplitterOptions::default(),
        );
        assert_eq!(s.minimum_word_length(), 3);
        assert_eq!(s.split_word("Haustür"), ["Haus", "tür"]);
    }

    #[test]
    fn english_has_no_interfixes() {
        let s = Splitter::new(
            Arc::new(Dictionary::from_words(["sun", "flower"])),
            Language::English,
            SplitterOptions::default(),
        );
        assert_eq!(s.split_word("Sunflower"), ["Sun", "flower"]);
        assert_eq!(s.split_word("Sunsflower"), ["Sunsflower"]);
    }

    #[test]
    fn custom_interfixes() {
        let s = Splitter::new(
            Arc::new(Dictionary::from_words(["hund", "hütte"])),
            Language::German,
            SplitterOptions::default(),
        )
        .with_interfixes(Interfixes::new(["e"]));
        assert_eq!(s.split_word("Hundehütte"), ["Hund", "hütte"]);
    }

    #[test]
    fn sub_words_lists_all_parts() {
        let s = splitter(&["abend", "haus", "abendhaus"], SplitterOptions::default());
        assert_eq!(s.sub_words("Abendhaus"), ["Abend", "haus", "Abendhaus"]);
        assert_eq!(s.split_word("Abendhaus"), ["Abendhaus"]);
    }

    #[test]
    fn all_splits_uses_current_min_length() {
        let mut s = splitter(&["haus", "tür", "haustür"], SplitterOptions::default());
        assert!(s.all_splits("Haustür").is_empty());
        s.set_minimum_word_length(3);
        assert_eq!(s.all_splits("Haustür"), [vec!["Haus", "tür"]]);
    }

    #[test]
    fn all_splits_can_be_cancelled() {
        let s = german();
        let flag = std::sync::atomic::AtomicBool::new(true);
        let err = s.all_splits_with_cancel("Abendhausstörung", &flag).unwrap_err();
        assert!(matches!(err, SplitError::Cancelled));
    }

    #[test]
    fn segments_borrow_from_input() {
        let s = german();
        let input = String::from("Abendhausstörung");
        let parts = s.split_word_segments(&input);
        assert!(parts.iter().all(|p| matches!(p, Segment::Slice(_))));
    }

    #[test]
    fn load_exception_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Abend|haus|störung").unwrap();
        let mut s = german();
        s.load_exception_file(file.path()).unwrap();
        assert_eq!(s.exceptions().len(), 1);
        assert_eq!(s.split_word("abendhausstörung"), ["abend", "haus", "störung"]);
    }

    #[test]
    fn from_bytes_with_exceptions() {
        let s = Splitter::from_bytes(
            b"# words\nabend\nhaus\nst\xc3\xb6rung\n",
            Some("Haus|st\u{f6}rung|abend\n"),
            Language::German,
            SplitterOptions::default(),
        )
        .unwrap();
        assert_eq!(s.split_word("Abendhaus"), ["Abend", "haus"]);
        assert_eq!(s.split_word("Hausstörungabend"), ["Haus", "störung", "abend"]);
    }

    #[test]
    fn from_bytes_rejects_bad_exceptions() {
        let err = Splitter::from_bytes(b"haus\n", Some("Haus|tier/X\n"), Language::German, SplitterOptions::default())
            .unwrap_err();
        assert!(matches!(err, SplitError::Exceptions(_)));
    }
}
