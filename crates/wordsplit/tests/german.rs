//! Golden tests for German splitting.
//!
//! Runs every case in `tests/data/golden-de.json` against the fixture
//! dictionary `tests/data/words-de.txt` and exception list
//! `tests/data/exceptions-de.txt`.
//!
//! Run: cargo test -p wordsplit --test german

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use serde::Deserialize;
use wordsplit::{Dictionary, ExceptionTable, Language, SplitError, Splitter, SplitterOptions};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn dictionary() -> Arc<Dictionary> {
    let path = data_path("words-de.txt");
    Arc::new(
        Dictionary::from_path(&path)
            .unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e)),
    )
}

fn exceptions() -> ExceptionTable {
    let path = data_path("exceptions-de.txt");
    ExceptionTable::from_path(&path)
        .unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e))
}

#[derive(Debug, Deserialize)]
struct Golden {
    split: Vec<SplitCase>,
    all_splits: Vec<AllSplitsCase>,
}

#[derive(Debug, Deserialize)]
struct SplitCase {
    word: String,
    expected: Vec<String>,
    #[serde(default)]
    show_interfixes: bool,
    #[serde(default)]
    lenient: bool,
    #[serde(default)]
    min_length: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct AllSplitsCase {
    word: String,
    expected: Vec<Vec<String>>,
}

fn load_golden() -> Golden {
    let path = data_path("golden-de.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn splitter_for(case: &SplitCase, dict: &Arc<Dictionary>, exceptions: &ExceptionTable) -> Splitter {
    let options = SplitterOptions {
        hide_interfixes: !case.show_interfixes,
        strict: !case.lenient,
        min_word_length: case.min_length,
    };
    let mut splitter = Splitter::new(Arc::clone(dict), Language::German, options);
    splitter.set_exceptions(exceptions.clone());
    splitter
}

// ===========================================================================
// Tests
// ===========================================================================

#[test]
fn golden_splits() {
    let golden = load_golden();
    let dict = dictionary();
    let exceptions = exceptions();

    let mut mismatches = Vec::new();
    for case in &golden.split {
        let splitter = splitter_for(case, &dict, &exceptions);
        let actual = splitter.split_word(case.word.as_str());
        if actual != case.expected {
            mismatches.push(format!(
                "  [{:?}] show_interfixes={} lenient={}: expected {:?}, got {:?}",
                case.word, case.show_interfixes, case.lenient, case.expected, actual
            ));
        }
    }

    assert!(
        mismatches.is_empty(),
        "{} of {} split cases differ:\n{}",
        mismatches.len(),
        golden.split.len(),
        mismatches.join("\n")
    );
}

#[test]
fn golden_all_splits() {
    let golden = load_golden();
    let splitter = Splitter::new(dictionary(), Language::German, SplitterOptions::default());

    let mut mismatches = Vec::new();
    for case in &golden.all_splits {
        let actual = splitter.all_splits(&case.word);
        if actual != case.expected {
            mismatches.push(format!(
                "  [{:?}]: expected {:?}, got {:?}",
                case.word, case.expected, actual
            ));
        }
    }

    assert!(
        mismatches.is_empty(),
        "{} of {} all-splits cases differ:\n{}",
        mismatches.len(),
        golden.all_splits.len(),
        mismatches.join("\n")
    );
}

#[test]
fn none_and_blank_input() {
    let splitter = Splitter::new(dictionary(), Language::German, SplitterOptions::default());
    for input in [None, Some(""), Some("\t"), Some("   ")] {
        assert!(splitter.split_word(input).is_empty(), "{input:?}");
    }
}

#[test]
fn exceptions_added_at_runtime() {
    let options = SplitterOptions {
        hide_interfixes: false,
        ..SplitterOptions::default()
    };
    let mut splitter = Splitter::new(dictionary(), Language::German, options);
    assert_eq!(splitter.split_word("Verhaltensstörung"), ["Verhaltens", "störung"]);

    splitter
        .add_exception("Verhaltensstörung", ["Verhaltensstörung"])
        .unwrap();
    assert_eq!(splitter.split_word("Verhaltensstörung"), ["Verhaltensstörung"]);

    // replaces the previous entry; the parts do not spell the word, so they
    // are returned verbatim
    splitter
        .add_exception("Verhaltensstörung", ["Ver", "halten", "Störung"])
        .unwrap();
    assert_eq!(
        splitter.split_word("Verhaltensstörung"),
        ["Ver", "halten", "Störung"]
    );

    splitter
        .add_exception("Verhaltensstörung", Vec::<String>::new())
        .unwrap();
    assert!(splitter.split_word("Verhaltensstörung").is_empty());

    assert!(splitter.remove_exception("Verhaltensstörung"));
    assert_eq!(splitter.split_word("Verhaltensstörung"), ["Verhaltens", "störung"]);

    assert!(matches!(
        splitter.add_exception("", ["Verhaltensstörung"]),
        Err(SplitError::InvalidException(_))
    ));
}

#[test]
fn lowering_min_length_keeps_found_splits() {
    let golden = load_golden();
    let dict = dictionary();
    let exceptions = exceptions();

    for case in golden.split.iter().filter(|c| !c.lenient && c.min_length.is_none()) {
        let mut splitter = splitter_for(case, &dict, &exceptions);
        let before = splitter.split_word(case.word.as_str());
        if before.len() < 2 {
            continue;
        }
        splitter.set_minimum_word_length(2);
        let after = splitter.split_word(case.word.as_str());
        assert!(after.len() >= 2, "{:?} no longer splits: {:?}", case.word, after);
    }
}

#[test]
fn binary_dictionary_matches_text() {
    let dict = dictionary();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&dict.to_bytes().unwrap()).unwrap();

    let exceptions_path = data_path("exceptions-de.txt");
    let splitter = Splitter::from_paths(
        file.path(),
        Some(exceptions_path.as_path()),
        Language::German,
        SplitterOptions::default(),
    )
    .unwrap();

    assert_eq!(splitter.dictionary().len(), dict.len());
    assert_eq!(
        splitter.split_word("Abendhausstörung"),
        ["Abend", "haus", "störung"]
    );
    assert_eq!(splitter.split_word("Sünderecke"), ["Sünder", "ecke"]);
}

#[test]
fn missing_dictionary_fails_construction() {
    let err = Splitter::from_paths(
        "/nonexistent/words-de.txt",
        None,
        Language::German,
        SplitterOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SplitError::Dictionary(_)));
}

#[test]
fn bad_exception_file_fails_construction() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Pilot|sendung/XX").unwrap();
    let err = Splitter::from_paths(
        data_path("words-de.txt"),
        Some(file.path()),
        Language::German,
        SplitterOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SplitError::Exceptions(_)));
}

#[test]
fn cancelled_all_splits() {
    let splitter = Splitter::new(dictionary(), Language::German, SplitterOptions::default());
    let cancel = AtomicBool::new(true);
    let result = splitter.all_splits_with_cancel("Hausverhaltensflügex", &cancel);
    assert!(matches!(result, Err(SplitError::Cancelled)));
}

#[test]
fn shared_between_threads() {
    let splitter = Arc::new(Splitter::new(
        dictionary(),
        Language::German,
        SplitterOptions::default(),
    ));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let splitter = Arc::clone(&splitter);
            std::thread::spawn(move || splitter.split_word("Abendhausstörung"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), ["Abend", "haus", "störung"]);
    }
}
