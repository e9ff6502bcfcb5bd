// wordsplit-all-splits: List every segmentation of a word.
//
// Prints one line per segmentation, parts joined by " + ". Words with no
// segmentation print nothing. The enumeration is exponential in word
// length; --timeout-ms bounds the time spent on a single word.
//
// Usage:
//   wordsplit-all-splits [-d DICT_PATH] [OPTIONS] [--] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Dictionary file, or directory containing words-de.wsd / words-de.txt
//   -l, --language CODE    Language code (default: de)
//   --min-length N         Minimum length of an anchoring word (default: 3)
//   --timeout-ms N         Give up on a word after N milliseconds
//   -h, --help             Print help

use std::io::{self, Write};
use std::time::{Duration, Instant};

use wordsplit::{SplitError, SplitterOptions};

fn main() {
    wordsplit_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = wordsplit_cli::parse_dict_path(&args);
    let (language, args) = wordsplit_cli::parse_language(&args);

    if wordsplit_cli::wants_help(&args) {
        println!("wordsplit-all-splits: List every segmentation of a word.");
        println!();
        println!("Usage: wordsplit-all-splits [-d DICT_PATH] [OPTIONS] [--] [WORD...]");
        println!();
        println!("If WORD arguments are given, enumerates each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!("Arguments after -- are words even if they start with -.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file, or directory containing words-de.wsd");
        println!("  -l, --language CODE    Language code (default: de)");
        println!("  --min-length N         Minimum length of an anchoring word (default: 3)");
        println!("  --timeout-ms N         Give up on a word after N milliseconds");
        println!("  -h, --help             Print this help");
        return;
    }

    let (min_length, args) = wordsplit_cli::take_number_option(&args, "--min-length")
        .unwrap_or_else(|e| wordsplit_cli::fatal(&e));
    let (timeout_ms, args) = wordsplit_cli::take_number_option(&args, "--timeout-ms")
        .unwrap_or_else(|e| wordsplit_cli::fatal(&e));
    let words = wordsplit_cli::positional_words(&args).unwrap_or_else(|e| wordsplit_cli::fatal(&e));

    let options = SplitterOptions {
        min_word_length: min_length,
        ..SplitterOptions::default()
    };
    let timeout = timeout_ms.map(|ms| Duration::from_millis(ms as u64));

    let splitter = wordsplit_cli::load_splitter(dict_path.as_deref(), None, language, options)
        .unwrap_or_else(|e| wordsplit_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = wordsplit_cli::for_each_word(&words, |word| {
        let splits = match timeout {
            Some(limit) => splitter.all_splits_with_cancel(word, &(Instant::now() + limit)),
            None => Ok(splitter.all_splits(word)),
        };
        match splits {
            Ok(splits) => {
                for split in splits {
                    let _ = writeln!(out, "{}", split.join(" + "));
                }
            }
            Err(SplitError::Cancelled) => {
                tracing::warn!(word, "enumeration timed out");
            }
            Err(e) => eprintln!("error: {word}: {e}"),
        }
    });
    if let Err(e) = result {
        eprintln!("error reading stdin: {e}");
    }
}
