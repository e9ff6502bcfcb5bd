// wordsplit-split: Split compound words.
//
// Reads words from stdin (one per line) and prints their parts joined by a
// separator. With --sub-words, prints every dictionary word found inside
// the compound instead.
//
// Usage:
//   wordsplit-split [-d DICT_PATH] [OPTIONS] [--] [WORD...]
//
// Options:
//   -d, --dict-path PATH     Dictionary file, or directory containing words-de.wsd / words-de.txt
//   -e, --exceptions FILE    Exception list (default: exceptions-de.txt next to the dictionary)
//   -l, --language CODE      Language code (default: de)
//   --show-interfix          Keep linking characters as separate parts
//   --lenient                Accept splits whose remainder is not a word
//   --min-length N           Minimum length of a part (default: 3)
//   --separator SEP          Part separator (default: ", ")
//   --sub-words              Print every sub-word instead of the split
//   -h, --help               Print help

use std::io::{self, Write};

use wordsplit::SplitterOptions;

fn main() {
    wordsplit_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = wordsplit_cli::parse_dict_path(&args);
    let (exceptions_path, args) = wordsplit_cli::take_option(&args, "--exceptions", Some("-e"))
        .unwrap_or_else(|e| wordsplit_cli::fatal(&e));
    let (language, args) = wordsplit_cli::parse_language(&args);

    if wordsplit_cli::wants_help(&args) {
        println!("wordsplit-split: Split compound words.");
        println!();
        println!("Usage: wordsplit-split [-d DICT_PATH] [OPTIONS] [--] [WORD...]");
        println!();
        println!("If WORD arguments are given, splits each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!("Arguments after -- are words even if they start with -.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Dictionary file, or directory containing words-de.wsd");
        println!("  -e, --exceptions FILE    Exception list (default: next to the dictionary)");
        println!("  -l, --language CODE      Language code (default: de)");
        println!("  --show-interfix          Keep linking characters as separate parts");
        println!("  --lenient                Accept splits whose remainder is not a word");
        println!("  --min-length N           Minimum length of a part (default: 3)");
        println!("  --separator SEP          Part separator (default: \", \")");
        println!("  --sub-words              Print every sub-word instead of the split");
        println!("  -h, --help               Print this help");
        return;
    }

    let (separator, args) = wordsplit_cli::take_option(&args, "--separator", None)
        .unwrap_or_else(|e| wordsplit_cli::fatal(&e));
    let (min_length, args) = wordsplit_cli::take_number_option(&args, "--min-length")
        .unwrap_or_else(|e| wordsplit_cli::fatal(&e));
    let (show_interfix, args) = wordsplit_cli::take_flag(&args, "--show-interfix");
    let (lenient, args) = wordsplit_cli::take_flag(&args, "--lenient");
    let (sub_words, args) = wordsplit_cli::take_flag(&args, "--sub-words");
    let words = wordsplit_cli::positional_words(&args).unwrap_or_else(|e| wordsplit_cli::fatal(&e));

    let options = SplitterOptions {
        hide_interfixes: !show_interfix,
        strict: !lenient,
        min_word_length: min_length,
    };
    let separator = separator.unwrap_or_else(|| ", ".to_string());

    let splitter = wordsplit_cli::load_splitter(
        dict_path.as_deref(),
        exceptions_path.as_deref(),
        language,
        options,
    )
    .unwrap_or_else(|e| wordsplit_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = wordsplit_cli::for_each_word(&words, |word| {
        let parts = if sub_words {
            splitter.sub_words(word)
        } else {
            splitter.split_word(word)
        };
        let _ = writeln!(out, "{}", parts.join(&separator));
    });
    if let Err(e) = result {
        eprintln!("error reading stdin: {e}");
    }
}
