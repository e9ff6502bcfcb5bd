// wordsplit-export-dict: Dump a dictionary as a sorted text word list.
//
// Usage:
//   wordsplit-export-dict INPUT [OUTPUT]
//
// Writes to stdout when OUTPUT is omitted.

use std::fs::File;
use std::io::{self, BufWriter};

use wordsplit_dict::{Dictionary, text};

fn main() {
    wordsplit_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordsplit_cli::wants_help(&args) || args.is_empty() || args.len() > 2 {
        println!("wordsplit-export-dict: Dump a dictionary as a sorted word list.");
        println!();
        println!("Usage: wordsplit-export-dict INPUT [OUTPUT]");
        println!();
        println!("INPUT may be a binary or text dictionary. Writes to stdout when");
        println!("OUTPUT is omitted.");
        if !wordsplit_cli::wants_help(&args) {
            std::process::exit(2);
        }
        return;
    }

    let input = &args[0];
    let dictionary = Dictionary::from_path(input)
        .unwrap_or_else(|e| wordsplit_cli::fatal(&format!("{input}: {e}")));
    let words = dictionary.sorted_words();

    let result = match args.get(1) {
        Some(output) => File::create(output)
            .and_then(|file| text::write_words(BufWriter::new(file), words.iter().copied())),
        None => {
            let stdout = io::stdout();
            text::write_words(BufWriter::new(stdout.lock()), words.iter().copied())
        }
    };
    if let Err(e) = result {
        wordsplit_cli::fatal(&e.to_string());
    }
}
