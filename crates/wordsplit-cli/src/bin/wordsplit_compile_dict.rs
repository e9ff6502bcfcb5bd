// wordsplit-compile-dict: Compile a word list into a WSD1 binary dictionary.
//
// Usage:
//   wordsplit-compile-dict INPUT OUTPUT
//
// INPUT is a text word list (one word per line, '#' comments) or an
// existing binary dictionary. Entries are lowercased, de-duplicated and
// sorted.

use wordsplit_dict::Dictionary;

fn main() {
    wordsplit_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordsplit_cli::wants_help(&args) || args.len() != 2 {
        println!("wordsplit-compile-dict: Compile a word list into a binary dictionary.");
        println!();
        println!("Usage: wordsplit-compile-dict INPUT OUTPUT");
        println!();
        println!("INPUT is a text word list (one word per line, '#' starts a comment)");
        println!("or an existing binary dictionary. OUTPUT is written in WSD1 format.");
        if args.len() != 2 && !wordsplit_cli::wants_help(&args) {
            std::process::exit(2);
        }
        return;
    }
    let (input, output) = (&args[0], &args[1]);

    let dictionary = Dictionary::from_path(input)
        .unwrap_or_else(|e| wordsplit_cli::fatal(&format!("{input}: {e}")));
    let bytes = dictionary
        .to_bytes()
        .unwrap_or_else(|e| wordsplit_cli::fatal(&e.to_string()));
    std::fs::write(output, &bytes)
        .unwrap_or_else(|e| wordsplit_cli::fatal(&format!("{output}: {e}")));

    tracing::info!(words = dictionary.len(), bytes = bytes.len(), "compiled dictionary");
    eprintln!("{output}: {} words, {} bytes", dictionary.len(), bytes.len());
}
