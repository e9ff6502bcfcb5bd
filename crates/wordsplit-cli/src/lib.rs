// wordsplit-cli: shared utilities for the command-line tools.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;
use wordsplit::{Language, Splitter, SplitterOptions};

/// Environment variable naming a dictionary directory.
pub const DICT_PATH_ENV: &str = "WORDSPLIT_DICT_PATH";

/// Install the stderr log subscriber, `warn` unless `RUST_LOG` says
/// otherwise.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Dictionary file names for `language`, binary first.
pub fn dictionary_files(language: Language) -> [String; 2] {
    let code = language.code();
    [format!("words-{code}.wsd"), format!("words-{code}.txt")]
}

/// Exception list file name for `language`.
pub fn exceptions_file(language: Language) -> String {
    format!("exceptions-{}.txt", language.code())
}

/// Locate the dictionary file for `language`.
///
/// `dict_path` may name the file itself or a directory. Directories are
/// searched in this order:
/// 1. `dict_path` argument (if provided)
/// 2. `WORDSPLIT_DICT_PATH` environment variable
/// 3. `~/.wordsplit`
/// 4. `/usr/share/wordsplit`
/// 5. Current working directory
pub fn find_dictionary(dict_path: Option<&str>, language: Language) -> Result<PathBuf, String> {
    if let Some(path) = dict_path.map(PathBuf::from) {
        if path.is_file() {
            return Ok(path);
        }
    }

    let names = dictionary_files(language);
    let search_paths = build_search_paths(dict_path);
    for dir in &search_paths {
        for name in &names {
            let path = dir.join(name);
            if path.is_file() {
                return Ok(path);
            }
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        names.join(" or "),
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Find the dictionary and build a splitter.
///
/// Without an explicit `exceptions_path`, an exception list next to the
/// dictionary is loaded if there is one.
pub fn load_splitter(
    dict_path: Option<&str>,
    exceptions_path: Option<&str>,
    language: Language,
    options: SplitterOptions,
) -> Result<Splitter, String> {
    let dictionary = find_dictionary(dict_path, language)?;
    let exceptions = match exceptions_path {
        Some(path) => Some(PathBuf::from(path)),
        None => dictionary
            .parent()
            .map(|dir| dir.join(exceptions_file(language)))
            .filter(|path| path.is_file()),
    };
    tracing::debug!(
        dictionary = %dictionary.display(),
        exceptions = ?exceptions,
        "loading splitter"
    );

    Splitter::from_paths(&dictionary, exceptions.as_deref(), language, options)
        .map_err(|e| format!("failed to create splitter: {e}"))
}

/// Build the list of directories to search for dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }
    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }
    if let Some(home) = home_dir() {
        paths.push(home.join(".wordsplit"));
    }
    paths.push(PathBuf::from("/usr/share/wordsplit"));
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Argument helpers
// ---------------------------------------------------------------------------

/// Marks the end of options; every argument after it is a word.
pub const END_OF_OPTIONS: &str = "--";

/// Remove an option taking a value (`--long VALUE`, `--long=VALUE` or
/// `-s VALUE`) from `args`.
///
/// Returns `(value, remaining_args)`; the last occurrence wins. Arguments
/// after `--` are passed through untouched.
pub fn take_option(
    args: &[String],
    long: &str,
    short: Option<&str>,
) -> Result<(Option<String>, Vec<String>), String> {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == END_OF_OPTIONS {
            remaining.push(arg.clone());
            remaining.extend(iter.cloned());
            break;
        }
        if let Some(v) = arg.strip_prefix(long).and_then(|rest| rest.strip_prefix('=')) {
            value = Some(v.to_string());
        } else if arg == long || short == Some(arg.as_str()) {
            match iter.next() {
                Some(v) => value = Some(v.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Remove a numeric option (`--long N` or `--long=N`) from `args`.
pub fn take_number_option(
    args: &[String],
    long: &str,
) -> Result<(Option<usize>, Vec<String>), String> {
    let (value, remaining) = take_option(args, long, None)?;
    let number = value.map(|v| parse_number(long, &v)).transpose()?;
    Ok((number, remaining))
}

/// Remove a boolean flag from `args`, returning whether it was present.
pub fn take_flag(args: &[String], flag: &str) -> (bool, Vec<String>) {
    let end = options_end(args);
    let found = args[..end].iter().any(|a| a == flag);
    let remaining = args[..end]
        .iter()
        .filter(|a| a.as_str() != flag)
        .chain(&args[end..])
        .cloned()
        .collect();
    (found, remaining)
}

/// The word arguments left once every known option has been taken.
///
/// Anything else that looks like an option is an error. A lone `-` is a
/// word, and so is every argument after `--`.
pub fn positional_words(args: &[String]) -> Result<Vec<String>, String> {
    let end = options_end(args);
    if let Some(unknown) = args[..end].iter().find(|a| a.len() > 1 && a.starts_with('-')) {
        return Err(format!("unknown option: {unknown}"));
    }
    Ok(args[..end]
        .iter()
        .chain(args.get(end + 1..).unwrap_or_default())
        .cloned()
        .collect())
}

/// Index of the `--` argument, or `args.len()` if there is none.
fn options_end(args: &[String]) -> usize {
    args.iter()
        .position(|a| a == END_OF_OPTIONS)
        .unwrap_or(args.len())
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "--dict-path", Some("-d")).unwrap_or_else(|e| fatal(&e))
}

/// Parse `--language CODE` / `-l CODE`, defaulting to German.
pub fn parse_language(args: &[String]) -> (Language, Vec<String>) {
    let (code, remaining) =
        take_option(args, "--language", Some("-l")).unwrap_or_else(|e| fatal(&e));
    let language = match code {
        Some(code) => code.parse().unwrap_or_else(|e| fatal(&format!("{e}"))),
        None => Language::German,
    };
    (language, remaining)
}

/// Parse the value of a numeric option.
pub fn parse_number(flag: &str, value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("invalid number for {flag}: {value}"))
}

/// Call `f` for every word argument, or for every non-blank stdin line when
/// there are none.
pub fn for_each_word(words: &[String], mut f: impl FnMut(&str)) -> io::Result<()> {
    if !words.is_empty() {
        words.iter().for_each(|w| f(w));
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            f(word);
        }
    }
    Ok(())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is among the options.
pub fn wants_help(args: &[String]) -> bool {
    args[..options_end(args)]
        .iter()
        .any(|a| a == "--help" || a == "-h")
}
