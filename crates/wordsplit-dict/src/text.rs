// Plain-text word lists: UTF-8, one word per line, `#` starts a comment line.

use std::io::{self, BufRead, Write};

/// Comment marker at the start of a line.
pub const COMMENT_CHAR: char = '#';

/// Iterate over the words of a text word list.
///
/// Lines are trimmed; blank lines and comment lines are skipped.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter_map(accept_line)
}

/// Read all words from a buffered reader.
pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(word) = accept_line(&line) {
            out.push(word.to_string());
        }
    }
    Ok(out)
}

/// Write words one per line.
pub fn write_words<'w, W, I>(mut writer: W, words: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'w str>,
{
    for word in words {
        writeln!(writer, "{word}")?;
    }
    writer.flush()
}

fn accept_line(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_CHAR) {
        None
    } else {
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blanks() {
        let text = "# German test words\nhaus\n\n  abend  \n#störung\nverhalten\n";
        assert_eq!(words(text).collect::<Vec<_>>(), vec!["haus", "abend", "verhalten"]);
    }

    #[test]
    fn read_words_from_reader() {
        let input = "Haus\r\n# comment\nAbend\n";
        let words = read_words(input.as_bytes()).unwrap();
        assert_eq!(words, vec!["Haus", "Abend"]);
    }

    #[test]
    fn write_words_one_per_line() {
        let mut out = Vec::new();
        write_words(&mut out, ["abend", "haus"]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "abend\nhaus\n");
    }
}
