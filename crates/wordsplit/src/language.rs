// Language profiles: the per-language settings of the splitter.

use std::fmt;
use std::str::FromStr;

use crate::SplitError;
use crate::disambiguator::{Disambiguator, GermanInterfixDisambiguator};
use crate::interfix::Interfixes;

/// Supported languages.
///
/// A language selects the interfixes, the default minimum part length and
/// the disambiguation pass. The dictionary is always supplied separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    German,
    English,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::German => "de",
            Language::English => "en",
        }
    }

    /// Parse a language code such as `"de"`, `"DE"` or `"de-AT"`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "de" => Some(Language::German),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    pub fn interfixes(self) -> Interfixes {
        match self {
            Language::German => Interfixes::german(),
            Language::English => Interfixes::none(),
        }
    }

    /// Minimum length of a part, in characters.
    pub fn default_min_word_length(self) -> usize {
        match self {
            Language::German | Language::English => 3,
        }
    }

    pub fn disambiguator(self) -> Option<Box<dyn Disambiguator>> {
        match self {
            Language::German => Some(Box::new(GermanInterfixDisambiguator)),
            Language::English => None,
        }
    }
}

impl FromStr for Language {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| SplitError::UnsupportedLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
