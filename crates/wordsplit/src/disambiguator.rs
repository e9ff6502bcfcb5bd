// Interfix disambiguation.
//
// The segmenter cannot tell "Urlaub|s|orte" from "Urlaub|sorte": both are
// valid cuts over a dictionary that does not record which words take a
// linking "s". A disambiguator runs over the finished part list and decides
// where each standalone "s" belongs.

use std::fmt;

use wordsplit_core::Segment;
use wordsplit_core::text::eq_ignore_case;
use wordsplit_dict::Dictionary;

/// Post-processing pass over a segmentation.
pub trait Disambiguator: fmt::Debug + Send + Sync {
    /// Rewrite `parts`, typically by moving linking characters between
    /// neighbouring parts.
    fn disambiguate<'a>(&self, parts: Vec<Segment<'a>>, dictionary: &Dictionary) -> Vec<Segment<'a>>;
}

/// Final parts whose leading "s" always belongs to the part before them:
/// Verkehr+samt is Verkehrs+amt.
const AMBIGUOUS_ENDINGS: &[&str] = &["samt", "samts", "samtes"];

/// Words that always take a linking "s" when followed by another part.
const REQUIRES_LINKING_S: &[&str] = &["verhalten"];

/// German rules for the linking "s".
///
/// 1. If the last part is one of "samt", "samts", "samtes", its leading
///    "s" moves to the part before it and nothing else changes.
/// 2. Otherwise, right to left, every standalone "s" joins the part after
///    it when "s" + that part is a word and the part before does not
///    require a linking "s"; else it joins the part before.
///
/// Moving characters between slices of the same input keeps the input's
/// casing.
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanInterfixDisambiguator;

impl Disambiguator for GermanInterfixDisambiguator {
    fn disambiguate<'a>(
        &self,
        mut parts: Vec<Segment<'a>>,
        dictionary: &Dictionary,
    ) -> Vec<Segment<'a>> {
        if parts.len() >= 2 {
            let last = parts.len() - 1;
            if AMBIGUOUS_ENDINGS
                .iter()
                .any(|ending| eq_ignore_case(parts[last].as_str(), ending))
            {
                if let Some((link, rest)) = parts[last].split_first_char() {
                    parts[last - 1] = parts[last - 1].concat(&link);
                    parts[last] = rest;
                }
                return parts;
            }
        }

        for i in (2..parts.len()).rev() {
            if !eq_ignore_case(parts[i - 1].as_str(), "s") {
                continue;
            }
            let joins_right = dictionary.contains(&format!("s{}", parts[i].as_str()))
                && !REQUIRES_LINKING_S
                    .iter()
                    .any(|w| eq_ignore_case(parts[i - 2].as_str(), w));

            let link = parts.remove(i - 1);
            if joins_right {
                parts[i - 1] = link.concat(&parts[i - 1]);
            } else {
                parts[i - 2] = parts[i - 2].concat(&link);
            }
        }
        parts
    }
}
