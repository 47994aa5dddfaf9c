//! Text normalization helpers shared by the page parsers.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)(St|Nd|Rd|Th)\b").expect("ordinal pattern is valid"));

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove every whitespace character.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Capitalize each word: a letter is uppercased when it does not follow
/// another letter, lowercased otherwise. Digits start a new word, so
/// `"1ST"` becomes `"1St"`. Apostrophes stay inside the word: `"O'BRIEN"`
/// becomes `"O'brien"`.
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = in_word && is_apostrophe(c);
        }
    }
    out
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

/// Undo capitalization artifacts on ordinals: `"1St"` -> `"1st"`, `"22Nd"` -> `"22nd"`.
pub fn fix_ordinal_suffixes(s: &str) -> String {
    ORDINAL_SUFFIX
        .replace_all(s, |caps: &Captures| {
            format!("{}{}", &caps[1], caps[2].to_lowercase())
        })
        .into_owned()
}

/// Parse the non-negative integer sitting between `start` and `end`.
///
/// `end` is searched after `start`. Whitespace inside the number is
/// ignored, so `"1 2"` reads as `12`.
pub fn integer_between(text: &str, start: &str, end: &str) -> Option<u32> {
    let from = text.find(start)? + start.len();
    let to = from + text[from..].find(end)?;
    strip_whitespace(&text[from..to]).parse().ok()
}
