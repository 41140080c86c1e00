//! Word normalization and ranked-list parsing.

use std::collections::HashSet;

/// Trims and lowercases a word or target.
#[inline]
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// A usable list entry: non-empty with no inner whitespace.
#[inline]
pub fn is_single_word(word: &str) -> bool {
    !word.is_empty() && !word.contains(char::is_whitespace)
}

/// Parses raw generated text into an ordered, deduplicated list of single words.
///
/// Tokens are split on commas and newlines, normalized, and dropped when empty, equal to
/// `target`, or containing whitespace. The first occurrence of a duplicate wins so the
/// model's closeness ordering survives.
pub fn parse_word_list(raw: &str, target: &str) -> Vec<String> {
    let target = normalize(target);
    let mut seen = HashSet::new();

    raw.split([',', '\n'])
        .map(normalize)
        .filter(|w| is_single_word(w) && *w != target)
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Strips quoting and sentence punctuation that models like to wrap single words in.
pub fn clean_generated_word(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '"' | '\'' | '.'))
        .collect::<String>()
        .trim()
        .to_string()
}
