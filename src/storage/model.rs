//! Storage model types.

use std::collections::HashSet;

use rkyv::{Archive, Deserialize, Serialize};

use crate::constants::FIRST_LIST_RANK;
use crate::words::{is_single_word, normalize};

/// Ordered words near a target, closest first (index 0 holds rank 2).
///
/// Persisted as one `rkyv` record per target and always replaced as a whole.
///
/// # Example
/// ```rust
/// use funtexto::RankedWordList;
///
/// let list = RankedWordList::new("Ocean", vec!["sea".into(), "OCEAN".into(), "Sea".into()], 0);
/// assert_eq!(list.target(), "ocean");
/// assert_eq!(list.words(), ["sea"]);
/// ```
#[derive(Archive, Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct RankedWordList {
    target: String,
    words: Vec<String>,
    generated_at: i64,
}

impl RankedWordList {
    /// Builds a list, normalizing every word and dropping the target, repeats, and entries
    /// that are blank or hold more than one word.
    pub fn new(target: &str, words: Vec<String>, generated_at: i64) -> Self {
        let target = normalize(target);
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(|w| normalize(&w))
            .filter(|w| is_single_word(w) && *w != target)
            .filter(|w| seen.insert(w.clone()))
            .collect();

        Self {
            target,
            words,
            generated_at,
        }
    }

    /// Describes the first broken invariant of a record, if any.
    ///
    /// Lists built with [`RankedWordList::new`] always pass; records read back from storage
    /// may not.
    pub fn invariant_violation(&self) -> Option<String> {
        if self.target.is_empty() || self.target != normalize(&self.target) {
            return Some(format!("target '{}' is not normalized", self.target));
        }

        let mut seen = HashSet::new();
        for (index, word) in self.words.iter().enumerate() {
            if !is_single_word(word) || *word != normalize(word) {
                return Some(format!("word {index} ('{word}') is not a normalized single word"));
            }
            if *word == self.target {
                return Some(format!("word {index} repeats the target"));
            }
            if !seen.insert(word.as_str()) {
                return Some(format!("word {index} ('{word}') is duplicated"));
            }
        }

        None
    }

    /// Builds a record verbatim, skipping normalization.
    #[cfg(test)]
    pub(crate) fn from_raw_parts(target: &str, words: Vec<String>, generated_at: i64) -> Self {
        Self {
            target: target.to_string(),
            words,
            generated_at,
        }
    }

    /// Normalized target this list ranks against.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Unix timestamp when the list was generated.
    pub fn generated_at(&self) -> i64 {
        self.generated_at
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Zero-based index of an already-normalized word.
    pub fn position(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    /// Display rank of an already-normalized word (`index + 2`).
    pub fn rank_of(&self, word: &str) -> Option<u64> {
        self.position(word).map(|i| i as u64 + FIRST_LIST_RANK)
    }

    /// Index of the least close word, if any.
    pub fn last_index(&self) -> Option<usize> {
        self.words.len().checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rkyv::rancor::Error;
    use rkyv::{from_bytes, to_bytes};

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_new_enforces_invariants() {
        let list = RankedWordList::new(
            " Ocean ",
            words(&["Sea", "ocean", "", "wave", "sea", " Tide "]),
            1702500000,
        );

        assert_eq!(list.target(), "ocean");
        assert_eq!(list.words(), ["sea", "wave", "tide"]);
        assert_eq!(list.generated_at(), 1702500000);
    }

    #[test]
    fn test_new_drops_multi_word_entries() {
        let list = RankedWordList::new(
            "ocean",
            words(&["sea", "deep sea", "wave\ttide", "reef"]),
            0,
        );

        assert_eq!(list.words(), ["sea", "reef"]);
        assert!(list.invariant_violation().is_none());
    }

    #[test]
    fn test_invariant_violations_detected() {
        let cases = [
            RankedWordList::from_raw_parts("Ocean", words(&["sea"]), 0),
            RankedWordList::from_raw_parts("ocean", words(&["sea", "deep sea"]), 0),
            RankedWordList::from_raw_parts("ocean", words(&["sea", "ocean"]), 0),
            RankedWordList::from_raw_parts("ocean", words(&["sea", "wave", "sea"]), 0),
            RankedWordList::from_raw_parts("ocean", words(&["Sea"]), 0),
            RankedWordList::from_raw_parts("ocean", words(&[""]), 0),
        ];

        for list in cases {
            assert!(
                list.invariant_violation().is_some(),
                "expected violation for {:?}",
                list
            );
        }
    }

    #[test]
    fn test_position_and_rank() {
        let list = RankedWordList::new("ocean", words(&["sea", "wave", "tide"]), 0);

        assert_eq!(list.position("sea"), Some(0));
        assert_eq!(list.position("tide"), Some(2));
        assert_eq!(list.position("lake"), None);
        assert_eq!(list.rank_of("sea"), Some(2));
        assert_eq!(list.rank_of("tide"), Some(4));
        assert_eq!(list.rank_of("ocean"), None);
    }

    #[test]
    fn test_last_index() {
        let list = RankedWordList::new("ocean", words(&["sea", "wave"]), 0);
        assert_eq!(list.last_index(), Some(1));

        let empty = RankedWordList::new("ocean", Vec::new(), 0);
        assert!(empty.is_empty());
        assert_eq!(empty.last_index(), None);
    }

    #[test]
    fn test_rkyv_roundtrip() {
        let list = RankedWordList::new("ocean", words(&["sea", "wave", "tide"]), 42);

        let bytes = to_bytes::<Error>(&list).expect("serialize");
        let restored = from_bytes::<RankedWordList, Error>(&bytes).expect("deserialize");

        assert_eq!(restored, list);
    }
}
