//! Display formatting for the "nearby words" list.

use serde::Serialize;

use crate::constants::{EXACT_MATCH_RANK, FIRST_LIST_RANK};
use crate::storage::RankedWordList;

/// One row of the nearby list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NearbyEntry {
    pub word: String,
    pub rank: u64,
}

/// Emits `(target, 1)` followed by every list word at `index + 2`.
pub fn format_nearby(target: &str, list: &RankedWordList) -> Vec<NearbyEntry> {
    std::iter::once(NearbyEntry {
        word: target.to_string(),
        rank: EXACT_MATCH_RANK,
    })
    .chain(list.words().iter().enumerate().map(|(i, word)| NearbyEntry {
        word: word.clone(),
        rank: i as u64 + FIRST_LIST_RANK,
    }))
    .collect()
}
