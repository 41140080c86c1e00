use serde::Serialize;

/// Which tier produced a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankSource {
    ExactMatch,
    List,
    Embedding,
}

impl RankSource {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            RankSource::ExactMatch => "exact",
            RankSource::List => "list",
            RankSource::Embedding => "embedding",
        }
    }
}

impl std::fmt::Display for RankSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ranked outcome of one guess.
///
/// `similarity` is on two scales depending on `source`: list hits carry a synthetic
/// display value derived from the list position (floor 0.4), while embedding fallbacks
/// carry the true cosine similarity. The two are not comparable with each other; only
/// `rank` is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessResult {
    /// Normalized guess.
    pub word: String,
    /// 1 for the target itself, larger is further away.
    pub rank: u64,
    pub similarity: f64,
    /// `true` when the rank came from the precomputed list.
    pub cached: bool,
    #[serde(skip)]
    pub source: RankSource,
}

impl GuessResult {
    pub fn exact(word: String) -> Self {
        Self {
            word,
            rank: crate::constants::EXACT_MATCH_RANK,
            similarity: 1.0,
            cached: false,
            source: RankSource::ExactMatch,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.source == RankSource::ExactMatch
    }
}
