use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("guess is empty")]
    EmptyGuess,

    #[error("target is empty")]
    EmptyTarget,

    /// Every embedding model attempt failed; the guess stays unranked.
    #[error("embedding unavailable (tried {tried}): {reason}")]
    EmbeddingUnavailable { tried: String, reason: String },

    #[error("embedding dimensions differ: target {target}, guess {guess}")]
    DimensionMismatch { target: usize, guess: usize },
}

pub type RankResult<T> = Result<T, RankError>;
