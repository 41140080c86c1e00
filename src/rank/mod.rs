//! Guess ranking.
//!
//! - [`RankResolver`] blends list ranks with the embedding fallback.
//! - [`EmbeddingService`] memoizes vectors and retries a failed primary model once.
//! - [`similarity`] holds the cosine and rank-curve math.

pub mod embedding;
pub mod error;
pub mod resolver;
pub mod similarity;
pub mod types;


pub use embedding::EmbeddingService;
pub use error::{RankError, RankResult};
pub use resolver::RankResolver;
pub use similarity::{cosine_similarity, fallback_rank, list_similarity, similarity_to_base_rank};
pub use types::{GuessResult, RankSource};
