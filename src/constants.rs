//! Cross-cutting, shared constants.
//!
//! Rank-curve and list-size values are shared by the resolver, the hint selector and the
//! word-list cache. Derive secondary values from these rather than repeating literals.

/// Rank reserved for an exact match with the target.
pub const EXACT_MATCH_RANK: u64 = 1;

/// Rank of the first list entry (index 0). The target itself holds rank 1.
pub const FIRST_LIST_RANK: u64 = EXACT_MATCH_RANK + 1;

/// Number of candidate words requested from the generation model per target.
pub const DEFAULT_LIST_REQUEST_COUNT: usize = 500;

/// Smallest list size a caller may configure for generation requests.
pub const MIN_LIST_REQUEST_COUNT: usize = 200;

/// Largest list size a caller may configure for generation requests.
pub const MAX_LIST_REQUEST_COUNT: usize = 500;

/// List length assumed when offsetting fallback ranks and no list is available yet.
pub const DEFAULT_ABSENT_LIST_SIZE: usize = 200;

/// Max entries kept in the embedding memo.
pub const EMBEDDING_MEMO_CAPACITY: u64 = 1_000;

/// Max ranked lists kept in memory in front of durable storage.
pub const DEFAULT_HOT_LIST_CAPACITY: u64 = 256;

/// Steepness of the similarity → pseudo-rank curve.
pub const RANK_CURVE_STEEPNESS: f64 = 17.0;

/// Cosine similarity at or above which the fallback curve reports an exact match.
pub const EXACT_SIMILARITY_THRESHOLD: f64 = 0.999;

/// Display similarity of the first list entry.
pub const LIST_SIMILARITY_CEILING: f64 = 0.99;

/// Display similarity lost per list position.
pub const LIST_SIMILARITY_STEP: f64 = 0.001;

/// Display similarity never drops below this for list entries.
pub const LIST_SIMILARITY_FLOOR: f64 = 0.4;

/// Embedding model retried when the configured primary model fails.
pub const SECONDARY_EMBEDDING_MODEL: &str = "text-embedding-004";

/// Text generation model used when none is configured.
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-1.5-flash";

/// Hint returned when generative hinting fails or produces something unusable.
pub const SAFE_DEFAULT_HINT: &str = "sun";
