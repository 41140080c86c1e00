//! Ranked word-list cache (memory → disk) with single-flight generation.

pub mod error;
pub mod inflight;
pub mod types;
pub mod word_list;


pub use error::{CacheError, CacheResult};
pub use inflight::{InflightGuard, InflightRegistry};
pub use types::{ListLookup, ListSource};
pub use word_list::{WordListCache, WordListCacheConfig};
