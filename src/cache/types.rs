use std::sync::Arc;

use crate::storage::RankedWordList;

/// Where a ranked list was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListSource {
    Memory,
    Storage,
}

impl ListSource {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ListSource::Memory => "memory",
            ListSource::Storage => "storage",
        }
    }
}

impl std::fmt::Display for ListSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of [`super::WordListCache::get_ranked_list`].
#[derive(Debug, Clone)]
pub enum ListLookup {
    Ready(Arc<RankedWordList>),
    /// No durable list yet; generation is in flight (or could not be started).
    Pending,
}

impl ListLookup {
    pub fn is_ready(&self) -> bool {
        matches!(self, ListLookup::Ready(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ListLookup::Pending)
    }

    pub fn list(&self) -> Option<&Arc<RankedWordList>> {
        match self {
            ListLookup::Ready(list) => Some(list),
            ListLookup::Pending => None,
        }
    }

    pub fn into_list(self) -> Option<Arc<RankedWordList>> {
        match self {
            ListLookup::Ready(list) => Some(list),
            ListLookup::Pending => None,
        }
    }
}
