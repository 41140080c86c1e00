//! Test fixtures for integration tests.

use std::sync::Arc;

use funtexto::{Config, Game, MockProvider, RankedWordList};

pub const DEFAULT_TARGET: &str = "ocean";

pub const FIXED_TIMESTAMP: i64 = 1702512000;

#[derive(Default)]
pub struct WordListBuilder {
    target: Option<String>,
    words: Vec<String>,
    generated_at: Option<i64>,
}

impl WordListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(mut self, target: &str) -> Self {
        self.target = Some(target.to_string());
        self
    }

    pub fn words(mut self, words: &[&str]) -> Self {
        self.words = words.iter().map(|w| w.to_string()).collect();
        self
    }

    /// Fills the list with `w0..w{len-1}`.
    pub fn numbered(mut self, len: usize) -> Self {
        self.words = (0..len).map(|i| format!("w{i}")).collect();
        self
    }

    pub fn generated_at(mut self, ts: i64) -> Self {
        self.generated_at = Some(ts);
        self
    }

    pub fn build(self) -> RankedWordList {
        RankedWordList::new(
            self.target.as_deref().unwrap_or(DEFAULT_TARGET),
            self.words,
            self.generated_at.unwrap_or(FIXED_TIMESTAMP),
        )
    }
}

/// Comma-separated provider output for `w0..w{len-1}`.
pub fn numbered_raw_list(len: usize) -> String {
    (0..len)
        .map(|i| format!("w{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Config pointing storage at `root`.
pub fn config_in(root: &std::path::Path) -> Config {
    Config {
        storage_path: root.join("word_lists"),
        targets_path: root.join("targets.json"),
        ..Config::default()
    }
}

/// Game over a disk store in `root` and the given mock provider.
pub fn disk_game(root: &std::path::Path, provider: Arc<MockProvider>) -> Game {
    let config = config_in(root);
    let store = funtexto::DiskListStore::new(config.storage_path.clone());
    store
        .ensure_storage_path()
        .expect("storage path should be creatable");
    Game::new(Arc::new(store), provider, None, &config)
}
