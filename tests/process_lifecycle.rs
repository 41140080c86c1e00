//! One runtime per command run, the way the binary executes.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::fixtures::{DEFAULT_TARGET, disk_game};
use funtexto::{DiskListStore, MockProvider, RankSource};
use tempfile::TempDir;
use tokio::runtime::{Builder, Runtime};

fn runtime() -> Runtime {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime should build")
}

#[test]
fn test_generation_started_by_one_run_serves_the_next() {
    let dir = TempDir::new().expect("temp dir");

    let first_provider = Arc::new(MockProvider::new());
    first_provider.set_word_list(DEFAULT_TARGET, "sea, lake, wave");
    first_provider.set_generation_delay(Duration::from_millis(50));

    let first = runtime().block_on(async {
        let game = disk_game(dir.path(), first_provider.clone());
        let result = game.guess(DEFAULT_TARGET, "lake").await.expect("guess");
        game.shutdown().await;
        result
    });

    assert_eq!(first.source, RankSource::Embedding);
    assert!(!first.cached);
    assert_eq!(first_provider.generation_calls(), 1);

    let store = DiskListStore::new(dir.path().join("word_lists"));
    assert_eq!(store.count().expect("count"), 1);

    let second_provider = Arc::new(MockProvider::new());
    let second = runtime().block_on(async {
        let game = disk_game(dir.path(), second_provider.clone());
        let result = game.guess(DEFAULT_TARGET, "lake").await.expect("guess");
        game.shutdown().await;
        result
    });

    assert_eq!(second.source, RankSource::List);
    assert_eq!(second.rank, 3);
    assert!(second.cached);
    assert_eq!(second_provider.generation_calls(), 0);
}

#[test]
fn test_shutdown_without_pending_generation_returns() {
    let dir = TempDir::new().expect("temp dir");
    let provider = Arc::new(MockProvider::new());

    runtime().block_on(async {
        let game = disk_game(dir.path(), provider.clone());
        game.shutdown().await;
        assert_eq!(game.cache().pending_tasks(), 0);
    });

    assert_eq!(provider.generation_calls(), 0);
}
