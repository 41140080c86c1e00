use std::sync::Arc;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::hint::HintSource;
use crate::config::ConfigError;
use crate::provider::{MockProvider, ProviderError};
use crate::rank::RankSource;
use crate::storage::MemoryListStore;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date")
}

fn create_game(catalog: Option<TargetCatalog>) -> (Game, Arc<MockProvider>, MemoryListStore) {
    let provider = Arc::new(MockProvider::new());
    let store = MemoryListStore::new();
    let game = Game::new(
        Arc::new(store.clone()),
        provider.clone(),
        catalog,
        &Config::default(),
    )
    .with_hint_rng(StdRng::seed_from_u64(1));
    (game, provider, store)
}

fn ocean_list() -> RankedWordList {
    RankedWordList::new(
        "ocean",
        vec!["sea".into(), "wave".into(), "tide".into()],
        0,
    )
}

#[tokio::test]
async fn test_guess_uses_list() {
    let (game, provider, store) = create_game(None);
    store.insert(ocean_list());

    let result = game.guess("Ocean", " Wave ").await.expect("guess");

    assert_eq!(result.word, "wave");
    assert_eq!(result.rank, 3);
    assert_eq!(result.source, RankSource::List);
    assert_eq!(provider.embed_calls(), 0);
}

#[tokio::test]
async fn test_guess_empty_word_is_rank_error() {
    let (game, _provider, _store) = create_game(None);

    assert!(matches!(
        game.guess("ocean", "  ").await,
        Err(GameError::Rank(_))
    ));
}

#[tokio::test]
async fn test_nearby_pending_then_ready() {
    let (game, provider, _store) = create_game(None);
    provider.set_word_list("ocean", "sea, wave, tide");

    assert!(game.nearby("ocean").await.is_empty());

    game.warm("ocean").await.ok();
    let nearby = game.nearby("ocean").await;

    assert_eq!(nearby.len(), 4);
    assert_eq!(nearby[0].word, "ocean");
    assert_eq!(nearby[0].rank, 1);
    assert_eq!(nearby[3].word, "tide");
    assert_eq!(nearby[3].rank, 4);
}

#[tokio::test]
async fn test_warm_generates_once() {
    let (game, provider, store) = create_game(None);
    provider.set_word_list("ocean", "sea, wave");

    let first = game.warm("ocean").await.expect("warm");
    let second = game.warm("ocean").await.expect("warm");

    assert_eq!(first.words(), second.words());
    assert_eq!(provider.generation_calls(), 1);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_hint_from_list() {
    let (game, _provider, store) = create_game(None);
    store.insert(ocean_list());

    let hint = game
        .hint("ocean", Some("tide"), Difficulty::Medium)
        .await
        .expect("hint");

    assert_eq!(hint.hint, "wave");
    assert_eq!(hint.source, HintSource::List { index: 1 });
}

#[tokio::test]
async fn test_shutdown_persists_started_generation() {
    let (game, provider, store) = create_game(None);
    provider.set_word_list("ocean", "sea, wave");
    provider.set_generation_delay(std::time::Duration::from_millis(30));

    game.guess("ocean", "lake").await.expect("guess");
    assert!(store.is_empty());

    game.shutdown().await;

    assert_eq!(store.get("ocean").expect("persisted").words(), ["sea", "wave"]);
    assert!(!game.cache().is_generating("ocean"));
}

#[test]
fn test_reveal_requires_catalog() {
    let (game, _provider, _store) = create_game(None);

    assert!(matches!(
        game.reveal(Some(1), today()),
        Err(GameError::NoCatalog { .. })
    ));
}

#[test]
fn test_reveal_and_target_for() {
    let catalog = TargetCatalog::new(vec!["ocean".into(), "forest".into()]).expect("catalog");
    let (game, _provider, _store) = create_game(Some(catalog));

    assert_eq!(game.reveal(Some(0), today()).expect("reveal"), "ocean");
    assert_eq!(game.reveal(None, today()).expect("reveal"), "forest");
    assert_eq!(
        game.target_for(Some("Lagoon"), Some(0), today())
            .expect("target"),
        "lagoon"
    );
    assert_eq!(
        game.target_for(None, Some(3), today()).expect("target"),
        "forest"
    );
}

#[test]
fn test_secret_override_needs_no_catalog() {
    let (game, _provider, _store) = create_game(None);

    assert_eq!(
        game.target_for(Some("reef"), None, today()).expect("target"),
        "reef"
    );
}

#[test]
fn test_from_config_requires_api_key() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let config = Config {
        storage_path: dir.path().join("lists"),
        targets_path: dir.path().join("targets.json"),
        ..Config::default()
    };

    assert!(matches!(
        Game::from_config(&config),
        Err(GameError::Provider(ProviderError::Config(
            ConfigError::MissingEnvVar { .. }
        )))
    ));
}

#[test]
fn test_from_config_builds_disk_game() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let targets_path = dir.path().join("targets.json");
    std::fs::write(&targets_path, r#"["ocean","forest"]"#).expect("write");

    let config = Config {
        api_key: Some("test-key".into()),
        storage_path: dir.path().join("lists"),
        targets_path,
        ..Config::default()
    };

    let game = Game::from_config(&config).expect("game");

    assert!(dir.path().join("lists").is_dir());
    assert_eq!(game.catalog().expect("catalog").len(), 2);
}
