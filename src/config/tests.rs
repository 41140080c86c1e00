use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_funtexto_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("FUNTEXTO_API_KEY");
        env::remove_var("FUNTEXTO_API_BASE");
        env::remove_var("FUNTEXTO_STORAGE_PATH");
        env::remove_var("FUNTEXTO_TARGETS_PATH");
        env::remove_var("FUNTEXTO_GENERATION_MODEL");
        env::remove_var("FUNTEXTO_EMBEDDING_MODEL");
        env::remove_var("FUNTEXTO_LIST_SIZE");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.api_key.is_none());
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.storage_path, PathBuf::from("./cache/word_lists"));
    assert_eq!(config.targets_path, PathBuf::from("./targets.json"));
    assert_eq!(config.generation_model, "gemini-1.5-flash");
    assert!(config.embedding_model.is_none());
    assert_eq!(config.list_size, 500);
}

#[test]
fn test_debug_redacts_api_key() {
    let config = Config {
        api_key: Some("super-secret".to_string()),
        ..Default::default()
    };

    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_funtexto_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert!(config.api_key.is_none());
    assert_eq!(config.list_size, 500);
    assert_eq!(config.generation_model, "gemini-1.5-flash");
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_funtexto_env();

    let config = with_env_vars(
        &[
            ("FUNTEXTO_API_KEY", "key-123"),
            ("FUNTEXTO_STORAGE_PATH", "/tmp/funtexto-lists"),
            ("FUNTEXTO_GENERATION_MODEL", "gemini-2.0-flash"),
            ("FUNTEXTO_EMBEDDING_MODEL", "gemini-embedding-001"),
            ("FUNTEXTO_LIST_SIZE", "300"),
        ],
        Config::from_env,
    )
    .expect("should parse overrides");

    assert_eq!(config.api_key.as_deref(), Some("key-123"));
    assert_eq!(config.storage_path, PathBuf::from("/tmp/funtexto-lists"));
    assert_eq!(config.generation_model, "gemini-2.0-flash");
    assert_eq!(
        config.embedding_model.as_deref(),
        Some("gemini-embedding-001")
    );
    assert_eq!(config.list_size, 300);
}

#[test]
#[serial]
fn test_blank_embedding_model_is_none() {
    clear_funtexto_env();

    let config = with_env_vars(&[("FUNTEXTO_EMBEDDING_MODEL", "   ")], Config::from_env)
        .expect("should parse");

    assert!(config.embedding_model.is_none());
}

#[test]
#[serial]
fn test_invalid_list_size() {
    clear_funtexto_env();

    let result = with_env_vars(&[("FUNTEXTO_LIST_SIZE", "lots")], Config::from_env);

    assert!(matches!(
        result,
        Err(ConfigError::ListSizeParseError { .. })
    ));
}

#[test]
fn test_require_api_key_missing() {
    let config = Config::default();

    let err = config.require_api_key().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingEnvVar {
            name: "FUNTEXTO_API_KEY"
        }
    ));
    assert!(err.to_string().contains("FUNTEXTO_API_KEY"));
}

#[test]
fn test_require_api_key_present() {
    let config = Config {
        api_key: Some("abc".to_string()),
        ..Default::default()
    };

    assert_eq!(config.require_api_key().unwrap(), "abc");
}

#[test]
fn test_validate_list_size_range() {
    let too_small = Config {
        list_size: 50,
        ..Default::default()
    };
    assert!(matches!(
        too_small.validate(),
        Err(ConfigError::ListSizeOutOfRange { value: 50 })
    ));

    let too_large = Config {
        list_size: 5_000,
        ..Default::default()
    };
    assert!(too_large.validate().is_err());

    let ok = Config {
        list_size: 200,
        ..Default::default()
    };
    assert!(ok.validate().is_ok());
}

#[test]
fn test_validate_storage_path_is_file() {
    let file = tempfile::NamedTempFile::new().expect("temp file");

    let config = Config {
        storage_path: file.path().to_path_buf(),
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotADirectory { .. })
    ));
}

#[test]
fn test_validate_targets_path_is_dir() {
    let dir = tempfile::TempDir::new().expect("temp dir");

    let config = Config {
        targets_path: dir.path().to_path_buf(),
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotAFile { .. })
    ));
}

#[test]
#[serial]
fn test_blank_string_overrides_fall_back_to_defaults() {
    clear_funtexto_env();

    let config = with_env_vars(
        &[
            ("FUNTEXTO_API_BASE", ""),
            ("FUNTEXTO_GENERATION_MODEL", "   "),
        ],
        Config::from_env,
    )
    .expect("should parse");

    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.generation_model, "gemini-1.5-flash");
}

#[test]
#[serial]
fn test_string_overrides_are_trimmed() {
    clear_funtexto_env();

    let config = with_env_vars(
        &[("FUNTEXTO_GENERATION_MODEL", " gemini-2.0-flash ")],
        Config::from_env,
    )
    .expect("should parse");

    assert_eq!(config.generation_model, "gemini-2.0-flash");
}

#[test]
fn test_validate_rejects_empty_model_and_base() {
    let no_model = Config {
        generation_model: String::new(),
        ..Default::default()
    };
    assert!(matches!(
        no_model.validate(),
        Err(ConfigError::EmptyValue {
            name: "FUNTEXTO_GENERATION_MODEL"
        })
    ));

    let no_base = Config {
        api_base: " ".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        no_base.validate(),
        Err(ConfigError::EmptyValue {
            name: "FUNTEXTO_API_BASE"
        })
    ));
}
