//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `FUNTEXTO_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_GENERATION_MODEL, DEFAULT_LIST_REQUEST_COUNT, MAX_LIST_REQUEST_COUNT,
    MIN_LIST_REQUEST_COUNT,
};

/// Game configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `FUNTEXTO_*` overrides on top of defaults.
#[derive(Clone)]
pub struct Config {
    /// Credential for the model provider. Required before any provider call.
    pub api_key: Option<String>,

    /// Base URL of the model provider's REST API.
    pub api_base: String,

    /// Directory holding one persisted word list per target. Default: `./cache/word_lists`.
    pub storage_path: PathBuf,

    /// JSON file with the array of candidate targets. Default: `./targets.json`.
    pub targets_path: PathBuf,

    /// Model used for word-list and hint generation.
    pub generation_model: String,

    /// Primary embedding model. When unset the secondary model is used directly.
    pub embedding_model: Option<String>,

    /// Number of words requested per list generation. Default: `500`.
    pub list_size: usize,
}

/// Default provider base URL used when `FUNTEXTO_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            storage_path: PathBuf::from("./cache/word_lists"),
            targets_path: PathBuf::from("./targets.json"),
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
            embedding_model: None,
            list_size: DEFAULT_LIST_REQUEST_COUNT,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("storage_path", &self.storage_path)
            .field("targets_path", &self.targets_path)
            .field("generation_model", &self.generation_model)
            .field("embedding_model", &self.embedding_model)
            .field("list_size", &self.list_size)
            .finish()
    }
}

impl Config {
    const ENV_API_KEY: &'static str = "FUNTEXTO_API_KEY";
    const ENV_API_BASE: &'static str = "FUNTEXTO_API_BASE";
    const ENV_STORAGE_PATH: &'static str = "FUNTEXTO_STORAGE_PATH";
    const ENV_TARGETS_PATH: &'static str = "FUNTEXTO_TARGETS_PATH";
    const ENV_GENERATION_MODEL: &'static str = "FUNTEXTO_GENERATION_MODEL";
    const ENV_EMBEDDING_MODEL: &'static str = "FUNTEXTO_EMBEDDING_MODEL";
    const ENV_LIST_SIZE: &'static str = "FUNTEXTO_LIST_SIZE";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_key = Self::parse_optional_string_from_env(Self::ENV_API_KEY);
        let api_base = Self::parse_string_from_env(Self::ENV_API_BASE, defaults.api_base);
        let storage_path = Self::parse_path_from_env(Self::ENV_STORAGE_PATH, defaults.storage_path);
        let targets_path = Self::parse_path_from_env(Self::ENV_TARGETS_PATH, defaults.targets_path);
        let generation_model =
            Self::parse_string_from_env(Self::ENV_GENERATION_MODEL, defaults.generation_model);
        let embedding_model = Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_MODEL);
        let list_size = Self::parse_list_size_from_env(defaults.list_size)?;

        Ok(Self {
            api_key,
            api_base,
            storage_path,
            targets_path,
            generation_model,
            embedding_model,
            list_size,
        })
    }

    /// Validates paths and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_path.exists() && !self.storage_path.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.storage_path.clone(),
            });
        }

        if self.targets_path.exists() && !self.targets_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.targets_path.clone(),
            });
        }

        if self.api_base.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_API_BASE,
            });
        }

        if self.generation_model.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_GENERATION_MODEL,
            });
        }

        if !(MIN_LIST_REQUEST_COUNT..=MAX_LIST_REQUEST_COUNT).contains(&self.list_size) {
            return Err(ConfigError::ListSizeOutOfRange {
                value: self.list_size,
            });
        }

        Ok(())
    }

    /// Returns the provider credential or [`ConfigError::MissingEnvVar`].
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .ok_or(ConfigError::MissingEnvVar {
                name: Self::ENV_API_KEY,
            })
    }

    fn parse_list_size_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_LIST_SIZE) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::ListSizeParseError { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        Self::parse_optional_string_from_env(var_name).unwrap_or(default)
    }
}
