//! Errors raised while reading `FUNTEXTO_*` settings.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable was not set.
    ///
    /// Raised for the provider credential; callers treat it as fatal at startup.
    #[error("missing required environment variable: {name}")]
    MissingEnvVar { name: &'static str },

    /// A setting that names an endpoint or model is blank.
    #[error("{name} must not be empty")]
    EmptyValue { name: &'static str },

    /// List size string could not be parsed as a number.
    #[error("failed to parse list size '{value}': {source}")]
    ListSizeParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// List size is outside the supported generation range.
    #[error("invalid list size {value}: must be between 200 and 500")]
    ListSizeOutOfRange { value: usize },

    /// The targets path exists but is not a regular file.
    #[error("targets path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// The word-list storage path exists but is not a directory.
    #[error("storage path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
