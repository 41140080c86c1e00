use thiserror::Error;

use crate::config::ConfigError;

/// Errors returned by a [`super::SimilarityProvider`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider settings are missing or unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP client construction or transport failure.
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Provider answered successfully but without usable content.
    #[error("provider returned an empty response")]
    EmptyResponse,

    /// Embedding request failed for a specific model.
    #[error("embedding with model '{model}' failed: {reason}")]
    Embedding { model: String, reason: String },

    /// Text generation failed.
    #[error("generation failed: {reason}")]
    Generation { reason: String },
}

/// Convenience result type for provider calls.
pub type ProviderResult<T> = Result<T, ProviderError>;
