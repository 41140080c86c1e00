//! Gemini REST client (`generateContent` / `embedContent`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{ProviderError, ProviderResult};
use super::{SimilarityProvider, hint_prompt, word_list_prompt};
use crate::config::Config;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: String,
    content: Content<'a>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: Option<EmbeddingValues>,
}

#[derive(Deserialize)]
struct EmbeddingValues {
    #[serde(default)]
    values: Vec<f32>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// [`SimilarityProvider`] backed by the Gemini REST API.
pub struct GeminiProvider {
    http: HttpClient,
    api_key: String,
    api_base: String,
    generation_model: String,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_base", &self.api_base)
            .field("generation_model", &self.generation_model)
            .finish()
    }
}

impl GeminiProvider {
    /// Creates a client with an explicit credential and endpoint.
    pub fn new(
        api_key: String,
        api_base: String,
        generation_model: String,
    ) -> ProviderResult<Self> {
        let http = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            generation_model,
        })
    }

    /// Creates a client from [`Config`]; fails if the credential is missing.
    pub fn from_config(config: &Config) -> ProviderResult<Self> {
        let api_key = config.require_api_key()?.to_string();
        Self::new(
            api_key,
            config.api_base.clone(),
            config.generation_model.clone(),
        )
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.api_base, model, method)
    }

    async fn post_json<B: Serialize + ?Sized, R: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        body: &B,
    ) -> ProviderResult<R> {
        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<R>().await?)
    }

    async fn generate(&self, prompt: &str) -> ProviderResult<String> {
        let url = self.model_url(&self.generation_model, "generateContent");
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!(model = %self.generation_model, "Calling generation model");
        let response: GenerateResponse = self.post_json(&url, &request).await?;
        response.into_text().ok_or(ProviderError::EmptyResponse)
    }
}

#[async_trait]
impl SimilarityProvider for GeminiProvider {
    async fn embed(&self, model: &str, text: &str) -> ProviderResult<Vec<f32>> {
        let url = self.model_url(model, "embedContent");
        let request = EmbedRequest {
            model: format!("models/{}", model),
            content: Content {
                parts: vec![Part { text }],
            },
        };

        let response: EmbedResponse =
            self.post_json(&url, &request)
                .await
                .map_err(|e| ProviderError::Embedding {
                    model: model.to_string(),
                    reason: e.to_string(),
                })?;

        match response.embedding {
            Some(embedding) if !embedding.values.is_empty() => Ok(embedding.values),
            _ => Err(ProviderError::Embedding {
                model: model.to_string(),
                reason: "response carried no embedding values".to_string(),
            }),
        }
    }

    async fn generate_word_list(&self, target: &str, count: usize) -> ProviderResult<String> {
        self.generate(&word_list_prompt(target, count)).await
    }

    async fn generate_hint(
        &self,
        target: &str,
        current_best_guess: Option<&str>,
    ) -> ProviderResult<String> {
        self.generate(&hint_prompt(target, current_best_guess))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_from_config_requires_api_key() {
        let config = Config::default();

        let result = GeminiProvider::from_config(&config);
        assert!(matches!(
            result,
            Err(ProviderError::Config(ConfigError::MissingEnvVar { .. }))
        ));
    }

    #[test]
    fn test_from_config_builds_client() {
        let config = Config {
            api_key: Some("key".to_string()),
            api_base: "https://example.test/v1beta/".to_string(),
            ..Config::default()
        };

        let provider = GeminiProvider::from_config(&config).expect("client should build");
        assert_eq!(provider.api_base, "https://example.test/v1beta");
        assert_eq!(provider.generation_model, config.generation_model);
    }

    #[test]
    fn test_model_url_trims_trailing_slash() {
        let provider = GeminiProvider::new(
            "key".to_string(),
            "https://example.test/v1beta/".to_string(),
            "gemini-1.5-flash".to_string(),
        )
        .expect("client");

        assert_eq!(
            provider.model_url("text-embedding-004", "embedContent"),
            "https://example.test/v1beta/models/text-embedding-004:embedContent"
        );
    }

    #[test]
    fn test_debug_omits_api_key() {
        let provider = GeminiProvider::new(
            "very-secret".to_string(),
            "https://example.test".to_string(),
            "gemini-1.5-flash".to_string(),
        )
        .expect("client");

        assert!(!format!("{:?}", provider).contains("very-secret"));
    }

    #[test]
    fn test_generate_response_text_extraction() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"sea, "},{"text":"wave"}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(raw).expect("parse");

        assert_eq!(response.into_text().as_deref(), Some("sea, wave"));
    }

    #[test]
    fn test_generate_response_without_candidates() {
        let response: GenerateResponse = serde_json::from_str("{}").expect("parse");

        assert!(response.into_text().is_none());
    }

    #[test]
    fn test_embed_response_parse() {
        let raw = r#"{"embedding":{"values":[0.1,0.2,0.3]}}"#;
        let response: EmbedResponse = serde_json::from_str(raw).expect("parse");

        assert_eq!(response.embedding.map(|e| e.values.len()), Some(3));
    }
}
