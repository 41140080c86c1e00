//! Model capabilities consumed by the game: embeddings and text generation.
//!
//! [`GeminiProvider`] talks to the Gemini REST API. [`MockProvider`] is an in-memory
//! stand-in with call counters and injectable failures.

pub mod error;
pub mod gemini;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{ProviderError, ProviderResult};
pub use gemini::GeminiProvider;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockProvider;

use async_trait::async_trait;

#[async_trait]
/// Text → vector embedding and text generation.
pub trait SimilarityProvider: Send + Sync {
    /// Embeds `text` with the named embedding `model`.
    async fn embed(&self, model: &str, text: &str) -> ProviderResult<Vec<f32>>;

    /// Asks for `count` single words near `target`, closest first, as raw text.
    async fn generate_word_list(&self, target: &str, count: usize) -> ProviderResult<String>;

    /// Asks for one word related to `target`, closer than `current_best_guess` when given.
    async fn generate_hint(
        &self,
        target: &str,
        current_best_guess: Option<&str>,
    ) -> ProviderResult<String>;
}

/// Prompt used for ranked word-list generation.
pub fn word_list_prompt(target: &str, count: usize) -> String {
    format!(
        "Generate a list of {count} single unique words \
         that are semantically related to the word \"{target}\".\n\
         Sort them by semantic closeness to \"{target}\" (closest first).\n\
         Do NOT include the word \"{target}\" itself.\n\
         Do NOT include phrases, only single words.\n\
         Output ONLY the words, separated by commas. No numbering, no extra text."
    )
}

/// Prompt used for a single generated hint.
pub fn hint_prompt(target: &str, current_best_guess: Option<&str>) -> String {
    let condition = match current_best_guess {
        Some(best) => format!(
            "My best guess so far is \"{best}\". \
             Give me a word that is semantically closer to \"{target}\" than \"{best}\"."
        ),
        None => format!("Give me a helpful word that is semantically related to \"{target}\"."),
    };

    format!(
        "The secret word is \"{target}\".\n\
         I am playing a game where I need to guess the word based on semantic similarity.\n\
         {condition}\n\
         It should NOT be a direct synonym or the word itself.\n\
         Output ONLY the single word. No punctuation, no explanation."
    )
}
