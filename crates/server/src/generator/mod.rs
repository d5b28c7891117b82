//! Generative-AI collaborators.
//!
//! A [`TextGenerator`] turns a prompt into text or fails. The server holds at
//! most one generator, built in `main` from configuration and injected into
//! [`crate::api::handlers::AppState`].

/// Google Gemini `generateContent` client.
pub mod gemini;

pub use gemini::{GeminiClient, GeminiConfig};

use async_trait::async_trait;
use thiserror::Error;

/// Failure of a generator call. Never surfaced to API clients; it triggers the
/// extractive fallback instead.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Transport failure, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Generator returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("Failed to decode generator response: {0}")]
    Decode(String),

    /// The response carried no usable text.
    #[error("Generator returned no text")]
    Empty,
}

impl GeneratorError {
    /// Short label used as a metric dimension.
    pub fn kind(&self) -> &'static str {
        match self {
            GeneratorError::Http(e) if e.is_timeout() => "timeout",
            GeneratorError::Http(_) => "http",
            GeneratorError::Status { .. } => "status",
            GeneratorError::Decode(_) => "decode",
            GeneratorError::Empty => "empty",
        }
    }
}

/// Something that can write a summary from a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Stable name for logs and health output.
    fn name(&self) -> &'static str;

    /// Generates text for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

/// Builds the summarization prompt sent to a generator.
pub fn build_prompt(text: &str, num_sentences: usize) -> String {
    let unit = if num_sentences == 1 {
        "sentence"
    } else {
        "sentences"
    };
    format!(
        "Summarize the following text in {num_sentences} {unit}. \
         Reply with the summary only, as plain prose, without a preamble, \
         headings, or bullet points.\n\nText:\n{text}"
    )
}
