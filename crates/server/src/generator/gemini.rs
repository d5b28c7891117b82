//! Client for the Gemini `generateContent` REST endpoint.
//!
//! `POST {base_url}/v1beta/models/{model}:generateContent`, authenticated with
//! the `x-goog-api-key` header. Only the first text part of the first
//! candidate is used.

use super::{GeneratorError, TextGenerator};
use async_trait::async_trait;
use precis_core::config;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    /// Scheme and host, without the `/v1beta` path.
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Default model, endpoint and timeout for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: config::DEFAULT_GEMINI_MODEL.to_string(),
            base_url: config::DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(config::DEFAULT_GEMINI_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|p| p.text)
    }
}

/// Gemini client holding one pooled HTTP connection set.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Builds the HTTP client. Fails only if the TLS backend cannot initialize.
    pub fn new(config: GeminiConfig) -> Result<Self, GeneratorError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// Model name requests are sent to.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let body = GenerateContentRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: config::GEMINI_TEMPERATURE,
                max_output_tokens: config::GEMINI_MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)
            .map_err(|e| GeneratorError::Decode(e.to_string()))?;

        let text = parsed.into_text().ok_or(GeneratorError::Empty)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(GeneratorError::Empty);
        }
        tracing::debug!(model = %self.config.model, chars = text.chars().count(), "Gemini summary received");
        Ok(text.to_string())
    }
}
