//! Request and response data transfer objects for the REST API.
//!
//! All types derive `Serialize` and/or `Deserialize` for JSON marshalling via Axum.

use serde::{Deserialize, Serialize};

/// Summarization strategy requested by a client, or reported back as the one
/// that produced the summary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMethod {
    /// Abstractive summary from the Gemini API.
    Gemini,
    /// Local extractive summary (term-frequency sentence scoring).
    Tfidf,
    /// Gemini when configured, extractive otherwise or on failure.
    #[default]
    Auto,
}

impl SummaryMethod {
    /// Lowercase wire name, also used as a metric label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryMethod::Gemini => "gemini",
            SummaryMethod::Tfidf => "tfidf",
            SummaryMethod::Auto => "auto",
        }
    }
}

/// Request body for `POST /summarize`.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    /// Signed so negative counts reach validation instead of failing to parse.
    #[serde(default, alias = "numSentences")]
    pub num_sentences: Option<i64>,
    /// Falls back to the server's default method when absent.
    #[serde(default)]
    pub method: Option<SummaryMethod>,
}

/// Response body for `POST /summarize`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    /// Method that actually produced `summary`; never `auto`.
    pub method: SummaryMethod,
    /// `true` when Gemini was wanted but the extractive summarizer answered.
    pub fallback: bool,
    /// Input length in characters.
    pub original_length: usize,
    /// Summary length in characters.
    pub summary_length: usize,
    pub num_sentences: usize,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub gemini_available: bool,
    pub default_method: SummaryMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: SummarizeRequest = serde_json::from_str(r#"{"text":"Hi."}"#).unwrap();
        assert_eq!(req.text, "Hi.");
        assert!(req.num_sentences.is_none());
        assert!(req.method.is_none());
    }

    #[test]
    fn test_request_camel_case_alias() {
        let req: SummarizeRequest =
            serde_json::from_str(r#"{"text":"Hi.","numSentences":2,"method":"tfidf"}"#).unwrap();
        assert_eq!(req.num_sentences, Some(2));
        assert_eq!(req.method, Some(SummaryMethod::Tfidf));
    }

    #[test]
    fn test_unknown_method_rejected() {
        let res = serde_json::from_str::<SummarizeRequest>(r#"{"text":"Hi.","method":"gpt"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_method_wire_names() {
        for method in [SummaryMethod::Gemini, SummaryMethod::Tfidf, SummaryMethod::Auto] {
            let json = serde_json::to_value(method).unwrap();
            assert_eq!(json, method.as_str());
        }
    }
}
