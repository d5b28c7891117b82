//! Method selection and fallback between the generator and the extractive
//! summarizer.
//!
//! | requested | generator | result |
//! |-----------|-----------|--------|
//! | `tfidf`   | any       | extractive |
//! | `auto`    | none      | extractive |
//! | `gemini`  | none      | extractive, fallback |
//! | `auto`/`gemini` | some | generator; extractive fallback on failure |

use crate::api::metrics;
use crate::api::models::SummaryMethod;
use crate::generator::{build_prompt, GeneratorError, TextGenerator};
use precis_core::{summarize, validate_num_sentences, SummarizeError};

/// A finished summary and how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub summary: String,
    /// `Gemini` or `Tfidf`, never `Auto`.
    pub method: SummaryMethod,
    pub fallback: bool,
}

fn extractive(text: &str, num_sentences: usize, fallback: bool) -> Result<Outcome, SummarizeError> {
    Ok(Outcome {
        summary: summarize(text, num_sentences)?,
        method: SummaryMethod::Tfidf,
        fallback,
    })
}

/// Produces a summary with the requested method, falling back to the
/// extractive summarizer whenever the generator is missing or fails.
///
/// Only an invalid `num_sentences` is an error, whatever the method.
pub async fn run(
    generator: Option<&dyn TextGenerator>,
    text: &str,
    num_sentences: usize,
    method: SummaryMethod,
) -> Result<Outcome, SummarizeError> {
    validate_num_sentences(num_sentences)?;

    let generator = match (method, generator) {
        (SummaryMethod::Tfidf, _) | (SummaryMethod::Auto, None) => {
            return extractive(text, num_sentences, false);
        }
        (SummaryMethod::Gemini, None) => {
            tracing::warn!("Gemini requested but no API key is configured, using extractive summary");
            metrics::record_fallback("unconfigured");
            return extractive(text, num_sentences, true);
        }
        (_, Some(generator)) => generator,
    };

    let prompt = build_prompt(text, num_sentences);
    let result = match generator.generate(&prompt).await {
        Ok(summary) if summary.trim().is_empty() => Err(GeneratorError::Empty),
        other => other,
    };

    match result {
        Ok(summary) => Ok(Outcome {
            summary,
            method: SummaryMethod::Gemini,
            fallback: false,
        }),
        Err(e) => {
            tracing::warn!(
                generator = generator.name(),
                error = %e,
                "Generator failed, falling back to extractive summary"
            );
            metrics::record_fallback(e.kind());
            extractive(text, num_sentences, true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    const TEXT: &str = "Solar panels convert light. Wind turbines spin. \
                        Solar solar solar output peaks at noon. Batteries store energy.";

    struct Fixed(&'static str);

    #[async_trait]
    impl TextGenerator for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl TextGenerator for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
            Err(GeneratorError::Status {
                status: 503,
                body: "unavailable".into(),
            })
        }
    }

    #[tokio::test]
    async fn test_tfidf_ignores_generator() {
        let gen = Fixed("generated");
        let out = run(Some(&gen), TEXT, 1, SummaryMethod::Tfidf).await.unwrap();
        assert_eq!(out.method, SummaryMethod::Tfidf);
        assert!(!out.fallback);
        assert_eq!(out.summary, "Solar solar solar output peaks at noon.");
    }

    #[tokio::test]
    async fn test_auto_without_generator_is_not_a_fallback() {
        let out = run(None, TEXT, 1, SummaryMethod::Auto).await.unwrap();
        assert_eq!(out.method, SummaryMethod::Tfidf);
        assert!(!out.fallback);
    }

    #[tokio::test]
    async fn test_gemini_without_generator_falls_back() {
        let out = run(None, TEXT, 1, SummaryMethod::Gemini).await.unwrap();
        assert_eq!(out.method, SummaryMethod::Tfidf);
        assert!(out.fallback);
    }

    #[tokio::test]
    async fn test_generator_success() {
        let gen = Fixed("Solar dominates.");
        for method in [SummaryMethod::Auto, SummaryMethod::Gemini] {
            let out = run(Some(&gen), TEXT, 2, method).await.unwrap();
            assert_eq!(out.summary, "Solar dominates.");
            assert_eq!(out.method, SummaryMethod::Gemini);
            assert!(!out.fallback);
        }
    }

    #[tokio::test]
    async fn test_generator_failure_falls_back() {
        let out = run(Some(&Failing), TEXT, 1, SummaryMethod::Auto).await.unwrap();
        assert_eq!(out.method, SummaryMethod::Tfidf);
        assert!(out.fallback);
        assert_eq!(out.summary, "Solar solar solar output peaks at noon.");
    }

    #[tokio::test]
    async fn test_blank_generator_output_falls_back() {
        let gen = Fixed("   ");
        let out = run(Some(&gen), TEXT, 1, SummaryMethod::Gemini).await.unwrap();
        assert_eq!(out.method, SummaryMethod::Tfidf);
        assert!(out.fallback);
    }

    #[tokio::test]
    async fn test_zero_sentences_rejected_for_every_method() {
        let gen = Fixed("unused");
        for method in [SummaryMethod::Auto, SummaryMethod::Gemini, SummaryMethod::Tfidf] {
            let err = run(Some(&gen), TEXT, 0, method).await.unwrap_err();
            assert!(matches!(err, SummarizeError::InvalidArgument(_)));
        }
    }
}
