//! precis-server: HTTP summarization service.
//!
//! Serves extractive summaries from `precis-core` and, when an API key is
//! configured, abstractive summaries from Gemini with automatic fallback.

/// REST API layer: Axum router, HTTP handlers, models, errors, metrics.
pub mod api;
/// Method selection and generator fallback.
pub mod dispatch;
/// Generative-AI collaborators: the `TextGenerator` trait and the Gemini client.
pub mod generator;
