//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::metrics;
use crate::api::models::*;
use crate::dispatch;
use crate::generator::TextGenerator;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use precis_core::config;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state passed to every handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Abstractive summarizer; `None` when no API key is configured.
    pub generator: Option<Arc<dyn TextGenerator>>,
    /// Method used when a request does not name one.
    pub default_method: SummaryMethod,
    pub prometheus_handle: PrometheusHandle,
    pub start_time: Instant,
}

/// Resolves the requested sentence count. Counts below 1 are passed through
/// as 0 so the summarizer rejects them.
fn resolve_num_sentences(requested: Option<i64>) -> Result<usize, ApiError> {
    let Some(n) = requested else {
        return Ok(config::DEFAULT_NUM_SENTENCES);
    };
    if n > config::MAX_NUM_SENTENCES as i64 {
        return Err(ApiError::BadRequest(format!(
            "num_sentences must be 1-{}",
            config::MAX_NUM_SENTENCES
        )));
    }
    Ok(usize::try_from(n).unwrap_or(0))
}

fn validate_text(text: &str) -> Result<(), ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::BadRequest("Text is required".into()));
    }
    if text.len() > config::MAX_TEXT_LEN {
        return Err(ApiError::PayloadTooLarge(format!(
            "Text exceeds maximum length of {} bytes",
            config::MAX_TEXT_LEN
        )));
    }
    Ok(())
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.start_time.elapsed().as_secs(),
            gemini_available: state.generator.is_some(),
            default_method: state.default_method,
        }),
    )
}

/// `POST /summarize`
pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let Json(req) = payload?;
    validate_text(&req.text)?;
    let num_sentences = resolve_num_sentences(req.num_sentences)?;
    let method = req.method.unwrap_or(state.default_method);

    let outcome = dispatch::run(
        state.generator.as_deref(),
        &req.text,
        num_sentences,
        method,
    )
    .await?;

    let original_length = req.text.chars().count();
    metrics::record_summary(outcome.method.as_str(), outcome.fallback, original_length);
    tracing::info!(
        requested = method.as_str(),
        method = outcome.method.as_str(),
        fallback = outcome.fallback,
        num_sentences,
        original_length,
        "Summary served"
    );

    Ok(Json(SummarizeResponse {
        summary_length: outcome.summary.chars().count(),
        summary: outcome.summary,
        method: outcome.method,
        fallback: outcome.fallback,
        original_length,
        num_sentences,
    }))
}

/// `GET /metrics`
pub async fn metrics_endpoint(State(state): State<AppState>) -> String {
    state.prometheus_handle.render()
}
