//! Prometheus metrics recording.

use metrics::{counter, histogram};
use std::time::Duration;

/// Records HTTP request metrics.
pub fn record_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Records a served summary and the size of its input.
pub fn record_summary(method: &str, fallback: bool, input_chars: usize) {
    counter!(
        "precis_summaries_total",
        "method" => method.to_string(),
        "fallback" => fallback.to_string()
    )
    .increment(1);
    histogram!("precis_input_chars").record(input_chars as f64);
}

/// Records a fallback from the generator to the extractive summarizer.
pub fn record_fallback(reason: &str) {
    counter!("precis_fallbacks_total", "reason" => reason.to_string()).increment(1);
}
