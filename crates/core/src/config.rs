//! Global configuration constants for precis.
//!
//! Summarization defaults, input validation limits, and server defaults are
//! defined here. These are compile-time constants; runtime configuration is
//! handled via CLI arguments and environment variables in the server's `main.rs`.

/// Number of sentences kept when the caller does not ask for a specific count.
pub const DEFAULT_NUM_SENTENCES: usize = 3;

/// Maximum number of sentences a request may ask for.
pub const MAX_NUM_SENTENCES: usize = 100;

/// Maximum length of input text in bytes.
pub const MAX_TEXT_LEN: usize = 1_000_000;

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default Gemini model used for abstractive summaries.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Default base URL of the Generative Language API.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Timeout in seconds for a single Gemini call, connection included.
pub const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 30;

/// Sampling temperature sent to Gemini. Low values keep summaries literal.
pub const GEMINI_TEMPERATURE: f32 = 0.3;

/// Upper bound on tokens Gemini may generate for one summary.
pub const GEMINI_MAX_OUTPUT_TOKENS: u32 = 1024;

/// Per-request timeout in seconds.
///
/// Must exceed [`DEFAULT_GEMINI_TIMEOUT_SECS`] so a slow Gemini call can still
/// fall back to the extractive summarizer within the same request.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Global rate limit in requests per second.
pub const RATE_LIMIT_RPS: u64 = 100;

/// Maximum HTTP request body size in bytes (2 MB).
pub const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Maximum number of concurrent in-flight requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 512;

/// Default graceful shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;
