//! # precis-core
//!
//! Deterministic extractive summarization: sentence segmentation,
//! document-wide term-frequency scoring, and top-K sentence selection with
//! reading order restored.
//!
//! This is the core library crate with zero async dependencies. Every function
//! is pure and safe to call concurrently from any number of threads.
//!
//! ```
//! let text = "Rust is fast. Rust is safe. Rust has great tooling. Lunch was good.";
//! let summary = precis_core::summarize(text, 2).unwrap();
//! assert_eq!(summary.matches('.').count(), 2);
//! ```

/// Global configuration constants: limits, defaults, and server tuning parameters.
pub mod config;
/// Core error type.
pub mod error;
/// Extractive summarizer: term-frequency scorer and top-K selector.
pub mod summarizer;
/// Sentence segmentation and term tokenization.
pub mod text;

pub use config::DEFAULT_NUM_SENTENCES;
pub use error::SummarizeError;
pub use summarizer::{summarize, validate_num_sentences};
