//! Error type for the summarization core.

use thiserror::Error;

/// Errors returned by [`crate::summarize`].
///
/// Segmentation and scoring are total, so argument validation is the only
/// failure mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    /// A caller-supplied argument is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
