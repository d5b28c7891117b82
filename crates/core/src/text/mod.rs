//! Text preprocessing: sentence segmentation and term tokenization.
//!
//! Both are total functions over any `&str`; they never fail and never
//! allocate per token beyond the owned lowercased buffer.

/// Punctuation-based sentence segmenter with abbreviation exceptions.
pub mod segmenter;
/// Lowercasing term tokenizer with English stop word filtering.
pub mod tokenizer;

pub use segmenter::{split_sentences, Sentence};
pub use tokenizer::{tokenize, Tokens};
