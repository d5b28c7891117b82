//! Term tokenizer with stop word removal.
//!
//! Tokenizes text by lowercasing, splitting on non-alphanumeric characters,
//! and removing common English stop words. Single-character tokens are also
//! discarded. Tokens are byte spans into one owned lowercased buffer.

use std::collections::HashSet;
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as",
        "at", "be", "been", "before", "being", "below", "between", "both", "but", "by", "can",
        "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
        "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
        "how", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most",
        "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our",
        "ours", "out", "over", "own", "same", "she", "should", "so", "some", "such", "than",
        "that", "the", "their", "them", "then", "there", "these", "they", "this", "those",
        "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what",
        "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you",
        "your", "yours",
    ]
    .into_iter()
    .collect()
});

/// Returns `true` if `word` (already lowercased) is an English stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Tokenized text: owns the lowercased buffer, provides &str slices via byte spans.
pub struct Tokens {
    buffer: String,
    spans: Vec<(usize, usize)>, // (start, end) byte offsets into buffer
}

impl Tokens {
    /// Returns an iterator over the token `&str` slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans
            .iter()
            .map(|&(s, e)| &self.buffer[s..e])
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

fn keep(token: &str) -> bool {
    token.chars().nth(1).is_some() && !is_stop_word(token)
}

/// Tokenize text: lowercase, split on non-alphanumeric, remove stop words.
pub fn tokenize(text: &str) -> Tokens {
    let buffer = text.to_lowercase();
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in buffer.char_indices() {
        if c.is_alphanumeric() {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start {
            if keep(&buffer[s..i]) {
                spans.push((s, i));
            }
            start = None;
        }
    }
    if let Some(s) = start {
        if keep(&buffer[s..]) {
            spans.push((s, buffer.len()));
        }
    }

    Tokens { buffer, spans }
}
