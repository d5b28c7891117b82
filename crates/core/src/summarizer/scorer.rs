//! Term-frequency sentence scoring.
//!
//! The whole document is the only corpus entry, so the IDF factor is constant
//! and drops out. Each term is weighted by `count / max_count` over the
//! document, and a sentence scores the sum of the weights of its token
//! occurrences.

use crate::text::{tokenize, Sentence, Tokens};
use std::collections::HashMap;

/// A sentence paired with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSentence<'a> {
    pub sentence: Sentence<'a>,
    /// Non-negative; higher means more central to the document's vocabulary.
    pub score: f64,
}

/// Document-wide term frequency model.
#[derive(Debug, Default)]
pub struct TermFrequencies {
    counts: HashMap<String, u32>,
    max_count: u32,
}

impl TermFrequencies {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every token of `tokens` into the model.
    pub fn add(&mut self, tokens: &Tokens) {
        for token in tokens.iter() {
            let count = match self.counts.get_mut(token) {
                Some(count) => {
                    *count += 1;
                    *count
                }
                None => {
                    self.counts.insert(token.to_owned(), 1);
                    1
                }
            };
            self.max_count = self.max_count.max(count);
        }
    }

    /// Number of occurrences of `term` in the document.
    pub fn count(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Normalized weight in `[0, 1]`; 0 for unknown terms.
    pub fn weight(&self, term: &str) -> f64 {
        if self.max_count == 0 {
            return 0.0;
        }
        self.count(term) as f64 / self.max_count as f64
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no terms were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of the weights of every token occurrence.
    pub fn score(&self, tokens: &Tokens) -> f64 {
        tokens.iter().map(|t| self.weight(t)).sum()
    }
}

/// Scores every sentence against a frequency model built from all of them.
/// Output order matches input order.
pub fn score_sentences<'a>(sentences: &[Sentence<'a>]) -> Vec<ScoredSentence<'a>> {
    let tokenized: Vec<Tokens> = sentences.iter().map(|s| tokenize(s.text)).collect();

    let mut model = TermFrequencies::new();
    for tokens in &tokenized {
        model.add(tokens);
    }

    sentences
        .iter()
        .zip(&tokenized)
        .map(|(sentence, tokens)| ScoredSentence {
            sentence: *sentence,
            score: model.score(tokens),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::split_sentences;

    #[test]
    fn test_weights_normalized_by_max() {
        let mut model = TermFrequencies::new();
        model.add(&tokenize("rust rust rust memory memory safety"));
        assert_eq!(model.len(), 3);
        assert!((model.weight("rust") - 1.0).abs() < 1e-9);
        assert!((model.weight("memory") - 2.0 / 3.0).abs() < 1e-9);
        assert!((model.weight("safety") - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(model.weight("python"), 0.0);
    }

    #[test]
    fn test_counts_accumulate_across_adds() {
        let mut model = TermFrequencies::new();
        model.add(&tokenize("kernel threads"));
        model.add(&tokenize("kernel locks kernel"));
        assert_eq!(model.count("kernel"), 3);
        assert_eq!(model.count("threads"), 1);
        assert_eq!(model.count("locks"), 1);
        assert_eq!(model.len(), 3);
        assert!((model.weight("locks") - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_model_scores_zero() {
        let model = TermFrequencies::new();
        assert!(model.is_empty());
        assert_eq!(model.score(&tokenize("anything at all")), 0.0);
    }

    #[test]
    fn test_dominant_term_sentence_ranks_first() {
        let text = "Compilers translate code. Rust compilers check ownership. \
                    Ownership ownership ownership rules everything here. Tests pass.";
        let sentences = split_sentences(text);
        let scored = score_sentences(&sentences);
        assert_eq!(scored.len(), 4);
        let best = scored
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .unwrap();
        assert_eq!(best.sentence.index, 2);
    }

    #[test]
    fn test_stop_word_only_sentence_scores_zero() {
        let sentences = split_sentences("It is what it is. Databases store records.");
        let scored = score_sentences(&sentences);
        assert_eq!(scored[0].score, 0.0);
        assert!(scored[1].score > 0.0);
    }

    #[test]
    fn test_scores_are_deterministic_and_ordered() {
        let text = "Alpha beta gamma. Beta gamma delta. Gamma delta epsilon.";
        let sentences = split_sentences(text);
        let first = score_sentences(&sentences);
        let second = score_sentences(&sentences);
        assert_eq!(first, second);
        for (i, s) in first.iter().enumerate() {
            assert_eq!(s.sentence.index, i);
            assert!(s.score >= 0.0);
        }
    }
}
