//! Extractive summarization.
//!
//! Pipeline: segment the document into sentences, score each sentence by
//! document-wide term frequency, keep the top K, restore reading order, and
//! join with single spaces. Documents that already fit in K sentences are
//! returned untouched.

/// Term-frequency model and per-sentence scoring.
pub mod scorer;
/// Top-K selection and summary assembly.
pub mod selector;

pub use scorer::{score_sentences, ScoredSentence, TermFrequencies};
pub use selector::{join_sentences, select_top_k};

use crate::error::SummarizeError;
use crate::text::split_sentences;

/// Rejects a sentence count of 0.
pub fn validate_num_sentences(num_sentences: usize) -> Result<(), SummarizeError> {
    if num_sentences == 0 {
        return Err(SummarizeError::InvalidArgument(
            "num_sentences must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

/// Summarizes `text` into at most `num_sentences` sentences.
///
/// Returns `text` unchanged when it has `num_sentences` sentences or fewer,
/// including the empty string. Fails only when `num_sentences` is 0.
pub fn summarize(text: &str, num_sentences: usize) -> Result<String, SummarizeError> {
    validate_num_sentences(num_sentences)?;

    let sentences = split_sentences(text);
    if sentences.len() <= num_sentences {
        return Ok(text.to_string());
    }

    let scored = score_sentences(&sentences);
    let selected = select_top_k(&scored, num_sentences);
    tracing::trace!(
        total = sentences.len(),
        selected = selected.len(),
        "extractive summary computed"
    );
    Ok(join_sentences(&selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_NUM_SENTENCES;

    const PARAGRAPH: &str = "The city council met on Tuesday evening. \
        Several residents spoke about road repairs. \
        Budget concerns dominated the budget debate, and the budget vote on the budget was delayed. \
        A local bakery donated pastries. \
        The meeting ended at nine.";

    fn sentence_count(summary: &str) -> usize {
        split_sentences(summary).len()
    }

    #[test]
    fn test_short_text_passes_through() {
        assert_eq!(summarize("A. B. C.", 3).unwrap(), "A. B. C.");
        assert_eq!(summarize("A. B. C.", 10).unwrap(), "A. B. C.");
    }

    #[test]
    fn test_pass_through_keeps_original_spacing() {
        let text = "  First.\n\nSecond!   ";
        assert_eq!(summarize(text, 2).unwrap(), text);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(summarize("", 1).unwrap(), "");
        assert_eq!(summarize("", DEFAULT_NUM_SENTENCES).unwrap(), "");
    }

    #[test]
    fn test_zero_sentences_rejected() {
        let err = summarize("Anything goes here.", 0).unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidArgument(_)));
        assert!(matches!(
            summarize("", 0),
            Err(SummarizeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_no_terminal_punctuation() {
        for n in 1..4 {
            assert_eq!(summarize("hello world", n).unwrap(), "hello world");
        }
    }

    #[test]
    fn test_dominant_sentence_is_included() {
        let summary = summarize(PARAGRAPH, 2).unwrap();
        assert_eq!(sentence_count(&summary), 2);
        assert!(summary.contains("Budget concerns dominated"));

        let original = split_sentences(PARAGRAPH);
        let kept = split_sentences(&summary);
        let positions: Vec<usize> = kept
            .iter()
            .map(|k| original.iter().position(|o| o.text == k.text).unwrap())
            .collect();
        assert!(positions.contains(&2));
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_bounded_output() {
        for n in 1..=6 {
            let summary = summarize(PARAGRAPH, n).unwrap();
            assert_eq!(sentence_count(&summary), n.min(5));
        }
    }

    #[test]
    fn test_order_preserved() {
        let text = "Minor note here. Another minor note. \
                    Kernel scheduler kernel threads kernel locks. \
                    Kernel memory kernel pages. Closing remark.";
        let summary = summarize(text, 2).unwrap();
        assert_eq!(
            summary,
            "Kernel scheduler kernel threads kernel locks. Kernel memory kernel pages."
        );
    }

    #[test]
    fn test_sentence_final_no_is_its_own_sentence() {
        let text = "The answer was no. She left early. Cats nap. Dogs bark.";
        assert_eq!(
            summarize(text, 3).unwrap(),
            "She left early. Cats nap. Dogs bark."
        );
    }

    #[test]
    fn test_tie_prefers_earlier_sentence() {
        let text = "Apples grow. Pears grow. Plums grow.";
        assert_eq!(summarize(text, 1).unwrap(), "Apples grow.");
        assert_eq!(summarize(text, 2).unwrap(), "Apples grow. Pears grow.");
    }

    #[test]
    fn test_deterministic() {
        let a = summarize(PARAGRAPH, 3).unwrap();
        let b = summarize(PARAGRAPH, 3).unwrap();
        assert_eq!(a, b);
    }
}
