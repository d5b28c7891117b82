//! Punctuation-based sentence segmentation.
//!
//! A run of terminal punctuation (`.`, `!`, `?`), optionally followed by
//! closing quotes or brackets, ends a sentence when whitespace follows and the
//! next visible character starts a new sentence (uppercase letter, digit, or
//! opening quote/bracket). A lone `.` after a known abbreviation never ends a
//! sentence; `No.` only counts as one when a number follows. The end of input
//! always closes the last sentence.

use std::collections::HashSet;
use std::sync::LazyLock;

static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc",
        "ltd", "corp", "fig", "approx", "dept", "mt", "jan", "feb", "apr", "jun", "jul", "aug",
        "sep", "sept", "oct", "nov", "dec",
    ]
    .into_iter()
    .collect()
});

/// One sentence of a document, borrowed from the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Position in the document, 0-based and gapless.
    pub index: usize,
    /// Sentence text with surrounding whitespace trimmed.
    pub text: &'a str,
    /// Byte offset of `text` in the document.
    pub start: usize,
    /// Byte offset one past the end of `text` in the document.
    pub end: usize,
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201D}' | '\u{2019}' | ')' | ']')
}

fn is_opening(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201C}' | '\u{2018}' | '(' | '[')
}

/// Returns `true` if the last word of `segment` is a known abbreviation.
/// `next` is the first visible character after the period.
fn ends_with_abbreviation(segment: &str, next: Option<char>) -> bool {
    let word = segment
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(is_opening)
        .to_lowercase();
    match word.as_str() {
        "no" => next.is_some_and(|c| c.is_ascii_digit()),
        word => ABBREVIATIONS.contains(word),
    }
}

/// Split `text` into sentences. Empty or whitespace-only text yields no sentences.
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut seg_start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !is_terminal(c) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && is_terminal(chars[j].1) {
            j += 1;
        }
        let single_dot = c == '.' && j == i + 1;
        while j < chars.len() && is_closing(chars[j].1) {
            j += 1;
        }

        let Some(&(boundary, next)) = chars.get(j) else {
            break; // end of input closes the final sentence below
        };
        let visible = next_visible(&chars[j..]);
        if next.is_whitespace()
            && starts_new_sentence(visible)
            && !(single_dot && ends_with_abbreviation(&text[seg_start..pos], visible))
        {
            push_sentence(&mut sentences, text, seg_start, boundary);
            seg_start = boundary;
        }
        i = j;
    }
    push_sentence(&mut sentences, text, seg_start, text.len());

    sentences
}

fn next_visible(rest: &[(usize, char)]) -> Option<char> {
    rest.iter().map(|&(_, c)| c).find(|c| !c.is_whitespace())
}

/// End of input, or a character that can open a sentence.
fn starts_new_sentence(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(c) => c.is_uppercase() || c.is_numeric() || is_opening(c),
    }
}

fn push_sentence<'a>(sentences: &mut Vec<Sentence<'a>>, text: &'a str, start: usize, end: usize) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let start = start + (raw.len() - raw.trim_start().len());
    sentences.push(Sentence {
        index: sentences.len(),
        text: trimmed,
        start,
        end: start + trimmed.len(),
    });
}
