//! Top-K sentence selection with document order restoration.

use super::scorer::ScoredSentence;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Keeps the `k` highest-scoring sentences and returns them in document order.
///
/// Equal scores prefer the lower sentence index, so the result is fully
/// determined by the input.
pub fn select_top_k<'a>(scored: &[ScoredSentence<'a>], k: usize) -> Vec<ScoredSentence<'a>> {
    if k == 0 {
        return Vec::new();
    }

    // Min-heap of size k. Its minimum is the lowest score, and among equal
    // scores the highest index, which is the entry to evict first.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, Reverse<usize>)>> =
        BinaryHeap::with_capacity(k + 1);
    for (pos, s) in scored.iter().enumerate() {
        heap.push(Reverse((OrderedFloat(s.score), Reverse(pos))));
        if heap.len() > k {
            heap.pop();
        }
    }

    let mut selected: Vec<ScoredSentence<'a>> = heap
        .into_iter()
        .map(|Reverse((_, Reverse(pos)))| scored[pos])
        .collect();
    selected.sort_unstable_by_key(|s| s.sentence.index);
    selected
}

/// Joins sentence texts with a single space.
pub fn join_sentences(selected: &[ScoredSentence<'_>]) -> String {
    selected
        .iter()
        .map(|s| s.sentence.text)
        .collect::<Vec<_>>()
        .join(" ")
}
