//! Deterministic ranking of word frequencies
//!
//! Entries are ordered by count descending, ties broken by word ascending,
//! so the same input always produces the same table, chart and report.

use std::cmp::Ordering;

use crate::text::FrequencyMap;

/// A word with its count and 1-based rank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub word: String,
    pub count: u64,
}

/// Total order used for ranking: higher counts first, then alphabetical
fn compare(a: &(String, u64), b: &(String, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Rank every word in `frequencies`
pub fn rank(frequencies: FrequencyMap) -> Vec<RankedEntry> {
    let mut pairs: Vec<(String, u64)> = frequencies.into_iter().collect();
    pairs.sort_unstable_by(compare);

    pairs
        .into_iter()
        .enumerate()
        .map(|(i, (word, count))| RankedEntry {
            rank: i + 1,
            word,
            count,
        })
        .collect()
}
