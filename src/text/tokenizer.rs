//! Word tokenization and frequency counting
//!
//! Text is lowercased as a whole, then split on maximal runs of characters
//! that are neither a Unicode letter (`\p{L}`) nor an ASCII digit. Every
//! non-empty piece is a word:
//!
//! - `"word-word"` yields `word`, `word`
//! - `"word!"` yields `word`
//! - `"word123"` stays a single word, distinct from `word` and `123`

use regex::Regex;
use std::collections::hash_map;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Delimiter class: anything that is not a letter or an ASCII digit
fn delimiter() -> &'static Regex {
    static DELIMITER_RE: OnceLock<Regex> = OnceLock::new();

    DELIMITER_RE.get_or_init(|| Regex::new(r"[^\p{L}0-9]+").expect("Invalid regex pattern"))
}

/// Split already-lowercased text into words
fn split_words(lowered: &str) -> impl Iterator<Item = &str> {
    delimiter()
        .split(lowered)
        .filter(|word| !word.trim().is_empty())
}

/// Tokenize text into normalized words, in order of appearance
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    split_words(&lowered).map(str::to_string).collect()
}

/// Count word occurrences in `text`
pub fn count_word_frequencies(text: &str) -> FrequencyMap {
    let lowered = text.to_lowercase();
    let mut counts: HashMap<String, u64> = HashMap::new();

    for word in split_words(&lowered) {
        match counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                counts.insert(word.to_string(), 1);
            }
        }
    }

    tracing::debug!(unique_words = counts.len(), "Counted word frequencies");
    FrequencyMap { counts }
}

/// Mapping from word to occurrence count
///
/// Built once by [`count_word_frequencies`]; read-only afterwards. Every
/// stored count is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, u64>,
}

impl FrequencyMap {
    /// Occurrence count for `word`, if it was seen
    #[must_use]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of unique words
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no words were counted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens in the source text
    #[must_use]
    pub fn total_tokens(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over `(word, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

impl IntoIterator for FrequencyMap {
    type Item = (String, u64);
    type IntoIter = hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
