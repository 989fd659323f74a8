//! Word frequency commands

use crate::trie::{RankedWord, WordTrie};

/// Ranked rows plus the caption they were produced for
pub struct RankResult {
    pub title: String,
    pub entries: Vec<RankedWord>,
}

/// Occurrence count of one looked-up word
pub struct LookupEntry {
    pub word: String,
    pub occurrences: usize,
}

impl LookupEntry {
    #[inline]
    #[must_use]
    pub const fn found(&self) -> bool {
        self.occurrences > 0
    }
}

/// The `limit` most frequent words
#[must_use]
pub fn rank_top(trie: &WordTrie, limit: usize) -> RankResult {
    RankResult {
        title: format!("TOP {limit} WORDS"),
        entries: trie.top_occurrences(limit),
    }
}

/// Words whose counts fall inside `lower..=upper`
#[must_use]
pub fn rank_range(trie: &WordTrie, lower: usize, upper: usize) -> RankResult {
    RankResult {
        title: format!("WORDS SEEN {lower} TO {upper} TIMES"),
        entries: trie.occurrences_in_range(lower, upper),
    }
}

/// Occurrence counts for each of `words`, in the order given
#[must_use]
pub fn lookup_words<S: AsRef<str>>(trie: &WordTrie, words: &[S]) -> Vec<LookupEntry> {
    words
        .iter()
        .map(|word| LookupEntry {
            word: word.as_ref().to_string(),
            occurrences: trie.occurrences(word.as_ref()),
        })
        .collect()
}
