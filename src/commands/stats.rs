//! Trie statistics command

use crate::trie::{RankedWord, WordTrie};

/// Summary figures for a word trie
pub struct StatsResult {
    pub unique_words: usize,
    pub total_words: usize,
    pub node_count: usize,
    pub longest_word: String,
    pub longest_length: usize,
    pub shortest_length: usize,
    pub most_common: Option<RankedWord>,
}

/// Gather the summary figures for `trie`
#[must_use]
pub fn collect_stats(trie: &WordTrie) -> StatsResult {
    StatsResult {
        unique_words: trie.unique_words(),
        total_words: trie.total_words(),
        node_count: trie.node_count(),
        longest_word: trie.longest_word(),
        longest_length: trie.length_of_longest_word(),
        shortest_length: trie.length_of_shortest_word(),
        most_common: trie.top_occurrences(1).into_iter().next(),
    }
}
