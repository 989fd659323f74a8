//! Occurrence counts for terminal trie nodes
//!
//! The ledger is keyed by [`NodeId`] and knows nothing about tree shape.
//! An entry exists exactly while its node is terminal; [`WordTrie`] evicts
//! entries in the same routine that clears a terminal flag or frees a node.

use super::node::NodeId;
use super::word_trie::WordTrie;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// A word paired with the number of times it was inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub word: String,
    pub occurrences: usize,
}

impl RankedWord {
    #[must_use]
    pub fn new(word: impl Into<String>, occurrences: usize) -> Self {
        Self {
            word: word.into(),
            occurrences,
        }
    }

    /// Descending by count, then ascending by text
    pub(crate) fn rank_order(a: &Self, b: &Self) -> Ordering {
        b.occurrences
            .cmp(&a.occurrences)
            .then_with(|| a.word.cmp(&b.word))
    }
}

/// Identity-keyed map from terminal nodes to occurrence counts
#[derive(Debug, Clone, Default)]
pub struct FrequencyLedger {
    counts: FxHashMap<NodeId, usize>,
}

impl FrequencyLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `occurrences` to the entry for `node`, creating it if needed
    ///
    /// Adding zero occurrences is ignored so that no entry ever holds a
    /// zero count.
    pub fn add(&mut self, node: NodeId, occurrences: usize) {
        if occurrences == 0 {
            return;
        }
        *self.counts.entry(node).or_insert(0) += occurrences;
    }

    /// Drop the entry for `node`, returning the count it held
    pub fn remove(&mut self, node: NodeId) -> Option<usize> {
        self.counts.remove(&node)
    }

    /// Count recorded for `node`, 0 when absent
    #[inline]
    #[must_use]
    pub fn occurrences(&self, node: NodeId) -> usize {
        self.counts.get(&node).copied().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.counts.contains_key(&node)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of every recorded count
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Iterate over `(node, count)` entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.counts.iter().map(|(&node, &count)| (node, count))
    }

    /// Words whose count lies in `lower..=upper`, most frequent first
    ///
    /// Each word is rebuilt by walking parent links from its terminal node
    /// back to the root. Equal counts are ordered alphabetically.
    #[must_use]
    pub fn ordered_words(&self, trie: &WordTrie, lower: usize, upper: usize) -> Vec<RankedWord> {
        let mut words: Vec<RankedWord> = self
            .iter()
            .filter(|&(_, count)| (lower..=upper).contains(&count))
            .map(|(node, count)| RankedWord::new(trie.spell(node), count))
            .collect();

        words.sort_by(RankedWord::rank_order);
        words
    }

    /// Every recorded count, largest first
    #[must_use]
    pub fn ordered_occurrences(&self) -> Vec<usize> {
        let mut counts: Vec<usize> = self.counts.values().copied().collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_creates_then_increments() {
        let mut ledger = FrequencyLedger::new();
        let node = NodeId::new(5);

        ledger.add(node, 1);
        assert_eq!(ledger.occurrences(node), 1);

        ledger.add(node, 3);
        assert_eq!(ledger.occurrences(node), 4);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn add_zero_is_ignored() {
        let mut ledger = FrequencyLedger::new();
        ledger.add(NodeId::new(2), 0);
        assert!(ledger.is_empty());
        assert!(!ledger.contains(NodeId::new(2)));
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut ledger = FrequencyLedger::new();
        ledger.add(NodeId::new(1), 2);

        assert_eq!(ledger.remove(NodeId::new(9)), None);
        assert_eq!(ledger.remove(NodeId::new(1)), Some(2));
        assert_eq!(ledger.occurrences(NodeId::new(1)), 0);
    }

    #[test]
    fn total_sums_all_entries() {
        let mut ledger = FrequencyLedger::new();
        ledger.add(NodeId::new(1), 2);
        ledger.add(NodeId::new(2), 5);
        assert_eq!(ledger.total(), 7);
        assert_eq!(ledger.ordered_occurrences(), vec![5, 2]);
    }

    #[test]
    fn ordered_words_filters_closed_range() {
        let mut trie = WordTrie::new();
        for _ in 0..5 {
            trie.add_word("the");
        }
        for _ in 0..3 {
            trie.add_word("cat");
        }
        trie.add_word("sat");

        let ranked = trie.ledger().ordered_words(&trie, 1, 3);
        assert_eq!(
            ranked,
            vec![RankedWord::new("cat", 3), RankedWord::new("sat", 1)]
        );

        let upper_only = trie.ledger().ordered_words(&trie, 5, 5);
        assert_eq!(upper_only, vec![RankedWord::new("the", 5)]);
    }

    #[test]
    fn ordered_words_ties_are_alphabetical() {
        let mut trie = WordTrie::new();
        for word in ["pear", "apple", "fig"] {
            trie.add_word(word);
            trie.add_word(word);
        }

        let words: Vec<String> = trie
            .ledger()
            .ordered_words(&trie, 0, usize::MAX)
            .into_iter()
            .map(|ranked| ranked.word)
            .collect();
        assert_eq!(words, vec!["apple", "fig", "pear"]);
    }
}
