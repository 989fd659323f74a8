//! Character trie with aggregate word counters
//!
//! `WordTrie` stores every distinct word once as a root-to-node path and keeps
//! two running totals: `unique_words` (terminal nodes) and `total_words`
//! (insertions, duplicates included). Per-word counts live in the
//! [`FrequencyLedger`], keyed by the word's terminal [`NodeId`].
//!
//! Only ASCII letters are case-folded. Non-ASCII characters are stored as
//! given.

use super::ledger::{FrequencyLedger, RankedWord};
use super::node::{NodeId, TrieNode};
use log::{debug, warn};
use std::collections::VecDeque;

/// Prefix tree of words with occurrence tracking
#[derive(Debug, Clone)]
pub struct WordTrie {
    pub(crate) nodes: Vec<TrieNode>,
    free_list: Vec<NodeId>,
    pub(crate) ledger: FrequencyLedger,
    pub(crate) total_words: usize,
    pub(crate) unique_words: usize,
}

#[inline]
pub(crate) fn fold(ch: char) -> char {
    ch.to_ascii_lowercase()
}

impl WordTrie {
    /// Create an empty trie holding only the sentinel root
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            free_list: Vec::new(),
            ledger: FrequencyLedger::new(),
            total_words: 0,
            unique_words: 0,
        }
    }

    /// Insert one occurrence of `word`
    ///
    /// Returns the word's terminal node, or `None` when the word was
    /// ignored. Empty and whitespace-only words are ignored, as are words
    /// with embedded whitespace, which the persisted format cannot hold.
    ///
    /// # Examples
    /// ```
    /// use wordtrie::trie::WordTrie;
    ///
    /// let mut trie = WordTrie::new();
    /// trie.add_word("Apple");
    /// trie.add_word("apple");
    ///
    /// assert!(trie.contains("APPLE"));
    /// assert_eq!(trie.occurrences("apple"), 2);
    /// assert_eq!(trie.unique_words(), 1);
    /// assert_eq!(trie.total_words(), 2);
    /// ```
    pub fn add_word(&mut self, word: &str) -> Option<NodeId> {
        if word.trim().is_empty() {
            return None;
        }
        if word.chars().any(char::is_whitespace) {
            debug!("ignoring token with embedded whitespace: {word:?}");
            return None;
        }

        let mut current = NodeId::ROOT;
        for ch in word.chars().map(fold) {
            current = match self.node(current).child(ch) {
                Some(next) => next,
                None => self.attach_child(current, ch),
            };
        }

        self.mark_terminal(current, 1);
        Some(current)
    }

    /// Whether `word` was inserted and not since removed
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        self.node_id(word).is_some()
    }

    /// Remove `word` entirely, whatever its occurrence count
    ///
    /// Returns `false` (and logs a warning) if the word is not present.
    /// Nodes that only existed to spell this word are released; nodes on
    /// the path of any other word are left untouched.
    pub fn remove(&mut self, word: &str) -> bool {
        let Some(id) = self.node_id(word) else {
            warn!("'{word}' is not a word in the trie");
            return false;
        };

        self.retire_word(id);
        self.prune_upward(id);
        true
    }

    /// Remove every word beginning with `prefix`
    ///
    /// Returns the number of distinct words removed. Both counters drop by
    /// exactly the removed mass: one unique word and its full occurrence
    /// count per terminal node in the subtree. An empty prefix clears the
    /// trie.
    pub fn remove_all_with_prefix(&mut self, prefix: &str) -> usize {
        if prefix.is_empty() {
            let removed = self.unique_words;
            self.clear();
            return removed;
        }

        let Some(start) = self.find(prefix) else {
            warn!("no words with prefix '{prefix}'");
            return 0;
        };

        let before = self.unique_words;
        let start_node = self.node(start);
        let (Some(parent), Some(key)) = (start_node.parent, start_node.key) else {
            return 0;
        };
        self.node_mut(parent).children.remove(&key);

        // post-order: a node is released once all of its children are
        let mut stack = vec![(start, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                self.release_node(id);
                continue;
            }
            stack.push((id, true));
            stack.extend(self.node(id).children.values().map(|&child| (child, false)));
        }

        self.prune_upward(parent);

        let removed = before - self.unique_words;
        debug!("removed {removed} words with prefix '{prefix}'");
        removed
    }

    /// Drop every word and reset both counters
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(TrieNode::root());
        self.free_list.clear();
        self.ledger.clear();
        self.total_words = 0;
        self.unique_words = 0;
    }

    /// Number of insertions, duplicates included
    #[inline]
    #[must_use]
    pub const fn total_words(&self) -> usize {
        self.total_words
    }

    /// Number of distinct words currently stored
    #[inline]
    #[must_use]
    pub const fn unique_words(&self) -> usize {
        self.unique_words
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.unique_words == 0
    }

    /// Number of live nodes, root included
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// How many times `word` has been inserted (0 if absent)
    #[must_use]
    pub fn occurrences(&self, word: &str) -> usize {
        match self.node_id(word) {
            Some(id) => self.ledger.occurrences(id),
            None => {
                debug!("'{word}' not found, reporting zero occurrences");
                0
            }
        }
    }

    /// Longest stored word
    ///
    /// Among words of equal length the alphabetically first one wins.
    /// Returns an empty string for an empty trie.
    #[must_use]
    pub fn longest_word(&self) -> String {
        self.deepest_terminal()
            .map(|(id, _)| self.spell(id))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn length_of_longest_word(&self) -> usize {
        self.deepest_terminal().map_or(0, |(_, depth)| depth)
    }

    /// Length of the shortest stored word, found breadth-first
    #[must_use]
    pub fn length_of_shortest_word(&self) -> usize {
        let mut queue = VecDeque::from([(NodeId::ROOT, 0)]);

        while let Some((id, depth)) = queue.pop_front() {
            for (_, child) in self.node(id).children() {
                if self.node(child).is_terminal {
                    return depth + 1;
                }
                queue.push_back((child, depth + 1));
            }
        }

        0
    }

    /// All stored words in alphabetical order
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.collect_words(NodeId::ROOT, String::new())
    }

    /// Stored words beginning with `prefix`, in alphabetical order
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        match self.find(prefix) {
            Some(start) => self.collect_words(start, prefix.chars().map(fold).collect()),
            None => {
                debug!("no words with prefix '{prefix}'");
                Vec::new()
            }
        }
    }

    /// Every word with its count, most frequent first
    #[must_use]
    pub fn all_by_occurrences(&self) -> Vec<RankedWord> {
        self.occurrences_in_range(0, usize::MAX)
    }

    /// Words inserted between `lower` and `upper` times (inclusive)
    #[must_use]
    pub fn occurrences_in_range(&self, lower: usize, upper: usize) -> Vec<RankedWord> {
        self.ledger.ordered_words(self, lower, upper)
    }

    /// The `limit` most frequent words
    #[must_use]
    pub fn top_occurrences(&self, limit: usize) -> Vec<RankedWord> {
        let mut ranked = self.all_by_occurrences();
        ranked.truncate(limit);
        ranked
    }

    /// Occurrence counts of every word, largest first
    #[must_use]
    pub fn ordered_occurrences(&self) -> Vec<usize> {
        self.ledger.ordered_occurrences()
    }

    #[inline]
    #[must_use]
    pub const fn ledger(&self) -> &FrequencyLedger {
        &self.ledger
    }

    /// Terminal node for `word`, if the word is stored
    #[must_use]
    pub fn node_id(&self, word: &str) -> Option<NodeId> {
        self.find(word).filter(|&id| self.node(id).is_terminal)
    }

    /// Node at `id`, if the id refers to a live node
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&TrieNode> {
        // released slots are reset to a parentless node
        self.nodes
            .get(id.index())
            .filter(|node| id.is_root() || node.parent.is_some())
    }

    /// Rebuild the string spelled from the root down to `id`
    ///
    /// Returns `None` when `id` is not a live node of this trie.
    #[must_use]
    pub fn word_at(&self, id: NodeId) -> Option<String> {
        self.get(id).map(|_| self.spell(id))
    }

    /// [`word_at`](Self::word_at) for ids known to be live
    pub(crate) fn spell(&self, id: NodeId) -> String {
        let mut chars = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            if let Some(key) = node.key {
                chars.push(key);
            }
            current = node.parent;
        }
        chars.iter().rev().collect()
    }

    /// Walk the path for `text` without requiring a terminal at its end
    pub(crate) fn find(&self, text: &str) -> Option<NodeId> {
        text.chars()
            .map(fold)
            .try_fold(NodeId::ROOT, |current, ch| self.node(current).child(ch))
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn attach_child(&mut self, parent: NodeId, key: char) -> NodeId {
        let child = TrieNode::new(key, parent);
        let id = if let Some(id) = self.free_list.pop() {
            self.nodes[id.index()] = child;
            id
        } else {
            self.nodes.push(child);
            NodeId::new(self.nodes.len() - 1)
        };
        self.node_mut(parent).children.insert(key, id);
        id
    }

    /// Flag `id` as a word end and credit it with `occurrences`
    pub(crate) fn mark_terminal(&mut self, id: NodeId, occurrences: usize) {
        let node = &mut self.nodes[id.index()];
        if !node.is_terminal {
            node.is_terminal = true;
            self.unique_words += 1;
        }
        self.total_words += occurrences;
        self.ledger.add(id, occurrences);
    }

    /// Clear the terminal flag of `id` and evict its ledger entry
    ///
    /// Both counters are debited by the evicted mass.
    fn retire_word(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.index()];
        if !node.is_terminal {
            return;
        }
        node.is_terminal = false;

        let occurrences = self.ledger.remove(id).unwrap_or(0);
        self.unique_words -= 1;
        self.total_words = self.total_words.saturating_sub(occurrences);
    }

    /// Free a node that has already been unlinked from its parent
    ///
    /// This is the only place a node slot is returned to the free list, and
    /// it always retires the node's word first so the ledger never holds an
    /// id that could be handed out again.
    fn release_node(&mut self, id: NodeId) {
        self.retire_word(id);
        self.nodes[id.index()] = TrieNode::default();
        self.free_list.push(id);
    }

    /// Release childless, non-terminal ancestors starting at `id`
    fn prune_upward(&mut self, mut id: NodeId) {
        while !id.is_root() {
            let node = self.node(id);
            if node.is_terminal || !node.is_leaf() {
                break;
            }
            let (Some(parent), Some(key)) = (node.parent, node.key) else {
                break;
            };
            self.node_mut(parent).children.remove(&key);
            self.release_node(id);
            id = parent;
        }
    }

    /// Deepest terminal node and its depth, preferring the first in
    /// alphabetical order on ties
    fn deepest_terminal(&self) -> Option<(NodeId, usize)> {
        let mut best: Option<(NodeId, usize)> = None;
        let mut stack = vec![(NodeId::ROOT, 0)];

        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            if node.is_terminal && best.is_none_or(|(_, best_depth)| depth > best_depth) {
                best = Some((id, depth));
            }
            stack.extend(node.children.values().rev().map(|&child| (child, depth + 1)));
        }

        best
    }

    fn collect_words(&self, start: NodeId, prefix: String) -> Vec<String> {
        let mut words = Vec::new();
        let mut stack = vec![(start, prefix)];

        while let Some((id, text)) = stack.pop() {
            let node = self.node(id);
            if node.is_terminal {
                words.push(text.clone());
            }
            for (&key, &child) in node.children.iter().rev() {
                let mut next = text.clone();
                next.push(key);
                stack.push((child, next));
            }
        }

        words
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for WordTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add_word(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Recount everything from the live tree and compare with the cached
    /// counters and the ledger.
    pub(crate) fn assert_consistent(trie: &WordTrie) {
        let mut terminals = 0;
        let mut live = 0;
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            live += 1;
            let node = trie.node(id);
            if node.is_terminal {
                terminals += 1;
                assert!(trie.ledger.occurrences(id) > 0, "terminal {id} has no count");
            } else {
                assert!(!trie.ledger.contains(id), "stale ledger entry for {id}");
            }
            for (key, child) in node.children() {
                assert_eq!(trie.node(child).parent, Some(id));
                assert_eq!(trie.node(child).key, Some(key));
                stack.push(child);
            }
        }

        assert!(!trie.node(NodeId::ROOT).is_terminal);
        assert_eq!(trie.unique_words, terminals);
        assert_eq!(trie.ledger.len(), terminals);
        assert_eq!(trie.total_words, trie.ledger.total());
        assert!(trie.total_words >= trie.unique_words);
        assert_eq!(trie.node_count(), live);
    }

    #[test]
    fn contains_before_and_after_insert() {
        let mut trie = WordTrie::new();
        assert!(!trie.contains("apple"));
        trie.add_word("apple");
        assert!(trie.contains("apple"));
        assert!(!trie.contains("app"));
        assert!(!trie.contains("apples"));
        assert_consistent(&trie);
    }

    #[test]
    fn counters_track_duplicates() {
        let mut trie = WordTrie::new();
        assert_eq!(trie.unique_words(), 0);
        assert_eq!(trie.total_words(), 0);

        trie.add_word("apple");
        trie.add_word("banana");
        assert_eq!(trie.unique_words(), 2);
        assert_eq!(trie.total_words(), 2);

        trie.add_word("apple");
        assert_eq!(trie.unique_words(), 2);
        assert_eq!(trie.total_words(), 3);
        assert_eq!(trie.occurrences("apple"), 2);
        assert_eq!(trie.occurrences("banana"), 1);

        trie.extend(["orange", "grape", "orange", "grape", "banana"]);
        assert_eq!(trie.unique_words(), 4);
        assert_eq!(trie.total_words(), 8);
        assert_consistent(&trie);
    }

    #[test]
    fn ascii_letters_are_case_folded() {
        let mut trie = WordTrie::new();
        trie.add_word("HeLLo");
        assert!(trie.contains("hello"));
        assert!(trie.contains("HELLO"));
        assert_eq!(trie.words(), vec!["hello"]);
    }

    #[test]
    fn non_ascii_is_stored_verbatim() {
        let mut trie = WordTrie::new();
        trie.add_word("Émile");
        assert!(trie.contains("Émile"));
        assert!(!trie.contains("émile"));
    }

    #[test]
    fn blank_and_spaced_words_are_ignored() {
        let mut trie = WordTrie::new();
        assert_eq!(trie.add_word(""), None);
        assert_eq!(trie.add_word("   "), None);
        assert_eq!(trie.add_word("two words"), None);
        assert!(trie.is_empty());
        assert_eq!(trie.total_words(), 0);
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn occurrences_of_missing_word_is_zero() {
        let mut trie = WordTrie::new();
        assert_eq!(trie.occurrences("apple"), 0);
        trie.extend([
            "apple", "apples", "applesss", "banana", "pineapple", "apple", "pear", "apple",
            "orange",
        ]);
        assert_eq!(trie.occurrences("apple"), 3);
        assert_eq!(trie.occurrences("apples"), 1);
        assert_eq!(trie.occurrences("pear"), 1);
        assert_eq!(trie.occurrences("appl"), 0);
    }

    #[test]
    fn remove_word_keeps_longer_word() {
        let mut trie: WordTrie = ["apple", "apples"].into_iter().collect();

        assert!(trie.remove("apple"));
        assert!(!trie.contains("apple"));
        assert!(trie.contains("apples"));
        assert_eq!(trie.unique_words(), 1);
        assert_consistent(&trie);
    }

    #[test]
    fn remove_word_keeps_shorter_word() {
        let mut trie: WordTrie = ["apple", "apples"].into_iter().collect();
        let nodes_before = trie.node_count();

        assert!(trie.remove("apples"));
        assert!(trie.contains("apple"));
        assert!(!trie.contains("apples"));
        // only the trailing 's' node goes away
        assert_eq!(trie.node_count(), nodes_before - 1);
        assert_consistent(&trie);
    }

    #[test]
    fn remove_prunes_to_branch_point() {
        let mut trie: WordTrie = ["cart", "care"].into_iter().collect();
        assert_eq!(trie.node_count(), 6);

        assert!(trie.remove("cart"));
        assert!(trie.contains("care"));
        assert_eq!(trie.node_count(), 5);
        assert_consistent(&trie);
    }

    #[test]
    fn remove_debits_counters() {
        let mut trie: WordTrie = ["apple", "apple", "apple", "pear"].into_iter().collect();

        assert!(trie.remove("apple"));
        assert_eq!(trie.unique_words(), 1);
        assert_eq!(trie.total_words(), 1);
        assert_eq!(trie.occurrences("apple"), 0);
        assert_consistent(&trie);
    }

    #[test]
    fn remove_missing_word_has_no_effect() {
        let mut trie: WordTrie = ["apple", "apples"].into_iter().collect();
        let nodes_before = trie.node_count();

        assert!(!trie.remove("banana"));
        assert!(!trie.remove("app"));
        assert!(!trie.remove("applesauce"));
        assert_eq!(trie.unique_words(), 2);
        assert_eq!(trie.node_count(), nodes_before);
        assert_consistent(&trie);
    }

    #[test]
    fn remove_last_word_leaves_only_root() {
        let mut trie: WordTrie = ["solo"].into_iter().collect();
        assert!(trie.remove("solo"));
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert_consistent(&trie);
    }

    #[test]
    fn released_ids_are_reused_without_stale_counts() {
        let mut trie = WordTrie::new();
        trie.add_word("zz");
        trie.add_word("zz");
        trie.remove("zz");

        trie.add_word("ab");
        assert_eq!(trie.occurrences("ab"), 1);
        assert_eq!(trie.total_words(), 1);
        assert_consistent(&trie);
    }

    #[test]
    fn remove_all_with_prefix_removes_subtree() {
        let mut trie: WordTrie = ["apple", "apples", "pineapple"].into_iter().collect();

        let removed = trie.remove_all_with_prefix("apple");
        assert_eq!(removed, 2);
        assert!(!trie.contains("apple"));
        assert!(!trie.contains("apples"));
        assert!(trie.contains("pineapple"));
        assert_eq!(trie.unique_words(), 1);
        assert_consistent(&trie);
    }

    #[test]
    fn remove_all_with_prefix_debits_exact_mass() {
        let mut trie: WordTrie = [
            "apple", "apple", "apples", "applesss", "banana", "pineapple",
        ]
        .into_iter()
        .collect();

        trie.remove_all_with_prefix("apple");
        assert_eq!(trie.unique_words(), 2);
        assert_eq!(trie.total_words(), 2);
        assert_consistent(&trie);
    }

    #[test]
    fn remove_all_with_prefix_prunes_dead_chain() {
        let mut trie: WordTrie = ["apple", "apply", "pear"].into_iter().collect();

        trie.remove_all_with_prefix("appl");
        assert_eq!(trie.words(), vec!["pear"]);
        assert_eq!(trie.node_count(), 5);
        assert_consistent(&trie);
    }

    #[test]
    fn remove_all_with_prefix_stops_at_terminal_ancestor() {
        let mut trie: WordTrie = ["app", "apple"].into_iter().collect();

        trie.remove_all_with_prefix("appl");
        assert!(trie.contains("app"));
        assert!(!trie.contains("apple"));
        assert_consistent(&trie);
    }

    #[test]
    fn remove_all_with_missing_prefix_is_noop() {
        let mut trie: WordTrie = ["apple"].into_iter().collect();
        assert_eq!(trie.remove_all_with_prefix("zebra"), 0);
        assert!(trie.contains("apple"));
        assert_consistent(&trie);
    }

    #[test]
    fn remove_all_with_empty_prefix_clears() {
        let mut trie: WordTrie = ["a", "b", "b"].into_iter().collect();
        assert_eq!(trie.remove_all_with_prefix(""), 2);
        assert!(trie.is_empty());
        assert_eq!(trie.total_words(), 0);
        assert_consistent(&trie);
    }

    #[test]
    fn clear_resets_counters() {
        let mut trie: WordTrie = [
            "apple", "apple", "apples", "banana", "bananas", "orange", "grape",
        ]
        .into_iter()
        .collect();
        assert_eq!(trie.total_words(), 7);
        assert_eq!(trie.unique_words(), 6);

        trie.clear();
        assert_eq!(trie.total_words(), 0);
        assert_eq!(trie.unique_words(), 0);
        assert!(!trie.contains("apple"));
        assert_consistent(&trie);
    }

    #[test]
    fn shortest_and_longest_lengths() {
        let trie: WordTrie = ["a", "bb", "ccc"].into_iter().collect();
        assert_eq!(trie.length_of_shortest_word(), 1);
        assert_eq!(trie.length_of_longest_word(), 3);
        assert_eq!(trie.longest_word(), "ccc");
    }

    #[test]
    fn lengths_of_empty_trie_are_zero() {
        let trie = WordTrie::new();
        assert_eq!(trie.length_of_shortest_word(), 0);
        assert_eq!(trie.length_of_longest_word(), 0);
        assert_eq!(trie.longest_word(), "");
    }

    #[test]
    fn shortest_skips_non_terminal_prefixes() {
        let trie: WordTrie = ["banana", "cat", "apples"].into_iter().collect();
        assert_eq!(trie.length_of_shortest_word(), 3);
    }

    #[test]
    fn lengths_match_brute_force() {
        let words = ["kiwi", "fig", "banana", "plum", "cherry", "date", "fig"];
        let trie: WordTrie = words.into_iter().collect();

        let shortest = words.iter().map(|w| w.len()).min().unwrap_or(0);
        let longest = words.iter().map(|w| w.len()).max().unwrap_or(0);
        assert_eq!(trie.length_of_shortest_word(), shortest);
        assert_eq!(trie.length_of_longest_word(), longest);
    }

    #[test]
    fn longest_word_grows() {
        let mut trie = WordTrie::new();
        trie.add_word("apple");
        trie.add_word("banana");
        assert_eq!(trie.longest_word(), "banana");

        trie.add_word("pineapple");
        assert_eq!(trie.longest_word(), "pineapple");
    }

    #[test]
    fn longest_word_tie_is_alphabetical() {
        let trie: WordTrie = ["pear", "plum", "kiwi"].into_iter().collect();
        assert_eq!(trie.longest_word(), "kiwi");
    }

    #[test]
    fn words_with_prefix_lists_alphabetically() {
        let trie: WordTrie = ["car", "cart", "care", "dog"].into_iter().collect();
        assert_eq!(trie.words_with_prefix("CAR"), vec!["car", "care", "cart"]);
        assert_eq!(trie.words(), vec!["car", "care", "cart", "dog"]);
        assert!(trie.words_with_prefix("x").is_empty());
    }

    #[test]
    fn ranked_queries() {
        let trie: WordTrie = ["the", "the", "the", "cat", "cat", "sat"]
            .into_iter()
            .collect();

        let all = trie.all_by_occurrences();
        assert_eq!(
            all,
            vec![
                RankedWord::new("the", 3),
                RankedWord::new("cat", 2),
                RankedWord::new("sat", 1),
            ]
        );

        let top = trie.top_occurrences(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].word, "the");

        let middle = trie.occurrences_in_range(2, 2);
        assert_eq!(middle, vec![RankedWord::new("cat", 2)]);

        assert_eq!(trie.ordered_occurrences(), vec![3, 2, 1]);
    }

    #[test]
    fn node_id_round_trips_through_word_at() {
        let trie: WordTrie = ["hello", "help"].into_iter().collect();
        let id = trie.node_id("help").unwrap();
        assert_eq!(trie.word_at(id).as_deref(), Some("help"));
        assert!(trie.get(id).is_some_and(TrieNode::is_terminal));
        assert_eq!(trie.node_id("hel"), None);
        assert_eq!(trie.word_at(NodeId::ROOT).as_deref(), Some(""));
    }

    #[test]
    fn word_at_rejects_ids_from_elsewhere() {
        let large: WordTrie = ["international"].into_iter().collect();
        let small: WordTrie = ["a"].into_iter().collect();
        let foreign = large.node_id("international").unwrap();

        assert_eq!(small.word_at(foreign), None);
        assert_eq!(large.word_at(foreign).as_deref(), Some("international"));
    }

    #[test]
    fn word_at_rejects_released_nodes() {
        let mut trie: WordTrie = ["cart", "car"].into_iter().collect();
        let cart = trie.node_id("cart").unwrap();
        trie.remove("cart");

        assert_eq!(trie.word_at(cart), None);
    }

    #[test]
    fn clone_is_independent() {
        let original: WordTrie = ["one", "two"].into_iter().collect();
        let mut copy = original.clone();
        copy.remove("one");

        assert!(original.contains("one"));
        assert!(!copy.contains("one"));
    }
}
