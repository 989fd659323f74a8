//! Word-sequence tree built on top of a [`WordTrie`]
//!
//! Each inserted run of words becomes a path from a root, one node per
//! word. Revisiting a path bumps `times_seen` on every node along it, so a
//! node's count is the number of runs that began with its word path. Every
//! run is also stored back to front under a second root, which answers
//! "what came before" queries with the same machinery.

use super::criteria::{Direction, SequenceCriteria};
use super::node::{SequenceId, SequenceNode};
use crate::trie::{NodeId, WordTrie};
use log::debug;
use std::cmp::Ordering;

/// A ranked word run with its observation count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedSequence {
    pub sequence: String,
    pub times_seen: usize,
    pub length: usize,
}

impl RankedSequence {
    fn rank_order(a: &Self, b: &Self) -> Ordering {
        b.times_seen
            .cmp(&a.times_seen)
            .then_with(|| a.sequence.cmp(&b.sequence))
    }
}

/// N-gram style predictor over observed word transitions
#[derive(Debug, Clone)]
pub struct SequenceTrie {
    pub(crate) words: WordTrie,
    pub(crate) nodes: Vec<SequenceNode>,
}

impl SequenceTrie {
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: WordTrie::new(),
            nodes: vec![SequenceNode::root(), SequenceNode::root()],
        }
    }

    /// Record a whitespace-separated run of words
    ///
    /// Every token is counted once in the word dictionary.
    pub fn add_sequence(&mut self, text: &str) {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        self.add_tokens(&tokens);
    }

    /// Record an already tokenized run of words
    pub fn add_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) {
        let ids = self.register(tokens);
        self.insert_run(&ids);
    }

    /// Record every `window`-word run of a token stream
    ///
    /// Each token is counted once in the word dictionary no matter how many
    /// windows cover it. A stream shorter than `window` is recorded as a
    /// single run.
    pub fn add_windows<S: AsRef<str>>(&mut self, tokens: &[S], window: usize) {
        let ids = self.register(tokens);
        if ids.is_empty() || window == 0 {
            return;
        }
        for run in ids.windows(window.min(ids.len())) {
            self.insert_run(run);
        }
    }

    /// Most frequent word observed right after `sequence`
    ///
    /// Ties go to the alphabetically first word. Returns `None` when the
    /// sequence was never seen or never continued.
    #[must_use]
    pub fn next_word(&self, sequence: &str) -> Option<String> {
        let tokens: Vec<&str> = sequence.split_whitespace().collect();
        self.strongest_continuation(SequenceId::FORWARD_ROOT, &tokens)
    }

    /// Most frequent word observed right before `sequence`
    #[must_use]
    pub fn previous_word(&self, sequence: &str) -> Option<String> {
        let tokens: Vec<&str> = sequence.split_whitespace().rev().collect();
        self.strongest_continuation(SequenceId::REVERSE_ROOT, &tokens)
    }

    /// Number of recorded runs that begin with `sequence`
    #[must_use]
    pub fn times_seen(&self, sequence: &str) -> usize {
        let tokens: Vec<&str> = sequence.split_whitespace().collect();
        if tokens.is_empty() {
            return 0;
        }
        self.resolve(SequenceId::FORWARD_ROOT, &tokens)
            .map_or(0, |id| self.node(id).times_seen)
    }

    /// Rank the sequences reachable from the criteria's starting sequence
    ///
    /// Expansion is beam-limited: only the `branching_factor` most frequent
    /// children of a node are visited, and branches stop once they exceed
    /// `length_max` words. Every visited sequence of at least `length_min`
    /// words is returned, most frequent first. Frequency bounds are not
    /// applied here; see [`SequenceCriteria::admits`].
    #[must_use]
    pub fn ordered_sequences(&self, criteria: &SequenceCriteria) -> Vec<RankedSequence> {
        let root = match criteria.direction {
            Direction::Forward => SequenceId::FORWARD_ROOT,
            Direction::Backward => SequenceId::REVERSE_ROOT,
        };
        let tokens = criteria.start_tokens();
        let Some(start) = self.resolve(root, &tokens) else {
            debug!(
                "sequence '{}' was never observed",
                criteria.starting_sequence
            );
            return Vec::new();
        };

        let mut collected = Vec::new();
        let mut stack = vec![(start, tokens.len())];
        while let Some((id, depth)) = stack.pop() {
            let child_depth = depth + 1;
            if child_depth > criteria.length_max {
                continue;
            }
            for child in self
                .ranked_children(id)
                .into_iter()
                .take(criteria.branching_factor)
            {
                if child_depth >= criteria.length_min {
                    collected.push(RankedSequence {
                        sequence: self.sequence_text(child),
                        times_seen: self.node(child).times_seen,
                        length: child_depth,
                    });
                }
                stack.push((child, child_depth));
            }
        }

        collected.sort_by(RankedSequence::rank_order);
        collected
    }

    /// [`ordered_sequences`](Self::ordered_sequences) restricted to the
    /// criteria's frequency bounds
    #[must_use]
    pub fn ranked_sequences(&self, criteria: &SequenceCriteria) -> Vec<RankedSequence> {
        let mut ranked = self.ordered_sequences(criteria);
        ranked.retain(|entry| criteria.admits(entry.times_seen));
        ranked
    }

    /// Words of the run ending at `id`, in reading order
    #[must_use]
    pub fn sequence_text(&self, id: SequenceId) -> String {
        let mut words = Vec::new();
        let mut current = id;
        while let Some(parent) = self.node(current).parent {
            words.push(self.words.spell(self.node(current).word));
            current = parent;
        }
        // reverse-tree paths already run back to front
        if current == SequenceId::FORWARD_ROOT {
            words.reverse();
        }
        words.join(" ")
    }

    /// The word dictionary shared by both trees
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &WordTrie {
        &self.words
    }

    #[must_use]
    pub fn get(&self, id: SequenceId) -> Option<&SequenceNode> {
        self.nodes.get(id.index())
    }

    /// Number of sequence nodes, both roots included
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node(SequenceId::FORWARD_ROOT).children.is_empty()
    }

    #[inline]
    pub(crate) fn node(&self, id: SequenceId) -> &SequenceNode {
        &self.nodes[id.index()]
    }

    /// Follow `tokens` from `root`, one word per level
    pub(crate) fn resolve<S: AsRef<str>>(&self, root: SequenceId, tokens: &[S]) -> Option<SequenceId> {
        tokens.iter().try_fold(root, |current, token| {
            let word = self.words.node_id(token.as_ref())?;
            self.node(current).child(word)
        })
    }

    pub(crate) fn attach_child(&mut self, parent: SequenceId, word: NodeId) -> SequenceId {
        let id = SequenceId::new(self.nodes.len());
        self.nodes.push(SequenceNode::new(word, parent));
        self.nodes[parent.index()].children.insert(word, id);
        id
    }

    fn register<S: AsRef<str>>(&mut self, tokens: &[S]) -> Vec<NodeId> {
        tokens
            .iter()
            .filter_map(|token| self.words.add_word(token.as_ref()))
            .collect()
    }

    fn insert_run(&mut self, run: &[NodeId]) {
        if run.is_empty() {
            return;
        }
        self.extend_path(SequenceId::FORWARD_ROOT, run.iter().copied());
        self.extend_path(SequenceId::REVERSE_ROOT, run.iter().rev().copied());
    }

    fn extend_path(&mut self, root: SequenceId, run: impl Iterator<Item = NodeId>) {
        let mut current = root;
        for word in run {
            current = match self.node(current).child(word) {
                Some(next) => {
                    self.nodes[next.index()].times_seen += 1;
                    next
                }
                None => self.attach_child(current, word),
            };
        }
    }

    /// Children of `id`, most frequent first, ties alphabetical by word
    fn ranked_children(&self, id: SequenceId) -> Vec<SequenceId> {
        let mut children: Vec<(SequenceId, usize, String)> = self
            .node(id)
            .children
            .values()
            .map(|&child| {
                let node = self.node(child);
                (child, node.times_seen, self.words.spell(node.word))
            })
            .collect();
        children.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));
        children.into_iter().map(|(child, _, _)| child).collect()
    }

    fn strongest_continuation(&self, root: SequenceId, tokens: &[&str]) -> Option<String> {
        let Some(id) = self.resolve(root, tokens) else {
            debug!("sequence '{}' was never observed", tokens.join(" "));
            return None;
        };

        let mut best: Option<(usize, String)> = None;
        for &child in self.node(id).children.values() {
            let node = self.node(child);
            let word = self.words.spell(node.word);
            let better = match &best {
                None => true,
                Some((best_seen, best_word)) => {
                    node.times_seen > *best_seen
                        || (node.times_seen == *best_seen && word < *best_word)
                }
            };
            if better {
                best = Some((node.times_seen, word));
            }
        }

        best.map(|(_, word)| word)
    }
}

impl Default for SequenceTrie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(ranked: &[RankedSequence]) -> Vec<&str> {
        ranked.iter().map(|entry| entry.sequence.as_str()).collect()
    }

    fn sample() -> SequenceTrie {
        let mut trie = SequenceTrie::new();
        trie.add_sequence("a b c");
        trie.add_sequence("a b c");
        trie.add_sequence("a b d");
        trie.add_sequence("a x");
        trie
    }

    #[test]
    fn add_sequence_registers_words() {
        let mut trie = SequenceTrie::new();
        trie.add_sequence("The cat  sat");

        assert!(trie.words().contains("the"));
        assert!(trie.words().contains("cat"));
        assert!(trie.words().contains("sat"));
        assert_eq!(trie.words().total_words(), 3);
    }

    #[test]
    fn repeated_runs_increment_times_seen() {
        let trie = sample();
        assert_eq!(trie.times_seen("a"), 4);
        assert_eq!(trie.times_seen("a b"), 3);
        assert_eq!(trie.times_seen("a b c"), 2);
        assert_eq!(trie.times_seen("a x"), 1);
        assert_eq!(trie.times_seen("b"), 0);
        assert_eq!(trie.times_seen("z"), 0);
    }

    #[test]
    fn next_word_picks_most_frequent() {
        let mut trie = SequenceTrie::new();
        trie.add_sequence("the cat sat");
        trie.add_sequence("the cat ran");
        trie.add_sequence("the cat sat");

        assert_eq!(trie.next_word("the cat").as_deref(), Some("sat"));
        assert_eq!(trie.next_word("the").as_deref(), Some("cat"));
    }

    #[test]
    fn next_word_tie_is_alphabetical() {
        let mut trie = SequenceTrie::new();
        trie.add_sequence("the cat sat");
        trie.add_sequence("the cat ran");

        assert_eq!(trie.next_word("the cat").as_deref(), Some("ran"));
    }

    #[test]
    fn next_word_prefers_later_higher_count() {
        // the running maximum must compare against the best so far
        let mut trie = SequenceTrie::new();
        trie.add_sequence("go a");
        trie.add_sequence("go b");
        trie.add_sequence("go b");
        trie.add_sequence("go c");
        trie.add_sequence("go c");
        trie.add_sequence("go c");

        assert_eq!(trie.next_word("go").as_deref(), Some("c"));
    }

    #[test]
    fn next_word_of_unknown_or_final_sequence() {
        let trie = sample();
        assert_eq!(trie.next_word("q"), None);
        assert_eq!(trie.next_word("a b c"), None);
        assert_eq!(trie.next_word("b c"), None);
    }

    #[test]
    fn next_word_from_empty_sequence_is_most_common_start() {
        let trie = sample();
        assert_eq!(trie.next_word("").as_deref(), Some("a"));
    }

    #[test]
    fn previous_word_reads_reverse_tree() {
        let mut trie = SequenceTrie::new();
        trie.add_sequence("the cat sat");
        trie.add_sequence("a cat sat");
        trie.add_sequence("the cat sat");

        assert_eq!(trie.previous_word("cat sat").as_deref(), Some("the"));
        assert_eq!(trie.previous_word("sat").as_deref(), Some("cat"));
        assert_eq!(trie.previous_word("the"), None);
    }

    #[test]
    fn ordered_sequences_from_root() {
        let trie = sample();
        let ranked = trie.ordered_sequences(&SequenceCriteria::default());

        assert_eq!(
            texts(&ranked),
            vec!["a", "a b", "a b c", "a b d", "a x"]
        );
        assert_eq!(ranked[0].times_seen, 4);
        assert_eq!(ranked[2].length, 3);
    }

    #[test]
    fn ordered_sequences_respects_length_bounds() {
        let trie = sample();
        let criteria = SequenceCriteria {
            length_min: 2,
            length_max: 2,
            ..SequenceCriteria::default()
        };

        assert_eq!(texts(&trie.ordered_sequences(&criteria)), vec!["a b", "a x"]);
    }

    #[test]
    fn ordered_sequences_from_starting_sequence() {
        let trie = sample();
        let ranked = trie.ordered_sequences(&SequenceCriteria::starting_at("A b"));

        assert_eq!(texts(&ranked), vec!["a b c", "a b d"]);
        assert_eq!(ranked[0].times_seen, 2);
    }

    #[test]
    fn ordered_sequences_unknown_start_is_empty() {
        let trie = sample();
        assert!(
            trie.ordered_sequences(&SequenceCriteria::starting_at("b"))
                .is_empty()
        );
        assert!(
            trie.ordered_sequences(&SequenceCriteria::starting_at("nope"))
                .is_empty()
        );
    }

    #[test]
    fn beam_limits_expansion() {
        // with a beam of one, only the strongest branch at each level is
        // explored; "a b d" and "a x" are skipped even though they exist
        let trie = sample();
        let criteria = SequenceCriteria {
            branching_factor: 1,
            ..SequenceCriteria::default()
        };

        assert_eq!(
            texts(&trie.ordered_sequences(&criteria)),
            vec!["a", "a b", "a b c"]
        );
    }

    #[test]
    fn zero_branching_factor_returns_nothing() {
        let trie = sample();
        let criteria = SequenceCriteria {
            branching_factor: 0,
            ..SequenceCriteria::default()
        };
        assert!(trie.ordered_sequences(&criteria).is_empty());
    }

    #[test]
    fn ranked_sequences_applies_frequency_bounds() {
        let trie = sample();
        let criteria = SequenceCriteria {
            frequency_min: 2,
            frequency_max: 3,
            ..SequenceCriteria::default()
        };

        let ranked = trie.ranked_sequences(&criteria);
        assert_eq!(texts(&ranked), vec!["a b", "a b c"]);
        assert!(ranked.iter().all(|entry| criteria.admits(entry.times_seen)));
    }

    #[test]
    fn backward_sequences_render_in_reading_order() {
        let trie = sample();
        let criteria = SequenceCriteria {
            direction: Direction::Backward,
            ..SequenceCriteria::starting_at("c")
        };

        assert_eq!(
            texts(&trie.ordered_sequences(&criteria)),
            vec!["a b c", "b c"]
        );
    }

    #[test]
    fn add_windows_slides_over_tokens() {
        let mut trie = SequenceTrie::new();
        trie.add_windows(&["a", "b", "c", "d"], 2);

        assert_eq!(trie.times_seen("a b"), 1);
        assert_eq!(trie.times_seen("b c"), 1);
        assert_eq!(trie.times_seen("c d"), 1);
        assert_eq!(trie.times_seen("a b c"), 0);
        // each token counted once despite appearing in two windows
        assert_eq!(trie.words().occurrences("b"), 1);
        assert_eq!(trie.words().total_words(), 4);
    }

    #[test]
    fn add_windows_short_stream_is_single_run() {
        let mut trie = SequenceTrie::new();
        trie.add_windows(&["only", "two"], 5);
        assert_eq!(trie.times_seen("only two"), 1);
        assert_eq!(trie.next_word("only").as_deref(), Some("two"));
    }

    #[test]
    fn empty_input_adds_nothing() {
        let mut trie = SequenceTrie::new();
        trie.add_sequence("   ");
        trie.add_windows::<&str>(&[], 3);
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 2);
    }

    #[test]
    fn parent_links_rebuild_sequence_text() {
        let trie = sample();
        let id = trie
            .resolve(SequenceId::FORWARD_ROOT, &["a", "b", "d"])
            .unwrap();
        assert_eq!(trie.sequence_text(id), "a b d");
        assert_eq!(trie.sequence_text(SequenceId::FORWARD_ROOT), "");
    }
}
