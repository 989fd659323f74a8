//! Nodes of the word-sequence tree

use crate::trie::NodeId;
use rustc_hash::FxHashMap;

/// Handle to a node in a [`SequenceTrie`](super::SequenceTrie)
///
/// Sequence nodes are never released, so ids stay valid for the lifetime
/// of the trie that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SequenceId(usize);

impl SequenceId {
    pub const FORWARD_ROOT: Self = Self(0);
    pub const REVERSE_ROOT: Self = Self(1);

    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_root(self) -> bool {
        self.0 <= 1
    }
}

/// One word position in an observed run of words
///
/// Edges are keyed by the terminal [`NodeId`] of the next word in the
/// owning trie's dictionary, not by characters.
#[derive(Debug, Clone)]
pub struct SequenceNode {
    pub(crate) word: NodeId,
    pub(crate) times_seen: usize,
    pub(crate) parent: Option<SequenceId>,
    pub(crate) children: FxHashMap<NodeId, SequenceId>,
}

impl SequenceNode {
    pub(crate) fn new(word: NodeId, parent: SequenceId) -> Self {
        Self {
            word,
            times_seen: 1,
            parent: Some(parent),
            children: FxHashMap::default(),
        }
    }

    pub(crate) fn root() -> Self {
        Self {
            word: NodeId::ROOT,
            times_seen: 0,
            parent: None,
            children: FxHashMap::default(),
        }
    }

    /// Terminal node of this position's word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> NodeId {
        self.word
    }

    /// How many inserted runs passed through this node
    #[inline]
    #[must_use]
    pub const fn times_seen(&self) -> usize {
        self.times_seen
    }

    #[inline]
    #[must_use]
    pub const fn parent(&self) -> Option<SequenceId> {
        self.parent
    }

    /// Continuation reached through `word`, if it was ever observed
    #[inline]
    #[must_use]
    pub fn child(&self, word: NodeId) -> Option<SequenceId> {
        self.children.get(&word).copied()
    }

    #[inline]
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}
