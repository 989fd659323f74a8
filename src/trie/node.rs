//! Arena-backed trie nodes
//!
//! Nodes are addressed by [`NodeId`] rather than by reference. A parent owns
//! its children through the `children` map; the `parent` link is a plain id
//! and never keeps a node alive.

use std::collections::BTreeMap;
use std::fmt;

/// Stable handle to a node inside a [`WordTrie`](super::WordTrie)
///
/// Ids of released nodes are recycled, so a `NodeId` is only meaningful
/// while the node it was obtained from is still part of the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The sentinel root of every trie
    pub const ROOT: Self = Self(0);

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
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single character edge in the word trie
///
/// The root carries no character (`key == None`) and is never terminal.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    pub(crate) key: Option<char>,
    pub(crate) is_terminal: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: BTreeMap<char, NodeId>,
}

impl TrieNode {
    pub(crate) fn new(key: char, parent: NodeId) -> Self {
        Self {
            key: Some(key),
            is_terminal: false,
            parent: Some(parent),
            children: BTreeMap::new(),
        }
    }

    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// Character on the edge leading into this node
    #[inline]
    #[must_use]
    pub const fn key(&self) -> Option<char> {
        self.key
    }

    /// Whether a complete word ends here
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    #[inline]
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child reached through `key`, if any
    #[inline]
    #[must_use]
    pub fn child(&self, key: char) -> Option<NodeId> {
        self.children.get(&key).copied()
    }

    /// Children in ascending character order
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&key, &id)| (key, id))
    }

    #[inline]
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
