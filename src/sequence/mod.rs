//! Word-sequence prediction
//!
//! A [`SequenceTrie`] owns a [`WordTrie`](crate::trie::WordTrie) dictionary
//! and two trees of word runs over it: one read front to back, one back to
//! front.

mod criteria;
mod format;
mod node;
mod sequence_trie;

pub use criteria::{Direction, SequenceCriteria};
pub use node::{SequenceId, SequenceNode};
pub use sequence_trie::{RankedSequence, SequenceTrie};
