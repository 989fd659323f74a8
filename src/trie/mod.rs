//! Word trie and its frequency ledger
//!
//! The trie owns its nodes in an arena; the ledger refers to terminal nodes
//! by [`NodeId`] and is kept in step with every structural change.

mod format;
mod ledger;
mod node;
mod word_trie;

pub(crate) use format::Tokens;
pub use ledger::{FrequencyLedger, RankedWord};
pub use node::{NodeId, TrieNode};
pub use word_trie::WordTrie;
