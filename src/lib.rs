//! Word Trie
//!
//! A character trie that counts word occurrences, plus a word-sequence tree
//! built on top of it for next-word prediction.
//!
//! # Quick Start
//!
//! ```rust
//! use wordtrie::sequence::SequenceTrie;
//! use wordtrie::trie::WordTrie;
//!
//! let mut words = WordTrie::new();
//! words.add_word("apple");
//! words.add_word("Apple");
//! assert_eq!(words.occurrences("apple"), 2);
//!
//! let mut sequences = SequenceTrie::new();
//! sequences.add_sequence("the cat sat");
//! sequences.add_sequence("the cat sat");
//! sequences.add_sequence("the cat ran");
//! assert_eq!(sequences.next_word("the cat").as_deref(), Some("sat"));
//! ```

// Persistence errors
pub mod error;

// Character trie and frequency ledger
pub mod trie;

// Word-sequence prediction
pub mod sequence;

// Corpus tokenizing and loading
pub mod corpus;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, TrieError};
pub use sequence::{Direction, RankedSequence, SequenceCriteria, SequenceTrie};
pub use trie::{FrequencyLedger, NodeId, RankedWord, WordTrie};
