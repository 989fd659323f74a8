//! Error types for trie persistence
//!
//! Lookups and removals never fail: a missing word, prefix or sequence is
//! reported through a sentinel return value and a log diagnostic. Only
//! reading and writing the persisted format can produce a [`TrieError`].

use std::io;
use thiserror::Error;

/// Errors produced while saving or loading a trie
#[derive(Error, Debug)]
pub enum TrieError {
    /// The underlying file or stream failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input does not follow the persisted layout
    #[error("malformed trie data at token {token}: {message}")]
    Format { token: usize, message: String },

    /// A sequence record names a word the word section does not contain
    #[error("sequence data references unknown word '{0}'")]
    UnknownWord(String),
}

impl TrieError {
    pub(crate) fn format(token: usize, message: impl Into<String>) -> Self {
        Self::Format {
            token,
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TrieError>;
