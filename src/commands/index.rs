//! Building tries for the CLI
//!
//! Word commands may start from a saved trie and then add a corpus on top
//! of it. Sequence commands always start empty.

use crate::corpus::{LoadSummary, load_sequences, load_words};
use crate::error::Result;
use crate::sequence::SequenceTrie;
use crate::trie::WordTrie;
use log::info;
use std::path::Path;

/// A word trie plus how its corpus was read
pub struct WordIndex {
    pub trie: WordTrie,
    pub summary: LoadSummary,
    pub restored_from: Option<String>,
}

/// Load `corpus` into a word trie, seeded from `index` when given
///
/// # Errors
///
/// Returns an error if the saved trie or the corpus cannot be read.
pub fn build_word_index(corpus: &Path, index: Option<&Path>) -> Result<WordIndex> {
    let mut trie = WordTrie::new();
    if let Some(saved) = index {
        trie.read_from_file(saved)?;
        info!(
            "starting from {} saved words in {}",
            trie.unique_words(),
            saved.display()
        );
    }
    let summary = load_words(corpus, &mut trie)?;

    Ok(WordIndex {
        trie,
        summary,
        restored_from: index.map(|path| path.display().to_string()),
    })
}

/// Load `corpus` into a sequence trie using `window`-word runs
///
/// # Errors
///
/// Returns an error if the corpus cannot be read.
pub fn build_sequence_index(corpus: &Path, window: usize) -> Result<(SequenceTrie, LoadSummary)> {
    let mut trie = SequenceTrie::new();
    let summary = load_sequences(corpus, &mut trie, window)?;
    Ok((trie, summary))
}
