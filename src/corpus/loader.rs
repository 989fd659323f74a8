//! Corpus file loading
//!
//! Reads a text file, tokenizes it and feeds the tokens into a trie, with a
//! progress bar on stderr.

use super::tokenizer::{Tokenized, tokenize};
use crate::error::Result;
use crate::sequence::SequenceTrie;
use crate::trie::WordTrie;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Window length used when importing word runs from a corpus
pub const DEFAULT_WINDOW: usize = 10;

/// Outcome of loading one corpus file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub tokens: usize,
    pub markers_skipped: usize,
    pub elapsed: Duration,
}

/// Add every token of the file at `path` to `trie`
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordtrie::corpus::load_words;
/// use wordtrie::trie::WordTrie;
///
/// let mut trie = WordTrie::new();
/// let summary = load_words("data/book.txt", &mut trie).unwrap();
/// println!("Loaded {} tokens", summary.tokens);
/// ```
pub fn load_words<P: AsRef<Path>>(path: P, trie: &mut WordTrie) -> Result<LoadSummary> {
    let start = Instant::now();
    let path = path.as_ref();
    let Tokenized {
        tokens,
        markers_skipped,
    } = tokenize(&read_corpus(path)?);

    let pb = progress_bar(tokens.len(), "indexing words");
    for chunk in tokens.chunks(PROGRESS_CHUNK) {
        trie.extend(chunk);
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    let summary = LoadSummary {
        tokens: tokens.len(),
        markers_skipped,
        elapsed: start.elapsed(),
    };
    info!(
        "read {} tokens from {} ({} unique words) in {:.2?}",
        summary.tokens,
        path.display(),
        trie.unique_words(),
        summary.elapsed
    );
    Ok(summary)
}

/// Add every `window`-word run of the file at `path` to `trie`
///
/// Each token is also counted once in the trie's word dictionary.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_sequences<P: AsRef<Path>>(
    path: P,
    trie: &mut SequenceTrie,
    window: usize,
) -> Result<LoadSummary> {
    let start = Instant::now();
    let path = path.as_ref();
    let Tokenized {
        tokens,
        markers_skipped,
    } = tokenize(&read_corpus(path)?);

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("indexing {} tokens as {window}-word runs", tokens.len()));
    pb.enable_steady_tick(Duration::from_millis(100));
    trie.add_windows(&tokens, window);
    pb.finish_and_clear();

    let summary = LoadSummary {
        tokens: tokens.len(),
        markers_skipped,
        elapsed: start.elapsed(),
    };
    info!(
        "read {} tokens from {} ({} sequence nodes) in {:.2?}",
        summary.tokens,
        path.display(),
        trie.node_count(),
        summary.elapsed
    );
    Ok(summary)
}

const PROGRESS_CHUNK: usize = 4096;

/// Read a corpus file, replacing invalid UTF-8 sequences with U+FFFD
fn read_corpus(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(match String::from_utf8_lossy(&bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            warn!(
                "{} is not valid UTF-8; invalid bytes were replaced",
                path.display()
            );
            text
        }
    })
}

fn progress_bar(len: usize, message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb.set_message(message);
    pb
}
