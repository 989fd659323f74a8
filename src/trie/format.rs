//! Plain-text persistence for [`WordTrie`]
//!
//! Layout (whitespace-delimited):
//!
//! ```text
//! <root_child_count> <unique_words> <total_words>
//! <char> <occurrence_count_or_0> <child_count>    pre-order, one per node
//! ```
//!
//! Counts are restored straight into the ledger, so a written trie reads
//! back with identical per-word occurrences.

use super::node::NodeId;
use super::word_trie::{WordTrie, fold};
use crate::error::{Result, TrieError};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::str::SplitWhitespace;

/// Whitespace token cursor that remembers its position for error reports
pub(crate) struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    pub(crate) const fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn next_token(&mut self, what: &str) -> Result<&'a str> {
        self.position += 1;
        self.inner
            .next()
            .ok_or_else(|| TrieError::format(self.position, format!("missing {what}")))
    }

    pub(crate) fn next_count(&mut self, what: &str) -> Result<usize> {
        let token = self.next_token(what)?;
        token.parse().map_err(|_| {
            TrieError::format(self.position, format!("expected {what}, found '{token}'"))
        })
    }

    fn next_char(&mut self, what: &str) -> Result<char> {
        let token = self.next_token(what)?;
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ch),
            _ => Err(TrieError::format(
                self.position,
                format!("expected a single {what}, found '{token}'"),
            )),
        }
    }

    /// Fail if anything but whitespace remains
    pub(crate) fn finish(mut self) -> Result<()> {
        match self.inner.next() {
            Some(extra) => Err(TrieError::format(
                self.position + 1,
                format!("unexpected trailing data '{extra}'"),
            )),
            None => Ok(()),
        }
    }
}

impl WordTrie {
    /// Write the trie in pre-order to `writer`
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let root = self.node(NodeId::ROOT);
        writeln!(
            writer,
            "{} {} {}",
            root.child_count(),
            self.unique_words,
            self.total_words
        )?;

        let mut stack: Vec<NodeId> = root.children.values().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            let key = node.key.unwrap_or_default();
            writeln!(
                writer,
                "{key} {} {}",
                self.ledger.occurrences(id),
                node.child_count()
            )?;
            stack.extend(node.children.values().rev().copied());
        }

        Ok(())
    }

    /// Build a trie from data produced by [`WordTrie::write_to`]
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::Format`] if the data is truncated, has trailing
    /// tokens, repeats a child character, holds a record that neither ends a
    /// word nor has children, has counts whose sum overflows, or its header
    /// totals disagree with the node records. I/O failures are returned as
    /// [`TrieError::Io`].
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let mut tokens = Tokens::new(&text);
        let trie = Self::parse(&mut tokens)?;
        tokens.finish()?;
        Ok(trie)
    }

    /// Parse one trie section, leaving the cursor just past its last record
    pub(crate) fn parse(tokens: &mut Tokens<'_>) -> Result<Self> {
        let root_children = tokens.next_count("root child count")?;
        let unique_words = tokens.next_count("unique word count")?;
        let total_words = tokens.next_count("total word count")?;

        let mut trie = Self::new();
        let mut pending: Vec<(NodeId, usize)> = vec![(NodeId::ROOT, root_children)];

        while let Some(top) = pending.last_mut() {
            if top.1 == 0 {
                pending.pop();
                continue;
            }
            top.1 -= 1;
            let parent = top.0;

            let key = fold(tokens.next_char("node character")?);
            let occurrences = tokens.next_count("occurrence count")?;
            let children = tokens.next_count("child count")?;

            if trie.node(parent).child(key).is_some() {
                return Err(TrieError::format(
                    tokens.position(),
                    format!("duplicate child '{key}'"),
                ));
            }

            if occurrences == 0 && children == 0 {
                return Err(TrieError::format(
                    tokens.position(),
                    format!("node '{key}' ends no word and has no children"),
                ));
            }
            if trie.total_words.checked_add(occurrences).is_none() {
                return Err(TrieError::format(
                    tokens.position(),
                    "occurrence counts overflow",
                ));
            }

            let id = trie.attach_child(parent, key);
            if occurrences > 0 {
                trie.mark_terminal(id, occurrences);
            }
            pending.push((id, children));
        }

        if trie.unique_words != unique_words || trie.total_words != total_words {
            return Err(TrieError::format(
                tokens.position(),
                format!(
                    "header declares {unique_words} unique / {total_words} total words, \
                     records hold {} / {}",
                    trie.unique_words, trie.total_words
                ),
            ));
        }

        Ok(trie)
    }

    /// Save the trie to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        info!(
            "saved {} unique words to {}",
            self.unique_words,
            path.display()
        );
        Ok(())
    }

    /// Replace this trie with the one stored at `path`
    ///
    /// On any error `self` is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is malformed.
    pub fn read_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let loaded = Self::read_from(File::open(path)?)?;
        info!(
            "loaded {} unique words from {}",
            loaded.unique_words,
            path.display()
        );
        *self = loaded;
        Ok(())
    }
}
