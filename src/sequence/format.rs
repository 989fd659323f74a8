//! Plain-text persistence for [`SequenceTrie`]
//!
//! The word dictionary is written first in the [`WordTrie`] layout, then
//! the forward and reverse trees:
//!
//! ```text
//! <word trie section>
//! <forward_root_child_count>
//! <word> <times_seen> <child_count>    pre-order, one per node
//! <reverse_root_child_count>
//! <word> <times_seen> <child_count>
//! ```

use super::node::SequenceId;
use super::sequence_trie::SequenceTrie;
use crate::error::{Result, TrieError};
use crate::trie::{Tokens, WordTrie};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

impl SequenceTrie {
    /// Write the dictionary and both sequence trees to `writer`
    ///
    /// Siblings are written in word order so equal tries produce equal
    /// output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.words.write_to(writer)?;
        for root in [SequenceId::FORWARD_ROOT, SequenceId::REVERSE_ROOT] {
            self.write_section(writer, root)?;
        }
        Ok(())
    }

    fn write_section<W: Write>(&self, writer: &mut W, root: SequenceId) -> Result<()> {
        writeln!(writer, "{}", self.node(root).child_count())?;

        let mut stack = self.children_by_word(root);
        stack.reverse();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            writeln!(
                writer,
                "{} {} {}",
                self.words.spell(node.word),
                node.times_seen,
                node.child_count()
            )?;
            stack.extend(self.children_by_word(id).into_iter().rev());
        }

        Ok(())
    }

    fn children_by_word(&self, id: SequenceId) -> Vec<SequenceId> {
        let mut children: Vec<(String, SequenceId)> = self
            .node(id)
            .children
            .iter()
            .map(|(&word, &child)| (self.words.spell(word), child))
            .collect();
        children.sort_unstable();
        children.into_iter().map(|(_, child)| child).collect()
    }

    /// Build a sequence trie from data produced by [`SequenceTrie::write_to`]
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::UnknownWord`] if a sequence record names a word
    /// missing from the dictionary section, [`TrieError::Format`] for any
    /// other structural problem, and [`TrieError::Io`] if reading fails.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let mut tokens = Tokens::new(&text);

        let mut trie = Self {
            words: WordTrie::parse(&mut tokens)?,
            ..Self::new()
        };
        for root in [SequenceId::FORWARD_ROOT, SequenceId::REVERSE_ROOT] {
            trie.parse_section(&mut tokens, root)?;
        }
        tokens.finish()?;

        Ok(trie)
    }

    fn parse_section(&mut self, tokens: &mut Tokens<'_>, root: SequenceId) -> Result<()> {
        let root_children = tokens.next_count("root child count")?;
        let mut pending: Vec<(SequenceId, usize)> = vec![(root, root_children)];

        while let Some(top) = pending.last_mut() {
            if top.1 == 0 {
                pending.pop();
                continue;
            }
            top.1 -= 1;
            let parent = top.0;

            let text = tokens.next_token("word")?;
            let word = self
                .words
                .node_id(text)
                .ok_or_else(|| TrieError::UnknownWord(text.to_string()))?;
            let times_seen = tokens.next_count("times seen")?;
            let children = tokens.next_count("child count")?;

            if times_seen == 0 {
                return Err(TrieError::format(
                    tokens.position(),
                    format!("sequence word '{text}' was never seen"),
                ));
            }
            if self.node(parent).child(word).is_some() {
                return Err(TrieError::format(
                    tokens.position(),
                    format!("duplicate sequence word '{text}'"),
                ));
            }

            let id = self.attach_child(parent, word);
            self.nodes[id.index()].times_seen = times_seen;
            pending.push((id, children));
        }

        Ok(())
    }

    /// Save the dictionary and both trees to `path`
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
            "saved {} sequence nodes to {}",
            self.node_count(),
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
            "loaded {} sequence nodes from {}",
            loaded.node_count(),
            path.display()
        );
        *self = loaded;
        Ok(())
    }
}
