//! Sequence prediction commands

use crate::sequence::{Direction, RankedSequence, SequenceCriteria, SequenceTrie};

/// Best neighbouring word for a sequence
pub struct PredictionResult {
    pub sequence: String,
    pub direction: Direction,
    pub word: Option<String>,
    pub times_seen: usize,
}

/// Ranked sequences together with the criteria that produced them
pub struct SequenceReport {
    pub criteria: SequenceCriteria,
    pub entries: Vec<RankedSequence>,
}

/// Most frequent word after (or before) `sequence`
#[must_use]
pub fn predict(trie: &SequenceTrie, sequence: &str, direction: Direction) -> PredictionResult {
    let word = match direction {
        Direction::Forward => trie.next_word(sequence),
        Direction::Backward => trie.previous_word(sequence),
    };

    PredictionResult {
        sequence: sequence.split_whitespace().collect::<Vec<_>>().join(" "),
        direction,
        word,
        times_seen: trie.times_seen(sequence),
    }
}

/// Beam-limited ranking filtered to the criteria's frequency bounds
#[must_use]
pub fn rank_sequences(trie: &SequenceTrie, criteria: SequenceCriteria) -> SequenceReport {
    let entries = trie.ranked_sequences(&criteria);
    SequenceReport { criteria, entries }
}
