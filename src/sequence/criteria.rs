//! Query parameters for ranking observed word sequences

/// Which of the two sequence trees a query walks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Words that follow the starting sequence
    #[default]
    Forward,
    /// Words that precede the starting sequence
    Backward,
}

/// Bounds for [`SequenceTrie::ordered_sequences`](super::SequenceTrie::ordered_sequences)
///
/// Lengths count every word of a returned sequence, starting sequence
/// included. Only the `branching_factor` most frequent continuations of
/// each node are explored, so results are a beam-limited approximation of
/// the true top sequences, not an exhaustive ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCriteria {
    pub starting_sequence: String,
    pub length_min: usize,
    pub length_max: usize,
    pub branching_factor: usize,
    pub frequency_min: usize,
    pub frequency_max: usize,
    pub direction: Direction,
}

impl SequenceCriteria {
    /// Default bounds, anchored at `sequence`
    #[must_use]
    pub fn starting_at(sequence: impl Into<String>) -> Self {
        Self {
            starting_sequence: sequence.into(),
            ..Self::default()
        }
    }

    /// Whether `times_seen` falls inside the frequency bounds
    #[inline]
    #[must_use]
    pub const fn admits(&self, times_seen: usize) -> bool {
        times_seen >= self.frequency_min && times_seen <= self.frequency_max
    }

    /// Tokens of the starting sequence in the order the selected tree
    /// stores them
    pub(crate) fn start_tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.starting_sequence.split_whitespace().collect();
        if self.direction == Direction::Backward {
            tokens.reverse();
        }
        tokens
    }
}

impl Default for SequenceCriteria {
    fn default() -> Self {
        Self {
            starting_sequence: String::new(),
            length_min: 1,
            length_max: 5,
            branching_factor: 10,
            frequency_min: 1,
            frequency_max: usize::MAX,
            direction: Direction::Forward,
        }
    }
}
