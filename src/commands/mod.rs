//! Command implementations

pub mod index;
pub mod predict;
pub mod rank;
pub mod stats;

pub use index::{WordIndex, build_sequence_index, build_word_index};
pub use predict::{PredictionResult, SequenceReport, predict, rank_sequences};
pub use rank::{LookupEntry, RankResult, lookup_words, rank_range, rank_top};
pub use stats::{StatsResult, collect_stats};
