//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_load_summary, print_lookup, print_prediction, print_ranked_words, print_sequences,
    print_stats,
};
