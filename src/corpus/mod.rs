//! Text corpus import

mod loader;
mod tokenizer;

pub use loader::{DEFAULT_WINDOW, LoadSummary, load_sequences, load_words};
pub use tokenizer::{PAGE_BREAK, Tokenized, tokenize};
