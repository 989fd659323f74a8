//! Word Trie - CLI
//!
//! Index a plain-text corpus and query word frequencies or word-sequence
//! predictions from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::io::Write;
use std::path::{Path, PathBuf};
use wordtrie::{
    commands::{
        WordIndex, build_sequence_index, build_word_index, collect_stats, lookup_words, predict,
        rank_range, rank_sequences, rank_top,
    },
    corpus::DEFAULT_WINDOW,
    output::{
        print_load_summary, print_lookup, print_prediction, print_ranked_words, print_sequences,
        print_stats,
    },
    sequence::{Direction, SequenceCriteria},
};

#[derive(Parser)]
#[command(
    name = "wordtrie",
    about = "Word frequency trie and word-sequence predictor for plain text",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Saved word trie to start from before reading the corpus
    #[arg(short, long, global = true)]
    index: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show word counts and length statistics
    Stats {
        /// Text corpus to index
        file: PathBuf,
    },

    /// List the most frequent words
    Top {
        /// Text corpus to index
        file: PathBuf,

        /// Number of words to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// List words seen between --min and --max times
    Range {
        /// Text corpus to index
        file: PathBuf,

        #[arg(long, default_value = "1")]
        min: usize,

        #[arg(long, default_value_t = usize::MAX, hide_default_value = true)]
        max: usize,
    },

    /// Show occurrence counts of specific words
    Lookup {
        /// Text corpus to index
        file: PathBuf,

        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Index a corpus and save the word trie
    Save {
        /// Text corpus to index
        file: PathBuf,

        /// Destination for the saved trie
        out: PathBuf,
    },

    /// Predict the word most often following a sequence
    Next {
        /// Text corpus to index
        file: PathBuf,

        /// Words of the sequence
        #[arg(required = true)]
        sequence: Vec<String>,

        /// Words per indexed run
        #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
        window: usize,
    },

    /// Predict the word most often preceding a sequence
    Previous {
        /// Text corpus to index
        file: PathBuf,

        /// Words of the sequence
        #[arg(required = true)]
        sequence: Vec<String>,

        /// Words per indexed run
        #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
        window: usize,
    },

    /// Rank the most frequent word sequences
    Sequences {
        /// Text corpus to index
        file: PathBuf,

        /// Only sequences starting (or ending, backward) with these words
        #[arg(short, long, default_value = "")]
        start: String,

        /// Minimum words per sequence, starting words included
        #[arg(long, default_value = "1")]
        min_length: usize,

        /// Maximum words per sequence, starting words included
        #[arg(long, default_value = "5")]
        max_length: usize,

        /// Continuations explored per node
        #[arg(short, long, default_value = "10")]
        branching: usize,

        #[arg(long, default_value = "1")]
        min_seen: usize,

        #[arg(long)]
        max_seen: Option<usize>,

        /// Read sequences forward or backward from the start
        #[arg(short, long, value_enum, default_value = "forward")]
        direction: DirectionArg,

        /// Words per indexed run
        #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
        window: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Forward,
    Backward,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Forward => Self::Forward,
            DirectionArg::Backward => Self::Backward,
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, _) => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let index = cli.index.as_deref();

    match cli.command {
        Commands::Stats { file } => {
            let words = load_word_index(&file, index)?;
            print_stats(&collect_stats(&words.trie));
        }
        Commands::Top { file, count } => {
            let words = load_word_index(&file, index)?;
            print_ranked_words(&rank_top(&words.trie, count));
        }
        Commands::Range { file, min, max } => {
            if min > max {
                anyhow::bail!("--min ({min}) must not exceed --max ({max})");
            }
            let words = load_word_index(&file, index)?;
            print_ranked_words(&rank_range(&words.trie, min, max));
        }
        Commands::Lookup { file, words } => {
            let index = load_word_index(&file, index)?;
            print_lookup(&lookup_words(&index.trie, &words));
        }
        Commands::Save { file, out } => run_save_command(&file, index, &out)?,
        Commands::Next {
            file,
            sequence,
            window,
        } => run_predict_command(&file, &sequence, window, Direction::Forward)?,
        Commands::Previous {
            file,
            sequence,
            window,
        } => run_predict_command(&file, &sequence, window, Direction::Backward)?,
        Commands::Sequences {
            file,
            start,
            min_length,
            max_length,
            branching,
            min_seen,
            max_seen,
            direction,
            window,
        } => {
            let criteria = SequenceCriteria {
                starting_sequence: start,
                length_min: min_length,
                length_max: max_length,
                branching_factor: branching,
                frequency_min: min_seen,
                frequency_max: max_seen.unwrap_or(usize::MAX),
                direction: direction.into(),
            };
            run_sequences_command(&file, criteria, window)?;
        }
    }

    Ok(())
}

fn load_word_index(file: &Path, index: Option<&Path>) -> Result<WordIndex> {
    let words = build_word_index(file, index)
        .with_context(|| format!("failed to index {}", file.display()))?;
    print_load_summary(&words.summary, words.restored_from.as_deref());
    Ok(words)
}

fn run_save_command(file: &Path, index: Option<&Path>, out: &Path) -> Result<()> {
    let words = load_word_index(file, index)?;
    words
        .trie
        .write_to_file(out)
        .with_context(|| format!("failed to save trie to {}", out.display()))?;
    println!(
        "Saved {} unique words to {}",
        words.trie.unique_words(),
        out.display()
    );
    Ok(())
}

fn run_predict_command(
    file: &Path,
    sequence: &[String],
    window: usize,
    direction: Direction,
) -> Result<()> {
    let (trie, summary) = build_sequence_index(file, window)
        .with_context(|| format!("failed to index {}", file.display()))?;
    print_load_summary(&summary, None);
    print_prediction(&predict(&trie, &sequence.join(" "), direction));
    Ok(())
}

fn run_sequences_command(file: &Path, criteria: SequenceCriteria, window: usize) -> Result<()> {
    let (trie, summary) = build_sequence_index(file, window)
        .with_context(|| format!("failed to index {}", file.display()))?;
    print_load_summary(&summary, None);
    print_sequences(&rank_sequences(&trie, criteria));
    Ok(())
}
