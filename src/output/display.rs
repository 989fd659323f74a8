//! Display functions for command results

use super::formatters::{create_progress_bar, format_bound, format_count};
use crate::commands::{LookupEntry, PredictionResult, RankResult, SequenceReport, StatsResult};
use crate::corpus::LoadSummary;
use crate::sequence::Direction;
use colored::Colorize;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print how a corpus file was read
pub fn print_load_summary(summary: &LoadSummary, restored_from: Option<&str>) {
    if let Some(path) = restored_from {
        println!("Restored saved trie from {}", path.bright_yellow());
    }
    println!(
        "Read {} tokens in {:.2}s ({} page breaks skipped)",
        format_count(summary.tokens).bright_yellow(),
        summary.elapsed.as_secs_f64(),
        summary.markers_skipped
    );
}

/// Print the summary figures of a word trie
pub fn print_stats(stats: &StatsResult) {
    print_header("TRIE STATISTICS");

    println!("\n📊 {}", "Words:".bright_cyan().bold());
    println!(
        "   Unique words:     {}",
        format_count(stats.unique_words).bright_yellow().bold()
    );
    println!("   Total words:      {}", format_count(stats.total_words));
    println!("   Trie nodes:       {}", format_count(stats.node_count));

    println!("\n📏 {}", "Lengths:".bright_cyan().bold());
    println!(
        "   Longest word:     {} ({} letters)",
        stats.longest_word.green(),
        stats.longest_length
    );
    println!("   Shortest length:  {}", stats.shortest_length);

    if let Some(top) = &stats.most_common {
        println!(
            "\n🏆 Most common:      {} ({} times)",
            top.word.bright_yellow().bold(),
            format_count(top.occurrences)
        );
    }
}

/// Print ranked words as a `Rank | Frequency | String` table
pub fn print_ranked_words(result: &RankResult) {
    print_header(&result.title);

    if result.entries.is_empty() {
        println!("\n{}", "No words matched.".yellow());
        return;
    }

    let max = result.entries.first().map_or(0, |entry| entry.occurrences);
    println!(
        "\n {:>5} | {:>10} | {:<20} | {}",
        "Rank".bold(),
        "Frequency".bold(),
        "String".bold(),
        "Share".bold()
    );
    println!("{}", "─".repeat(60).cyan());
    for (i, entry) in result.entries.iter().enumerate() {
        println!(
            " {:>5} | {:>10} | {:<20} | {}",
            i + 1,
            format_count(entry.occurrences),
            entry.word,
            create_progress_bar(entry.occurrences, max, 15).green()
        );
    }
}

/// Print occurrence counts for looked-up words
pub fn print_lookup(entries: &[LookupEntry]) {
    print_header("WORD LOOKUP");
    println!();
    for entry in entries {
        if entry.found() {
            println!(
                "   {:<20} {}",
                entry.word.green(),
                format_count(entry.occurrences).bright_yellow()
            );
        } else {
            println!("   {:<20} {}", entry.word.red(), "not found".dimmed());
        }
    }
}

/// Print a next/previous word prediction
pub fn print_prediction(result: &PredictionResult) {
    let (label, arrow) = match result.direction {
        Direction::Forward => ("NEXT WORD", "→"),
        Direction::Backward => ("PREVIOUS WORD", "←"),
    };
    print_header(label);

    println!(
        "\nSequence: {} (seen {} times)",
        result.sequence.bright_yellow().bold(),
        format_count(result.times_seen)
    );
    match &result.word {
        Some(word) => println!("   {arrow} {}", word.green().bold()),
        None => println!("   {arrow} {}", "no observed continuation".red()),
    }
}

/// Print ranked sequences with the criteria that produced them
pub fn print_sequences(report: &SequenceReport) {
    print_header("RANKED SEQUENCES");

    let criteria = &report.criteria;
    let start = if criteria.starting_sequence.trim().is_empty() {
        "(any)"
    } else {
        criteria.starting_sequence.as_str()
    };
    println!("\n   Start:      {}", start.bright_yellow());
    println!("   Direction:  {:?}", criteria.direction);
    println!(
        "   Length:     {}..={}  Frequency: {}..={}  Branching: {}",
        criteria.length_min,
        format_bound(criteria.length_max),
        criteria.frequency_min,
        format_bound(criteria.frequency_max),
        criteria.branching_factor
    );

    if report.entries.is_empty() {
        println!("\n{}", "No sequences matched.".yellow());
        return;
    }

    println!(
        "\n {:>5} | {:>10} | {:>6} | {}",
        "Rank".bold(),
        "Seen".bold(),
        "Words".bold(),
        "Sequence".bold()
    );
    println!("{}", "─".repeat(60).cyan());
    for (i, entry) in report.entries.iter().enumerate() {
        println!(
            " {:>5} | {:>10} | {:>6} | {}",
            i + 1,
            format_count(entry.times_seen),
            entry.length,
            entry.sequence
        );
    }
}
