//! Formatting utilities for terminal output

/// Create a bar string of `width` cells filled in proportion to `value / max`
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.saturating_mul(width) / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Group the digits of `value` in threes
#[must_use]
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Render an inclusive bound, writing an unbounded maximum as `∞`
#[must_use]
pub fn format_bound(value: usize) -> String {
    if value == usize::MAX {
        "∞".to_string()
    } else {
        value.to_string()
    }
}
