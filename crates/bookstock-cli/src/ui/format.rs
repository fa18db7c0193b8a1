//! String formatting utilities for UI rendering.

use std::fmt;

/// Placeholder shown for books without a genre.
pub const NO_GENRE: &str = "(no genre)";

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format a price with two decimals and the configured currency symbol.
pub fn format_price(price: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, price)
}

/// Display name for an optional genre.
pub fn format_genre(genre: Option<&str>) -> &str {
    genre.unwrap_or(NO_GENRE)
}

/// Pluralize a count ("1 title", "3 titles").
pub fn count_noun<N>(count: N, singular: &str, plural: &str) -> String
where
    N: fmt::Display + PartialEq + From<u8>,
{
    if count == N::from(1) {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
