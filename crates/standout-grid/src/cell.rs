//! Cell formatting: turns one cell's text into its display lines.

use crate::types::Overflow;
use crate::util::{display_width, split_width, truncate_end};

/// Marker appended to truncated cells.
pub const ELLIPSIS: &str = "...";

/// Format a cell's text into one or more display lines.
///
/// `limit` is the column's width cap. With no cap (or a zero cap), or with
/// [`Overflow::Ignore`], the text is returned as a single unchanged line.
///
/// - [`Overflow::Truncate`]: text wider than `limit` keeps its first
///   `limit - 3` columns followed by `...`. Caps below 3 yield the leading
///   part of the marker only, so the result is never wider than `limit`.
/// - [`Overflow::Wrap`]: greedy word wrap. A word wider than `limit` starts
///   its own line and is split into `limit`-wide pieces.
///
/// The result always holds at least one line; wrapping an empty string gives
/// `[""]`.
///
/// # Example
///
/// ```rust
/// use standout_grid::{format_cell, Overflow};
///
/// assert_eq!(
///     format_cell("ABCDEFGHIJKLM", Some(10), Overflow::Truncate),
///     vec!["ABCDEFG..."]
/// );
/// assert_eq!(
///     format_cell("hello world foo bar", Some(11), Overflow::Wrap),
///     vec!["hello world", "foo bar"]
/// );
/// ```
pub fn format_cell(text: &str, limit: Option<usize>, mode: Overflow) -> Vec<String> {
    let limit = match limit {
        Some(limit) if limit > 0 => limit,
        _ => return vec![text.to_string()],
    };

    match mode {
        Overflow::Ignore => vec![text.to_string()],
        Overflow::Truncate => vec![truncate_end(text, limit, ELLIPSIS)],
        Overflow::Wrap => wrap(text, limit),
    }
}

/// Greedy word wrap to lines no wider than `width`.
///
/// Spacing between words on the same line is kept as written; whitespace
/// characters other than space become spaces. Whitespace at a line break is
/// dropped, as is leading whitespace on every line after the first.
///
/// ```rust
/// use standout_grid::wrap;
///
/// assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
/// assert_eq!(wrap("a   b", 10), vec!["a   b"]);
/// assert_eq!(wrap("", 10), vec![""]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let text: String = text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for chunk in chunks(&text) {
        let chunk_width = display_width(chunk);

        if chunk.starts_with(' ') {
            if current.is_empty() && !lines.is_empty() {
                continue;
            }
            if current_width + chunk_width > width {
                finish_line(&mut lines, &mut current);
                current_width = 0;
            } else {
                current.push_str(chunk);
                current_width += chunk_width;
            }
            continue;
        }

        if current_width + chunk_width <= width {
            current.push_str(chunk);
            current_width += chunk_width;
            continue;
        }

        finish_line(&mut lines, &mut current);
        if chunk_width <= width {
            current.push_str(chunk);
            current_width = chunk_width;
            continue;
        }

        let mut pieces = split_width(chunk, width);
        // The last piece may still share a line with following words.
        let last = pieces.pop().unwrap_or_default();
        lines.extend(pieces.into_iter().map(str::to_string));
        current.push_str(last);
        current_width = display_width(last);
    }

    finish_line(&mut lines, &mut current);
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Push `current` as a line without its trailing spaces, unless nothing is left.
fn finish_line(lines: &mut Vec<String>, current: &mut String) {
    let line = std::mem::take(current);
    let trimmed = line.trim_end_matches(' ');
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
}

/// Split into alternating runs of spaces and non-spaces.
fn chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (offset, c) in text.char_indices() {
        let is_space = c == ' ';
        if in_space.is_some_and(|prev| prev != is_space) {
            chunks.push(&text[start..offset]);
            start = offset;
        }
        in_space = Some(is_space);
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}
