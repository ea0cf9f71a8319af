//! Display-width measurement, truncation, and padding helpers.
//!
//! Widths are terminal columns, not bytes: `"Amélie"` is 6 wide and CJK
//! characters count as 2.

use console::{measure_text_width, pad_str, Alignment};
use unicode_width::UnicodeWidthChar;

use crate::types::Align;

/// Returns the display width of a string.
///
/// # Example
///
/// ```rust
/// use standout_grid::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("Amélie"), 6);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Truncates a string from the end so it fits `max_width`, appending `marker`.
///
/// If the string already fits it is returned unchanged. When `max_width` is
/// narrower than the marker itself, only the leading part of the marker that
/// fits is returned.
///
/// # Example
///
/// ```rust
/// use standout_grid::truncate_end;
///
/// assert_eq!(truncate_end("ABCDEFGHIJKLM", 10, "..."), "ABCDEFG...");
/// assert_eq!(truncate_end("Data_0_12", 10, "..."), "Data_0_12");
/// assert_eq!(truncate_end("hello", 2, "..."), "..");
/// ```
pub fn truncate_end(s: &str, max_width: usize, marker: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let marker_width = display_width(marker);
    if max_width <= marker_width {
        return take_width(marker, max_width).to_string();
    }

    let mut result = take_width(s, max_width - marker_width).to_string();
    result.push_str(marker);
    result
}

/// Pads a string on the right (left-aligns) to reach `width`. Never truncates.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads a string on the left (right-aligns) to reach `width`. Never truncates.
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Centers a string within `width`; an odd remainder goes on the right.
///
/// ```rust
/// use standout_grid::pad_center;
///
/// assert_eq!(pad_center("22", 3), "22 ");
/// assert_eq!(pad_center("hi", 6), "  hi  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Pads `s` to `width` according to `align`.
pub fn pad_aligned(s: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => pad_right(s, width),
        Align::Center => pad_center(s, width),
        Align::Right => pad_left(s, width),
    }
}

/// Longest prefix of `s` whose display width is at most `max_width`.
pub(crate) fn take_width(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (offset, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            return &s[..offset];
        }
        used += w;
    }
    s
}

/// Splits `s` into consecutive pieces no wider than `max_width`.
///
/// A character wider than `max_width` still gets a piece of its own so the
/// loop always makes progress.
pub(crate) fn split_width(s: &str, max_width: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let mut head = take_width(rest, max_width);
        if head.is_empty() {
            let first = rest.chars().next().map_or(rest.len(), char::len_utf8);
            head = &rest[..first];
        }
        pieces.push(head);
        rest = &rest[head.len()..];
    }
    pieces
}
