//! Column width resolution.
//!
//! Widths are derived, never stored: every render recomputes them from the
//! live column and row set for the subset being drawn.

use tracing::debug;
use unicode_width::UnicodeWidthChar;

use crate::types::{Column, Overflow};
use crate::util::display_width;

/// One rendered column: its position in the table and its resolved width.
///
/// Widths are consumed in subset order while alignment, header, and overflow
/// policy are looked up by `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Index of the column in the table's column list.
    pub index: usize,
    /// Content width in display columns, excluding padding and borders.
    pub width: usize,
}

/// Resolved layout for one render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedLayout {
    /// One slot per rendered column, in render order.
    pub slots: Vec<Slot>,
}

impl ResolvedLayout {
    /// Widths in render order.
    pub fn widths(&self) -> Vec<usize> {
        self.slots.iter().map(|slot| slot.width).collect()
    }

    /// Original column indices in render order.
    pub fn indices(&self) -> Vec<usize> {
        self.slots.iter().map(|slot| slot.index).collect()
    }

    /// Number of rendered columns.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no column will be rendered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Resolve widths for the columns at `subset`, in the order given.
///
/// Indices past the end of `columns` are skipped.
pub fn resolve_layout<S: AsRef<str>>(
    columns: &[Column],
    rows: &[Vec<S>],
    subset: &[usize],
) -> ResolvedLayout {
    let slots = subset
        .iter()
        .filter_map(|&index| match columns.get(index) {
            Some(column) => Some(Slot {
                index,
                width: column_width(column, index, rows),
            }),
            None => {
                debug!(index, columns = columns.len(), "skipping out-of-range column");
                None
            }
        })
        .collect();

    ResolvedLayout { slots }
}

/// Widths for the columns at `subset`, one per valid index, in the order given.
///
/// # Example
///
/// ```rust
/// use standout_grid::{compute_widths, Column};
///
/// let columns = vec![Column::new("Name"), Column::new("Notes").max_width(12).wrap()];
/// let rows = vec![vec!["Amélie", "ok"]];
/// assert_eq!(compute_widths(&columns, &rows, &[0, 1]), vec![6, 12]);
/// assert_eq!(compute_widths(&columns, &rows, &[1]), vec![12]);
/// ```
pub fn compute_widths<S: AsRef<str>>(
    columns: &[Column],
    rows: &[Vec<S>],
    subset: &[usize],
) -> Vec<usize> {
    resolve_layout(columns, rows, subset).widths()
}

/// Width of a single column.
///
/// Wrap columns with a cap are cap-driven: their width is at least the cap
/// whether or not any cell reaches it, widened only when a single character
/// is wider than the cap. Everything else is content-driven, with truncating
/// columns counting each cell at most up to the cap.
fn column_width<S: AsRef<str>>(column: &Column, index: usize, rows: &[Vec<S>]) -> usize {
    let header = display_width(&column.header);

    // a zero cap never limits a cell
    let cap = column.max_width.filter(|&cap| cap > 0);

    match (column.overflow, cap) {
        (Overflow::Wrap, Some(cap)) => rows
            .iter()
            .filter_map(|row| row.get(index))
            .flat_map(|cell| cell.as_ref().chars())
            .map(|c| c.width().unwrap_or(0))
            .fold(header.max(cap), usize::max),
        (overflow, cap) => rows
            .iter()
            .filter_map(|row| row.get(index))
            .map(|cell| {
                let width = display_width(cell.as_ref());
                match (overflow, cap) {
                    (Overflow::Truncate, Some(cap)) => width.min(cap),
                    _ => width,
                }
            })
            .fold(header, usize::max),
    }
}
