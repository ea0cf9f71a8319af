//! Pure viewer logic: which columns fit, and how keys move the window.
//!
//! Nothing here touches the terminal, so every transition can be exercised
//! with plain values.

use std::fmt;
use std::ops::Range;

use tracing::trace;

use super::config::ViewerConfig;
use super::keys::NavKey;
use crate::table::Table;
use crate::types::Column;
use crate::util::display_width;

/// The contiguous range of columns shown in one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Window {
    /// First visible column.
    pub start: usize,
    /// Number of visible columns.
    pub len: usize,
}

impl Window {
    /// One past the last visible column.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Visible column indices as a range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Visible column indices, ascending.
    pub fn indices(&self) -> Vec<usize> {
        self.range().collect()
    }

    /// Check if no column is visible.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Compute which columns fit in `terminal_width`, starting at `start`.
///
/// Columns are taken greedily. Each one is estimated at
/// `max(header width, min_column_width) + per_column_overhead` and added
/// while the running total, seeded with `border_overhead`, stays strictly
/// below `terminal_width`. The first column that does not fit ends the
/// window. If not even one fits, one is shown anyway.
///
/// # Example
///
/// ```rust
/// use standout_grid::{visible_window, Column, ViewerConfig};
///
/// let columns: Vec<Column> = (1..=39).map(|i| Column::new(format!("Column_{}", i))).collect();
/// let window = visible_window(&columns, 0, 80, &ViewerConfig::default());
/// assert_eq!(window.start, 0);
/// assert_eq!(window.len, 6);
/// ```
pub fn visible_window(
    columns: &[Column],
    start: usize,
    terminal_width: usize,
    config: &ViewerConfig,
) -> Window {
    if columns.is_empty() {
        return Window::default();
    }
    let start = start.min(columns.len() - 1);

    let mut used = config.border_overhead;
    let mut len = 0;
    for column in &columns[start..] {
        let cost = display_width(&column.header).max(config.min_column_width)
            + config.per_column_overhead;
        if used + cost >= terminal_width {
            break;
        }
        used += cost;
        len += 1;
    }

    if len == 0 {
        trace!(start, terminal_width, "no column fits, forcing one");
        len = 1;
    }

    Window { start, len }
}

/// What the last key did, shown in the viewer's footer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Action {
    /// No key has been read yet.
    #[default]
    Started,
    /// The window moved one column right.
    ScrolledRight,
    /// `right` was pressed with the last column already visible.
    EndReached,
    /// The window moved one column left.
    ScrolledLeft,
    /// `left` was pressed on the first column.
    AlreadyAtStart,
    /// The key has no binding.
    Ignored,
    /// The viewer is closing.
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Action::Started => "ready",
            Action::ScrolledRight => "scrolled right",
            Action::EndReached => "end reached",
            Action::ScrolledLeft => "scrolled left",
            Action::AlreadyAtStart => "already at start",
            Action::Ignored => "ignored",
            Action::Quit => "quit",
        };
        f.write_str(text)
    }
}

/// Whether the viewer loop keeps going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerStatus {
    Running,
    Exited,
}

/// Scroll position of the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerState {
    start_column: usize,
    total_columns: usize,
    last_action: Action,
}

impl ViewerState {
    /// Start at the first column of a table with `total_columns` columns.
    pub fn new(total_columns: usize) -> Self {
        ViewerState {
            start_column: 0,
            total_columns,
            last_action: Action::Started,
        }
    }

    /// First column of the window.
    pub fn start_column(&self) -> usize {
        self.start_column
    }

    /// Total number of columns in the table.
    pub fn total_columns(&self) -> usize {
        self.total_columns
    }

    /// What the most recent key did.
    pub fn last_action(&self) -> Action {
        self.last_action
    }

    /// Apply one key against the window that was on screen when it was read.
    ///
    /// `right` and `left` move by a single column, not a page.
    pub fn apply(&mut self, key: NavKey, window: Window) -> ViewerStatus {
        let action = match key {
            NavKey::Quit => Action::Quit,
            NavKey::Right if self.start_column + window.len < self.total_columns => {
                self.start_column += 1;
                Action::ScrolledRight
            }
            NavKey::Right => Action::EndReached,
            NavKey::Left if self.start_column > 0 => {
                self.start_column -= 1;
                Action::ScrolledLeft
            }
            NavKey::Left => Action::AlreadyAtStart,
            NavKey::None => Action::Ignored,
        };
        trace!(?key, %action, start = self.start_column, "viewer transition");
        self.last_action = action;

        if action == Action::Quit {
            ViewerStatus::Exited
        } else {
            ViewerStatus::Running
        }
    }
}

/// Compose one frame: status line, the visible slice of the table, footer.
pub fn render_frame(table: &Table, state: &ViewerState, window: Window) -> String {
    let status = if window.is_empty() {
        "No columns".to_string()
    } else {
        format!(
            "Columns {}-{} of {}",
            window.start + 1,
            window.end(),
            state.total_columns()
        )
    };

    format!(
        "{}  (←/→ scroll, q quit)\n\n{}\n\nLast action: {}",
        status,
        table.render_columns(&window.indices()),
        state.last_action()
    )
}
