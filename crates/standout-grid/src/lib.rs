//! # Standout Grid - Bordered Text Tables with a Scrolling Viewer
//!
//! `standout-grid` renders rows of strings as aligned, bordered text and
//! lets users browse tables that are too wide for the terminal by scrolling
//! horizontally, one column per key press.
//!
//! ## Core Concepts
//!
//! - [`Table`]: column definitions plus validated rows; renders to a `String`
//! - [`Column`]: header, [`Align`], optional `max_width`, and [`Overflow`] policy
//! - [`TableStyle`]: [`BorderStyle`] glyph set plus optional row separators
//! - [`ScrollViewer`]: the interactive loop behind [`Table::view`]
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_grid::{BorderStyle, Column, Table};
//!
//! let mut table = Table::with_border(BorderStyle::Light);
//! table
//!     .add_column(Column::new("Name"))
//!     .add_column(Column::new("Age").center())
//!     .add_column(Column::new("Notes").max_width(10).wrap());
//!
//! table.add_row(["Ethan", "22", "likes long walks"]).unwrap();
//! table.add_row(["Amélie", "19", "-"]).unwrap();
//!
//! let output = table.render();
//! assert!(output.starts_with('┌'));
//! assert!(output.contains("│ Amélie │ 19  │ -          │"));
//! ```
//!
//! ## Overflow Modes
//!
//! - [`Overflow::Truncate`] - cut at `max_width` and end with `...`
//! - [`Overflow::Wrap`] - word-wrap to `max_width`; the row grows taller
//! - [`Overflow::Ignore`] - never limit; the column grows to fit
//!
//! ## Subset Rendering
//!
//! [`Table::render_columns`] draws any selection of columns. Widths are
//! computed for the selection only, while alignment and overflow always
//! come from the column's own definition:
//!
//! ```rust
//! use standout_grid::{Column, Table};
//!
//! let mut table = Table::default();
//! table.add_column(Column::new("a")).add_column(Column::new("b").right());
//! table.add_row(["x", "1"]).unwrap();
//!
//! assert_eq!(table.render_columns(&[1]), "| b |\n|---|\n| 1 |");
//! ```
//!
//! ## Interactive Viewing
//!
//! [`Table::view`] opens the viewer on the real terminal. Left/right arrows
//! (or `h`/`l`) scroll, `q` or Esc quits. See the [`viewer`] module for
//! running the same loop against custom screens and key sources.

mod border;
mod cell;
mod error;
mod layout;
mod table;
mod types;
mod util;
pub mod viewer;

pub use border::{
    render_line, render_separator, BorderRenderer, BorderStyle, LinePosition, TableStyle,
    EMPTY_SUBSET_MESSAGE,
};
pub use cell::{format_cell, wrap, ELLIPSIS};
pub use error::{Result, TableError};
pub use layout::{compute_widths, resolve_layout, ResolvedLayout, Slot};
pub use table::Table;
pub use types::{Align, Column, Overflow};
pub use util::{display_width, pad_aligned, pad_center, pad_left, pad_right, truncate_end};
pub use viewer::{
    render_frame, visible_window, Action, ConsoleScreen, KeySource, NavKey, RawModeGuard, Screen,
    ScrollViewer, TerminalKeys, ViewerConfig, ViewerState, ViewerStatus, Window,
};
