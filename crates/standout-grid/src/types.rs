//! Core types for table configuration.
//!
//! This module defines the column definition used by every render: header
//! text, alignment, and how a cell that exceeds the column's width cap is
//! handled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Center text (pad on both sides, extra space on the right).
    Center,
    /// Right-align text (pad on the left).
    Right,
}

impl FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "center" | "centre" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            other => Err(format!("unknown alignment '{}'", other)),
        }
    }
}

/// How a column handles content wider than its `max_width`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Cut the text and end it with `...`.
    #[default]
    Truncate,
    /// Word-wrap the text onto multiple lines.
    Wrap,
    /// Never limit the text; the column grows to fit.
    Ignore,
}

impl FromStr for Overflow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "truncate" => Ok(Overflow::Truncate),
            "wrap" => Ok(Overflow::Wrap),
            "ignore" => Ok(Overflow::Ignore),
            other => Err(format!("unknown overflow mode '{}'", other)),
        }
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Overflow::Truncate => "truncate",
            Overflow::Wrap => "wrap",
            Overflow::Ignore => "ignore",
        };
        f.write_str(name)
    }
}

/// A column definition.
///
/// Columns are identified by their position in the table, not by header:
/// two columns may share a header text.
///
/// # Example
///
/// ```rust
/// use standout_grid::{Align, Column, Overflow};
///
/// let col = Column::new("Description").max_width(20).wrap();
/// assert_eq!(col.header, "Description");
/// assert_eq!(col.overflow, Overflow::Wrap);
/// assert_eq!(col.align, Align::Left);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header text shown in the first line of the table.
    pub header: String,
    /// Alignment for the header and every cell of the column.
    #[serde(default)]
    pub align: Align,
    /// Width cap used by `Truncate` and `Wrap`.
    #[serde(default)]
    pub max_width: Option<usize>,
    /// Policy for cells wider than `max_width`.
    #[serde(default)]
    pub overflow: Overflow,
}

impl Column {
    /// Create a left-aligned, uncapped, truncating column.
    pub fn new(header: impl Into<String>) -> Self {
        Column {
            header: header.into(),
            align: Align::Left,
            max_width: None,
            overflow: Overflow::Truncate,
        }
    }

    /// Set the alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Shorthand for `align(Align::Center)`.
    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    /// Shorthand for `align(Align::Right)`.
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Set the width cap.
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set the overflow mode.
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Shorthand for `overflow(Overflow::Wrap)`.
    pub fn wrap(self) -> Self {
        self.overflow(Overflow::Wrap)
    }

    /// Shorthand for `overflow(Overflow::Truncate)`.
    pub fn truncate(self) -> Self {
        self.overflow(Overflow::Truncate)
    }

    /// Shorthand for `overflow(Overflow::Ignore)`.
    pub fn ignore(self) -> Self {
        self.overflow(Overflow::Ignore)
    }
}
