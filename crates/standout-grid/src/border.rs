//! Border glyphs and line assembly.
//!
//! A [`BorderRenderer`] turns a resolved layout plus row data into the final
//! text block: borders, header, separators, and rows whose cells may span
//! several physical lines.
//!
//! # Example
//!
//! ```rust
//! use standout_grid::{resolve_layout, BorderRenderer, BorderStyle, Column, TableStyle};
//!
//! let columns = vec![Column::new("Name"), Column::new("Score").right()];
//! let rows = vec![vec!["Alice", "100"], vec!["Bob", "7"]];
//! let layout = resolve_layout(&columns, &rows, &[0, 1]);
//!
//! let style = TableStyle::new(BorderStyle::Light);
//! let output = BorderRenderer::new(style, &columns, &layout).render(&rows);
//! let lines: Vec<&str> = output.lines().collect();
//! assert_eq!(lines[0], "┌───────┬───────┐");
//! assert_eq!(lines[1], "│ Name  │ Score │");
//! assert_eq!(lines[3], "│ Alice │   100 │");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell::format_cell;
use crate::error::Result;
use crate::layout::ResolvedLayout;
use crate::types::{Align, Column};
use crate::util::pad_aligned;

/// Line rendered in place of a table when no column is selected.
pub const EMPTY_SUBSET_MESSAGE: &str = "No columns to display.";

/// Border glyph set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Plain markdown-like borders: `|` and `-`, no top or bottom rows.
    #[default]
    #[serde(alias = "plain")]
    Markdown,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    #[serde(alias = "box")]
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

impl BorderStyle {
    /// Whether the style draws distinct top and bottom border rows.
    pub fn is_boxed(&self) -> bool {
        !matches!(self, BorderStyle::Markdown)
    }

    fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Markdown => BorderChars {
                horizontal: '-',
                vertical: '|',
                top: ('|', '|', '|'),
                middle: ('|', '|', '|'),
                bottom: ('|', '|', '|'),
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top: ('┌', '┬', '┐'),
                middle: ('├', '┼', '┤'),
                bottom: ('└', '┴', '┘'),
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top: ('┏', '┳', '┓'),
                middle: ('┣', '╋', '┫'),
                bottom: ('┗', '┻', '┛'),
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top: ('╔', '╦', '╗'),
                middle: ('╠', '╬', '╣'),
                bottom: ('╚', '╩', '╝'),
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top: ('╭', '┬', '╮'),
                middle: ('├', '┼', '┤'),
                bottom: ('╰', '┴', '╯'),
            },
        }
    }
}

impl FromStr for BorderStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "markdown" => Ok(BorderStyle::Markdown),
            "box" | "light" => Ok(BorderStyle::Light),
            "heavy" => Ok(BorderStyle::Heavy),
            "double" => Ok(BorderStyle::Double),
            "rounded" => Ok(BorderStyle::Rounded),
            other => Err(format!("unknown border style '{}'", other)),
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BorderStyle::Markdown => "markdown",
            BorderStyle::Light => "light",
            BorderStyle::Heavy => "heavy",
            BorderStyle::Double => "double",
            BorderStyle::Rounded => "rounded",
        };
        f.write_str(name)
    }
}

/// Glyphs for one border style. Each triple is (left, joint, right).
#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top: (char, char, char),
    middle: (char, char, char),
    bottom: (char, char, char),
}

/// Which horizontal rule to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinePosition {
    /// Above the header.
    Top,
    /// Under the header and, optionally, between rows.
    Middle,
    /// Below the last row.
    Bottom,
}

/// Table render configuration, fixed when a table is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Glyph set.
    pub border: BorderStyle,
    /// Draw a separator between every pair of data rows.
    pub horizontal_lines: bool,
}

impl TableStyle {
    /// Style with the given border and no row separators.
    pub fn new(border: BorderStyle) -> Self {
        TableStyle {
            border,
            horizontal_lines: false,
        }
    }

    /// Enable or disable separators between data rows.
    pub fn horizontal_lines(mut self, enable: bool) -> Self {
        self.horizontal_lines = enable;
        self
    }

    /// Load a style from YAML.
    ///
    /// ```rust
    /// use standout_grid::{BorderStyle, TableStyle};
    ///
    /// let style = TableStyle::from_yaml("border: box\nhorizontal_lines: true").unwrap();
    /// assert_eq!(style.border, BorderStyle::Light);
    /// assert!(style.horizontal_lines);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Render one physical line: each text padded to its width with one space on
/// either side, joined and closed by the style's vertical glyph.
///
/// `cells`, `widths`, and `aligns` are positional and must be equally long.
pub fn render_line<S: AsRef<str>>(
    cells: &[S],
    widths: &[usize],
    aligns: &[Align],
    border: BorderStyle,
) -> String {
    let vertical = border.chars().vertical;
    let mut line = String::new();
    line.push(vertical);
    for ((cell, &width), &align) in cells.iter().zip(widths).zip(aligns) {
        line.push(' ');
        line.push_str(&pad_aligned(cell.as_ref(), width, align));
        line.push(' ');
        line.push(vertical);
    }
    line
}

/// Render a horizontal rule spanning `width + 2` glyphs per column.
///
/// The markdown style has one rule for every position.
pub fn render_separator(widths: &[usize], position: LinePosition, border: BorderStyle) -> String {
    let chars = border.chars();
    let (left, joint, right) = match position {
        LinePosition::Top => chars.top,
        LinePosition::Middle => chars.middle,
        LinePosition::Bottom => chars.bottom,
    };

    let segments: Vec<String> = widths
        .iter()
        .map(|&width| std::iter::repeat_n(chars.horizontal, width + 2).collect())
        .collect();

    format!("{}{}{}", left, segments.join(&joint.to_string()), right)
}

/// Assembles a bordered table for one resolved layout.
#[derive(Clone, Debug)]
pub struct BorderRenderer<'a> {
    style: TableStyle,
    columns: &'a [Column],
    layout: &'a ResolvedLayout,
}

impl<'a> BorderRenderer<'a> {
    /// Create a renderer. Every slot index in `layout` must be valid for `columns`.
    pub fn new(style: TableStyle, columns: &'a [Column], layout: &'a ResolvedLayout) -> Self {
        BorderRenderer {
            style,
            columns,
            layout,
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.layout.widths()
    }

    fn aligns(&self) -> Vec<Align> {
        self.layout
            .slots
            .iter()
            .map(|slot| self.columns[slot.index].align)
            .collect()
    }

    /// The header line.
    pub fn header_row(&self) -> String {
        let headers: Vec<&str> = self
            .layout
            .slots
            .iter()
            .map(|slot| self.columns[slot.index].header.as_str())
            .collect();
        render_line(&headers, &self.widths(), &self.aligns(), self.style.border)
    }

    /// A horizontal rule at `position`.
    pub fn separator(&self, position: LinePosition) -> String {
        render_separator(&self.widths(), position, self.style.border)
    }

    /// Physical lines for one data row.
    ///
    /// Each cell is formatted with its column's cap and overflow mode. The
    /// row is as tall as its tallest cell; shorter cells are blank below
    /// their last line.
    pub fn row_lines<S: AsRef<str>>(&self, row: &[S]) -> Vec<String> {
        let cells: Vec<Vec<String>> = self
            .layout
            .slots
            .iter()
            .map(|slot| {
                let column = &self.columns[slot.index];
                let text = row.get(slot.index).map_or("", |cell| cell.as_ref());
                format_cell(text, column.max_width, column.overflow)
            })
            .collect();

        let height = cells.iter().map(Vec::len).max().unwrap_or(1);
        let widths = self.widths();
        let aligns = self.aligns();

        (0..height)
            .map(|line| {
                let texts: Vec<&str> = cells
                    .iter()
                    .map(|lines| lines.get(line).map_or("", String::as_str))
                    .collect();
                render_line(&texts, &widths, &aligns, self.style.border)
            })
            .collect()
    }

    /// Render the whole table.
    ///
    /// Order: top border (box styles), header, separator, rows with optional
    /// separators between them, bottom border (box styles).
    pub fn render<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> String {
        if self.layout.is_empty() {
            return EMPTY_SUBSET_MESSAGE.to_string();
        }

        let boxed = self.style.border.is_boxed();
        let mut output = Vec::new();

        if boxed {
            output.push(self.separator(LinePosition::Top));
        }

        output.push(self.header_row());
        let middle = self.separator(LinePosition::Middle);
        output.push(middle.clone());

        for (i, row) in rows.iter().enumerate() {
            if i > 0 && self.style.horizontal_lines {
                output.push(middle.clone());
            }
            output.extend(self.row_lines(row));
        }

        if boxed {
            output.push(self.separator(LinePosition::Bottom));
        }

        output.join("\n")
    }
}
