//! The table: column definitions, rows, and rendering.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::str::FromStr;

use tracing::debug;

use crate::border::{BorderRenderer, BorderStyle, TableStyle};
use crate::error::{Result, TableError};
use crate::layout::resolve_layout;
use crate::types::Column;
use crate::viewer::{ConsoleScreen, ScrollViewer, TerminalKeys};

/// A table of string cells.
///
/// Every row holds exactly one value per column; the arity is checked when
/// the row is added.
///
/// # Example
///
/// ```rust
/// use standout_grid::{Column, Table};
///
/// let mut table = Table::default();
/// table.add_column(Column::new("Name"));
/// table.add_column(Column::new("Age").center());
/// table.add_row(["Ethan", "22"]).unwrap();
///
/// assert_eq!(
///     table.render(),
///     "| Name  | Age |\n|-------|-----|\n| Ethan | 22  |"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    style: TableStyle,
}

/// Per-row sort key: the derived key, or the raw text when deriving failed.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey<K> {
    Derived(K),
    Raw(String),
}

impl Table {
    /// Create an empty table with the given style.
    pub fn new(style: TableStyle) -> Self {
        Table {
            columns: Vec::new(),
            rows: Vec::new(),
            style,
        }
    }

    /// Create an empty table with the given border and no row separators.
    pub fn with_border(border: BorderStyle) -> Self {
        Self::new(TableStyle::new(border))
    }

    /// Append a column.
    ///
    /// Rows already in the table get an empty cell for it, so every row
    /// keeps one value per column.
    pub fn add_column(&mut self, column: Column) -> &mut Self {
        self.columns.push(column);
        for row in &mut self.rows {
            row.push(String::new());
        }
        self
    }

    /// Append a row, storing each value's `Display` text.
    ///
    /// Fails with [`TableError::Arity`] when the value count differs from the
    /// column count; the table is left unchanged.
    pub fn add_row<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let row: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        if row.len() != self.columns.len() {
            return Err(TableError::Arity {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append rows in order, stopping at the first arity mismatch.
    ///
    /// Rows before the failing one stay in the table.
    pub fn add_rows<R, I>(&mut self, rows: R) -> Result<()>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: Display,
    {
        for row in rows {
            self.add_row(row)?;
        }
        Ok(())
    }

    /// Sort rows by the raw text of the first column titled `header`.
    pub fn sort_by(&mut self, header: &str, reverse: bool) -> Result<()> {
        self.sort_by_key(header, |value| Ok::<_, ()>(value.to_string()), reverse)
    }

    /// Sort rows by a key derived from the first column titled `header`.
    ///
    /// When `key` fails for a value, that row is ordered by its raw text
    /// instead; in ascending order such rows follow every row whose key was
    /// derived. The sort is stable; `reverse` flips the comparison rather
    /// than the result, so equal keys keep their insertion order either way.
    ///
    /// Fails with [`TableError::ColumnNotFound`] when no header matches.
    ///
    /// # Example
    ///
    /// ```rust
    /// use standout_grid::{Column, Table};
    ///
    /// let mut table = Table::default();
    /// table.add_column(Column::new("Age"));
    /// table.add_rows([["30"], ["n/a"], ["4"]]).unwrap();
    /// table.sort_by_key("Age", |v| v.parse::<u32>(), false).unwrap();
    ///
    /// let ages: Vec<&str> = table.rows().iter().map(|r| r[0].as_str()).collect();
    /// assert_eq!(ages, vec!["4", "30", "n/a"]);
    /// ```
    pub fn sort_by_key<K, E, F>(&mut self, header: &str, key: F, reverse: bool) -> Result<()>
    where
        K: Ord,
        E: Debug,
        F: Fn(&str) -> std::result::Result<K, E>,
    {
        let index = self.column_index(header)?;

        let mut keyed: Vec<(SortKey<K>, Vec<String>)> = std::mem::take(&mut self.rows)
            .into_iter()
            .map(|row| {
                let value = row[index].as_str();
                let sort_key = match key(value) {
                    Ok(k) => SortKey::Derived(k),
                    Err(err) => {
                        debug!(header, value, error = ?err, "sort key failed, using raw text");
                        SortKey::Raw(value.to_string())
                    }
                };
                (sort_key, row)
            })
            .collect();

        keyed.sort_by(|(a, _), (b, _)| {
            let ord: Ordering = a.cmp(b);
            if reverse {
                ord.reverse()
            } else {
                ord
            }
        });

        self.rows = keyed.into_iter().map(|(_, row)| row).collect();
        Ok(())
    }

    /// Sort rows by parsing the column's values as `T`.
    ///
    /// Values that fail to parse fall back to raw-text ordering as in
    /// [`sort_by_key`](Self::sort_by_key).
    pub fn sort_by_parsed<T>(&mut self, header: &str, reverse: bool) -> Result<()>
    where
        T: FromStr + Ord,
        T::Err: Debug,
    {
        self.sort_by_key(header, |value| value.trim().parse::<T>(), reverse)
    }

    /// Index of the first column titled `header`.
    fn column_index(&self, header: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c.header == header)
            .ok_or_else(|| TableError::ColumnNotFound(header.to_string()))
    }

    /// Render every column.
    ///
    /// Returns an empty string when the table has no columns.
    pub fn render(&self) -> String {
        let all: Vec<usize> = (0..self.columns.len()).collect();
        self.render_columns(&all)
    }

    /// Render only the columns at `subset`, in the order given.
    ///
    /// Out-of-range indices are skipped. An empty selection on a table that
    /// has columns renders a one-line notice instead of an empty frame.
    pub fn render_columns(&self, subset: &[usize]) -> String {
        if self.columns.is_empty() {
            return String::new();
        }
        let layout = resolve_layout(&self.columns, &self.rows, subset);
        BorderRenderer::new(self.style, &self.columns, &layout).render(&self.rows)
    }

    /// Browse the table in the terminal, scrolling horizontally with the
    /// arrow keys until `q` is pressed.
    pub fn view(&self) -> Result<()> {
        ScrollViewer::new(self, ConsoleScreen::stdout(), TerminalKeys).run()
    }

    /// Column definitions, in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Rows, in order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// The render style.
    pub fn style(&self) -> TableStyle {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Table {
        let mut table = Table::default();
        table
            .add_column(Column::new("Name"))
            .add_column(Column::new("Age").center())
            .add_column(Column::new("Country"));
        table
            .add_rows([
                ["Ethan", "22", "France"],
                ["Amélie", "19", "France"],
                ["Bo", "101", "Chad"],
            ])
            .unwrap();
        table
    }

    fn names(table: &Table) -> Vec<&str> {
        table.rows().iter().map(|r| r[0].as_str()).collect()
    }

    #[test]
    fn add_row_stores_display_text() {
        let mut table = Table::default();
        table.add_column(Column::new("N")).add_column(Column::new("F"));
        table.add_row([1.5, 2.0]).unwrap();
        assert_eq!(table.rows()[0], vec!["1.5", "2"]);
    }

    #[test]
    fn add_row_arity_mismatch_leaves_table_unchanged() {
        let mut table = people();
        let before = table.num_rows();
        let err = table.add_row(["only", "two"]).unwrap_err();
        assert!(matches!(
            err,
            TableError::Arity {
                expected: 3,
                actual: 2
            }
        ));
        assert_eq!(table.num_rows(), before);
    }

    #[test]
    fn add_rows_keeps_rows_before_failure() {
        let mut table = Table::default();
        table.add_column(Column::new("A")).add_column(Column::new("B"));
        let rows: Vec<Vec<&str>> = vec![vec!["1", "2"], vec!["3"], vec!["5", "6"]];
        assert!(table.add_rows(rows).is_err());
        assert_eq!(table.num_rows(), 1);
    }

    #[test]
    fn sort_by_raw_text() {
        let mut table = people();
        table.sort_by("Age", false).unwrap();
        // "101" < "19" < "22" as text
        assert_eq!(names(&table), vec!["Bo", "Amélie", "Ethan"]);
    }

    #[test]
    fn sort_by_parsed_numbers() {
        let mut table = people();
        table.sort_by_parsed::<u32>("Age", false).unwrap();
        assert_eq!(names(&table), vec!["Amélie", "Ethan", "Bo"]);
        table.sort_by_parsed::<u32>("Age", true).unwrap();
        assert_eq!(names(&table), vec!["Bo", "Ethan", "Amélie"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut table = people();
        table.sort_by("Country", false).unwrap();
        assert_eq!(names(&table), vec!["Bo", "Ethan", "Amélie"]);
        table.sort_by("Country", true).unwrap();
        assert_eq!(names(&table), vec!["Ethan", "Amélie", "Bo"]);
    }

    #[test]
    fn sort_key_failure_falls_back_to_raw_text() {
        let mut table = Table::default();
        table.add_column(Column::new("Score"));
        table
            .add_rows([["10"], ["b-bad"], ["2"], ["a-bad"]])
            .unwrap();
        table.sort_by_parsed::<i64>("Score", false).unwrap();
        let scores: Vec<&str> = table.rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(scores, vec!["2", "10", "a-bad", "b-bad"]);
    }

    #[test]
    fn sort_unknown_header_fails_and_leaves_rows() {
        let mut table = people();
        let err = table.sort_by("Missing", false).unwrap_err();
        assert!(matches!(err, TableError::ColumnNotFound(h) if h == "Missing"));
        assert_eq!(names(&table), vec!["Ethan", "Amélie", "Bo"]);
    }

    #[test]
    fn sort_duplicate_headers_targets_first_match() {
        let mut table = Table::default();
        table.add_column(Column::new("X")).add_column(Column::new("X"));
        table.add_rows([["b", "1"], ["a", "2"]]).unwrap();
        table.sort_by("X", false).unwrap();
        assert_eq!(table.rows()[0], vec!["a", "2"]);
    }

    #[test]
    fn column_added_after_rows_pads_existing_rows() {
        let mut table = Table::default();
        table.add_column(Column::new("A"));
        table.add_rows([["y"], ["x"]]).unwrap();
        table.add_column(Column::new("B"));

        assert_eq!(table.rows()[0], vec!["y", ""]);
        assert_eq!(
            table.render(),
            "| A | B |\n|---|---|\n| y |   |\n| x |   |"
        );

        table.sort_by("B", false).unwrap();
        assert_eq!(names(&table), vec!["y", "x"]);
        table.sort_by("A", false).unwrap();
        assert_eq!(names(&table), vec!["x", "y"]);
        table.add_row(["z", "1"]).unwrap();
        assert_eq!(table.num_rows(), 3);
    }

    #[test]
    fn style_is_fixed_at_creation() {
        assert_eq!(Table::default().style(), TableStyle::default());
        let style = TableStyle::new(BorderStyle::Double).horizontal_lines(true);
        let table = Table::new(style);
        assert_eq!(table.style(), style);
        assert_eq!(Table::with_border(BorderStyle::Light).style().border, BorderStyle::Light);
    }

    #[test]
    fn render_empty_table_is_empty_string() {
        let table = Table::default();
        assert_eq!(table.render(), "");
        assert_eq!(table.render_columns(&[0]), "");
    }

    #[test]
    fn render_empty_subset_shows_message() {
        let table = people();
        assert_eq!(table.render_columns(&[]), crate::border::EMPTY_SUBSET_MESSAGE);
    }

    #[test]
    fn render_columns_subset() {
        let table = people();
        let output = table.render_columns(&[2]);
        assert_eq!(output.lines().next(), Some("| Country |"));
        assert!(!output.contains("Name"));
    }
}
