//! Error types for table building and viewing.

use std::io;

/// Errors surfaced to callers of [`Table`](crate::Table) and the viewer.
///
/// Key-transform failures during sorting and a missing terminal width are
/// recovered locally and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A row's value count differs from the column count.
    #[error("row has {actual} values but the table has {expected} columns")]
    Arity { expected: usize, actual: usize },

    /// No column carries the requested header.
    #[error("no column with header '{0}'")]
    ColumnNotFound(String),

    /// Reading a key or writing a frame to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A YAML style or viewer configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_display_names_both_counts() {
        let err = TableError::Arity {
            expected: 3,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: TableError = io_err.into();
        assert!(matches!(err, TableError::Io(_)));
    }

    #[test]
    fn from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let err: TableError = yaml_err.into();
        assert!(matches!(err, TableError::Config(_)));
    }
}
