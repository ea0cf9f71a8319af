//! Viewer tuning knobs.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Width used when the terminal size cannot be queried.
pub const DEFAULT_FALLBACK_WIDTH: usize = 80;

/// Estimates the viewer uses to decide how many columns fit on screen.
///
/// The estimate looks at headers only, never at row data, and is recomputed
/// every frame.
///
/// # Example
///
/// ```rust
/// use standout_grid::ViewerConfig;
///
/// let config = ViewerConfig::default().min_column_width(6);
/// assert_eq!(config.fallback_width, 80);
///
/// let config = ViewerConfig::from_yaml("min_column_width: 12").unwrap();
/// assert_eq!(config.min_column_width, 12);
/// assert_eq!(config.per_column_overhead, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Terminal width assumed when the real one is unavailable.
    pub fallback_width: usize,
    /// Columns taken by the leading border glyph.
    pub border_overhead: usize,
    /// Columns each table column adds beyond its content: two padding
    /// spaces and one separator glyph.
    pub per_column_overhead: usize,
    /// Smallest content width assumed for a column, however short its header.
    pub min_column_width: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            border_overhead: 1,
            per_column_overhead: 3,
            min_column_width: 10,
        }
    }
}

impl ViewerConfig {
    /// Set the fallback terminal width.
    pub fn fallback_width(mut self, width: usize) -> Self {
        self.fallback_width = width;
        self
    }

    /// Set the border overhead.
    pub fn border_overhead(mut self, overhead: usize) -> Self {
        self.border_overhead = overhead;
        self
    }

    /// Set the per-column overhead.
    pub fn per_column_overhead(mut self, overhead: usize) -> Self {
        self.per_column_overhead = overhead;
        self
    }

    /// Set the minimum estimated column width.
    pub fn min_column_width(mut self, width: usize) -> Self {
        self.min_column_width = width;
        self
    }

    /// Load a configuration from YAML; missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
