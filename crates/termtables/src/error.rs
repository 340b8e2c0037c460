//! Error types for table queries and style configuration.
//!
//! Rendering itself never fails: degenerate grids produce degenerate output and
//! titles that don't fit are dropped. Errors only come from caller mistakes
//! (asking about a column that doesn't exist) and from loading style files.

use thiserror::Error;

/// Error type for all fallible `termtables` operations.
#[derive(Debug, Error)]
pub enum TableError {
    /// A width query referenced a column past the end of the grid.
    #[error("column {column} is out of range (table has {columns} columns)")]
    ColumnOutOfRange {
        /// The requested column index.
        column: usize,
        /// Number of columns in the table.
        columns: usize,
    },

    /// A style preset name didn't match any known preset.
    #[error("unknown style `{name}` (expected one of: {expected})")]
    UnknownPreset {
        /// The name as given.
        name: String,
        /// Comma-separated list of valid preset names.
        expected: String,
    },

    /// A YAML style configuration could not be parsed.
    #[error("invalid YAML style config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON style configuration could not be parsed.
    #[error("invalid JSON style config: {0}")]
    Json(#[from] serde_json::Error),

    /// A style configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;
