use std::path::PathBuf;

use thiserror::Error;

/// Structural problems that abort the run before any output is written.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input CSV is missing a header row: {}", .0.display())]
    MissingHeader(PathBuf),

    #[error("QED column '{requested}' not found. Available columns: {}", .available.join(", "))]
    ColumnNotFound {
        requested: String,
        available: Vec<String>,
    },

    #[error("CSV line {line} has {len} fields but the header has {width}")]
    RowTooLong { line: u64, len: usize, width: usize },
}
