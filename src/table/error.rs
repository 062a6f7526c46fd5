use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("CSV line {line} has {found} fields, expected {expected}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV must have a '{column}' column (found: {available:?})")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("Row count mismatch: table has {expected} records but {actual} results were supplied")]
    RowCountMismatch { expected: usize, actual: usize },
}
