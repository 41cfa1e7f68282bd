use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by ToastMetrics.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV export could not be parsed.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A column required by an aggregation or filter is absent.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// No menu-breakdown exports were found under the given directory.
    #[error("No menu-breakdown CSVs found in {0}")]
    NoDataFiles(PathBuf),

    /// An error raised by the SQLite store.
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the metrics crates.
pub type Result<T> = std::result::Result<T, MetricsError>;
