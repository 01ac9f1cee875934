//! Error taxonomy for the statistics library and the column extractor

use std::path::PathBuf;
use thiserror::Error;

/// Precondition failures of the statistics operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("{operation} requires a non-empty dataset")]
    EmptyInput { operation: &'static str },

    #[error("{operation} requires at least {required} values, found {actual}")]
    InsufficientData {
        operation: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("percentile must be between 0 and 1 inclusive, got {0}")]
    InvalidPercentile(f64),
}

/// Failure while writing a frequency summary
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("Failed to write summary: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural input errors. Any of these aborts extraction with no partial result.
#[derive(Error, Debug)]
pub enum ColumnError {
    #[error("Error opening file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading {source_name}: {error}")]
    Read {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Error reading header line of {0}")]
    MissingHeader(String),

    #[error("Column name '{column}' not found in {source_name} (available: {})", available.join(", "))]
    ColumnNotFound {
        column: String,
        source_name: String,
        available: Vec<String>,
    },
}
