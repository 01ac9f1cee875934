//! colstat - descriptive statistics for one column of a tab-delimited file
//!
//! The [`stats`] module is the core: pure functions over `&[f64]` (count,
//! sum, mean, min, max, stdev, mode, median, percentile, frequency table).
//! [`column`] reads a named column out of a text file, [`report`] bundles the
//! fixed set of statistics, and [`cli`]/[`config`] back the `colstat` binary.

pub mod cli;
pub mod column;
pub mod config;
pub mod error;
pub mod report;
pub mod stats;

pub use column::{Column, ColumnExtractor, RowWarning};
pub use error::{ColumnError, StatsError, SummaryError};
pub use report::Report;
