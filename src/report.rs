//! Fixed statistics report for one column
//!
//! Text output mirrors the classic layout (frequency table, labelled scalars,
//! five percentiles). JSON output serializes the same [`Report`].

use crate::error::{StatsError, SummaryError};
use crate::stats::{self, display_value};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Percentiles printed in every report
pub const REPORT_PERCENTILES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// One row of the frequency table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frequency {
    pub value: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileValue {
    /// Fraction in `[0, 1]`
    pub p: f64,
    pub value: f64,
}

/// Every statistic for a dataset, computed once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub file: String,
    pub column: String,
    pub frequencies: Vec<Frequency>,
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    /// `None` when the dataset holds a single value
    pub stdev: Option<f64>,
    pub median: f64,
    pub mode: f64,
    pub min: f64,
    pub max: f64,
    pub percentiles: Vec<PercentileValue>,
}

impl Report {
    /// Compute the report.
    ///
    /// # Errors
    ///
    /// [`StatsError::EmptyInput`] if `values` is empty. A single value is fine;
    /// its standard deviation is reported as `None`.
    pub fn build(file: &str, column: &str, values: &[f64]) -> Result<Self, StatsError> {
        let frequencies = stats::frequency_table(values)?
            .into_iter()
            .map(|(value, count)| Frequency { value, count })
            .collect();

        let stdev = match stats::stdev(values) {
            Ok(s) => Some(s),
            Err(StatsError::InsufficientData { .. }) => None,
            Err(e) => return Err(e),
        };

        let percentiles = REPORT_PERCENTILES
            .iter()
            .map(|&p| -> Result<PercentileValue, StatsError> {
                Ok(PercentileValue {
                    p,
                    value: stats::percentile(values, p)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            file: file.to_string(),
            column: column.to_string(),
            frequencies,
            count: stats::count(values),
            sum: stats::sum(values)?,
            mean: stats::mean(values)?,
            stdev,
            median: stats::median(values)?,
            mode: stats::mode(values)?,
            min: stats::min(values)?,
            max: stats::max(values)?,
            percentiles,
        })
    }

    /// Write the human-readable report.
    ///
    /// `values` must be the dataset the report was built from; the frequency
    /// block is written by [`stats::write_summary`].
    pub fn write_text<W: Write>(&self, values: &[f64], out: &mut W) -> Result<(), SummaryError> {
        writeln!(out, "Summary (value: frequency)")?;
        stats::write_summary(values, out)?;
        writeln!(out)?;

        writeln!(out, "count = {}", self.count)?;
        writeln!(out, "sum = {}", display_value(self.sum))?;
        writeln!(out, "mean = {}", display_value(self.mean))?;
        match self.stdev {
            Some(s) => writeln!(out, "stdev = {}", display_value(s))?,
            None => writeln!(out, "stdev = undefined")?,
        }
        writeln!(out, "median = {}", display_value(self.median))?;
        writeln!(out, "mode = {}", display_value(self.mode))?;
        writeln!(out, "min = {}", display_value(self.min))?;
        writeln!(out, "max = {}", display_value(self.max))?;

        for pv in &self.percentiles {
            let label = format!("{}th", (pv.p * 100.0).round() as u32);
            writeln!(
                out,
                "{:>5} percentile = {}",
                label,
                display_value(pv.value)
            )?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
