//! Descriptive statistics over a dataset of real numbers
//!
//! Every function borrows the dataset and leaves it untouched. Operations that
//! need order (mode, median, percentile, the frequency table) sort a private
//! copy, so any number of callers may share one `&[f64]`.
//!
//! Percentiles follow the Microsoft Excel "inclusive" convention: the rank of
//! percentile `p` in a dataset of `n` values is `p * (n - 1) + 1` (1-based),
//! and fractional ranks interpolate linearly between neighbouring values.

use crate::error::{StatsError, SummaryError};
use std::io::Write;

/// Sort a dataset in place, ascending.
///
/// Uses the IEEE-754 total order, so NaN (positive) sorts after every other
/// value and `-0.0` sorts before `0.0`.
pub fn sort(v: &mut [f64]) {
    v.sort_by(f64::total_cmp);
}

/// Sorted private copy of `v`
pub fn sorted(v: &[f64]) -> Vec<f64> {
    let mut copy = v.to_vec();
    sort(&mut copy);
    copy
}

fn require_non_empty(v: &[f64], operation: &'static str) -> Result<(), StatsError> {
    if v.is_empty() {
        return Err(StatsError::EmptyInput { operation });
    }
    Ok(())
}

/// Number of values. Valid on an empty dataset.
pub fn count(v: &[f64]) -> usize {
    v.len()
}

/// Left-to-right sum
pub fn sum(v: &[f64]) -> Result<f64, StatsError> {
    require_non_empty(v, "sum")?;
    Ok(v.iter().fold(0.0, |acc, x| acc + x))
}

/// Arithmetic mean, `sum(v) / count(v)`
pub fn mean(v: &[f64]) -> Result<f64, StatsError> {
    require_non_empty(v, "mean")?;
    Ok(sum(v)? / v.len() as f64)
}

pub fn min(v: &[f64]) -> Result<f64, StatsError> {
    require_non_empty(v, "min")?;
    let mut lowest = v[0];
    for &x in &v[1..] {
        if x < lowest {
            lowest = x;
        }
    }
    Ok(lowest)
}

pub fn max(v: &[f64]) -> Result<f64, StatsError> {
    require_non_empty(v, "max")?;
    let mut highest = v[0];
    for &x in &v[1..] {
        if x > highest {
            highest = x;
        }
    }
    Ok(highest)
}

/// Corrected sample standard deviation (Bessel's correction, `n - 1` denominator)
///
/// # Errors
///
/// - [`StatsError::EmptyInput`] for an empty dataset
/// - [`StatsError::InsufficientData`] for a single value
pub fn stdev(v: &[f64]) -> Result<f64, StatsError> {
    require_non_empty(v, "stdev")?;
    if v.len() < 2 {
        return Err(StatsError::InsufficientData {
            operation: "stdev",
            required: 2,
            actual: v.len(),
        });
    }

    let u = mean(v)?;
    let squares = v.iter().fold(0.0, |acc, x| acc + (x - u) * (x - u));
    Ok((squares / (v.len() - 1) as f64).sqrt())
}

/// Runs of equal values in a sorted slice, as `(value, occurrences)`
fn runs(sorted: &[f64]) -> Vec<(f64, usize)> {
    let mut out: Vec<(f64, usize)> = Vec::new();
    for &x in sorted {
        match out.last_mut() {
            Some((value, n)) if *value == x => *n += 1,
            _ => out.push((x, 1)),
        }
    }
    out
}

/// Most frequent value; ties resolve to the smallest tied value.
///
/// ```
/// use colstat::stats::mode;
/// assert_eq!(mode(&[1.0, 2.0, 1.0, 2.0]).unwrap(), 1.0);
/// assert_eq!(mode(&[1.0, 2.0, 1.0, 2.0, 2.0]).unwrap(), 2.0);
/// ```
pub fn mode(v: &[f64]) -> Result<f64, StatsError> {
    require_non_empty(v, "mode")?;
    let mut best = (v[0], 0);
    // Runs come out ascending, so keeping only strictly longer runs keeps the smallest on ties.
    for (value, n) in runs(&sorted(v)) {
        if n > best.1 {
            best = (value, n);
        }
    }
    Ok(best.0)
}

/// Sample median, `percentile(v, 0.5)`
pub fn median(v: &[f64]) -> Result<f64, StatsError> {
    require_non_empty(v, "median")?;
    percentile(v, 0.5)
}

/// Percentile `p` (in `[0, 1]`) using the Excel inclusive method.
///
/// # Errors
///
/// - [`StatsError::EmptyInput`] for an empty dataset
/// - [`StatsError::InvalidPercentile`] when `p` is NaN or outside `[0, 1]`
///
/// # Example
///
/// ```
/// use colstat::stats::percentile;
/// let v = [15.0, 20.0, 35.0, 40.0, 50.0];
/// assert!((percentile(&v, 0.4).unwrap() - 29.0).abs() < 1e-9);
/// ```
pub fn percentile(v: &[f64], p: f64) -> Result<f64, StatsError> {
    require_non_empty(v, "percentile")?;
    if !(0.0..=1.0).contains(&p) {
        return Err(StatsError::InvalidPercentile(p));
    }

    let sorted = sorted(v);
    let last = sorted.len() - 1;
    let rank = p * last as f64 + 1.0;

    if rank == 1.0 {
        return Ok(sorted[0]);
    }
    if rank == sorted.len() as f64 {
        return Ok(sorted[last]);
    }

    let k = rank.trunc();
    let d = rank - k;
    let k = k as usize;
    if k > last {
        return Ok(sorted[last]);
    }
    // Whole ranks land on an element; interpolating would turn inf - inf into NaN.
    if d == 0.0 {
        return Ok(sorted[k - 1]);
    }
    Ok(sorted[k - 1] + d * (sorted[k] - sorted[k - 1]))
}

/// Distinct values with their occurrence counts, ascending by value
pub fn frequency_table(v: &[f64]) -> Result<Vec<(f64, usize)>, StatsError> {
    require_non_empty(v, "frequency table")?;
    Ok(runs(&sorted(v)))
}

/// Write the frequency table as `"<value>: <count>"` lines
pub fn write_summary<W: Write>(v: &[f64], out: &mut W) -> Result<(), SummaryError> {
    for (value, n) in frequency_table(v)? {
        writeln!(out, "{}: {}", display_value(value), n)?;
    }
    Ok(())
}

/// Print the frequency table to stdout
pub fn summarize(v: &[f64]) -> Result<(), SummaryError> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_summary(v, &mut lock)
}

/// Format a value in printf `%g` style (6 significant digits, trailing zeros trimmed)
///
/// ```
/// use colstat::stats::display_value;
/// assert_eq!(display_value(2.0), "2");
/// assert_eq!(display_value(38.75), "38.75");
/// assert_eq!(display_value(1.0 / 3.0), "0.333333");
/// assert_eq!(display_value(1234567.0), "1.23457e+06");
/// ```
pub fn display_value(x: f64) -> String {
    const PRECISION: i32 = 6;

    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        let s = if x > 0.0 { "inf" } else { "-inf" };
        return s.to_string();
    }
    if x == 0.0 {
        let s = if x.is_sign_negative() { "-0" } else { "0" };
        return s.to_string();
    }

    // Round to the target precision first; rounding can bump the exponent (999999.5 -> 1e+06).
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exp.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
