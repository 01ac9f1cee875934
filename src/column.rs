//! Column extraction from tab-delimited text files
//!
//! The first line is a header of whitespace-separated column names; every
//! following line is a tab-separated record. Structural problems (unopenable
//! file, missing header, unknown column) are fatal [`ColumnError`]s. A record
//! that lacks a value for the requested column is skipped with a
//! [`RowWarning`], and processing continues.

use crate::error::ColumnError;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Non-fatal problem found in a single data row
#[derive(Debug, Clone, PartialEq)]
pub enum RowWarning {
    /// The row has no token at the column's index; the row was skipped
    MissingValue { source: String, line: usize },
    /// The token is not a number; `0` was recorded in its place
    NonNumeric {
        source: String,
        line: usize,
        token: String,
    },
}

impl RowWarning {
    /// 1-based line number in the input (the header is line 1)
    pub fn line(&self) -> usize {
        match self {
            RowWarning::MissingValue { line, .. } | RowWarning::NonNumeric { line, .. } => *line,
        }
    }
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowWarning::MissingValue { source, line } => {
                write!(f, "{}: line {}: missing value, row skipped", source, line)
            }
            RowWarning::NonNumeric {
                source,
                line,
                token,
            } => write!(
                f,
                "{}: line {}: '{}' is not a number, read as 0",
                source, line, token
            ),
        }
    }
}

/// A column pulled out of a file, with any per-row warnings
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
    pub warnings: Vec<RowWarning>,
}

/// Reads one named column out of header + tab-delimited rows
#[derive(Debug, Clone)]
pub struct ColumnExtractor {
    column: String,
}

impl ColumnExtractor {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }

    /// Open `path` and extract the column from it
    pub fn from_file<P: AsRef<Path>>(&self, path: P) -> Result<Column, ColumnError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ColumnError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.extract(BufReader::new(file), &path.display().to_string())
    }

    /// Extract the column from any buffered reader.
    ///
    /// `source_name` only labels warnings and errors.
    pub fn extract<R: BufRead>(&self, mut reader: R, source_name: &str) -> Result<Column, ColumnError> {
        let read_error = |error: std::io::Error| ColumnError::Read {
            source_name: source_name.to_string(),
            error,
        };

        let mut buf = Vec::new();
        let header = match next_line(&mut reader, &mut buf).map_err(read_error)? {
            Some(line) => line,
            None => return Err(ColumnError::MissingHeader(source_name.to_string())),
        };

        let names: Vec<String> = header.split_whitespace().map(str::to_string).collect();
        let index = names
            .iter()
            .position(|name| *name == self.column)
            .ok_or_else(|| ColumnError::ColumnNotFound {
                column: self.column.clone(),
                source_name: source_name.to_string(),
                available: names.clone(),
            })?;

        tracing::debug!(
            column = %self.column,
            index,
            source = source_name,
            "found column in header"
        );

        let mut values = Vec::new();
        let mut warnings = Vec::new();
        let mut line_number = 1;

        while let Some(record) = next_line(&mut reader, &mut buf).map_err(read_error)? {
            line_number += 1;

            let token = record
                .split('\t')
                .nth(index)
                .map(str::trim)
                .filter(|t| !t.is_empty());

            let warning = match token {
                None => RowWarning::MissingValue {
                    source: source_name.to_string(),
                    line: line_number,
                },
                Some(token) => match parse_value(token) {
                    Some(value) => {
                        values.push(value);
                        continue;
                    }
                    None => {
                        values.push(0.0);
                        RowWarning::NonNumeric {
                            source: source_name.to_string(),
                            line: line_number,
                            token: token.to_string(),
                        }
                    }
                },
            };

            tracing::warn!("{}", warning);
            warnings.push(warning);
        }

        tracing::debug!(
            values = values.len(),
            warnings = warnings.len(),
            "column extraction finished"
        );

        Ok(Column {
            name: self.column.clone(),
            values,
            warnings,
        })
    }
}

/// Next line without its `\n` / `\r\n` terminator. Invalid UTF-8 becomes U+FFFD.
fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> std::io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    let mut end = buf.len();
    if buf[..end].ends_with(b"\n") {
        end -= 1;
    }
    if buf[..end].ends_with(b"\r") {
        end -= 1;
    }
    Ok(Some(String::from_utf8_lossy(&buf[..end]).into_owned()))
}

/// Parse a numeric token. Only finite decimal/scientific notation is accepted,
/// so words such as `inf` or `nan` in the data count as non-numeric.
fn parse_value(token: &str) -> Option<f64> {
    let looks_numeric = token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !looks_numeric {
        return None;
    }
    token.parse::<f64>().ok().filter(|x| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn extract(input: &str, column: &str) -> Result<Column, ColumnError> {
        ColumnExtractor::new(column).extract(Cursor::new(input), "data.tsv")
    }

    #[test]
    fn test_extracts_named_column() {
        let input = "name age score\nann\t31\t7.5\nbob\t42\t8\ncat\t27\t9.25\n";
        let column = extract(input, "score").unwrap();
        assert_eq!(column.name, "score");
        assert_eq!(column.values, vec![7.5, 8.0, 9.25]);
        assert!(column.warnings.is_empty());
    }

    #[test]
    fn test_header_split_on_any_whitespace() {
        let input = "a\t b   c\n1\t2\t3\n";
        assert_eq!(extract(input, "c").unwrap().values, vec![3.0]);
    }

    #[test]
    fn test_short_row_is_skipped_with_line_number() {
        let input = "x y\n1\t2\n3\n5\t6\n";
        let column = extract(input, "y").unwrap();
        assert_eq!(column.values, vec![2.0, 6.0]);
        assert_eq!(
            column.warnings,
            vec![RowWarning::MissingValue {
                source: "data.tsv".to_string(),
                line: 3,
            }]
        );
        assert_eq!(column.warnings[0].line(), 3);
    }

    #[test]
    fn test_blank_field_counts_as_missing() {
        let input = "x y\n1\t\n";
        let column = extract(input, "y").unwrap();
        assert!(column.values.is_empty());
        assert_eq!(column.warnings.len(), 1);
    }

    #[test]
    fn test_non_numeric_token_reads_as_zero() {
        let input = "x\n4\nabc\n6\n";
        let column = extract(input, "x").unwrap();
        assert_eq!(column.values, vec![4.0, 0.0, 6.0]);
        assert_eq!(
            column.warnings,
            vec![RowWarning::NonNumeric {
                source: "data.tsv".to_string(),
                line: 3,
                token: "abc".to_string(),
            }]
        );
    }

    #[test]
    fn test_overflowing_token_is_non_numeric() {
        let column = extract("x\n1\n1e999\n-1e999\n", "x").unwrap();
        assert_eq!(column.values, vec![1.0, 0.0, 0.0]);
        assert_eq!(column.warnings.len(), 2);
        assert!(matches!(
            &column.warnings[0],
            RowWarning::NonNumeric { line: 3, token, .. } if token == "1e999"
        ));
    }

    #[test]
    fn test_invalid_utf8_in_other_column_is_tolerated() {
        let input: &[u8] = b"name x\nann\t1\nb\xe9a\t2\ncat\t3\n";
        let column = ColumnExtractor::new("x").extract(input, "data.tsv").unwrap();
        assert_eq!(column.values, vec![1.0, 2.0, 3.0]);
        assert!(column.warnings.is_empty());
    }

    #[test]
    fn test_invalid_utf8_in_target_column_is_non_numeric() {
        let input: &[u8] = b"x\n\xff\n4\n";
        let column = ColumnExtractor::new("x").extract(input, "data.tsv").unwrap();
        assert_eq!(column.values, vec![0.0, 4.0]);
        assert_eq!(column.warnings.len(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = "x y\r\n1\t2\r\n3\t4\r\n";
        assert_eq!(extract(input, "y").unwrap().values, vec![2.0, 4.0]);
    }

    #[test]
    fn test_scientific_and_signed_values() {
        let input = "v\n-1.5\n+2\n1e3\n";
        assert_eq!(extract(input, "v").unwrap().values, vec![-1.5, 2.0, 1000.0]);
    }

    #[test]
    fn test_unknown_column_is_fatal() {
        let err = extract("a b\n1\t2\n", "c").unwrap_err();
        match err {
            ColumnError::ColumnNotFound {
                column, available, ..
            } => {
                assert_eq!(column, "c");
                assert_eq!(available, vec!["a", "b"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let err = extract("", "a").unwrap_err();
        assert!(matches!(err, ColumnError::MissingHeader(_)));
    }

    #[test]
    fn test_header_only_yields_empty_column() {
        let column = extract("a b\n", "a").unwrap();
        assert!(column.values.is_empty());
        assert!(column.warnings.is_empty());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = ColumnExtractor::new("a")
            .from_file("/nonexistent/colstat/input.tsv")
            .unwrap_err();
        assert!(matches!(err, ColumnError::Open { .. }));
        assert!(err.to_string().contains("Error opening file"));
    }

    #[test]
    fn test_warning_display_names_file_and_line() {
        let warning = RowWarning::MissingValue {
            source: "in.tsv".to_string(),
            line: 7,
        };
        assert_eq!(warning.to_string(), "in.tsv: line 7: missing value, row skipped");
    }
}
