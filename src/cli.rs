//! CLI argument parsing and interactive prompts for colstat

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "colstat")]
#[command(version)]
#[command(about = "Descriptive statistics for one column of a tab-delimited file", long_about = None)]
pub struct Cli {
    /// Input file (prompted for when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Column name to analyze (prompted for when omitted)
    #[arg(short = 'c', long = "column", value_name = "NAME")]
    pub column: Option<String>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// TOML file with default column and format
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

/// Reads whitespace-delimited answers to prompts, one word per answer.
///
/// Several answers may arrive on one input line; leftovers are kept for the
/// next prompt.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Print `message` on its own line and return the next token
    pub fn ask(&mut self, message: &str) -> Result<String> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read from stdin")?;
            if read == 0 {
                bail!("No answer given for '{}' (end of input)", message);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
