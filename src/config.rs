//! Optional defaults file
//!
//! # Example colstat.toml
//!
//! ```toml
//! column = "score"
//! format = "json"
//! ```
//!
//! Values given on the command line take precedence over the file.

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Defaults loaded from a TOML file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Column to report on when none is given
    #[serde(default)]
    pub column: Option<String>,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }
}
