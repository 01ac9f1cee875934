use anyhow::{Context, Result};
use clap::Parser;
use colstat::cli::{Cli, OutputFormat, Prompter};
use colstat::config::Config;
use colstat::{ColumnExtractor, Report};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output.
///
/// `--debug` turns on every level; otherwise a set `RUST_LOG` picks the filter.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let file = match args.file {
        Some(file) => file,
        None => PathBuf::from(prompter.ask("enter a filename")?),
    };
    let column = match args.column.or(config.column) {
        Some(column) => column,
        None => prompter.ask("enter a column name")?,
    };
    drop(prompter);

    let format = args
        .format
        .or(config.format)
        .unwrap_or(OutputFormat::Text);

    let mut out = stdout.lock();
    if format == OutputFormat::Text {
        writeln!(out, "reading column {} from {}", column, file.display())?;
        out.flush()?;
    }

    let extracted = ColumnExtractor::new(column.as_str()).from_file(&file)?;
    for warning in &extracted.warnings {
        eprintln!("WARNING: {}", warning);
    }

    let source = file.display().to_string();
    let report = Report::build(&source, &column, &extracted.values)
        .with_context(|| format!("Column '{}' in {} has no values", column, source))?;

    match format {
        OutputFormat::Text => report.write_text(&extracted.values, &mut out)?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }

    Ok(())
}
