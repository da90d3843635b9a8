//! comparetsv - diff two TSV files by a key column

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tsvtools::config::{CompareConfig, CompareMode};
use tsvtools::diff::compare;
use tsvtools::parser;

/// Compare fields of two TSV files and print the differences
#[derive(Parser, Debug)]
#[command(name = "comparetsv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First tsv file to be compared
    #[arg(short = 'a', long = "file-a")]
    file_a: PathBuf,

    /// Second tsv file to be compared
    #[arg(short = 'b', long = "file-b")]
    file_b: PathBuf,

    /// Header name used as row identity
    #[arg(short = 'k', long = "key-column")]
    key_column: String,

    /// Compare mode
    #[arg(short = 'm', long = "mode", value_enum)]
    mode: CompareMode,

    /// Exit 1 when any difference is found (differences are informational
    /// by default and exit 0)
    #[arg(long)]
    fail_on_diff: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = CompareConfig::new(cli.file_a, cli.file_b, cli.key_column).with_mode(cli.mode);

    let table_a = parser::parse(&config.file_a)
        .with_context(|| format!("failed to parse file a: {}", config.file_a.display()))?;
    let table_b = parser::parse(&config.file_b)
        .with_context(|| format!("failed to parse file b: {}", config.file_b.display()))?;

    let report = compare(&table_a, &table_b, &config.key_column, config.mode)?;

    let mut stdout = std::io::stdout().lock();
    report.render(&mut stdout).context("failed to write report")?;

    if report.length_mismatch.is_some() {
        // Exact-mode row-count mismatch is fatal.
        return Ok(ExitCode::from(1));
    }
    if cli.fail_on_diff && report.has_findings() {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
