//! parsetrace - summarize a pipeline trace log into a stage timeline

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tsvtools::trace::summarize_trace;

/// Aggregate COMPLETED task durations from a pipeline trace TSV into a
/// per-stage timeline report
#[derive(Parser, Debug)]
#[command(name = "parsetrace")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Trace TSV input file
    #[arg(short, long)]
    input: PathBuf,

    /// Timeline text output file
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let timeline = summarize_trace(&cli.input)
        .with_context(|| format!("failed to summarize trace: {}", cli.input.display()))?;

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to create output file: {}", cli.output.display()))?;
    let mut writer = BufWriter::new(file);
    timeline
        .render(&mut writer)
        .context("failed to write timeline")?;
    writer.flush().context("failed to flush output")?;

    Ok(())
}
