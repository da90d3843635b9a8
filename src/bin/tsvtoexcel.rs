//! tsvtoexcel - convert a TSV file to an Excel workbook

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tsvtools::xlsx;

/// Convert a TSV file to an XLSX workbook, one row per record, no index
/// column
#[derive(Parser, Debug)]
#[command(name = "tsvtoexcel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TSV input file
    #[arg(short, long)]
    input: PathBuf,

    /// XLSX output file
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

    xlsx::convert(&cli.input, &cli.output).with_context(|| {
        format!(
            "failed to convert {} to {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    println!(
        "TSV file '{}' has been converted to Excel file '{}'",
        cli.input.display(),
        cli.output.display()
    );
    Ok(())
}
