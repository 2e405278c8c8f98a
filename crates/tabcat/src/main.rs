//! Command-line entry point: read a CSV file, print it as an aligned table.
//!
//! Thin glue around [`tabcat_grid`] and [`tabcat_render`]. The three named
//! failures (no argument, file not found, missing final newline) print a
//! fixed message to stderr and exit 1 without producing any stdout output;
//! everything else propagates as a generic fatal error.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tabcat_grid::GridError;

/// Print a CSV file as a column-aligned text table.
#[derive(Debug, Parser)]
#[command(name = "tabcat", version, about)]
struct Cli {
    /// Path to the CSV file. The file must end with a final newline.
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let Some(path) = cli.path else {
        eprintln!("No argument.");
        return Ok(ExitCode::FAILURE);
    };

    // The whole file is buffered up front; parsing never streams, so a
    // malformed file fails before a single table line is written.
    let input = match fs::read_to_string(&path) {
        Ok(input) => input,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            eprintln!("File `{}` was not found.", path.display());
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => {
            return Err(err).context(format!("failed to read `{}`", path.display()));
        }
    };

    let grid = match tabcat_grid::parse(&input) {
        Ok(grid) => grid,
        Err(GridError::MissingFinalNewline) => {
            eprintln!("Please make sure your CSV is terminated with a final newline.");
            return Ok(ExitCode::FAILURE);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    tabcat_render::write_grid(&grid, &mut out).context("failed to write table")?;
    out.flush().context("failed to flush stdout")?;
    Ok(ExitCode::SUCCESS)
}
