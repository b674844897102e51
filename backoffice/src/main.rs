//! CSV export binary for the backoffice directory.
//!
//! This binary delegates to `backoffice::cli` for parsing and the
//! export pipeline, keeping the behaviour testable without spawning a
//! process.

use std::io::{self, Write};
use std::process::ExitCode;

use backoffice::cli::{CliArgs, CliError, run};
use backoffice::export::DirSink;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute() -> Result<(), CliError> {
    let args = CliArgs::parse();
    let sink = DirSink::open(&args.out_dir)?;
    let today = chrono::Local::now().date_naive();
    let report = run(&args, &sink, today)?;

    let message = format!(
        "wrote {} ({} rows) to {}",
        report.filename, report.rows, args.out_dir
    );
    if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
        drop(err);
    }
    Ok(())
}

fn init_tracing() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
    if let Err(err) = result {
        drop(err);
    }
}
