//! # tc-submit Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Packs the `triangle-counting` directory into
//! `tc-rapids-<YYYY-MM-DD-HH:MM>.zip` in the current directory by running the
//! external `zip` utility, leaving out `cmake-build-debug` and CMake-generated
//! files. This file handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the submission and mapping errors to the exit code
//!
//! ## Examples
//!
//! ```bash
//! # Build the archive
//! tc-submit
//!
//! # See what would run, with debug logs
//! tc-submit -vv --dry-run
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // The submission action
mod common; // Archive naming, zip invocation, process execution
mod core; // Errors and configuration

/// Top-level command-line arguments. The program takes no positional arguments.
#[derive(Parser, Debug)]
#[command(
    name = "tc-submit",
    about = "Zip the triangle-counting sources into a timestamped submission archive",
    long_about = "Runs `zip -r tc-rapids-<YYYY-MM-DD-HH:MM>.zip triangle-counting \
                  -x cmake-build-debug -x */CMake*` in the current directory.\n\
                  The archiver's exit status is ignored unless --strict is given.",
    version
)]
struct Cli {
    #[command(flatten)]
    submit: commands::submit::SubmitArgs,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::submit::handle_submit(cli.submit) {
        tracing::error!("Submission failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
