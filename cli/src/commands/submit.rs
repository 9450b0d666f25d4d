//! # tc-submit Submission Handler
//!
//! File: cli/src/commands/submit.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements the one thing tc-submit does: read the clock, print the
//! timestamp, and run
//!
//! ```text
//! zip -r tc-rapids-<YYYY-MM-DD-HH:MM>.zip triangle-counting -x cmake-build-debug -x */CMake*
//! ```
//!
//! in the current directory.
//!
//! ## Architecture
//!
//! 1. Read the local clock once and print the timestamp.
//! 2. Load configuration (`core::config`); without config files this yields the
//!    fixed prefix, source directory and exclusions.
//! 3. Derive the archive name (`archive::naming`) and build the
//!    `ZipInvocation` (`archive::zip`).
//! 4. With `--dry-run`, print the command line and stop.
//! 5. Run the archiver (`common::process`).
//!
//! ## Error Handling
//!
//! By default the archiver's outcome is logged and otherwise ignored: a
//! missing `zip`, a missing source directory or a non-zero exit all still end
//! with exit code 0. `--strict` turns those outcomes into `SubmitError`s.
//!
//! ## Usage
//!
//! ```bash
//! tc-submit            # writes tc-rapids-2024-03-07-09:05.zip
//! tc-submit --dry-run  # prints the zip command without running it
//! tc-submit --strict   # exits 1 if zip fails
//! ```
//!
use crate::common::archive::{naming, zip::ZipInvocation};
use crate::common::process::{self, RunOutcome};
use crate::core::config::{self, ArchiveConfig, Config};
use crate::core::error::Result;
use chrono::{DateTime, Local, TimeZone};
use clap::Args;
use std::fmt::Display;
use std::path::Path;
use tracing::{debug, info, warn};

/// # Submission Arguments (`SubmitArgs`)
///
/// Flags controlling the single submission action. None are required.
#[derive(Args, Debug, Default, Clone)]
pub struct SubmitArgs {
    /// Print the zip command instead of running it.
    #[arg(long)]
    pub dry_run: bool,

    /// Fail with exit code 1 if the archiver is missing or reports an error.
    #[arg(long)]
    pub strict: bool,
}

/// # Handle Submission (`handle_submit`)
///
/// Names the archive from the current local time and runs the archiver.
///
/// ## Returns
///
/// * `Ok(())` once the archiver has been run (or printed, with `--dry-run`),
///   whatever its outcome unless `--strict` is set.
/// * `Err` on configuration errors, or on archiver failure in strict mode.
pub fn handle_submit(args: SubmitArgs) -> Result<()> {
    info!("Handling submit command...");
    let now = Local::now();
    // Echoed first, even when the configuration turns out to be invalid.
    println!("{}", naming::format_timestamp(&now));

    let cfg = config::load_config()?;

    let invocation = plan_submission(&cfg, &now);

    if args.dry_run {
        println!("{}", invocation);
        return Ok(());
    }

    run_submission(&invocation, args.strict)
}

/// Builds the archiver call for a clock reading of `at`.
pub fn plan_submission<Tz>(cfg: &Config, at: &DateTime<Tz>) -> ZipInvocation
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let archive_name = naming::archive_filename(&cfg.archive.prefix, at);
    debug!("Archive name: {}", archive_name);
    if cfg.archive == ArchiveConfig::default() {
        ZipInvocation::submission(archive_name)
    } else {
        ZipInvocation::from_config(&cfg.archive, archive_name)
    }
}

/// Runs `invocation` in the current directory.
///
/// Unless `strict`, unsuccessful outcomes are only logged.
pub fn run_submission(invocation: &ZipInvocation, strict: bool) -> Result<()> {
    if Path::new(invocation.archive()).exists() {
        // Same-minute rerun: zip updates the existing archive.
        warn!(
            "Archive '{}' already exists and will be updated in place.",
            invocation.archive()
        );
    }
    if !Path::new(invocation.source_dir()).is_dir() {
        warn!(
            "Source directory '{}' not found in the current directory.",
            invocation.source_dir()
        );
    }

    let cmd_line = invocation.to_string();
    info!("Running: {}", cmd_line);
    let outcome = process::run_to_completion(&mut invocation.to_command());

    if outcome.is_success() {
        info!("Wrote {}", invocation.archive());
        return Ok(());
    }
    if strict {
        return outcome.into_result(invocation.program(), &cmd_line);
    }

    match outcome {
        RunOutcome::Succeeded => {}
        RunOutcome::Failed(status) => {
            warn!("Archiver exited with {}; ignoring.", status)
        }
        RunOutcome::NotLaunched(e) => warn!(
            "Archiver '{}' could not be started ({}); ignoring.",
            invocation.program(),
            e
        ),
    }
    Ok(())
}
