//! # tc-submit Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs an external command to completion with inherited stdio and reports
//! what happened as a [`RunOutcome`]. Running never fails by itself: a command
//! that cannot be launched or that exits non-zero is an outcome, not an error.
//! Callers decide whether an outcome matters; [`RunOutcome::into_result`] maps
//! the unsuccessful ones onto `SubmitError` for strict callers.
//!
use crate::core::error::{Result, SubmitError};
use std::{
    io,
    process::{Command, ExitStatus},
};
use tracing::debug;

/// What happened when a command was run.
#[derive(Debug)]
pub enum RunOutcome {
    /// The command ran and exited with status 0.
    Succeeded,
    /// The command ran and exited unsuccessfully (non-zero or by signal).
    Failed(ExitStatus),
    /// The command could not be started (not found, permission denied, ...).
    NotLaunched(io::Error),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Succeeded)
    }

    /// Converts unsuccessful outcomes into a `SubmitError`.
    ///
    /// `program` and `cmd_line` only feed the error message.
    pub fn into_result(self, program: &str, cmd_line: &str) -> Result<()> {
        match self {
            RunOutcome::Succeeded => Ok(()),
            RunOutcome::Failed(status) => Err(SubmitError::ArchiverFailed {
                cmd: cmd_line.to_string(),
                status: status.to_string(),
            }
            .into()),
            RunOutcome::NotLaunched(source) => Err(SubmitError::ArchiverUnavailable {
                program: program.to_string(),
                source,
            }
            .into()),
        }
    }
}

/// Runs `command` to completion and blocks until it exits.
pub fn run_to_completion(command: &mut Command) -> RunOutcome {
    debug!("Spawning {:?}", command);
    match command.status() {
        Ok(status) if status.success() => {
            debug!("Command exited successfully");
            RunOutcome::Succeeded
        }
        Ok(status) => {
            debug!("Command exited with {}", status);
            RunOutcome::Failed(status)
        }
        Err(e) => {
            debug!("Command could not be started: {}", e);
            RunOutcome::NotLaunched(e)
        }
    }
}
