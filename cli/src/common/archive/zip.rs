//! # Zip Invocation (`common::archive::zip`)
//!
//! File: cli/src/common/archive/zip.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Describes one call to the external `zip` utility. tc-submit never writes
//! the archive itself; it builds the argument vector and hands it to
//! `common::process`.
//!
//! The argument order is fixed:
//!
//! ```text
//! zip -r <archive> <source_dir> -x <exclude> [-x <exclude> ...]
//! ```
//!
//! Arguments are passed directly to the child process without a shell, so a
//! pattern such as `*/CMake*` reaches `zip` verbatim and is matched by `zip`
//! against archive paths rather than expanded against the working directory.
//!
use crate::core::config::{
    ArchiveConfig, BUILD_DIR_EXCLUDE, CMAKE_EXCLUDE, DEFAULT_ARCHIVER, DEFAULT_SOURCE_DIR,
};
use std::fmt;
use std::process::Command;

/// Recurse into directories.
pub const RECURSIVE_FLAG: &str = "-r";
/// Exclude paths matching the following pattern.
pub const EXCLUDE_FLAG: &str = "-x";

/// A fully specified `zip` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipInvocation {
    program: String,
    archive: String,
    source_dir: String,
    excludes: Vec<String>,
}

impl ZipInvocation {
    /// The fixed submission call: `zip -r <archive> triangle-counting -x cmake-build-debug -x */CMake*`.
    pub fn submission(archive: impl Into<String>) -> Self {
        Self {
            program: DEFAULT_ARCHIVER.to_string(),
            archive: archive.into(),
            source_dir: DEFAULT_SOURCE_DIR.to_string(),
            excludes: vec![BUILD_DIR_EXCLUDE.to_string(), CMAKE_EXCLUDE.to_string()],
        }
    }

    /// Same call shape, with program, source and exclusions taken from `cfg`.
    pub fn from_config(cfg: &ArchiveConfig, archive: impl Into<String>) -> Self {
        Self {
            program: cfg.archiver.clone(),
            archive: archive.into(),
            source_dir: cfg.source_dir.clone(),
            excludes: cfg.excludes.clone(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn archive(&self) -> &str {
        &self.archive
    }

    pub fn source_dir(&self) -> &str {
        &self.source_dir
    }

    /// Arguments following the program name, in the order `zip` expects them.
    pub fn args(&self) -> Vec<&str> {
        let mut args = Vec::with_capacity(3 + 2 * self.excludes.len());
        args.push(RECURSIVE_FLAG);
        args.push(self.archive.as_str());
        args.push(self.source_dir.as_str());
        for pattern in &self.excludes {
            args.push(EXCLUDE_FLAG);
            args.push(pattern.as_str());
        }
        args
    }

    /// Builds the child process. Stdio is inherited so `zip`'s progress output
    /// reaches the terminal.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.args());
        command
    }
}

impl fmt::Display for ZipInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args() {
            if arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
