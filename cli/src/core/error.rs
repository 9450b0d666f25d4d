//! # tc-submit Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used by tc-submit. Most code returns
//! the `anyhow`-backed [`Result`] alias and attaches context with
//! `anyhow::Context`; the typed [`SubmitError`] variants mark the few failures
//! callers may want to match on.
//!
//! ## Architecture
//!
//! - `SubmitError`: a `thiserror` enum covering configuration problems and the
//!   two ways the archiver can fail (could not be launched, or exited non-zero).
//! - `Result<T>`: an alias for `anyhow::Result<T>`.
//!
//! The archiver variants are only produced in strict mode. By default the
//! archiver's outcome is logged and otherwise ignored.
//!
//! ## Examples
//!
//! ```rust
//! // Detecting a strict-mode archiver failure
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<SubmitError>(), Some(SubmitError::ArchiverFailed { .. })) => {
//!         eprintln!("zip reported an error");
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for tc-submit.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Archiver '{program}' could not be started: {source}")]
    ArchiverUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Archiver command failed: {cmd}, Status: {status}")]
    ArchiverFailed { cmd: String, status: String },
}

/// Type alias for Result using anyhow::Error.
pub type Result<T> = anyhow::Result<T>;
