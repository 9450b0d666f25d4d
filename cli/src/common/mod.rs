//! # tc-submit Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities used by the command logic (`commands::`), kept apart from
//! core infrastructure (`core::`):
//!
//! - **`archive`**: Archive naming and the description of the external `zip` call.
//! - **`process`**: Running an external command and reporting its outcome.
//!

/// Archive naming and the `zip` invocation.
pub mod archive;
/// Running external processes.
pub mod process;
