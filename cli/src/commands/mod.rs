//! # tc-submit Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! tc-submit performs a single action, so there is one command module. Its
//! argument struct is flattened into the top-level `Cli` in `main.rs`.
//!
//! - `submit`: Names the archive and runs `zip` on the submission directory.
//!

/// Builds the timestamped submission archive.
pub mod submit;
