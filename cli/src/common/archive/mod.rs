//! # tc-submit Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything needed to describe a submission archive before it is written:
//!
//! - **`naming`**: Derives `tc-rapids-<YYYY-MM-DD-HH:MM>.zip` from a clock reading.
//! - **`zip`**: Describes the external `zip` call (flags, source, exclusions).
//!
//! The archive itself is produced by the external utility; see `common::process`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{naming, zip::ZipInvocation};
//! use chrono::Local;
//!
//! let name = naming::archive_filename("tc-rapids", &Local::now());
//! let invocation = ZipInvocation::submission(name);
//! println!("{}", invocation); // zip -r tc-rapids-...zip triangle-counting -x ...
//! ```
//!

pub mod naming;
pub mod zip;
