//! # Archive Naming (`common::archive::naming`)
//!
//! File: cli/src/common/archive/naming.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Builds the submission archive name from a point in time:
//! `<prefix>-<YYYY-MM-DD-HH:MM>.zip`, e.g. `tc-rapids-2024-03-07-09:05.zip`.
//!
//! Names have minute resolution, so two runs within the same minute produce
//! the same name and the second run updates the first archive in place.
//!
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// `strftime` pattern for the archive timestamp (`YYYY-MM-DD-HH:MM`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H:%M";
/// Extension appended to every archive name.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Formats `at` as `YYYY-MM-DD-HH:MM` in its own time zone.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Returns `<prefix>-<timestamp>.zip` for the given instant.
pub fn archive_filename<Tz>(prefix: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{}-{}.{}", prefix, format_timestamp(at), ARCHIVE_EXTENSION)
}
