//! # tc-submit Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs
//! the compiled `tc-submit` binary inside its own temporary working directory
//! with an isolated config home, so a user's real configuration never leaks in.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Matches the archive name produced for any clock reading.
pub const ARCHIVE_NAME_REGEX: &str = r"tc-rapids-\d{4}-\d{2}-\d{2}-\d{2}:\d{2}\.zip";

/// # Get tc-submit Command (`tc_submit_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `tc-submit` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn tc_submit_cmd() -> Command {
    Command::cargo_bin("tc-submit").expect("Failed to find tc-submit binary for testing")
}

/// A `tc-submit` command running in `workdir`, with `XDG_CONFIG_HOME` and
/// `HOME` pointed inside it and `RUST_LOG` cleared.
pub fn tc_submit_in(workdir: &Path) -> Command {
    let mut cmd = tc_submit_cmd();
    cmd.current_dir(workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env("HOME", workdir)
        .env_remove("RUST_LOG");
    cmd
}

/// Creates a temporary working directory containing a `triangle-counting`
/// source tree with a build directory and CMake output inside it.
pub fn submission_workdir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let src = dir.path().join("triangle-counting");
    fs::create_dir_all(src.join("src")).unwrap();
    fs::create_dir_all(src.join("cmake-build-debug")).unwrap();
    fs::create_dir_all(src.join("CMakeFiles")).unwrap();
    fs::write(src.join("src/main.cpp"), "int main() { return 0; }\n").unwrap();
    fs::write(src.join("cmake-build-debug/tc"), "binary").unwrap();
    fs::write(src.join("CMakeFiles/Makefile.cmake"), "# generated\n").unwrap();
    dir
}

/// Writes a project config (`.tc-submit.toml`) into `workdir`.
pub fn write_project_config(workdir: &Path, toml: &str) {
    fs::write(workdir.join(".tc-submit.toml"), toml).expect("Failed to write project config");
}

/// Installs an executable shell script named `name` in `workdir` that records
/// its arguments, one per line, to `<workdir>/archiver-args.txt` and exits
/// with `exit_code`. Returns the script's absolute path.
#[cfg(unix)]
pub fn install_recording_archiver(workdir: &Path, name: &str, exit_code: i32) -> String {
    use std::os::unix::fs::PermissionsExt;

    let script = workdir.join(name);
    let record = workdir.join("archiver-args.txt");
    fs::write(
        &script,
        format!(
            "#!/bin/sh\nfor a in \"$@\"; do printf '%s\\n' \"$a\"; done > '{}'\nexit {}\n",
            record.display(),
            exit_code
        ),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script.to_string_lossy().into_owned()
}
