//! # tc-submit Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! tc-submit works without any configuration: the archive prefix, source
//! directory, exclusion patterns and archiver program are fixed constants.
//! This module lets a project or user override them through an optional TOML
//! file, and produces the defaults unchanged when no file is present.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.tc-submit.toml` in the current directory or an
//!    ancestor (the search stops at the first directory containing `.git`)
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/tc-submit/config.toml` on Linux)
//! 3. Default values defined in the code
//!
//! Project values override user values field by field when they differ from
//! the defaults. The merged configuration has `~` expanded in `source_dir` and
//! is validated before use.
//!
//! ## Examples
//!
//! ```toml
//! # .tc-submit.toml
//! [archive]
//! source_dir = "triangle-counting"
//! excludes = ["cmake-build-debug", "*/CMake*", "*.o"]
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let archive_name = naming::archive_filename(&cfg.archive.prefix, &Local::now());
//! ```
//!
use crate::core::error::{Result, SubmitError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Prefix of every archive name: `tc-rapids-<timestamp>.zip`.
pub const DEFAULT_PREFIX: &str = "tc-rapids";
/// Directory archived relative to the working directory.
pub const DEFAULT_SOURCE_DIR: &str = "triangle-counting";
/// IDE build output directory.
pub const BUILD_DIR_EXCLUDE: &str = "cmake-build-debug";
/// CMake-generated subdirectories (`CMakeFiles`, `CMakeCache.txt`, ...).
pub const CMAKE_EXCLUDE: &str = "*/CMake*";
/// External archiver invoked to write the zip.
pub const DEFAULT_ARCHIVER: &str = "zip";

const PROJECT_CONFIG_FILENAME: &str = ".tc-submit.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub archive: ArchiveConfig,
}

/// What gets archived, how the archive is named, and which program writes it.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ArchiveConfig {
    /// Archive name prefix; the timestamp and `.zip` are appended.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Directory to archive (can use ~). Will be expanded.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    /// Patterns passed to the archiver with `-x`, in order.
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,
    /// Name or path of the archiver executable.
    #[serde(default = "default_archiver")]
    pub archiver: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            source_dir: default_source_dir(),
            excludes: default_excludes(),
            archiver: default_archiver(),
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}
fn default_source_dir() -> String {
    DEFAULT_SOURCE_DIR.to_string()
}
fn default_excludes() -> Vec<String> {
    vec![BUILD_DIR_EXCLUDE.to_string(), CMAKE_EXCLUDE.to_string()]
}
fn default_archiver() -> String {
    DEFAULT_ARCHIVER.to_string()
}

/// Loads, merges, expands and validates configuration for the current directory.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    load_config_from(&current_dir)
}

/// Same as [`load_config`], with the project search starting at `start_dir`.
pub fn load_config_from(start_dir: &Path) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config(start_dir)?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "tc-submit") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start_dir: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in {} or its ancestors.",
            PROJECT_CONFIG_FILENAME,
            start_dir.display()
        );
        Ok(None)
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = ArchiveConfig::default();
    let (user, project) = (user.archive, project_cfg.archive);
    Config {
        archive: ArchiveConfig {
            prefix: if project.prefix != defaults.prefix {
                project.prefix
            } else {
                user.prefix
            },
            source_dir: if project.source_dir != defaults.source_dir {
                project.source_dir
            } else {
                user.source_dir
            },
            excludes: if project.excludes != defaults.excludes {
                project.excludes
            } else {
                user.excludes
            },
            archiver: if project.archiver != defaults.archiver {
                project.archiver
            } else {
                user.archiver
            },
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.archive.source_dir = shellexpand::tilde(&config.archive.source_dir).into_owned();
    debug!("Expanded source directory: {}", config.archive.source_dir);
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    let archive = &config.archive;
    if archive.prefix.is_empty() {
        return Err(anyhow!(SubmitError::Config(
            "Archive prefix cannot be empty.".to_string()
        )));
    }
    if archive.prefix.contains(['/', '\\']) {
        return Err(anyhow!(SubmitError::Config(format!(
            "Archive prefix '{}' must not contain a path separator.",
            archive.prefix
        ))));
    }
    if archive.source_dir.is_empty() {
        return Err(anyhow!(SubmitError::Config(
            "Source directory cannot be empty.".to_string()
        )));
    }
    if archive.archiver.is_empty() {
        return Err(anyhow!(SubmitError::Config(
            "Archiver program cannot be empty.".to_string()
        )));
    }
    if let Some(pos) = archive.excludes.iter().position(String::is_empty) {
        return Err(anyhow!(SubmitError::Config(format!(
            "Exclusion pattern #{} is empty.",
            pos + 1
        ))));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_fixed_constants() {
        let cfg = Config::default();
        assert_eq!(cfg.archive.prefix, "tc-rapids");
        assert_eq!(cfg.archive.source_dir, "triangle-counting");
        assert_eq!(cfg.archive.excludes, vec!["cmake-build-debug", "*/CMake*"]);
        assert_eq!(cfg.archive.archiver, "zip");
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let toml_content = r#"
            [archive]
            source_dir = "~/submissions/tc"
            excludes = ["build"]
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.archive.source_dir, "~/submissions/tc"); // Not yet expanded
        assert_eq!(config.archive.excludes, vec!["build"]);
        assert_eq!(config.archive.prefix, DEFAULT_PREFIX);
        assert_eq!(config.archive.archiver, DEFAULT_ARCHIVER);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[archive]\nlevel = 9\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = Config {
            archive: ArchiveConfig {
                prefix: "user-prefix".into(),
                archiver: "/usr/local/bin/zip".into(),
                ..Default::default()
            },
        };
        let project = Config {
            archive: ArchiveConfig {
                prefix: "team-7".into(),
                ..Default::default()
            },
        };

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.archive.prefix, "team-7");
        assert_eq!(merged.archive.archiver, "/usr/local/bin/zip"); // Project left default
        assert_eq!(merged.archive.source_dir, DEFAULT_SOURCE_DIR);
    }

    #[test]
    fn test_merge_without_project_keeps_user() {
        let user = Config {
            archive: ArchiveConfig {
                excludes: vec!["out".into()],
                ..Default::default()
            },
        };
        let merged = merge_configs(user.clone(), None);
        assert_eq!(merged, user);
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            archive: ArchiveConfig {
                source_dir: "~/tc".into(),
                ..Default::default()
            },
        };
        expand_config_paths(&mut config).unwrap();
        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(config.archive.source_dir, home_dir.join("tc").to_string_lossy());

        let mut relative = Config::default();
        expand_config_paths(&mut relative).unwrap();
        assert_eq!(relative.archive.source_dir, DEFAULT_SOURCE_DIR); // Unchanged
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            ArchiveConfig {
                prefix: String::new(),
                ..Default::default()
            },
            ArchiveConfig {
                prefix: "out/tc".into(),
                ..Default::default()
            },
            ArchiveConfig {
                archiver: String::new(),
                ..Default::default()
            },
            ArchiveConfig {
                excludes: vec!["build".into(), String::new()],
                ..Default::default()
            },
        ];
        for archive in cases {
            let err = validate_config(&Config { archive }).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<SubmitError>(),
                Some(SubmitError::Config(_))
            ));
        }
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILENAME),
            "[archive]\nprefix = \"team-7\"\n",
        )
        .unwrap();

        let found = find_project_config_path(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join(PROJECT_CONFIG_FILENAME));
        assert_eq!(load_config_from_path(&found).unwrap().archive.prefix, "team-7");
    }

    #[test]
    fn test_project_search_stops_at_git_root() {
        let temp_dir = tempdir().unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        assert!(find_project_config_path(&repo).is_none());
    }
}
