//! # tc-submit Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces shared by the command logic:
//! - `config`: optional TOML configuration, loading, merging and validation
//! - `error`: error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{SubmitError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
