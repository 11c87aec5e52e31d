// logsweep/src/lib.rs
//! # logsweep CLI Application
//!
//! This crate provides the terminal interface for `logsweep-core`: argument
//! parsing, the interactive scope prompt, diffs, summaries and themed output.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::remove::{run_remove, RemoveOptions};
pub use commands::patterns::run_patterns;
