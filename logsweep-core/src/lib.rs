// logsweep-core/src/lib.rs
//! # logsweep Core Library
//!
//! `logsweep-core` provides the platform-independent logic for stripping
//! previously inserted console-logger statements from source files. It compiles
//! configurable log-line templates into line-removal patterns and applies them,
//! one slot after another, to a single document or to every document in a project.
//!
//! Prompting, text mutation, and document access sit behind small traits so the
//! compiler and orchestrator can be driven by a CLI, an editor integration, or a test.
//!
//! ## Modules
//!
//! * `config`: The nine template slots (`LoggerSettings`) and the `PatternSource` trait.
//! * `patterns`: The template-to-regex compiler.
//! * `scope`: `RemovalScope` and the `ScopePrompt` trait.
//! * `document`: Documents, project discovery, and the `DocumentContext` trait.
//! * `engine`: The `ReplaceEngine` trait and its request/outcome types.
//! * `engines`: Concrete `ReplaceEngine` implementations.
//! * `orchestrator`: Drives one removal invocation end to end.
//! * `report`: Per-slot results of a run.
//! * `headless`: One-shot removal over a string.
//!
//! ## Usage Example
//!
//! ```rust
//! use logsweep_core::{headless_remove_logs, LoggerSettings, RemovalOptions};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let settings = LoggerSettings::load_default()?;
//!     let input = "run();\nconsole.log('value', value);\ndone();\n";
//!
//!     let (cleaned, report) = headless_remove_logs(&settings, input, &RemovalOptions::default())?;
//!     assert_eq!(cleaned, "run();\ndone();\n");
//!     assert_eq!(report.total_occurrences(), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible file operations return `anyhow::Result` with context. Trait seams
//! return [`SweepError`]. A dismissed prompt or a missing document is not an
//! error; it is reported through [`RemovalOutcome`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod document;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod orchestrator;
pub mod patterns;
pub mod report;
pub mod scope;

/// Re-exports the settings types and the configuration seam.
pub use config::{
    default_settings_path, LoggerSettings, PatternSource, MAX_TEMPLATE_LENGTH, PATTERN_SLOTS,
    SETTINGS_PATH_ENV,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::SweepError;

/// Re-exports the template compiler.
pub use patterns::compiler::{compile_pattern, compile_patterns, compile_template, CompiledPattern};

/// Re-exports document handling and the document context seam.
pub use document::{
    DiscoveryOptions, Document, DocumentCollection, DocumentContext, LineEnding, ScopeTarget,
    Workspace,
};

/// Re-exports the replace engine seam and its regex implementation.
pub use engine::{ReplaceEngine, ReplaceOutcome, ReplaceRequest};
pub use engines::regex_engine::RegexReplaceEngine;

/// Re-exports scope selection.
pub use scope::{PresetScope, RemovalScope, ScopePrompt};

/// Re-exports the orchestrator entry points and reporting types.
pub use orchestrator::{run, run_with_options, RemovalOptions, RemovalOutcome};
pub use report::{RemovalReport, RemovalSummaryItem};

/// Re-exports the one-shot helper.
pub use headless::headless_remove_logs;
