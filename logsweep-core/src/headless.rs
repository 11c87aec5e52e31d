// logsweep-core/src/headless.rs
// File: logsweep-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the core without any prompt or file system.
//! Provides a one-shot removal over a string.

use anyhow::{anyhow, Result};

use crate::config::PatternSource;
use crate::document::{Document, Workspace};
use crate::engines::regex_engine::RegexReplaceEngine;
use crate::orchestrator::{run_with_options, RemovalOptions, RemovalOutcome};
use crate::report::RemovalReport;
use crate::scope::{PresetScope, RemovalScope};

/// Removes every configured log statement from `content` and returns the cleaned text.
///
/// # Arguments
///
/// * `templates` - The nine template slots (settings, or any list of templates).
/// * `content` - The text to clean.
/// * `options` - Removal switches.
pub fn headless_remove_logs<S>(
    templates: &S,
    content: &str,
    options: &RemovalOptions,
) -> Result<(String, RemovalReport)>
where
    S: PatternSource + ?Sized,
{
    let mut workspace = Workspace::new().with_active_document(Document::new("<input>", content));
    let mut prompt = PresetScope(Some(RemovalScope::CurrentDocument));
    let mut engine = RegexReplaceEngine::new();

    let outcome = run_with_options(templates, &mut prompt, &mut workspace, &mut engine, options)?;
    let report = match outcome {
        RemovalOutcome::Applied(report) => report,
        other => return Err(anyhow!("Headless removal did not run: {:?}", other)),
    };

    let cleaned = workspace
        .active_document()
        .map(|doc| doc.output_text())
        .unwrap_or_default();
    Ok((cleaned, report))
}
