// logsweep-core/src/orchestrator.rs
//! The removal orchestrator: drives one end-to-end "remove logs" invocation.
//!
//! 1. Bail out when there is no document context at all.
//! 2. Ask for the scope; a dismissed prompt ends the run quietly.
//! 3. Compile all nine template slots.
//! 4. Resolve the scope's target; nothing to act on ends the run quietly.
//! 5. Dispatch one removal request per slot, in slot order, each seeing the
//!    text left by the previous one.
//!
//! Nothing is mutated before step 5, so every early exit leaves documents untouched.

use log::{debug, info, warn};

use crate::config::PatternSource;
use crate::document::{DocumentContext, ScopeTarget};
use crate::engine::{ReplaceEngine, ReplaceRequest};
use crate::errors::SweepError;
use crate::patterns::compiler::compile_patterns;
use crate::report::{RemovalReport, RemovalSummaryItem};
use crate::scope::ScopePrompt;

/// Switches for a removal run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalOptions {
    /// Leave out slots whose pattern matches every line (empty or wildcard-only
    /// templates). Off by default: every slot is applied.
    pub skip_degenerate: bool,
}

/// How a removal run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Patterns were dispatched against the chosen scope.
    Applied(RemovalReport),
    /// The scope prompt was dismissed.
    Cancelled,
    /// No document context was available for the chosen scope.
    NoTarget,
}

/// Runs a removal with default options.
pub fn run<S>(
    templates: &S,
    prompt: &mut dyn ScopePrompt,
    target: &mut dyn DocumentContext,
    engine: &mut dyn ReplaceEngine,
) -> Result<RemovalOutcome, SweepError>
where
    S: PatternSource + ?Sized,
{
    run_with_options(templates, prompt, target, engine, &RemovalOptions::default())
}

/// Runs a removal: prompt, compile, then dispatch every slot against the chosen scope.
pub fn run_with_options<S>(
    templates: &S,
    prompt: &mut dyn ScopePrompt,
    target: &mut dyn DocumentContext,
    engine: &mut dyn ReplaceEngine,
    options: &RemovalOptions,
) -> Result<RemovalOutcome, SweepError>
where
    S: PatternSource + ?Sized,
{
    if !target.is_available() {
        info!("No document context available; nothing to remove.");
        return Ok(RemovalOutcome::NoTarget);
    }

    let scope = match prompt.choose_scope()? {
        Some(scope) => scope,
        None => {
            info!("Scope selection cancelled; nothing removed.");
            return Ok(RemovalOutcome::Cancelled);
        }
    };

    let patterns = compile_patterns(templates)?;

    let mut resolved = match target.resolve(scope)? {
        Some(resolved) => resolved,
        None => {
            info!("Nothing to act on for scope '{}'.", scope);
            return Ok(RemovalOutcome::NoTarget);
        }
    };

    info!("Removing console logs from the {}.", scope);
    let mut report = RemovalReport::new(scope);

    for pattern in patterns {
        let degenerate = pattern.is_degenerate();
        let mut item = RemovalSummaryItem {
            slot: pattern.slot,
            template: pattern.template.clone(),
            pattern: pattern.pattern.clone(),
            degenerate,
            skipped: false,
            occurrences: 0,
            documents_changed: 0,
        };

        if degenerate && options.skip_degenerate {
            debug!("Skipping slot {}: pattern matches every line.", pattern.slot);
            item.skipped = true;
            report.items.push(item);
            continue;
        }
        if degenerate {
            warn!(
                "Applying slot {} with a pattern that matches every line.",
                pattern.slot
            );
        }

        let request = ReplaceRequest::removal(pattern);
        let outcome = match &mut resolved {
            ScopeTarget::Document(document) => engine.replace_in_document(&request, document)?,
            ScopeTarget::Collection(collection) => {
                engine.replace_in_collection(&request, collection)?
            }
        };

        item.occurrences = outcome.occurrences;
        item.documents_changed = outcome.documents_changed;
        report.items.push(item);
    }

    info!(
        "Removal finished: {} occurrence(s) removed.",
        report.total_occurrences()
    );
    Ok(RemovalOutcome::Applied(report))
}
