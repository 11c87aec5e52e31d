// logsweep-core/src/engine.rs
//! Defines the `ReplaceEngine` trait and the request/outcome types it exchanges.
//!
//! The replace engine is the collaborator that performs the actual text
//! mutation. The orchestrator only builds `ReplaceRequest`s and dispatches them
//! per scope; it never edits documents itself. Keeping this behind a trait lets
//! the orchestrator be tested against a recording engine with no file system.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;

use crate::document::{Document, DocumentCollection};
use crate::errors::SweepError;
use crate::patterns::compiler::CompiledPattern;

/// A single find-and-replace instruction.
#[derive(Debug, Clone)]
pub struct ReplaceRequest {
    /// The compiled pattern to search for.
    pub pattern: CompiledPattern,
    /// Text substituted for each match.
    pub replacement: String,
    /// Replace every non-overlapping match rather than only the first.
    pub global: bool,
    /// Ask before each replacement.
    pub prompt_on_replace: bool,
}

impl ReplaceRequest {
    /// A request that deletes every match without confirmation.
    pub fn removal(pattern: CompiledPattern) -> Self {
        Self {
            pattern,
            replacement: String::new(),
            global: true,
            prompt_on_replace: false,
        }
    }
}

/// What one dispatched request changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaceOutcome {
    /// Number of matches replaced.
    pub occurrences: usize,
    /// Number of documents whose text changed.
    pub documents_changed: usize,
}

impl ReplaceOutcome {
    pub fn merge(&mut self, other: ReplaceOutcome) {
        self.occurrences += other.occurrences;
        self.documents_changed += other.documents_changed;
    }
}

/// A search-and-replace facility.
///
/// Both operations are synchronous and never prompt per match.
pub trait ReplaceEngine {
    /// Applies the request to a single document.
    fn replace_in_document(
        &mut self,
        request: &ReplaceRequest,
        document: &mut Document,
    ) -> Result<ReplaceOutcome, SweepError>;

    /// Applies the request to every document in the collection.
    fn replace_in_collection(
        &mut self,
        request: &ReplaceRequest,
        collection: &mut DocumentCollection,
    ) -> Result<ReplaceOutcome, SweepError>;
}
