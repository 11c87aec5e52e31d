//! Per-slot reporting for a removal run.

use serde::Serialize;

use crate::scope::RemovalScope;

/// What one template slot removed during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalSummaryItem {
    pub slot: usize,
    pub template: String,
    pub pattern: String,
    /// The pattern matches every terminated line.
    pub degenerate: bool,
    /// The slot was not dispatched (degenerate slots under `skip_degenerate`).
    pub skipped: bool,
    pub occurrences: usize,
    pub documents_changed: usize,
}

/// The result of a completed removal run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalReport {
    pub scope: RemovalScope,
    pub items: Vec<RemovalSummaryItem>,
}

impl RemovalReport {
    pub fn new(scope: RemovalScope) -> Self {
        Self {
            scope,
            items: Vec::new(),
        }
    }

    pub fn total_occurrences(&self) -> usize {
        self.items.iter().map(|i| i.occurrences).sum()
    }

    pub fn has_changes(&self) -> bool {
        self.total_occurrences() > 0
    }

    /// Slots whose patterns were actually handed to the replace engine.
    pub fn dispatched(&self) -> impl Iterator<Item = &RemovalSummaryItem> {
        self.items.iter().filter(|i| !i.skipped)
    }
}
