//! Removal scope and the scope-selection seam.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::SweepError;

/// How far a removal run reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalScope {
    /// Only the active document.
    CurrentDocument,
    /// Every document reachable from the project root.
    WholeProject,
}

impl fmt::Display for RemovalScope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RemovalScope::CurrentDocument => write!(f, "current document"),
            RemovalScope::WholeProject => write!(f, "whole project"),
        }
    }
}

/// Asks which scope to remove logs from.
///
/// `Ok(None)` means the user dismissed the prompt; it is not an error.
pub trait ScopePrompt {
    fn choose_scope(&mut self) -> Result<Option<RemovalScope>, SweepError>;
}

/// A prompt whose answer is known up front, e.g. from a command-line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetScope(pub Option<RemovalScope>);

impl ScopePrompt for PresetScope {
    fn choose_scope(&mut self) -> Result<Option<RemovalScope>, SweepError> {
        Ok(self.0)
    }
}
