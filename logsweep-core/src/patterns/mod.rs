//! Turns console-logger templates into removal patterns.
//!
//! A template is free-form text with a handful of placeholders. Everything that is
//! not a placeholder is matched literally; the compiled pattern covers the whole
//! source line including its terminator, so replacing it with nothing deletes the line.
//!
//! This module works closely with `config` (for the template slots) and `engines`
//! (which apply the compiled patterns to documents).

pub mod compiler;
