// logsweep/src/ui/mod.rs
//! Terminal presentation: themes, status messages, diffs, summaries and prompts.

pub mod diff_viewer;
pub mod output_format;
pub mod removal_summary;
pub mod scope_prompt;
pub mod theme;
