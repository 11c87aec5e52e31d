// logsweep/src/ui/scope_prompt.rs
//! Interactive scope selection on a terminal.

use std::io::{BufRead, Write};

use log::debug;
use logsweep_core::{RemovalScope, ScopePrompt, SweepError};

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

const MAX_ATTEMPTS: usize = 3;

/// Asks `[f]ile / [p]roject / [c]ancel` on `output` and reads the answer from `input`.
///
/// An empty line, `c`, end of input, or repeated unrecognised answers dismiss the prompt.
pub struct TerminalScopePrompt<'a, R, W> {
    input: R,
    output: W,
    theme_map: &'a ThemeMap,
    enable_colors: bool,
}

impl<'a, R: BufRead, W: Write> TerminalScopePrompt<'a, R, W> {
    pub fn new(input: R, output: W, theme_map: &'a ThemeMap, enable_colors: bool) -> Self {
        Self {
            input,
            output,
            theme_map,
            enable_colors,
        }
    }
}

fn parse_answer(answer: &str) -> Option<Option<RemovalScope>> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "f" | "file" => Some(Some(RemovalScope::CurrentDocument)),
        "p" | "project" => Some(Some(RemovalScope::WholeProject)),
        "" | "c" | "cancel" | "q" => Some(None),
        _ => None,
    }
}

impl<R: BufRead, W: Write> ScopePrompt for TerminalScopePrompt<'_, R, W> {
    fn choose_scope(&mut self) -> Result<Option<RemovalScope>, SweepError> {
        let question = paint(
            "Remove console logs from: [f]ile / [p]roject / [c]ancel > ",
            ThemeEntry::Prompt,
            self.theme_map,
            self.enable_colors,
        );

        for _ in 0..MAX_ATTEMPTS {
            write!(self.output, "{}", question)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Scope prompt reached end of input.");
                return Ok(None);
            }
            if let Some(choice) = parse_answer(&line) {
                debug!("Scope prompt answered with {:?}.", choice);
                return Ok(choice);
            }
            writeln!(self.output, "Please answer f, p or c.")?;
        }
        Ok(None)
    }
}
