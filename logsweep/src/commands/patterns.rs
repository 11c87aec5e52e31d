// logsweep/src/commands/patterns.rs
//! The `patterns` command: lists, edits and previews the nine template slots.

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, Table};
use log::debug;
use std::io::{self, Write};
use std::path::Path;

use logsweep_core::{compile_pattern, compile_template, LoggerSettings, PatternSource, PATTERN_SLOTS};

use crate::cli::PatternsCommand;
use crate::commands::{info_msg, success_msg};
use crate::ui::theme::ThemeMap;

/// Renders a compiled pattern on one line, showing the trailing newline as `\n`.
pub fn display_pattern(pattern: &str) -> String {
    match pattern.strip_suffix('\n') {
        Some(body) => format!("{}\\n", body),
        None => pattern.to_string(),
    }
}

/// Builds the slot listing, optionally with each slot's compiled pattern.
pub fn patterns_table(settings: &LoggerSettings, compiled: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    if compiled {
        table.set_header(vec!["Slot", "Template", "Pattern", "Note"]);
    } else {
        table.set_header(vec!["Slot", "Template"]);
    }

    for slot in 0..PATTERN_SLOTS {
        let template = settings.pattern(slot);
        let shown = if template.is_empty() {
            "(empty)".to_string()
        } else {
            template.clone()
        };
        let mut row = vec![
            Cell::new(slot).set_alignment(CellAlignment::Right),
            Cell::new(shown),
        ];
        if compiled {
            let (pattern, note) = match compile_pattern(slot, &template) {
                Ok(p) if p.is_degenerate() => (display_pattern(&p.pattern), "matches every line".to_string()),
                Ok(p) => (display_pattern(&p.pattern), String::new()),
                Err(e) => (display_pattern(&compile_template(&template)), e.to_string()),
            };
            row.push(Cell::new(pattern));
            row.push(Cell::new(note));
        }
        table.add_row(row);
    }
    table
}

/// Runs one `patterns` subcommand against the settings file at `settings_path`.
pub fn run_patterns(
    cmd: &PatternsCommand,
    settings_path: &Path,
    theme_map: &ThemeMap,
    quiet: bool,
) -> Result<()> {
    debug!("Using settings file {}", settings_path.display());
    match cmd {
        PatternsCommand::List { compiled } => {
            let settings = LoggerSettings::load_or_default(settings_path)?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", patterns_table(&settings, *compiled))?;
        }
        PatternsCommand::Set { slot, template } => {
            let mut settings = LoggerSettings::load_or_default(settings_path)?;
            settings
                .set_pattern(*slot, template.as_str())
                .with_context(|| format!("Cannot set slot {}", slot))?;
            settings.save_to_file(settings_path)?;
            if !quiet {
                success_msg(
                    format!("Slot {} set to: {}", slot, template),
                    theme_map,
                );
            }
        }
        PatternsCommand::Reset { slot } => {
            let mut settings = LoggerSettings::load_or_default(settings_path)?;
            match slot {
                Some(slot) => settings
                    .reset_pattern(*slot)
                    .with_context(|| format!("Cannot reset slot {}", slot))?,
                None => settings.reset_all()?,
            }
            settings.save_to_file(settings_path)?;
            if !quiet {
                match slot {
                    Some(slot) => success_msg(format!("Slot {} restored to its default.", slot), theme_map),
                    None => success_msg("All slots restored to their defaults.", theme_map),
                }
            }
        }
        PatternsCommand::Compile { template } => {
            let pattern = compile_pattern(0, template)?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", display_pattern(&pattern.pattern))?;
            if pattern.is_degenerate() && !quiet {
                info_msg("This pattern matches every line.", theme_map);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_newline_is_shown_escaped() {
        assert_eq!(display_pattern(".*\\d*\n"), ".*\\d*\\n");
        assert_eq!(display_pattern("abc"), "abc");
    }

    #[test]
    fn compiled_listing_flags_empty_slots() {
        let settings = LoggerSettings::from_patterns(["console.log('$$', $$);"]).unwrap();
        let text = patterns_table(&settings, true).to_string();
        assert!(text.contains(".*console\\.log\\('.*', .*\\);\\n"));
        assert!(text.contains("(empty)"));
        assert!(text.contains("matches every line"));
    }
}
