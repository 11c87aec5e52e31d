// logsweep/src/ui/diff_viewer.rs
//! Unified diff output for documents changed by a removal run.
//!
//! Removed lines are painted with the `diff_removed` style, surviving context
//! lines are left plain.

use std::io::{self, Write};

use diffy::{create_patch, Line as DiffLine};

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

/// Writes a unified diff between `original` and `modified` for `label`.
/// Writes nothing when the texts are equal.
pub fn print_diff<W: Write + ?Sized>(
    label: &str,
    original: &str,
    modified: &str,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    if original == modified {
        return Ok(());
    }

    let patch = create_patch(original, modified);
    let header = |text: String| paint(&text, ThemeEntry::DiffHeader, theme_map, enable_colors);

    writeln!(writer, "{}", header(format!("--- a/{}", label)))?;
    writeln!(writer, "{}", header(format!("+++ b/{}", label)))?;

    for hunk in patch.hunks() {
        let old = hunk.old_range();
        let new = hunk.new_range();
        writeln!(
            writer,
            "{}",
            header(format!(
                "@@ -{},{} +{},{} @@",
                old.start(),
                old.len(),
                new.start(),
                new.len()
            ))
        )?;

        for line in hunk.lines() {
            let (prefix, text, entry) = match line {
                DiffLine::Delete(s) => ("-", *s, Some(ThemeEntry::DiffRemoved)),
                DiffLine::Insert(s) => ("+", *s, Some(ThemeEntry::DiffAdded)),
                DiffLine::Context(s) => (" ", *s, None),
            };
            let body = format!("{}{}", prefix, text.strip_suffix('\n').unwrap_or(text));
            match entry {
                Some(entry) => writeln!(writer, "{}", paint(&body, entry, theme_map, enable_colors))?,
                None => writeln!(writer, "{}", body)?,
            }
        }
    }
    Ok(())
}
