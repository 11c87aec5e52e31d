// logsweep/src/ui/removal_summary.rs
//! Per-slot summary table printed after a removal run.

use std::io::{self, Write};

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, Table};
use logsweep_core::{RemovalReport, RemovalSummaryItem};

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

fn note_for(item: &RemovalSummaryItem) -> &'static str {
    match (item.skipped, item.degenerate) {
        (true, _) => "skipped",
        (false, true) => "matches every line",
        (false, false) => "",
    }
}

/// Gives `cell` the theme's foreground for `entry`, when colors are on.
fn themed(cell: Cell, entry: ThemeEntry, theme_map: &ThemeMap, enable_colors: bool) -> Cell {
    if !enable_colors {
        return cell;
    }
    match theme_map.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => cell.fg(color.to_table_color()),
        None => cell,
    }
}

/// Builds the summary table for a report. The slot and removed columns take the
/// `summary_slot` and `summary_occurrences` theme colors.
pub fn summary_table(report: &RemovalReport, theme_map: &ThemeMap, enable_colors: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["Slot", "Template", "Removed", "Files", "Note"]);
    if enable_colors {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    for item in &report.items {
        let template = if item.template.is_empty() {
            "(empty)"
        } else {
            item.template.as_str()
        };
        table.add_row(vec![
            themed(
                Cell::new(item.slot).set_alignment(CellAlignment::Right),
                ThemeEntry::SummarySlot,
                theme_map,
                enable_colors,
            ),
            Cell::new(template),
            themed(
                Cell::new(item.occurrences).set_alignment(CellAlignment::Right),
                ThemeEntry::SummaryOccurrences,
                theme_map,
                enable_colors,
            ),
            Cell::new(item.documents_changed).set_alignment(CellAlignment::Right),
            Cell::new(note_for(item)),
        ]);
    }
    table
}

/// Prints the title, the per-slot table, and the total line.
pub fn print_summary<W: Write + ?Sized>(
    report: &RemovalReport,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let title = format!("Removal Summary ({})", report.scope);
    writeln!(writer, "{}", paint(&title, ThemeEntry::Header, theme_map, enable_colors))?;
    writeln!(writer, "{}", summary_table(report, theme_map, enable_colors))?;

    let total = report.total_occurrences();
    let total_line = format!(
        "Total: {} log statement{} removed.",
        total,
        if total == 1 { "" } else { "s" }
    );
    writeln!(
        writer,
        "{}",
        paint(&total_line, ThemeEntry::SummaryOccurrences, theme_map, enable_colors)
    )
}
