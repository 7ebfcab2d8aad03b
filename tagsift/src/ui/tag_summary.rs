//! Table rendering for the `scan` command.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::io::{self, Write};
use tagsift_core::{Classification, TagSummaryItem};

/// Writes `summary` as a table; colours the classification column when `supports_color` is set.
pub fn print_summary<W: Write>(
    summary: &[TagSummaryItem],
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    if summary.is_empty() {
        return writeln!(writer, "No tags found.");
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Tag", "Classification", "Occurrences"]);

    for item in summary {
        let mut class_cell = Cell::new(item.classification.to_string());
        if supports_color {
            class_cell = class_cell.fg(match item.classification {
                Classification::Safe => Color::Green,
                Classification::Unsafe => Color::Red,
            });
        }
        table.add_row(vec![
            Cell::new(&item.tag_name),
            class_cell,
            Cell::new(item.occurrences),
        ]);
    }

    writeln!(writer, "{}", table)
}
