//! Formatting utilities used for CLI and export outputs.

use crate::models::{Summary, WorkRecord};
use crate::utils::table::{Column, Table};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// "1 hour", "8 hours".
pub fn hours_label(hours: i64) -> String {
    if hours == 1 || hours == -1 {
        format!("{} hour", hours)
    } else {
        format!("{} hours", hours)
    }
}

/// Render the records history as a plain-text table.
///
/// `date_format` is a chrono pattern; raw (unparseable) timestamps are shown
/// as stored.
pub fn records_table(records: &[WorkRecord], date_format: &str, separator: char) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("Date Time", 19),
        Column::new("Hours", 5),
    ])
    .with_separator(separator);

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            r.timestamp.display_with(date_format),
            r.hours.to_string(),
        ]);
    }

    table.render()
}

/// Three-line summary block.
pub fn summary_lines(summary: &Summary) -> Vec<String> {
    vec![
        format!("Today:      {}", hours_label(summary.today)),
        format!("This month: {}", hours_label(summary.month)),
        format!("Total:      {}", hours_label(summary.total)),
    ]
}
