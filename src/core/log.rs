use crate::db::log::ensure_log_table;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

/// Widest `operation (target)` column before truncation.
const OP_WIDTH_LIMIT: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    match RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()) {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// ANSI colour for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "prompt" => Colour::Cyan,
        "backup" => Colour::Blue,
        "export" => Colour::Yellow,
        "vacuum" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<LogEntry>> {
        ensure_log_table(&pool.conn)?;

        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, COALESCE(target, ''), message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get(3)?,
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    /// One line per entry, operation coloured, `operation (target)` column
    /// truncated to [`OP_WIDTH_LIMIT`] visible characters.
    pub fn format(entries: &[LogEntry]) -> Vec<String> {
        let op_target = |e: &LogEntry| {
            if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            }
        };

        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_LIMIT);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        entries
            .iter()
            .map(|e| {
                let color = color_for_operation(&e.operation);

                let visible = op_target(e);
                let visible = if visible.chars().count() > OP_WIDTH_LIMIT {
                    let mut s: String = visible.chars().take(OP_WIDTH_LIMIT - 3).collect();
                    s.push_str("...");
                    s
                } else {
                    visible
                };

                // only the operation word is coloured
                let colored = match visible.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(visible.as_str()).to_string(),
                };

                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    e.id,
                    e.date,
                    colored,
                    padding,
                    e.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = Self::load(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::format(&entries) {
            println!("{}", line);
        }
        Ok(())
    }
}
