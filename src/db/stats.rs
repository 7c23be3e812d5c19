use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Quick figures about the database file and its records.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DbInfo {
    pub file_size: u64,
    pub records: i64,
    pub total_hours: i64,
    pub first: Option<String>,
    pub last: Option<String>,
}

pub fn collect_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<DbInfo> {
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    let (records, total_hours): (i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(hours), 0) FROM work_records",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT CAST(timestamp AS TEXT) FROM work_records ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT CAST(timestamp AS TEXT) FROM work_records ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(DbInfo {
        file_size,
        records,
        total_hours,
        first,
        last,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    let info = collect_db_info(pool, db_path)?;
    println!();

    let file_mb = (info.file_size as f64) / (1024.0 * 1024.0);
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    println!(
        "{}• Total records:{} {}{}{}",
        CYAN, RESET, GREEN, info.records, RESET
    );
    println!(
        "{}• Total hours:{} {}{}{}",
        CYAN, RESET, GREEN, info.total_hours, RESET
    );

    let fmt_first = info
        .first
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = info
        .last
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
