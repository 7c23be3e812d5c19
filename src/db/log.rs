use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Ensure that the internal `log` table exists.
pub fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    ensure_log_table(conn)?;

    // local timestamp, ISO 8601
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Open `db_path` and append an audit line; failures only produce a warning.
pub fn ttlog_path(db_path: &str, operation: &str, target: &str, message: &str) {
    let res = Connection::open(db_path)
        .map_err(AppError::from)
        .and_then(|conn| ttlog(&conn, operation, target, message));

    if let Err(e) = res {
        tracing::warn!(error = %e, operation, "failed to write internal log");
        crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
    }
}
