use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `work_records` table (and its index) if missing.
/// Never touches existing rows.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_records (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,          -- YYYY-MM-DD HH:MM:SS
            hours     INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_work_records_timestamp ON work_records(timestamp);
        "#,
    )?;
    Ok(())
}
