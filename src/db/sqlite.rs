//! File-backed SQLite engine.
//!
//! Each call opens its own connection through [`DbPool`], runs its
//! statements and drops the connection before returning. Nothing is cached
//! between calls.

use crate::db::backend::RecordBackend;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Summary, Timestamp, WorkRecord};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{Row, params};
use tracing::debug;

pub struct SqliteBackend {
    path: String,
}

impl SqliteBackend {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn open(&self) -> AppResult<DbPool> {
        debug!(path = %self.path, "opening sqlite connection");
        Ok(DbPool::new(&self.path)?)
    }
}

/// Map a `work_records` row. The timestamp column is read as a dynamic value
/// so that non-text or malformed content degrades to [`Timestamp::Raw`].
pub fn map_row(row: &Row) -> rusqlite::Result<WorkRecord> {
    let raw: Value = row.get("timestamp")?;
    let timestamp = match raw {
        Value::Text(s) => Timestamp::from_db_str(&s),
        Value::Integer(i) => Timestamp::Raw(i.to_string()),
        Value::Real(f) => Timestamp::Raw(f.to_string()),
        Value::Blob(b) => Timestamp::Raw(String::from_utf8_lossy(&b).into_owned()),
        Value::Null => Timestamp::Raw(String::new()),
    };

    Ok(WorkRecord {
        id: row.get("id")?,
        timestamp,
        hours: row.get("hours")?,
    })
}

impl RecordBackend for SqliteBackend {
    fn initialize(&self) -> AppResult<()> {
        let pool = self.open()?;
        init_db(&pool.conn)?;
        debug!(path = %self.path, "schema ensured");
        Ok(())
    }

    fn insert(&self, timestamp: &str, hours: i64) -> AppResult<i64> {
        let mut pool = self.open()?;
        let id = pool.with_conn(|conn| {
            conn.execute(
                "INSERT INTO work_records (timestamp, hours) VALUES (?1, ?2)",
                params![timestamp, hours],
            )?;
            Ok(conn.last_insert_rowid())
        })?;
        debug!(id, timestamp, hours, "record inserted");
        Ok(id)
    }

    fn list_all(&self) -> AppResult<Vec<WorkRecord>> {
        let pool = self.open()?;
        let mut stmt = pool.conn.prepare(
            "SELECT id, timestamp, hours FROM work_records
             ORDER BY timestamp DESC, id DESC",
        )?;

        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Day and month sums only consider rows stored in the canonical
    /// format; anything else counts towards the total alone.
    fn aggregate(&self, today: NaiveDate) -> AppResult<Summary> {
        let pool = self.open()?;

        let day = today.format("%Y-%m-%d").to_string();
        let month = today.format("%Y-%m").to_string();

        let total: i64 = pool.conn.query_row(
            "SELECT COALESCE(SUM(hours), 0) FROM work_records",
            [],
            |row| row.get(0),
        )?;

        let today_hours: i64 = pool.conn.query_row(
            "SELECT COALESCE(SUM(hours), 0) FROM work_records
             WHERE timestamp = strftime('%Y-%m-%d %H:%M:%S', timestamp)
               AND substr(timestamp, 1, 10) = ?1",
            [&day],
            |row| row.get(0),
        )?;

        let month_hours: i64 = pool.conn.query_row(
            "SELECT COALESCE(SUM(hours), 0) FROM work_records
             WHERE timestamp = strftime('%Y-%m-%d %H:%M:%S', timestamp)
               AND substr(timestamp, 1, 7) = ?1",
            [&month],
            |row| row.get(0),
        )?;

        Ok(Summary::new(today_hours, month_hours, total))
    }
}
