//! Process-local engine with the same ordering and aggregation rules as the
//! SQLite one. Data lives as long as the value does.

use crate::db::backend::RecordBackend;
use crate::errors::{AppError, AppResult};
use crate::models::{Summary, Timestamp, WorkRecord};
use chrono::{Datelike, NaiveDate};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Rows {
    next_id: i64,
    rows: Vec<(i64, String, i64)>,
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    inner: Mutex<Rows>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value verbatim, bypassing any formatting. Mirrors writing
    /// directly into the table with another tool.
    pub fn insert_raw(&self, timestamp: &str, hours: i64) -> AppResult<i64> {
        self.insert(timestamp, hours)
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Rows>> {
        self.inner
            .lock()
            .map_err(|_| AppError::Storage("memory backend lock poisoned".into()))
    }
}

impl RecordBackend for MemoryBackend {
    fn initialize(&self) -> AppResult<()> {
        self.lock().map(|_| ())
    }

    fn insert(&self, timestamp: &str, hours: i64) -> AppResult<i64> {
        let mut guard = self.lock()?;
        guard.next_id += 1;
        let id = guard.next_id;
        guard.rows.push((id, timestamp.to_string(), hours));
        Ok(id)
    }

    fn list_all(&self) -> AppResult<Vec<WorkRecord>> {
        let guard = self.lock()?;
        let mut rows = guard.rows.clone();
        // same ordering as `ORDER BY timestamp DESC, id DESC`
        rows.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Ok(rows
            .into_iter()
            .map(|(id, ts, hours)| WorkRecord::new(id, Timestamp::from_db_str(&ts), hours))
            .collect())
    }

    fn aggregate(&self, today: NaiveDate) -> AppResult<Summary> {
        let guard = self.lock()?;
        let mut summary = Summary::default();

        for (_, ts, hours) in &guard.rows {
            summary.total = add_hours(summary.total, *hours)?;
            if let Some(d) = Timestamp::from_db_str(ts).as_datetime().map(|dt| dt.date()) {
                if d == today {
                    summary.today = add_hours(summary.today, *hours)?;
                }
                if d.year() == today.year() && d.month() == today.month() {
                    summary.month = add_hours(summary.month, *hours)?;
                }
            }
        }

        Ok(summary)
    }
}

/// SQLite's `SUM` fails on overflow; do the same.
fn add_hours(acc: i64, hours: i64) -> AppResult<i64> {
    acc.checked_add(hours)
        .ok_or_else(|| AppError::Storage("integer overflow".into()))
}
