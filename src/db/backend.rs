//! Storage port implemented by every record engine.

use crate::errors::AppResult;
use crate::models::{Summary, WorkRecord};
use chrono::NaiveDate;

/// Fallible primitives behind [`crate::core::store::RecordStore`].
///
/// `timestamp` is passed already formatted for storage so every engine
/// persists exactly the same text.
pub trait RecordBackend {
    /// Create the backing table if absent; must be idempotent.
    fn initialize(&self) -> AppResult<()>;

    /// Append one record and return its id. Durable once this returns `Ok`.
    fn insert(&self, timestamp: &str, hours: i64) -> AppResult<i64>;

    /// Every record, most recent `timestamp` first.
    fn list_all(&self) -> AppResult<Vec<WorkRecord>>;

    /// Sums relative to the calendar day `today` (and its month).
    fn aggregate(&self, today: NaiveDate) -> AppResult<Summary>;
}

impl<T: RecordBackend + ?Sized> RecordBackend for &T {
    fn initialize(&self) -> AppResult<()> {
        (**self).initialize()
    }

    fn insert(&self, timestamp: &str, hours: i64) -> AppResult<i64> {
        (**self).insert(timestamp, hours)
    }

    fn list_all(&self) -> AppResult<Vec<WorkRecord>> {
        (**self).list_all()
    }

    fn aggregate(&self, today: NaiveDate) -> AppResult<Summary> {
        (**self).aggregate(today)
    }
}

impl<T: RecordBackend + ?Sized> RecordBackend for Box<T> {
    fn initialize(&self) -> AppResult<()> {
        (**self).initialize()
    }

    fn insert(&self, timestamp: &str, hours: i64) -> AppResult<i64> {
        (**self).insert(timestamp, hours)
    }

    fn list_all(&self) -> AppResult<Vec<WorkRecord>> {
        (**self).list_all()
    }

    fn aggregate(&self, today: NaiveDate) -> AppResult<Summary> {
        (**self).aggregate(today)
    }
}
