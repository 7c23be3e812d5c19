//! Record Store: the four operations callers depend on.
//!
//! The plain methods absorb every storage fault and return a sentinel
//! (`()`, `false`, empty list, zero summary) after logging it. The `try_*`
//! methods return the same data wrapped in [`AppResult`] for callers that
//! must tell "nothing stored" apart from "read failed".

use crate::db::backend::RecordBackend;
use crate::errors::AppResult;
use crate::models::timestamp::format_for_db;
use crate::models::{Summary, WorkRecord};
use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::error;

pub struct RecordStore<B: RecordBackend> {
    backend: B,
}

impl<B: RecordBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ---------------------------
    // Sentinel API
    // ---------------------------

    /// Ensure the schema exists. Errors are logged, never returned.
    pub fn initialize(&self) {
        if let Err(e) = self.try_initialize() {
            error!(error = %e, "failed to initialize record storage");
        }
    }

    /// Append a record. `false` on any storage error.
    pub fn insert(&self, timestamp: NaiveDateTime, hours: i64) -> bool {
        match self.try_insert(timestamp, hours) {
            Ok(_) => true,
            Err(e) => {
                error!(error = %e, hours, "failed to write record");
                false
            }
        }
    }

    /// All records, most recent first. Empty on storage error.
    pub fn list_all(&self) -> Vec<WorkRecord> {
        self.try_list_all().unwrap_or_else(|e| {
            error!(error = %e, "failed to read records");
            Vec::new()
        })
    }

    /// Today / this month / total hours in local time. Zero on storage error.
    pub fn aggregate(&self) -> Summary {
        self.aggregate_on(Local::now().date_naive())
    }

    pub fn aggregate_on(&self, today: NaiveDate) -> Summary {
        self.try_aggregate_on(today).unwrap_or_else(|e| {
            error!(error = %e, "failed to compute summary");
            Summary::default()
        })
    }

    // ---------------------------
    // Fallible API
    // ---------------------------

    pub fn try_initialize(&self) -> AppResult<()> {
        self.backend.initialize()
    }

    /// Returns the id assigned to the new record.
    pub fn try_insert(&self, timestamp: NaiveDateTime, hours: i64) -> AppResult<i64> {
        self.backend.insert(&format_for_db(&timestamp), hours)
    }

    pub fn try_list_all(&self) -> AppResult<Vec<WorkRecord>> {
        self.backend.list_all()
    }

    pub fn try_aggregate(&self) -> AppResult<Summary> {
        self.try_aggregate_on(Local::now().date_naive())
    }

    pub fn try_aggregate_on(&self, today: NaiveDate) -> AppResult<Summary> {
        self.backend.aggregate(today)
    }
}
