// src/export/model.rs

use crate::models::WorkRecord;
use serde::Serialize;

/// Flat row written by every export format.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    pub id: i64,
    pub timestamp: String,
    pub hours: i64,
}

impl From<&WorkRecord> for RecordExport {
    fn from(r: &WorkRecord) -> Self {
        Self {
            id: r.id,
            // exported exactly as stored, raw values included
            timestamp: r.timestamp.to_db_string(),
            hours: r.hours,
        }
    }
}

pub(crate) fn to_export_rows(records: &[WorkRecord]) -> Vec<RecordExport> {
    records.iter().map(RecordExport::from).collect()
}
