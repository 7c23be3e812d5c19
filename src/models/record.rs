use crate::models::timestamp::Timestamp;
use serde::Serialize;

/// One logged work session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkRecord {
    pub id: i64,
    pub timestamp: Timestamp,
    pub hours: i64,
}

impl WorkRecord {
    pub fn new(id: i64, timestamp: Timestamp, hours: i64) -> Self {
        Self {
            id,
            timestamp,
            hours,
        }
    }
}
