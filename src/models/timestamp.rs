use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;

/// Storage format of the `timestamp` column.
pub const DB_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A stored timestamp: parsed when it matches [`DB_FORMAT`], otherwise the
/// raw column value is kept so a single bad row doesn't break a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    Parsed(NaiveDateTime),
    Raw(String),
}

impl Timestamp {
    /// Only values that round-trip through [`DB_FORMAT`] are parsed; this is
    /// the same condition the SQLite aggregate applies with `strftime`.
    pub fn from_db_str(s: &str) -> Self {
        match NaiveDateTime::parse_from_str(s, DB_FORMAT) {
            Ok(dt) if format_for_db(&dt) == s => Timestamp::Parsed(dt),
            _ => Timestamp::Raw(s.to_string()),
        }
    }

    pub fn to_db_string(&self) -> String {
        match self {
            Timestamp::Parsed(dt) => dt.format(DB_FORMAT).to_string(),
            Timestamp::Raw(s) => s.clone(),
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Timestamp::Parsed(dt) => Some(*dt),
            Timestamp::Raw(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Timestamp::Raw(_))
    }

    /// Render with a chrono format string; raw values are returned untouched.
    pub fn display_with(&self, fmt: &str) -> String {
        match self {
            Timestamp::Parsed(dt) => dt.format(fmt).to_string(),
            Timestamp::Raw(s) => s.clone(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_db_string())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_db_string())
    }
}

pub fn format_for_db(dt: &NaiveDateTime) -> String {
    dt.format(DB_FORMAT).to_string()
}

/// Parse a user supplied moment.
///
/// Accepted: `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD HH:MM`, `YYYY-MM-DD`.
/// A bare date takes the current local time of day.
pub fn parse_user_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, DB_FORMAT) {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_time(now_local().time()));
    }

    None
}

/// Current local time truncated to whole seconds (the column keeps no more).
pub fn now_local() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
