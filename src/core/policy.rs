//! Caller-side validation of entered hours.
//!
//! The store accepts any integer; what a user may enter is decided here,
//! once, for every front end. Bounds are inclusive.

use crate::errors::{AppError, AppResult};

pub const DEFAULT_MIN_HOURS: i64 = 1;
pub const DEFAULT_MAX_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursPolicy {
    pub min_hours: i64,
    pub max_hours: i64,
}

impl Default for HoursPolicy {
    fn default() -> Self {
        Self {
            min_hours: DEFAULT_MIN_HOURS,
            max_hours: DEFAULT_MAX_HOURS,
        }
    }
}

impl HoursPolicy {
    pub fn new(min_hours: i64, max_hours: i64) -> AppResult<Self> {
        if min_hours < 0 || max_hours < min_hours {
            return Err(AppError::Config(format!(
                "invalid hours range {}..={} (need 0 <= min <= max)",
                min_hours, max_hours
            )));
        }
        Ok(Self {
            min_hours,
            max_hours,
        })
    }

    pub fn check(&self, hours: i64) -> AppResult<i64> {
        if hours < self.min_hours {
            let msg = if self.min_hours <= 0 {
                "Please enter a non-negative integer for hours".to_string()
            } else if self.min_hours == 1 {
                "Please enter valid hours (greater than 0)".to_string()
            } else {
                format!("Please enter at least {} hours", self.min_hours)
            };
            return Err(AppError::InvalidHours(msg));
        }
        if hours > self.max_hours {
            return Err(AppError::InvalidHours(format!(
                "Hours cannot exceed {}",
                self.max_hours
            )));
        }
        Ok(hours)
    }

    /// Parse then check.
    pub fn parse_and_check(&self, input: &str) -> AppResult<i64> {
        self.check(parse_hours(input)?)
    }
}

/// Parse a whole number of hours from user input.
pub fn parse_hours(input: &str) -> AppResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidHours("Invalid input. Please enter an integer".into()))
}
