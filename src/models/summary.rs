use serde::Serialize;

/// Hour totals for today, the current month and all time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub today: i64,
    pub month: i64,
    pub total: i64,
}

impl Summary {
    pub fn new(today: i64, month: i64, total: i64) -> Self {
        Self {
            today,
            month,
            total,
        }
    }

    pub fn as_tuple(&self) -> (i64, i64, i64) {
        (self.today, self.month, self.total)
    }
}
