use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_EASE_FACTOR: f64 = 2.5;
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Per-word SM-2 state. Created on the first grading of a word.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub repetitions: u32,
    pub interval_days: u32,
    pub ease_factor: f64,
    pub due: NaiveDate,
    pub lapses: u32,
}

impl ReviewRecord {
    /// Starting state applied before the first grade.
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            repetitions: 0,
            interval_days: 0,
            ease_factor: DEFAULT_EASE_FACTOR,
            due: today,
            lapses: 0,
        }
    }

    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.due <= today
    }
}
