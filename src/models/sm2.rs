//! SM-2 (SuperMemo 2) spaced repetition algorithm implementation.
//!
//! The SM-2 algorithm calculates review intervals based on recall quality:
//! - Quality grades 0-2: repetitions reset, the word comes back tomorrow and a lapse is counted
//! - Quality grades 3-5: interval grows 1 day → 6 days → previous interval × EF
//! - EF is adjusted only on passing grades and has a minimum value of 1.3

use super::ReviewRecord;
use super::review_record::MIN_EASE_FACTOR;
use chrono::{Days, NaiveDate};

/// Grade at or above which a recall counts as a pass.
pub const PASS_GRADE: u8 = 3;

/// Calculates the record that replaces `record` after a grading on `today`.
/// quality: 0-5 (0 = complete blackout, 5 = perfect response)
pub fn grade(record: Option<&ReviewRecord>, quality: u8, today: NaiveDate) -> ReviewRecord {
    let quality = quality.min(5); // Clamp to 0-5
    let mut next = record.cloned().unwrap_or_else(|| ReviewRecord::fresh(today));

    if quality < PASS_GRADE {
        next.repetitions = 0;
        next.interval_days = 1;
        next.lapses += 1;
    } else {
        next.repetitions += 1;
        next.interval_days = match next.repetitions {
            1 => 1,
            2 => 6,
            _ => (next.interval_days as f64 * next.ease_factor).round() as u32,
        };

        let q = quality as f64;
        let ef = next.ease_factor + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02));
        next.ease_factor = ef.max(MIN_EASE_FACTOR);
    }

    next.due = add_days(today, next.interval_days);
    next
}

fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(days as u64))
        .unwrap_or(NaiveDate::MAX)
}
