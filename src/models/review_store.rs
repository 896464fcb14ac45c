//! Owner of every `ReviewRecord`, keyed by vocabulary item id.
//!
//! A word without a record is unseen; a record due on or before today makes it
//! due; anything else is scheduled for a later day.

use super::{ReviewRecord, sm2};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Unseen,
    Due,
    Scheduled,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewStore {
    records: HashMap<String, ReviewRecord>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&ReviewRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn state_of(&self, id: &str, today: NaiveDate) -> ItemState {
        match self.records.get(id) {
            None => ItemState::Unseen,
            Some(record) if record.is_due(today) => ItemState::Due,
            Some(_) => ItemState::Scheduled,
        }
    }

    /// Grades one item and replaces its record; no other record is touched.
    pub fn grade(&mut self, id: &str, quality: u8, today: NaiveDate) -> &ReviewRecord {
        let updated = sm2::grade(self.records.get(id), quality, today);
        self.records.insert(id.to_string(), updated);
        &self.records[id]
    }

    /// Overwrites a record wholesale (CSV import).
    pub fn replace(&mut self, id: &str, record: ReviewRecord) {
        self.records.insert(id.to_string(), record);
    }

    pub fn due_count(&self, today: NaiveDate) -> usize {
        self.records.values().filter(|r| r.is_due(today)).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ReviewRecord)> {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_states_partition_items() {
        let mut store = ReviewStore::new();
        store.grade("a#0", 4, day(1)); // due day 2
        store.grade("b#1", 1, day(1)); // due day 2

        assert_eq!(store.state_of("c#2", day(1)), ItemState::Unseen);
        assert_eq!(store.state_of("a#0", day(1)), ItemState::Scheduled);
        assert_eq!(store.state_of("a#0", day(2)), ItemState::Due);
        assert_eq!(store.state_of("b#1", day(3)), ItemState::Due);
    }

    #[test]
    fn test_grade_touches_only_one_record() {
        let mut store = ReviewStore::new();
        store.grade("a#0", 5, day(1));
        let before = store.get("a#0").cloned();

        store.grade("b#1", 0, day(1));

        assert_eq!(store.get("a#0").cloned(), before);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_due_count_includes_boundary_day() {
        let mut store = ReviewStore::new();
        store.grade("a#0", 3, day(1));
        store.grade("b#1", 2, day(1));

        assert_eq!(store.due_count(day(1)), 0);
        assert_eq!(store.due_count(day(2)), 2);
    }

    #[test]
    fn test_json_shape_is_a_plain_map() {
        let mut store = ReviewStore::new();
        store.grade("a#0", 4, day(1));

        let json = serde_json::to_string(&store).unwrap();
        assert!(json.starts_with("{\"a#0\":"));
        assert!(json.contains("\"due\":\"2024-03-02\""));

        let back: ReviewStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }
}
