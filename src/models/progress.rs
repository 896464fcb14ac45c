//! Dashboard statistics: due and learned counts, per-category progress,
//! experience points, level, streak and badges.

use super::{Category, ReviewStore, VocabularyCatalog, sm2::PASS_GRADE};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const FAIL_XP: u32 = 5;
pub const PASS_XP: u32 = 10;

/// Badge name and the experience needed to unlock it.
pub const BADGES: [(&str, u32); 3] = [
    ("Tone Trainee", 100),
    ("Tone Master", 300),
    ("HSK 1 Hero", 600),
];

const DAY_FORMAT: &str = "%Y-%m-%d";

/// How a missed day affects the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakPolicy {
    /// Counts active days; missed days never reset it.
    #[default]
    ActiveDays,
    /// Resets to 1 when the previous active day was not yesterday.
    Consecutive,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Streak {
    pub last_active: Option<String>,
    pub count: u32,
}

impl Streak {
    /// Marks `today` as active. Increments at most once per calendar day.
    pub fn touch(&mut self, today: NaiveDate, policy: StreakPolicy) -> u32 {
        let today_str = today.format(DAY_FORMAT).to_string();
        if self.last_active.as_deref() == Some(today_str.as_str()) {
            return self.count;
        }

        let continues = match policy {
            StreakPolicy::ActiveDays => true,
            StreakPolicy::Consecutive => self
                .last_active
                .as_deref()
                .and_then(|s| NaiveDate::parse_from_str(s, DAY_FORMAT).ok())
                .and_then(|last| last.succ_opt())
                .is_some_and(|next| next == today),
        };

        self.count = if continues { self.count + 1 } else { 1 };
        self.last_active = Some(today_str);
        self.count
    }
}

/// Experience points and streak; persisted across sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub xp: u32,
    pub streak: Streak,
}

impl Progress {
    /// Adds the experience for one grading event and returns the amount gained.
    pub fn record_grade(&mut self, quality: u8) -> u32 {
        let gained = xp_for_grade(quality);
        self.xp = self.xp.saturating_add(gained);
        gained
    }

    pub fn level(&self) -> u32 {
        level_from_xp(self.xp)
    }

    pub fn badges(&self) -> Vec<&'static str> {
        badges_for_xp(self.xp)
    }
}

pub fn xp_for_grade(quality: u8) -> u32 {
    let quality = quality.min(5);
    if quality < PASS_GRADE {
        FAIL_XP
    } else {
        PASS_XP + quality as u32
    }
}

pub fn level_from_xp(xp: u32) -> u32 {
    (xp as f64 / 50.0).sqrt().floor() as u32 + 1
}

pub fn badges_for_xp(xp: u32) -> Vec<&'static str> {
    BADGES
        .iter()
        .filter(|(_, threshold)| xp >= *threshold)
        .map(|(name, _)| *name)
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryProgress {
    pub learned: usize,
    pub total: usize,
}

impl CategoryProgress {
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            ((self.learned as f64 / self.total as f64) * 100.0).round() as u32
        }
    }
}

/// Learned/total per category; only categories present in the catalog appear.
pub fn category_breakdown(
    catalog: &VocabularyCatalog,
    store: &ReviewStore,
) -> BTreeMap<Category, CategoryProgress> {
    let mut counts: BTreeMap<Category, CategoryProgress> = BTreeMap::new();
    for item in &catalog.items {
        let entry = counts.entry(item.category).or_default();
        entry.total += 1;
        if store.contains(&item.id) {
            entry.learned += 1;
        }
    }
    counts
}

/// Snapshot for the dashboard, computed fresh on every request.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub learned: usize,
    pub due_today: usize,
    pub xp: u32,
    pub level: u32,
    pub streak: u32,
    pub badges: Vec<&'static str>,
    pub categories: BTreeMap<Category, CategoryProgress>,
}

pub fn dashboard(
    catalog: &VocabularyCatalog,
    store: &ReviewStore,
    progress: &Progress,
    today: NaiveDate,
) -> DashboardStats {
    DashboardStats {
        learned: store.len(),
        due_today: store.due_count(today),
        xp: progress.xp,
        level: progress.level(),
        streak: progress.streak.count,
        badges: progress.badges(),
        categories: category_breakdown(catalog, store),
    }
}
