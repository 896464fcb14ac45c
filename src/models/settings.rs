use super::progress::StreakPolicy;
use serde::{Deserialize, Serialize};

/// Learner preferences, stored as one JSON blob. Missing fields take defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub new_per_day: usize,
    pub max_reviews: usize,
    pub session_mins: u32,
    pub show_pinyin: bool,
    pub dark_theme: bool,
    pub streak_policy: StreakPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            new_per_day: 15,
            max_reviews: 999,
            session_mins: 60,
            show_pinyin: true,
            dark_theme: true,
            streak_policy: StreakPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_blob_keeps_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"new_per_day": 5}"#).unwrap();
        assert_eq!(settings.new_per_day, 5);
        assert_eq!(settings.max_reviews, 999);
        assert!(settings.show_pinyin);
    }
}
