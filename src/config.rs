//! File locations and the remote word list, with environment overrides.
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "hsk_flashcards.sqlite3";
pub const DEFAULT_DATASET_PATH: &str = "data/hsk1_500.json";
pub const DEFAULT_BAKED_OUTPUT: &str = "hsk1_500.json";
pub const DEFAULT_REMOTE_URL: &str = "https://raw.githubusercontent.com/drkameleon/complete-hsk-vocabulary/main/wordlists/inclusive/new/1.min.json";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub dataset_path: PathBuf,
    pub baked_output_path: PathBuf,
    /// `None` disables the remote stage of the dataset chain.
    pub remote_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            baked_output_path: PathBuf::from(DEFAULT_BAKED_OUTPUT),
            remote_url: Some(DEFAULT_REMOTE_URL.to_string()),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `HSK_DB_PATH`, `HSK_DATASET_PATH`, `HSK_REMOTE_URL`
    /// and `HSK_OFFLINE=1`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup("HSK_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("HSK_DATASET_PATH") {
            config.dataset_path = PathBuf::from(path);
        }
        if let Some(url) = lookup("HSK_REMOTE_URL") {
            config.remote_url = Some(url);
        }
        if lookup("HSK_OFFLINE").is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true")) {
            config.remote_url = None;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("HSK_DB_PATH", "/tmp/test.sqlite3"),
            ("HSK_REMOTE_URL", "http://localhost/words.json"),
        ]
        .into_iter()
        .collect();
        let config = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.db_path, PathBuf::from("/tmp/test.sqlite3"));
        assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET_PATH));
        assert_eq!(config.remote_url.as_deref(), Some("http://localhost/words.json"));
    }

    #[test]
    fn test_offline_disables_remote() {
        let config = AppConfig::from_lookup(|k| (k == "HSK_OFFLINE").then(|| "1".to_string()));
        assert_eq!(config.remote_url, None);
    }
}
