//! Database operations for the vocabulary trainer
//!
//! All state lives in one SQLite key/value table. Values are JSON blobs, last
//! write wins, and a blob that fails to parse is treated as missing.

use crate::dataset::RawEntry;
use crate::models::{Progress, ReviewStore, Settings};
use chrono::{Days, Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

pub const KEY_PROGRESS: &str = "progress";
pub const KEY_SETTINGS: &str = "settings";
pub const KEY_XP: &str = "xp";
pub const KEY_STREAK: &str = "streak";
pub const KEY_OFFLINE_WORDS: &str = "offline_words";
pub const KEY_DAY_OFFSET: &str = "day_offset";

/// Opens (or creates) the database file and makes sure the schema exists
pub fn init_database(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    log::info!("Opened database at {}", path.display());
    Ok(conn)
}

/// Creates the key/value table used for every persisted blob
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS app_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;
    Ok(())
}

pub fn get_blob(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM app_state WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
}

pub fn set_blob(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO app_state (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn delete_blob(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM app_state WHERE key = ?1", params![key])?;
    Ok(())
}

/// Reads a JSON blob. Missing, unreadable or malformed blobs yield the default.
pub fn load_json_or_default<T: DeserializeOwned + Default>(conn: &Connection, key: &str) -> T {
    let blob = match get_blob(conn, key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return T::default(),
        Err(e) => {
            log::warn!("Failed to read '{}': {}. Using defaults.", key, e);
            return T::default();
        }
    };

    serde_json::from_str(&blob).unwrap_or_else(|e| {
        log::warn!("Malformed '{}' blob: {}. Using defaults.", key, e);
        T::default()
    })
}

pub fn save_json<T: Serialize>(conn: &Connection, key: &str, value: &T) -> crate::Result<()> {
    let json = serde_json::to_string(value)?;
    set_blob(conn, key, &json)?;
    Ok(())
}

pub fn load_review_store(conn: &Connection) -> ReviewStore {
    load_json_or_default(conn, KEY_PROGRESS)
}

pub fn save_review_store(store: &ReviewStore, conn: &Connection) -> crate::Result<()> {
    save_json(conn, KEY_PROGRESS, store)
}

pub fn load_settings(conn: &Connection) -> Settings {
    load_json_or_default(conn, KEY_SETTINGS)
}

pub fn save_settings(settings: &Settings, conn: &Connection) -> crate::Result<()> {
    save_json(conn, KEY_SETTINGS, settings)
}

/// Experience and streak are kept under separate keys.
pub fn load_progress(conn: &Connection) -> Progress {
    Progress {
        xp: load_json_or_default(conn, KEY_XP),
        streak: load_json_or_default(conn, KEY_STREAK),
    }
}

pub fn save_progress(progress: &Progress, conn: &Connection) -> crate::Result<()> {
    save_json(conn, KEY_XP, &progress.xp)?;
    save_json(conn, KEY_STREAK, &progress.streak)
}

/// Raw word list cached by a previous bake. `None` when absent or malformed.
pub fn load_offline_pack(conn: &Connection) -> Option<Vec<RawEntry>> {
    let entries: Vec<RawEntry> = load_json_or_default(conn, KEY_OFFLINE_WORDS);
    if entries.is_empty() { None } else { Some(entries) }
}

pub fn save_offline_pack(entries: &[RawEntry], conn: &Connection) -> crate::Result<()> {
    save_json(conn, KEY_OFFLINE_WORDS, &entries)
}

/// Explicit data reset: drops every review record, experience and streak.
pub fn reset_progress(conn: &Connection) -> Result<()> {
    for key in [KEY_PROGRESS, KEY_XP, KEY_STREAK] {
        delete_blob(conn, key)?;
    }
    log::info!("Review progress reset");
    Ok(())
}

/// Today's calendar date, shifted by the simulated day offset
pub fn get_current_date(conn: &Connection) -> NaiveDate {
    let offset: u64 = load_json_or_default(conn, KEY_DAY_OFFSET);
    let today = Local::now().date_naive();
    today.checked_add_days(Days::new(offset)).unwrap_or(today)
}

/// Advances the simulated date by one day (for testing spaced repetition)
pub fn advance_day(conn: &Connection) -> crate::Result<NaiveDate> {
    let offset: u64 = load_json_or_default(conn, KEY_DAY_OFFSET);
    save_json(conn, KEY_DAY_OFFSET, &(offset + 1))?;
    Ok(get_current_date(conn))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_blob_last_write_wins() {
        let conn = memory_db();
        assert_eq!(get_blob(&conn, "k").unwrap(), None);

        set_blob(&conn, "k", "one").unwrap();
        set_blob(&conn, "k", "two").unwrap();
        assert_eq!(get_blob(&conn, "k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_review_store_roundtrip() {
        let conn = memory_db();
        let mut store = ReviewStore::new();
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        store.grade("你好#0", 5, day);
        store.grade("谢谢#1", 1, day);

        save_review_store(&store, &conn).unwrap();
        assert_eq!(load_review_store(&conn), store);
    }

    #[test]
    fn test_malformed_blob_is_default() {
        let conn = memory_db();
        set_blob(&conn, KEY_PROGRESS, "{ not json").unwrap();
        set_blob(&conn, KEY_SETTINGS, r#"{"new_per_day": "x"}"#).unwrap();

        assert!(load_review_store(&conn).is_empty());
        assert_eq!(load_settings(&conn), Settings::default());
    }

    #[test]
    fn test_progress_roundtrip_and_reset() {
        let conn = memory_db();
        let mut progress = Progress::default();
        progress.xp = 120;
        progress
            .streak
            .touch(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), Default::default());

        save_progress(&progress, &conn).unwrap();
        assert_eq!(load_progress(&conn), progress);

        save_review_store(&ReviewStore::new(), &conn).unwrap();
        save_settings(&Settings::default(), &conn).unwrap();
        reset_progress(&conn).unwrap();
        assert_eq!(load_progress(&conn), Progress::default());
        assert!(get_blob(&conn, KEY_SETTINGS).unwrap().is_some());
    }

    #[test]
    fn test_offline_pack() {
        let conn = memory_db();
        assert!(load_offline_pack(&conn).is_none());

        let entries = vec![RawEntry::new("水", "shuǐ", "water", &["n"])];
        save_offline_pack(&entries, &conn).unwrap();
        assert_eq!(load_offline_pack(&conn), Some(entries));
    }

    #[test]
    fn test_advance_day() {
        let conn = memory_db();
        let today = get_current_date(&conn);
        let tomorrow = advance_day(&conn).unwrap();
        assert_eq!(today.succ_opt(), Some(tomorrow));
    }
}
