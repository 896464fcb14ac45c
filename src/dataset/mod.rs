//! Word list acquisition.
//!
//! Sources are tried in a fixed order and the first that works wins: the baked
//! local file, the offline pack cached in the database, the remote word list,
//! and finally the built-in sample, which cannot fail.

pub mod raw_entry;

pub use raw_entry::RawEntry;

use crate::config::AppConfig;
use crate::database::db;
use crate::error::{AppError, Result};
use crate::export::json::{import_raw_dataset, write_raw_dataset};
use crate::models::VocabularyCatalog;
use rand::Rng;
use rusqlite::Connection;
use std::fmt;

/// A baked file must have more than this many entries to be trusted.
pub const MIN_LOCAL_ENTRIES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetOrigin {
    LocalFile,
    OfflinePack,
    Remote,
    BuiltIn,
}

impl fmt::Display for DatasetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatasetOrigin::LocalFile => "local baked dataset",
            DatasetOrigin::OfflinePack => "offline pack",
            DatasetOrigin::Remote => "internet",
            DatasetOrigin::BuiltIn => "built-in sample",
        };
        f.write_str(name)
    }
}

pub struct LoadedDataset {
    pub catalog: VocabularyCatalog,
    pub origin: DatasetOrigin,
    pub status: String,
}

/// Minimal sample used when nothing else is available.
pub fn builtin_sample() -> Vec<RawEntry> {
    vec![
        RawEntry::new("你好", "nǐ hǎo", "hello", &["i"]),
        RawEntry::new("谢谢", "xièxie", "thanks; thank you", &["i"]),
        RawEntry::new("对不起", "duìbuqǐ", "sorry", &["i"]),
        RawEntry::new("请", "qǐng", "please; to invite", &["v"]),
    ]
}

fn load_local(config: &AppConfig) -> Result<Vec<RawEntry>> {
    let entries = import_raw_dataset(&config.dataset_path)?;
    if entries.len() > MIN_LOCAL_ENTRIES {
        Ok(entries)
    } else {
        Err(AppError::DatasetTooSmall(entries.len()))
    }
}

/// Downloads the published word list.
pub fn fetch_remote(config: &AppConfig) -> Result<Vec<RawEntry>> {
    let url = config.remote_url.as_deref().ok_or(AppError::RemoteDisabled)?;
    log::info!("Fetching word list from {}", url);
    let entries = reqwest::blocking::get(url)?
        .error_for_status()?
        .json::<Vec<RawEntry>>()?;
    Ok(entries)
}

/// Runs the source chain and normalizes whichever list it produced.
pub fn load_dataset<R: Rng + ?Sized>(
    conn: &Connection,
    config: &AppConfig,
    rng: &mut R,
) -> LoadedDataset {
    let (entries, origin) = acquire_entries(conn, config);
    let catalog = VocabularyCatalog::from_entries(&entries, rng);
    let status = match origin {
        DatasetOrigin::LocalFile => format!("Local baked dataset: {} words", catalog.len()),
        DatasetOrigin::OfflinePack => format!("Loaded from Offline Pack: {} words", catalog.len()),
        DatasetOrigin::Remote => format!(
            "Loaded from internet: {} (click Bake to save locally)",
            catalog.len()
        ),
        DatasetOrigin::BuiltIn => {
            "Using minimal built-in sample (go online then click Bake).".to_string()
        }
    };
    log::info!("{}", status);
    LoadedDataset {
        catalog,
        origin,
        status,
    }
}

fn acquire_entries(conn: &Connection, config: &AppConfig) -> (Vec<RawEntry>, DatasetOrigin) {
    match load_local(config) {
        Ok(entries) => return (entries, DatasetOrigin::LocalFile),
        Err(e) => log::info!(
            "Local dataset '{}' unavailable: {}",
            config.dataset_path.display(),
            e
        ),
    }

    if let Some(entries) = db::load_offline_pack(conn) {
        return (entries, DatasetOrigin::OfflinePack);
    }

    match fetch_remote(config) {
        Ok(entries) if !entries.is_empty() => return (entries, DatasetOrigin::Remote),
        Ok(_) => log::warn!("Remote word list was empty"),
        Err(e) => log::warn!("Falling back to built-in sample: {}", e),
    }

    (builtin_sample(), DatasetOrigin::BuiltIn)
}

/// Fetches the remote list, caches it as the offline pack, writes a baked file
/// and returns the refreshed catalog.
pub fn bake_dataset<R: Rng + ?Sized>(
    conn: &Connection,
    config: &AppConfig,
    rng: &mut R,
) -> Result<LoadedDataset> {
    let entries = fetch_remote(config)?;
    db::save_offline_pack(&entries, conn)?;
    write_raw_dataset(&entries, &config.baked_output_path)?;
    log::info!(
        "Baked {} entries to '{}'",
        entries.len(),
        config.baked_output_path.display()
    );

    let catalog = VocabularyCatalog::from_entries(&entries, rng);
    Ok(LoadedDataset {
        status: format!(
            "Saved to Offline Pack and wrote '{}': {} words",
            config.baked_output_path.display(),
            catalog.len()
        ),
        catalog,
        origin: DatasetOrigin::Remote,
    })
}
