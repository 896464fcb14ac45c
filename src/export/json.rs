//! JSON files for word lists: reading a baked dataset, writing a freshly baked
//! one, and saving the normalized catalog for inspection.

use crate::dataset::RawEntry;
use crate::models::VocabularyCatalog;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Writes the normalized catalog (ids, categories, example sentences) as pretty JSON.
pub fn export_catalog_json(catalog: &VocabularyCatalog, path: &Path) -> crate::Result<()> {
    let json_string = serde_json::to_string_pretty(&catalog.items)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    log::info!("Catalog of {} words exported to '{}'", catalog.len(), path.display());
    Ok(())
}

/// Writes raw entries in the published word list shape, ready to be used as a baked file.
pub fn write_raw_dataset(entries: &[RawEntry], path: &Path) -> crate::Result<()> {
    let json_string = serde_json::to_string(entries)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Reads a word list file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_raw_dataset(path: &Path) -> crate::Result<Vec<RawEntry>> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let entries: Vec<RawEntry> = serde_json::from_str(&contents)?;

    log::info!("Read {} entries from '{}'", entries.len(), path.display());
    Ok(entries)
}
