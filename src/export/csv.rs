//! Progress CSV: one row per catalog word with its SM-2 fields.
//!
//! Words never graded are written with zero review fields and an empty due
//! date. On import such rows, and rows naming no catalog word, are skipped.

use crate::models::review_record::MIN_EASE_FACTOR;
use crate::models::{ReviewRecord, ReviewStore, VocabularyCatalog};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRow {
    pub simplified: String,
    pub pinyin: String,
    pub english: String,
    pub pos: String,
    pub tag: String,
    pub reps: String,
    pub interval: String,
    pub due: String,
    #[serde(rename = "EF")]
    pub ease: String,
    pub lapses: String,
}

impl ProgressRow {
    /// Review record described by this row; `None` for never-reviewed rows
    /// and rows whose review fields do not parse.
    ///
    /// A reviewed word always has an interval of at least one day and an
    /// ease of at least `MIN_EASE_FACTOR`.
    fn to_record(&self) -> Option<ReviewRecord> {
        let due = NaiveDate::parse_from_str(self.due.trim(), DATE_FORMAT).ok()?;
        let ease_factor: f64 = self.ease.trim().parse().ok()?;
        if !ease_factor.is_finite() {
            return None;
        }
        Some(ReviewRecord {
            repetitions: self.reps.trim().parse().ok()?,
            interval_days: self.interval.trim().parse::<u32>().ok()?.max(1),
            ease_factor: ease_factor.max(MIN_EASE_FACTOR),
            due,
            lapses: self.lapses.trim().parse().ok()?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub applied: usize,
    pub skipped: usize,
}

pub fn write_progress_csv<W: Write>(
    catalog: &VocabularyCatalog,
    store: &ReviewStore,
    writer: W,
) -> crate::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    for item in &catalog.items {
        let record = store.get(&item.id);
        wtr.serialize(ProgressRow {
            simplified: item.hanzi.clone(),
            pinyin: item.pinyin.clone(),
            english: item.english.clone(),
            pos: item.pos_joined(),
            tag: item.category.label().to_string(),
            reps: record.map_or(0, |r| r.repetitions).to_string(),
            interval: record.map_or(0, |r| r.interval_days).to_string(),
            due: record
                .map(|r| r.due.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            ease: record.map_or(0.0, |r| r.ease_factor).to_string(),
            lapses: record.map_or(0, |r| r.lapses).to_string(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Applies rows to the store. Matching rows replace the word's record wholesale.
pub fn read_progress_csv<R: Read>(
    catalog: &VocabularyCatalog,
    store: &mut ReviewStore,
    reader: R,
) -> crate::Result<ImportSummary> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut summary = ImportSummary::default();

    for result in rdr.deserialize::<ProgressRow>() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::debug!("Skipping unreadable CSV row: {}", e);
                summary.skipped += 1;
                continue;
            }
        };

        let item = catalog.find_by_hanzi_pinyin(&row.simplified, &row.pinyin);
        match (item, row.to_record()) {
            (Some(item), Some(record)) => {
                store.replace(&item.id, record);
                summary.applied += 1;
            }
            _ => summary.skipped += 1,
        }
    }

    Ok(summary)
}

pub fn export_progress_csv(
    catalog: &VocabularyCatalog,
    store: &ReviewStore,
    path: &Path,
) -> crate::Result<()> {
    let file = File::create(path)?;
    write_progress_csv(catalog, store, file)?;
    log::info!("Progress exported to '{}'", path.display());
    Ok(())
}

pub fn import_progress_csv(
    catalog: &VocabularyCatalog,
    store: &mut ReviewStore,
    path: &Path,
) -> crate::Result<ImportSummary> {
    let file = File::open(path)?;
    let summary = read_progress_csv(catalog, store, file)?;
    log::info!(
        "Imported '{}': {} rows applied, {} skipped",
        path.display(),
        summary.applied,
        summary.skipped
    );
    Ok(summary)
}
