//! Flat-file attendance store.
//!
//! The log is a CSV file with a header row: `Date,Day,Status,Synced`.
//! Dates are `DD-MM-YYYY`, `Day` is the full weekday name, `Synced` is
//! `True`/`False` as text. Older logs written before the sync feature lack
//! the `Synced` column; those records load as already synced.

pub mod models;

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use csv::{ReaderBuilder, WriterBuilder};
use models::{AttendanceRecord, Status};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub const LOG_HEADER: [&str; 4] = ["Date", "Day", "Status", "Synced"];

/// Outcome of an append attempt. A duplicate date is reported back to the
/// caller rather than treated as a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Added,
    Duplicate,
}

/// Exclusive owner of the on-disk record log. All reads and writes of the
/// file go through this type; records are appended, never deleted, and the
/// only in-place mutation is the bulk synced-flag rewrite.
pub struct AttendanceLog {
    path: PathBuf,
}

impl AttendanceLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full read of the log, in file order. A missing or empty file reads
    /// as no data.
    pub fn load(&self) -> AppResult<Vec<AttendanceRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let headers = rdr.headers()?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }

        let col = |name: &str| headers.iter().position(|h| h == name);
        let date_col = col("Date")
            .ok_or_else(|| AppError::Store("missing 'Date' column in record log".into()))?;
        let day_col = col("Day");
        let status_col = col("Status")
            .ok_or_else(|| AppError::Store("missing 'Status' column in record log".into()))?;
        // Pre-sync logs have no Synced column: everything was backed up by hand.
        let synced_col = col("Synced");

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;

            let date_str = row.get(date_col).unwrap_or_default();
            let d = date::parse_store_date(date_str)
                .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

            let status_str = row.get(status_col).unwrap_or_default();
            let status = Status::from_code(status_str)
                .ok_or_else(|| AppError::InvalidStatus(status_str.to_string()))?;

            let day_name = day_col
                .and_then(|i| row.get(i))
                .map(|s| s.to_string())
                .unwrap_or_else(|| date::weekday_name(d));

            let synced = match synced_col.and_then(|i| row.get(i)) {
                Some(v) => v == "True",
                None => true,
            };

            records.push(AttendanceRecord {
                date: d,
                day_name,
                status,
                synced,
            });
        }

        Ok(records)
    }

    /// True if a record for the given date is already in the log.
    pub fn exists(&self, d: chrono::NaiveDate) -> AppResult<bool> {
        Ok(self.load()?.iter().any(|r| r.date == d))
    }

    /// Append a record, creating the file with its header row if needed.
    /// The duplicate check reads the full current log first (check-then-act;
    /// acceptable for a single-user, single-process tool).
    pub fn append(&self, record: &AttendanceRecord) -> AppResult<AppendOutcome> {
        if self.exists(record.date)? {
            return Ok(AppendOutcome::Duplicate);
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        if needs_header {
            wtr.write_record(LOG_HEADER)?;
        }
        wtr.write_record(&[
            date::format_store_date(record.date),
            record.day_name.clone(),
            record.status.as_str().to_string(),
            if record.synced { "True" } else { "False" }.to_string(),
        ])?;
        wtr.flush()?;

        Ok(AppendOutcome::Added)
    }

    /// Rewrite every record with `Synced = True`, preserving all other
    /// fields and the original order. The file is regenerated in one pass.
    pub fn mark_all_synced(&self) -> AppResult<usize> {
        let records = self.load()?;
        if records.is_empty() {
            return Ok(0);
        }

        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        wtr.write_record(LOG_HEADER)?;
        for r in &records {
            wtr.write_record(&[
                date::format_store_date(r.date),
                r.day_name.clone(),
                r.status.as_str().to_string(),
                "True".to_string(),
            ])?;
        }
        wtr.flush()?;

        Ok(records.len())
    }
}
