//! Backup push orchestration.
//!
//! Reads the record log's current bytes, overwrites the remote file
//! inside the backup folder, then flips every local record to synced.
//! Any failure along the way leaves the synced flags exactly as they
//! were; the caller decides how loudly to report it. Re-running an
//! unchanged push re-uploads the same bytes and re-marks the records,
//! which is a no-op.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::remote::RemoteStore;
use crate::store::AttendanceLog;
use std::fs;

#[derive(Debug, Clone, Copy)]
pub struct SyncReport {
    pub bytes: u64,
    pub marked: usize,
}

pub struct SyncLogic;

impl SyncLogic {
    pub fn push(
        log: &AttendanceLog,
        remote: &dyn RemoteStore,
        cfg: &Config,
    ) -> AppResult<SyncReport> {
        if !log.path().exists() {
            return Err(AppError::Store("no attendance data to sync".into()));
        }

        let bytes = fs::read(log.path())?;

        remote.ensure_folder(&cfg.backup_folder)?;
        let written = remote.upload(&cfg.backup_folder, &cfg.backup_file, &bytes)?;

        let marked = log.mark_all_synced()?;

        Ok(SyncReport {
            bytes: written,
            marked,
        })
    }
}
