use crate::config::Config;
use crate::core::sync::{SyncLogic, SyncReport};
use crate::errors::AppResult;
use crate::remote::auth::{self, AuthFlow, Session};
use crate::remote::FolderRemote;
use crate::store::AttendanceLog;
use crate::ui::messages;
use crate::utils::path::expand_tilde;

/// Handle the `sync` subcommand. Backup failures are reported and
/// swallowed here; the synced flags stay untouched and the next push
/// starts from scratch.
pub fn handle(cfg: &Config, test: bool) -> AppResult<()> {
    let log = AttendanceLog::new(expand_tilde(&cfg.store_file));

    if !log.path().exists() {
        messages::warning("No attendance data to sync!");
        return Ok(());
    }

    match try_push(&log, cfg, test) {
        Ok(report) => {
            messages::success(format!(
                "Attendance synced ({} records, {} bytes)",
                report.marked, report.bytes
            ));
        }
        Err(e) => {
            messages::error(format!("Backup failed: {}", e));
            messages::warning("The local log was left untouched.");
        }
    }

    Ok(())
}

/// Full push pipeline: authorized session → folder remote → upload →
/// mark records synced.
pub fn try_push(log: &AttendanceLog, cfg: &Config, test: bool) -> AppResult<SyncReport> {
    let flow = if test {
        AuthFlow::NonInteractive
    } else {
        AuthFlow::Interactive
    };

    let session = Session::obtain(auth::credentials_path(&cfg.credentials_file), flow)?;
    let remote = FolderRemote::open(&cfg.backup_root, &session)?;

    SyncLogic::push(log, &remote, cfg)
}
