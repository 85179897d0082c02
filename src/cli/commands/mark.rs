use crate::cli::commands::sync::try_push;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::SchoolCalendar;
use crate::core::mark::{MarkLogic, MarkOutcome};
use crate::errors::{AppError, AppResult};
use crate::store::AttendanceLog;
use crate::ui::messages;
use crate::utils::{date, path::expand_tilde};

/// Handle the `mark` subcommand.
pub fn handle(cmd: &Commands, cfg: &Config, test: bool) -> AppResult<()> {
    if let Commands::Mark {
        status,
        no_sync,
        date: date_override,
    } = cmd
    {
        let d = match date_override {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let calendar = SchoolCalendar::from_config(cfg)?;
        let log = AttendanceLog::new(expand_tilde(&cfg.store_file));

        match MarkLogic::mark(&log, &calendar, d, *status)? {
            MarkOutcome::NoSchoolDay => {
                messages::warning("No school today!");
            }
            MarkOutcome::AlreadyMarked => {
                messages::warning("Already marked!");
            }
            MarkOutcome::Recorded(record) => {
                messages::success(format!(
                    "{} marked as {}",
                    record.day_name,
                    record.status.as_str()
                ));

                // Best-effort push right after marking. A failure is
                // reported and swallowed; the record stays unsynced until
                // the next successful sync.
                if !no_sync {
                    match try_push(&log, cfg, test) {
                        Ok(_) => messages::success("Attendance synced"),
                        Err(e) => messages::warning(format!("Backup failed: {}", e)),
                    }
                }
            }
        }
    }

    Ok(())
}
