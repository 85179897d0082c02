use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::AttendanceLog;
use crate::ui::messages;
use crate::utils::colors::colorize_synced;
use crate::utils::{date, path::expand_tilde};
use chrono::NaiveDate;

/// Handle the `list` subcommand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let log = AttendanceLog::new(expand_tilde(&cfg.store_file));
        let records = log.load()?;

        if records.is_empty() {
            messages::info("No data");
            return Ok(());
        }

        let filter = resolve_period(period)?;

        let mut shown = 0;
        println!("{:<12} {:<10} {:<8} {}", "Date", "Day", "Status", "Synced");
        for r in &records {
            if let Some(dates) = &filter
                && !dates.contains(&r.date)
            {
                continue;
            }
            println!(
                "{:<12} {:<10} {:<8} {}",
                date::format_store_date(r.date),
                r.day_name,
                r.status.as_str(),
                colorize_synced(r.synced)
            );
            shown += 1;
        }

        if shown == 0 {
            messages::info("No records for the selected period");
        }
    }

    Ok(())
}

/// `None` means no filtering (the `all` period).
fn resolve_period(period: &Option<String>) -> AppResult<Option<Vec<NaiveDate>>> {
    if let Some(p) = period {
        if p == "all" {
            return Ok(None);
        }

        if p.contains(':') {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                return date::generate_range(parts[0], parts[1])
                    .map(Some)
                    .map_err(AppError::InvalidDate);
            }
        }

        return date::generate_from_period(p)
            .map(Some)
            .map_err(AppError::InvalidDate);
    }

    date::current_month_dates()
        .map(Some)
        .map_err(AppError::InvalidDate)
}
